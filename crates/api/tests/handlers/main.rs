mod admin_test;
mod middleware_test;
mod service_test;
mod test_utils;

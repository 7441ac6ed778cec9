pub mod admin;
pub mod calendar;
pub mod response;
pub mod submission;

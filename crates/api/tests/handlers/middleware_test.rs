use axum::http::{StatusCode, header};
use defensesync_api::{
    config::{DEFAULT_PUBLIC_BASE_URL, parse_log_level, public_base_url},
    middleware::{
        auth::{AdminCredentials, hash_password, parse_basic_authorization},
        error_handling::map_error,
    },
};
use defensesync_core::errors::{ScheduleError, ValidationError};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tracing::Level;

#[rstest]
#[case(ScheduleError::NotFound("judge".to_string()), StatusCode::NOT_FOUND)]
#[case(ScheduleError::Validation(ValidationError::NoSlotsSelected), StatusCode::BAD_REQUEST)]
#[case(ScheduleError::Authentication("nope".to_string()), StatusCode::UNAUTHORIZED)]
#[case(ScheduleError::Storage(eyre::eyre!("disk")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: ScheduleError, #[case] status: StatusCode) {
    assert_eq!(map_error(error).status(), status);
}

#[test]
fn test_authentication_error_carries_challenge() {
    let response = map_error(ScheduleError::Authentication("nope".to_string()));

    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        r#"Basic realm="Admin Area""#
    );
}

#[test]
fn test_parse_basic_authorization() {
    // "admin:pa:ss"
    assert_eq!(
        parse_basic_authorization("Basic YWRtaW46cGE6c3M="),
        Some(("admin".to_string(), "pa:ss".to_string()))
    );
    assert_eq!(
        parse_basic_authorization("basic YWRtaW46cGE6c3M="),
        Some(("admin".to_string(), "pa:ss".to_string()))
    );
}

#[rstest]
#[case("Bearer YWRtaW46cGFzcw==")]
#[case("Basic !!!not-base64")]
#[case("Basic YWRtaW4=")] // "admin", no colon
#[case("Basic")]
#[case("")]
fn test_parse_basic_authorization_rejects(#[case] value: &str) {
    assert_eq!(parse_basic_authorization(value), None);
}

#[test]
fn test_hash_password_is_salted() {
    let first = hash_password("secret").unwrap();
    let second = hash_password("secret").unwrap();

    assert!(first.starts_with("$argon2"));
    assert_ne!(first, second);
}

#[test]
fn test_admin_credentials_verify() {
    let credentials = AdminCredentials::new("admin", "secret").unwrap();

    assert!(credentials.verify("admin", "secret"));
    assert!(!credentials.verify("admin", "Secret"));
    assert!(!credentials.verify("Admin", "secret"));
}

#[rstest]
#[case("debug", Level::DEBUG)]
#[case("WARN", Level::WARN)]
#[case("verbose", Level::INFO)]
fn test_parse_log_level(#[case] value: &str, #[case] level: Level) {
    assert_eq!(parse_log_level(value), level);
}

#[rstest]
#[case(None, DEFAULT_PUBLIC_BASE_URL)]
#[case(Some("  "), DEFAULT_PUBLIC_BASE_URL)]
#[case(Some("https://forms.example.org/"), "https://forms.example.org")]
fn test_public_base_url(#[case] value: Option<&str>, #[case] expected: &str) {
    assert_eq!(public_base_url(value.map(str::to_string)), expected);
}

#[test]
fn test_default_links_do_not_point_at_the_api() {
    assert!(!DEFAULT_PUBLIC_BASE_URL.ends_with(":3020"));
}

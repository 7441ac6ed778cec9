use std::collections::BTreeMap;

use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use defensesync_core::models::{judge::JudgeLink, response::Response};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::test_utils::{ADMIN_PASS, ADMIN_USER, BASE_URL, TestContext, ids};

fn basic(user: &str, pass: &str) -> (HeaderName, HeaderValue) {
    let encoded = STANDARD.encode(format!("{user}:{pass}"));
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Basic {encoded}")).unwrap(),
    )
}

#[tokio::test]
async fn test_admin_listing_with_valid_credentials() {
    let ctx = TestContext::new().with_admin();
    ctx.service()
        .submit("J2", "Judge Two", "reader", &ids(&["3-6-morning"]), None)
        .await
        .unwrap();
    let server = ctx.server();
    let (name, value) = basic(ADMIN_USER, ADMIN_PASS);

    let response = server.get("/admin").add_header(name, value).await;

    response.assert_status_ok();
    let links = response.json::<Vec<JudgeLink>>();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].link, format!("{BASE_URL}/judge/J1"));
    assert!(links[0].submitted_at.is_none());
    assert!(links[1].submitted_at.is_some());
}

#[tokio::test]
async fn test_admin_responses_listing() {
    let ctx = TestContext::new().with_admin();
    ctx.service()
        .submit("J1", "Judge One", "reader", &ids(&["4-6-noon"]), None)
        .await
        .unwrap();
    let server = ctx.server();
    let (name, value) = basic(ADMIN_USER, ADMIN_PASS);

    let response = server.get("/admin/responses").add_header(name, value).await;

    response.assert_status_ok();
    let all = response.json::<BTreeMap<String, Response>>();
    assert_eq!(all.keys().collect::<Vec<_>>(), vec!["J1"]);
}

#[rstest]
#[case(Some((ADMIN_USER, "wrong")))]
#[case(Some(("root", ADMIN_PASS)))]
#[case(None)]
#[tokio::test]
async fn test_admin_rejects_bad_credentials(#[case] credentials: Option<(&str, &str)>) {
    let server = TestContext::new().with_admin().server();

    let mut request = server.get("/admin");
    if let Some((user, pass)) = credentials {
        let (name, value) = basic(user, pass);
        request = request.add_header(name, value);
    }
    let response = request.await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.header(header::WWW_AUTHENTICATE),
        r#"Basic realm="Admin Area""#
    );
}

#[tokio::test]
async fn test_admin_denied_without_configured_credentials() {
    let server = TestContext::new().server();
    let (name, value) = basic(ADMIN_USER, ADMIN_PASS);

    server
        .get("/admin/responses")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

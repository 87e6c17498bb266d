use super::mock_server::{MockServerFixture, TOKEN_PATH};
use mockito::Matcher;
use shootproof::ApiError;

#[tokio::test]
async fn exchange_code_returns_token_set() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", TOKEN_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("code".into(), "abc123".into()),
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            Matcher::UrlEncoded("client_id".into(), "client-123".into()),
            Matcher::UrlEncoded(
                "redirect_uri".into(),
                "https://studio.example/callback".into(),
            ),
        ]))
        .with_status(200)
        .with_body(
            r#"{"stat":"ok","access_token":"at-1","refresh_token":"rt-1","expires_in":3600}"#,
        )
        .create_async()
        .await;

    let tokens = fixture.auth_flow().exchange_code("abc123").await.unwrap();

    mock.assert_async().await;
    assert_eq!(tokens.access_token, "at-1");
    assert_eq!(tokens.refresh_token.as_deref(), Some("rt-1"));
    assert_eq!(tokens.expires_in, Some(3600));
}

#[tokio::test]
async fn refresh_posts_refresh_grant() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", TOKEN_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("refresh_token".into(), "rt-1".into()),
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"stat":"ok","access_token":"at-2","refresh_token":"rt-2"}"#)
        .create_async()
        .await;

    let tokens = fixture.auth_flow().refresh("rt-1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(tokens.access_token, "at-2");
}

#[tokio::test]
async fn rejected_code_is_application_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", TOKEN_PATH)
        .with_status(400)
        .with_body(r#"{"stat":"fail","msg":"invalid_grant"}"#)
        .create_async()
        .await;

    let err = fixture.auth_flow().exchange_code("stale").await.unwrap_err();
    assert!(matches!(err, ApiError::Application { ref message, status: 400, .. } if message == "invalid_grant"));
}

#[tokio::test]
async fn login_url_points_at_auth_endpoint() {
    let fixture = MockServerFixture::new().await;
    let url = fixture.auth_flow().login_url();
    assert!(url.starts_with(&format!("{}/oauth2/authorization/new?", fixture.base_url)));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("client_id=client-123"));
    assert!(url.contains("redirect_uri=https%3A%2F%2Fstudio.example%2Fcallback"));
}

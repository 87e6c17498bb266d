use super::mock_server::MockServerFixture;
use shootproof::{ApiDispatcher, ApiError, ClientConfig, ErrorKind, Params, TransportErrorKind};

#[tokio::test]
async fn empty_body_with_server_error_is_empty_response() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_method("sp.event.get_list", 500, "").await;

    let err = fixture
        .dispatcher()
        .call("sp.event.get_list", Params::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::EmptyResponse { status: 500 }));
    assert_eq!(err.kind(), ErrorKind::EmptyResponse);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn fail_stat_is_application_error_with_message() {
    let mut fixture = MockServerFixture::new().await;
    let body = r#"{"stat":"fail","msg":"Invalid access token","code":401}"#;
    let _mock = fixture.mock_method("sp.event.get_list", 200, body).await;

    let err = fixture
        .dispatcher()
        .call("sp.event.get_list", Params::new())
        .await
        .unwrap_err();

    match &err {
        ApiError::Application {
            message, raw_body, ..
        } => {
            assert_eq!(message, "Invalid access token");
            assert_eq!(raw_body, body);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.response_data().unwrap()["code"], 401);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn non_json_body_is_malformed_response() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_method("sp.event.get_list", 502, "<html>Bad Gateway</html>")
        .await;

    let err = fixture
        .dispatcher()
        .call("sp.event.get_list", Params::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Application { ref message, .. } if message == "malformed response"));
    assert_eq!(err.http_status(), Some(502));
    assert_eq!(err.raw_body(), Some("<html>Bad Gateway</html>"));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let dispatcher = ApiDispatcher::builder()
        .access_token("tok")
        .config(ClientConfig::default())
        .api_endpoint_override("http://127.0.0.1:1/v2")
        .build()
        .unwrap();

    let err = dispatcher
        .call("sp.studio.info", Params::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_retryable());
    if let ApiError::Transport { kind, .. } = err {
        assert_ne!(kind, TransportErrorKind::Body);
    }
}

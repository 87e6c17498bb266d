use super::mock_server::{MockServerFixture, API_PATH};
use mockito::Matcher;
use shootproof::ApiError;

#[tokio::test]
async fn missing_argument_never_reaches_server() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", API_PATH)
        .expect(0)
        .create_async()
        .await;

    let err = fixture.api().delete_event("").await.unwrap_err();

    assert!(matches!(err, ApiError::MissingArgument { ref field } if field == "event_id"));
    mock.assert_async().await;
}

#[tokio::test]
async fn create_album_sends_nullable_fields_empty() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", API_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("method".into(), "sp.album.create".into()),
            Matcher::UrlEncoded("event_id".into(), "12".into()),
            Matcher::UrlEncoded("album_name".into(), "Ceremony".into()),
            Matcher::UrlEncoded("password".into(), "".into()),
            Matcher::UrlEncoded("parent_id".into(), "".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"stat":"ok","album":{"id":5}}"#)
        .create_async()
        .await;

    let body = fixture
        .api()
        .create_event_album(12, "Ceremony", None, None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(body["album"]["id"], 5);
}

#[tokio::test]
async fn unreadable_upload_fails_before_request() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", API_PATH)
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let err = fixture
        .api()
        .upload_photo_from_path(1, dir.path(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidAttachment { .. }));
    mock.assert_async().await;
}

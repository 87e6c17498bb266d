use super::mock_server::{wrapper_header, MockServerFixture, API_PATH, TOKEN};
use mockito::Matcher;
use shootproof::{FileAttachment, Params};
use std::io::Write;

#[tokio::test]
async fn urlencoded_call_carries_method_token_and_header() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", API_PATH)
        .match_header("x-wrapper", wrapper_header().as_str())
        .match_header(
            "content-type",
            Matcher::Regex("application/x-www-form-urlencoded".into()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("method".into(), "sp.event.get_photos".into()),
            Matcher::UrlEncoded("access_token".into(), TOKEN.into()),
            Matcher::UrlEncoded("event_id".into(), "42".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"stat":"ok","photos":[{"id":1}]}"#)
        .create_async()
        .await;

    let body = fixture
        .dispatcher()
        .call(
            "sp.event.get_photos",
            Params::new().with("event_id", 42).with("page", 2),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(body["stat"], "ok");
    assert_eq!(body["photos"][0]["id"], 1);
}

#[tokio::test]
async fn nested_params_use_bracketed_keys() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", API_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("filter[status]".into(), "open".into()),
            Matcher::UrlEncoded("ids[0]".into(), "7".into()),
            Matcher::UrlEncoded("ids[1]".into(), "8".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"stat":"ok"}"#)
        .create_async()
        .await;

    fixture
        .dispatcher()
        .call(
            "sp.order.get_list",
            Params::new()
                .with("filter", Params::new().with("status", "open"))
                .with("ids", vec![7, 8]),
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn attachment_switches_to_multipart() {
    let mut photo = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
    photo.write_all(b"fake-jpeg-bytes").unwrap();

    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", API_PATH)
        .match_header("x-wrapper", wrapper_header().as_str())
        .match_header("content-type", Matcher::Regex("^multipart/form-data".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="method"\r\n\r\nsp\.photo\.upload"#.into()),
            Matcher::Regex(r#"name="photo"; filename=""#.into()),
            Matcher::Regex("fake-jpeg-bytes".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"stat":"ok","photo":{"id":99}}"#)
        .create_async()
        .await;

    let body = fixture
        .dispatcher()
        .call_with_attachments(
            "sp.photo.upload",
            Params::new().with("event_id", 1),
            vec![("photo".to_string(), FileAttachment::new(photo.path()))],
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(body["photo"]["id"], 99);
}

#[tokio::test]
async fn concurrent_calls_share_one_dispatcher() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", API_PATH)
        .match_body(Matcher::UrlEncoded("method".into(), "sp.studio.info".into()))
        .with_status(200)
        .with_body(r#"{"stat":"ok","studio":{}}"#)
        .expect(4)
        .create_async()
        .await;

    let dispatcher = fixture.dispatcher();
    let calls = (0..4).map(|_| {
        let d = dispatcher.clone();
        tokio::spawn(async move { d.call("sp.studio.info", Params::new()).await })
    });
    for handle in calls.collect::<Vec<_>>() {
        handle.await.unwrap().unwrap();
    }

    mock.assert_async().await;
}

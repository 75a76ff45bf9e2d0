use khl_api::types::PageInfo;
use khl_api::{Error, Method, PageSetting, QueryParams, Session, SessionConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(server: &MockServer) -> Session {
    Session::new(&SessionConfig::new("Bot test-token").with_base_url(&server.uri())).unwrap()
}

fn list_body() -> &'static str {
    r#"{"code":0,"message":"","data":{"items":[{"id":1}],"meta":{"page":1,"page_total":3}}}"#
}

#[tokio::test]
async fn splits_items_and_meta() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/guild/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string(list_body()))
        .mount(&mock_server)
        .await;

    let session = session(&mock_server);
    let url = session.endpoint("/guild/list").unwrap();
    let (items, meta) = session
        .request_with_page(Method::GET, url, &PageSetting::default())
        .await
        .unwrap();
    assert_eq!(items.get(), r#"[{"id":1}]"#);
    assert_eq!(
        meta,
        PageInfo {
            page: 1,
            page_total: 3,
            ..Default::default()
        }
    );
}

#[tokio::test]
async fn absent_fields_are_not_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channel/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string(list_body()))
        .mount(&mock_server)
        .await;

    let session = session(&mock_server);
    let mut params = QueryParams::new();
    params.set("guild_id", "42");
    let url = session.endpoint_with("/channel/list", &params).unwrap();
    session
        .request_with_page(Method::GET, url, &PageSetting::default())
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect();
    assert_eq!(keys, vec!["guild_id".to_string()]);
}

#[tokio::test]
async fn set_fields_are_sent_next_to_existing_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/guild-role/list"))
        .and(query_param("guild_id", "42"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "50"))
        .and(query_param("sort", "-id"))
        .respond_with(ResponseTemplate::new(200).set_body_string(list_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = session(&mock_server);
    let mut params = QueryParams::new();
    params.set("guild_id", "42");
    let url = session.endpoint_with("/guild-role/list", &params).unwrap();
    let page = PageSetting::default()
        .with_page(2)
        .with_page_size(50)
        .with_sort("-id");
    session
        .request_with_page(Method::GET, url, &page)
        .await
        .unwrap();
}

#[tokio::test]
async fn non_list_payload_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/guild/list"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"code":0,"message":"","data":[]}"#),
        )
        .mount(&mock_server)
        .await;

    let session = session(&mock_server);
    let url = session.endpoint("/guild/list").unwrap();
    let err = session
        .request_with_page(Method::GET, url, &PageSetting::default())
        .await
        .unwrap_err();
    match err {
        Error::MalformedEnvelope { body, .. } => assert_eq!(body, b"[]"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn dispatcher_errors_pass_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/guild/list"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"code":40100,"message":"no access"}"#),
        )
        .mount(&mock_server)
        .await;

    let session = session(&mock_server);
    let url = session.endpoint("/guild/list").unwrap();
    let err = session
        .request_with_page(Method::GET, url, &PageSetting::default())
        .await
        .unwrap_err();
    assert_eq!(err.api_code(), Some(40100));
}

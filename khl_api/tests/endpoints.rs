use khl_api::types::{
    ChannelType, GuildMuteSetting, MessageCreate, MessageCreateBase, MessageType, MuteType,
};
use khl_api::{
    GuildUserListOption, MessageListFlag, MessageListOption, PageSetting, Session, SessionConfig,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(server: &MockServer) -> Session {
    Session::new(&SessionConfig::new("Bot test-token").with_base_url(&server.uri())).unwrap()
}

fn envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": 0, "message": "", "data": data}))
}

#[tokio::test]
async fn user_me_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/me"))
        .respond_with(envelope(json!({
            "id": "2862900000",
            "username": "bot",
            "identify_num": "4810",
            "online": true,
            "bot": true,
            "status": 10,
            "mobile_verified": true
        })))
        .mount(&mock_server)
        .await;

    let user = session(&mock_server).user_me().await.unwrap();
    assert_eq!(user.id, "2862900000");
    assert_eq!(user.identify_num, "4810");
    assert!(user.bot);
    assert!(user.roles.is_empty());
}

#[tokio::test]
async fn gateway_honours_compress() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gateway/index"))
        .and(query_param("compress", "1"))
        .respond_with(envelope(json!({"url": "wss://ws.example.com/gateway?token=x"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = Session::new(
        &SessionConfig::new("Bot test-token")
            .with_base_url(&mock_server.uri())
            .with_compress(true),
    )
    .unwrap();
    let url = session.gateway().await.unwrap();
    assert_eq!(url, "wss://ws.example.com/gateway?token=x");
}

#[tokio::test]
async fn message_create_posts_arguments() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/message/create"))
        .and(body_json(json!({"type": 9, "target_id": "c1", "content": "hello"})))
        .respond_with(envelope(json!({
            "msg_id": "67b744f5-ffb4-4f9c-8b5e-e1e5b7a9d0c2",
            "msg_timestamp": 1612345678901u64,
            "nonce": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let create = MessageCreate {
        base: MessageCreateBase {
            message_type: Some(MessageType::KMarkdown),
            target_id: "c1".to_string(),
            content: "hello".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let resp = session(&mock_server).message_create(&create).await.unwrap();
    assert_eq!(resp.msg_id, "67b744f5-ffb4-4f9c-8b5e-e1e5b7a9d0c2");
    assert_eq!(resp.msg_timestamp.timestamp_millis(), 1612345678901);
}

#[tokio::test]
async fn message_list_applies_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/message/list"))
        .and(query_param("target_id", "c1"))
        .and(query_param("pin", "1"))
        .and(query_param("flag", "after"))
        .respond_with(envelope(json!([
            {"id": "m1", "type": 1, "content": "hi", "create_at": 1612345678901u64,
             "author": {"id": "u1", "username": "neo"}}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let messages = session(&mock_server)
        .message_list(
            "c1",
            &[
                MessageListOption::Pin(false),
                MessageListOption::Flag(MessageListFlag::After),
                MessageListOption::Pin(true),
            ],
        )
        .await
        .unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].author.username, "neo");
    assert_eq!(messages[0].message_type, MessageType::Text);
}

#[tokio::test]
async fn channel_list_returns_page_info() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channel/list"))
        .and(query_param("guild_id", "g1"))
        .and(query_param("page", "1"))
        .respond_with(envelope(json!({
            "items": [
                {"id": "c1", "name": "general", "type": 1},
                {"id": "c2", "name": "voice", "type": 2, "is_category": false}
            ],
            "meta": {"page": 1, "page_total": 1, "page_size": 50, "total": 2}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (channels, meta) = session(&mock_server)
        .channel_list("g1", &PageSetting::default().with_page(1))
        .await
        .unwrap();
    assert_eq!(channels.len(), 2);
    assert_eq!(channels[1].channel_type, ChannelType::Voice);
    assert_eq!(meta.total, 2);
    assert_eq!(meta.page_size, 50);
}

#[tokio::test]
async fn guild_user_list_combines_page_and_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/guild/user-list"))
        .and(query_param("guild_id", "g1"))
        .and(query_param("mobile_verified", "0"))
        .and(query_param("role_id", "3"))
        .and(query_param("page_size", "10"))
        .respond_with(envelope(json!({
            "items": [{"id": "u1", "username": "neo", "roles": [3]}],
            "meta": {"page": 1, "page_total": 1, "page_size": 10, "total": 1}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (users, _) = session(&mock_server)
        .guild_user_list(
            "g1",
            &PageSetting::default().with_page_size(10),
            &[
                GuildUserListOption::MobileVerified(false),
                GuildUserListOption::RoleId(3),
            ],
        )
        .await
        .unwrap();
    assert_eq!(users[0].roles, vec![3]);
}

#[tokio::test]
async fn channel_delete_hits_channel_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/channel/delete"))
        .and(body_json(json!({"channel_id": "c9"})))
        .respond_with(envelope(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    session(&mock_server).channel_delete("c9").await.unwrap();
}

#[tokio::test]
async fn guild_mute_create_sends_numeric_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/guild-mute/create"))
        .and(body_json(json!({"guild_id": "g1", "user_id": "u1", "type": 1})))
        .respond_with(envelope(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let setting = GuildMuteSetting {
        guild_id: "g1".to_string(),
        user_id: "u1".to_string(),
        mute_type: MuteType::Mic,
    };
    session(&mock_server)
        .guild_mute_create(&setting)
        .await
        .unwrap();
}

#[tokio::test]
async fn reaction_delete_omits_empty_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/message/delete-reaction"))
        .and(body_json(json!({"msg_id": "m1", "emoji": "👍"})))
        .respond_with(envelope(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    session(&mock_server)
        .message_delete_reaction("m1", "👍", "")
        .await
        .unwrap();
}

#[tokio::test]
async fn user_chat_create_decodes_chat() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user-chat/create"))
        .and(body_json(json!({"target_id": "u1"})))
        .respond_with(envelope(json!({
            "code": "6d6f6e6b6579",
            "last_read_time": 1612345678901u64,
            "latest_msg_time": 1612345678902u64,
            "unread_count": 0,
            "target_info": {"id": "u1", "username": "neo", "online": false, "avatar": ""}
        })))
        .mount(&mock_server)
        .await;

    let chat = session(&mock_server).user_chat_create("u1").await.unwrap();
    assert_eq!(chat.code, "6d6f6e6b6579");
    assert_eq!(chat.target_info.username, "neo");
}

#[tokio::test]
async fn wrong_payload_shape_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/guild/view"))
        .respond_with(envelope(json!("not a guild")))
        .mount(&mock_server)
        .await;

    let err = session(&mock_server).guild_view("g1").await.unwrap_err();
    assert!(matches!(err, khl_api::Error::MalformedEnvelope { .. }));
}

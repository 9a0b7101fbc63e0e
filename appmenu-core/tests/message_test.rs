use appmenu_core::{
    LoginMessage, MessageHub, MessageValidator, OriginValidator, WindowMessage,
    LOGIN_MESSAGE_TYPE,
};
use serde_json::json;

fn message(origin: &str) -> WindowMessage {
    WindowMessage::new(origin, json!({ "type": LOGIN_MESSAGE_TYPE, "success": true }))
}

#[test]
fn test_origin_validator_accepts_trusted_origin() {
    let validator = OriginValidator::new(["https://app.example.com"]);
    assert!(validator.is_valid(&message("https://app.example.com")));
}

#[test]
fn test_origin_validator_normalizes_case_and_trailing_slash() {
    let validator = OriginValidator::new(["https://App.Example.com/"]);
    assert!(validator.is_valid(&message("https://app.example.com")));
    assert!(validator.is_valid(&message("HTTPS://APP.EXAMPLE.COM/")));
}

#[test]
fn test_origin_validator_rejects_unknown_origin() {
    let validator = OriginValidator::new(["https://app.example.com"]);
    assert!(!validator.is_valid(&message("https://evil.example.com")));
    assert!(!validator.is_valid(&message("")));
}

#[test]
fn test_origin_validator_allow_extends_the_list() {
    let validator = OriginValidator::default().allow("https://login.example.com");
    assert!(validator.is_valid(&message("https://login.example.com")));
    assert!(!validator.is_valid(&message("https://app.example.com")));
}

#[test]
fn test_login_message_decodes_success_payload() {
    let payload = json!({ "type": "login", "success": true });
    let login = LoginMessage::decode(&payload).expect("payload should decode");
    assert!(login.is_successful_login());
}

#[test]
fn test_login_message_failed_login_is_not_successful() {
    let payload = json!({ "type": "login", "success": false });
    let login = LoginMessage::decode(&payload).expect("payload should decode");
    assert!(!login.is_successful_login());
}

#[test]
fn test_login_message_unrelated_tag_is_not_a_login() {
    let payload = json!({ "type": "unrelated", "success": true });
    let login = LoginMessage::decode(&payload).expect("payload should decode");
    assert!(!login.is_successful_login());
}

#[test]
fn test_login_message_malformed_payloads_do_not_decode() {
    assert!(LoginMessage::decode(&json!("login")).is_none());
    assert!(LoginMessage::decode(&json!({ "type": "login" })).is_none());
    assert!(LoginMessage::decode(&json!({ "success": true })).is_none());
    assert!(LoginMessage::decode(&json!({ "type": 7, "success": true })).is_none());
}

#[tokio::test]
async fn test_hub_delivers_posted_messages_to_subscribers() {
    let hub = MessageHub::new();
    let mut rx = hub.subscribe();

    hub.post(message("https://app.example.com"));

    let received = rx.recv().await.expect("message should arrive");
    assert_eq!(received.origin, "https://app.example.com");
    assert_eq!(
        LoginMessage::decode(&received.data)
            .expect("payload should decode")
            .kind,
        LOGIN_MESSAGE_TYPE
    );
}

#[tokio::test]
async fn test_hub_post_without_subscribers_is_a_no_op() {
    let hub = MessageHub::new();
    // Must not panic or block.
    hub.post(message("https://app.example.com"));
}

#[tokio::test]
async fn test_hub_subscribers_only_see_messages_after_subscribing() {
    let hub = MessageHub::new();
    hub.post(message("https://early.example.com"));

    let mut rx = hub.subscribe();
    hub.post(message("https://late.example.com"));

    let received = rx.recv().await.expect("message should arrive");
    assert_eq!(received.origin, "https://late.example.com");
}

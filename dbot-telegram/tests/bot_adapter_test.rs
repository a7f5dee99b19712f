//! Integration tests for [`dbot_telegram::TelegramBotAdapter`] against a mock Telegram Bot API.
//!
//! Teloxide request path format is `/bot<token>/<method>`; the adapter is pointed at a mockito
//! server through `TelegramConfig::build_bot`.

use chrono::Utc;
use dbot_core::{Bot, Chat, Message, Photo, User};
use dbot_telegram::{TelegramBotAdapter, TelegramConfig};
use mockito::Matcher;
use serde_json::json;

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

/// Minimal successful `Message` result; teloxide parses every send response into a Message.
const SENT_MESSAGE_BODY: &str = r#"{
    "ok": true,
    "result": {
        "message_id": 2,
        "date": 1706529600,
        "chat": {"id": 456, "type": "private", "first_name": "Test"},
        "from": {"id": 123456789, "is_bot": true, "first_name": "TestBot", "username": "testbot"},
        "text": "ok"
    }
}"#;

fn adapter_for(server: &mockito::ServerGuard) -> TelegramBotAdapter {
    let mut config = TelegramConfig::with_token(TEST_BOT_TOKEN.to_string());
    config.telegram_api_url = Some(server.url());
    TelegramBotAdapter::new(config.build_bot().expect("build_bot"))
}

fn chat() -> Chat {
    Chat {
        id: 456,
        chat_type: "private".to_string(),
    }
}

fn incoming(id: &str) -> Message {
    Message {
        id: id.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: chat(),
        content: "/pic cats".to_string(),
        created_at: Utc::now(),
    }
}

/// **Test: send_message posts chat_id and text to sendMessage.**
#[tokio::test]
async fn test_send_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{}/sendMessage", TEST_BOT_TOKEN).as_str())
        .match_body(Matcher::PartialJson(json!({"chat_id": 456, "text": "surprise!"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SENT_MESSAGE_BODY)
        .create_async()
        .await;

    adapter_for(&server)
        .send_message(&chat(), "surprise!")
        .await
        .unwrap();

    mock.assert_async().await;
}

/// **Test: reply_to threads the reply to the originating message id.**
#[tokio::test]
async fn test_reply_to_sets_reply_parameters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{}/sendMessage", TEST_BOT_TOKEN).as_str())
        .match_body(Matcher::PartialJson(json!({
            "chat_id": 456,
            "text": "nothing found",
            "reply_parameters": {"message_id": 77}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SENT_MESSAGE_BODY)
        .create_async()
        .await;

    adapter_for(&server)
        .reply_to(&incoming("77"), "nothing found")
        .await
        .unwrap();

    mock.assert_async().await;
}

/// **Test: reply_to with a non-numeric message id fails before any request.**
#[tokio::test]
async fn test_reply_to_invalid_message_id() {
    let server = mockito::Server::new_async().await;
    let result = adapter_for(&server).reply_to(&incoming("abc"), "text").await;
    assert!(result.is_err());
}

/// **Test: send_photo uploads to sendPhoto.**
#[tokio::test]
async fn test_send_photo() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{}/sendPhoto", TEST_BOT_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SENT_MESSAGE_BODY)
        .expect(1)
        .create_async()
        .await;

    adapter_for(&server)
        .send_photo(&chat(), Photo::new(vec![0xFF, 0xD8, 0xFF], "cat.jpg"), "cats")
        .await
        .unwrap();

    mock.assert_async().await;
}

/// **Test: a Telegram API error on sendPhoto becomes DbotError::Bot.**
#[tokio::test]
async fn test_send_photo_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", format!("/bot{}/sendPhoto", TEST_BOT_TOKEN).as_str())
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error_code": 400, "description": "Bad Request: IMAGE_PROCESS_FAILED"}"#)
        .create_async()
        .await;

    let result = adapter_for(&server)
        .send_photo(&chat(), Photo::new(vec![0, 1, 2], "broken.jpg"), "cats")
        .await;
    assert!(matches!(result, Err(dbot_core::DbotError::Bot(_))));
}

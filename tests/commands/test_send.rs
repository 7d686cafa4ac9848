//! Tests for the send command

use clap::Parser;
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use tgsend::{commands, Cli, Config, Error, TelegramSender};

const CONFIG: &str = r#"
bots:
  work: TOKEN1
  alerts: TOKEN2
chats:
  me: 12345
  ops: -1001234567890
defaults:
  bot: work
  chat: me
"#;

fn discovered_config(dir: &TempDir) -> Config {
    let user_config = dir.path().join("tgsend.yml");
    std::fs::write(&user_config, CONFIG).unwrap();
    let system_config = dir.path().join("etc").join("tgsend.yml");

    Config::discover_in(&[system_config, user_config]).unwrap()
}

#[tokio::test]
async fn test_send_with_overrides() {
    let dir = TempDir::new().unwrap();
    let config = discovered_config(&dir);

    let server = MockServer::start_async().await;
    let send_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/botTOKEN2/sendMessage")
            .form_urlencoded_tuple("chat_id", "-1001234567890")
            .form_urlencoded_tuple("text", "*down*")
            .form_urlencoded_tuple("parse_mode", "markdown")
            .form_urlencoded_tuple("disable_notification", "1");
        then.status(200).json_body(json!({ "ok": true }));
    });

    let cli = Cli::try_parse_from([
        "tgsend", "--bot", "alerts", "--chat", "ops", "--silent", "--md", "--msg", "*down*",
    ])
    .unwrap();
    let sender = TelegramSender::with_url(&server.base_url());

    commands::send_run(&config, cli, std::io::empty(), &sender)
        .await
        .unwrap();

    send_mock.assert_calls(1);
}

#[tokio::test]
async fn test_send_surfaces_api_rejection() {
    let dir = TempDir::new().unwrap();
    let config = discovered_config(&dir);

    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/botTOKEN1/sendMessage");
        then.status(403).json_body(json!({
            "ok": false,
            "error_code": 403,
            "description": "Forbidden: bot was blocked by the user"
        }));
    });

    let cli = Cli::try_parse_from(["tgsend"]).unwrap();
    let sender = TelegramSender::with_url(&server.base_url());

    let err = commands::send_run(&config, cli, "ping".as_bytes(), &sender)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Dispatch(_)));
    assert!(err.to_string().contains("bot was blocked"));
}

#[tokio::test]
async fn test_send_unknown_bot_makes_no_request() {
    let dir = TempDir::new().unwrap();
    let config = discovered_config(&dir);

    let server = MockServer::start_async().await;
    let any_mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(json!({ "ok": true }));
    });

    let cli = Cli::try_parse_from(["tgsend", "--bot", "ghost", "--msg", "hi"]).unwrap();
    let sender = TelegramSender::with_url(&server.base_url());

    let err = commands::send_run(&config, cli, std::io::empty(), &sender)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Unknown bot alias: ghost");
    any_mock.assert_calls(0);
}

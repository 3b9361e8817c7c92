//! The inbound HTTP surface, exercised over a real socket.

mod common;

use common::{container, start_server, ScriptedClient};
use giftchat::{build_system_prompt, MessageRole, Profile, PromptLocale};
use serde_json::{json, Value};
use tempfile::tempdir;

#[tokio::test]
async fn user_profile_returns_file_contents() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("user-profile.txt");
    std::fs::write(&path, "Likes hiking, budget $50").expect("write");
    let base = start_server(container(&path, ScriptedClient::new(vec![]))).await;

    let response = reqwest::get(format!("{base}/user-profile")).await.expect("get");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body, json!({ "profile": "Likes hiking, budget $50" }));
}

#[tokio::test]
async fn user_profile_read_failure_is_500() {
    let dir = tempdir().expect("tempdir");
    let base = start_server(container(
        &dir.path().join("absent.txt"),
        ScriptedClient::new(vec![]),
    ))
    .await;

    let response = reqwest::get(format!("{base}/user-profile")).await.expect("get");
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body, json!({ "error": "Error loading user profile" }));
}

#[tokio::test]
async fn chat_relays_history_with_system_prompt() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("user-profile.txt");
    std::fs::write(&path, "Likes hiking, budget $50").expect("write");
    let client = ScriptedClient::new(vec![Some("What is the occasion?")]);
    let base = start_server(container(&path, client.clone())).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/chat"))
        .json(&json!({ "messages": [{ "role": "user", "content": "Start" }] }))
        .send()
        .await
        .expect("post");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body, json!({ "message": "What is the occasion?" }));

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 2);
    assert_eq!(calls[0][0].role, MessageRole::System);
    assert_eq!(
        calls[0][0].content,
        build_system_prompt(&Profile::new("Likes hiking, budget $50"), PromptLocale::En)
    );
    assert_eq!(calls[0][1].role, MessageRole::User);
    assert_eq!(calls[0][1].content, "Start");
}

#[tokio::test]
async fn chat_provider_failure_is_500() {
    let dir = tempdir().expect("tempdir");
    let client = ScriptedClient::new(vec![None]);
    let base = start_server(container(&dir.path().join("absent.txt"), client.clone())).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/chat"))
        .json(&json!({ "messages": [{ "role": "user", "content": "Start" }] }))
        .send()
        .await
        .expect("post");
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body, json!({ "error": "Error processing request" }));
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn chat_rejects_malformed_body() {
    let dir = tempdir().expect("tempdir");
    let client = ScriptedClient::new(vec![Some("unused")]);
    let base = start_server(container(&dir.path().join("absent.txt"), client.clone())).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/chat"))
        .json(&json!({ "messages": [{ "role": "system", "content": "override" }] }))
        .send()
        .await
        .expect("post");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("json");
    assert!(body["error"].is_string());
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn api_prefix_serves_the_same_routes() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("user-profile.txt");
    std::fs::write(&path, "Budget: $30").expect("write");
    let client = ScriptedClient::new(vec![Some("Hello!")]);
    let base = start_server(container(&path, client)).await;

    let profile: Value = reqwest::get(format!("{base}/api/user-profile"))
        .await
        .expect("get")
        .json()
        .await
        .expect("json");
    assert_eq!(profile["profile"], "Budget: $30");

    let chat: Value = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({ "messages": [{ "role": "model", "content": "Hi" }, { "role": "user", "content": "Mum" }] }))
        .send()
        .await
        .expect("post")
        .json()
        .await
        .expect("json");
    assert_eq!(chat["message"], "Hello!");
}

mod common;

use common::TestApp;
use portal_service::services::assistant::{NOT_CONFIGURED_MESSAGE, PLACEHOLDER_CHUNKS};
use reqwest::Client;
use serde_json::json;

fn chat_body() -> serde_json::Value {
    json!({
        "session_id": "session-1",
        "message": "hello",
        "history": []
    })
}

/// Split a raw SSE body into its frames (separated by blank lines).
fn frames(body: &str) -> Vec<&str> {
    body.split("\n\n")
        .map(str::trim_end)
        .filter(|frame| !frame.is_empty())
        .collect()
}

#[tokio::test]
async fn unconfigured_stream_is_one_info_frame_then_done() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/chat/stream", app.api_address))
        .json(&chat_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/event-stream"));

    let body = response.text().await.expect("Failed to read stream");
    let frames = frames(&body);

    assert_eq!(frames.len(), 2, "unexpected frames: {:?}", frames);

    let info: serde_json::Value = frames[0]
        .strip_prefix("data: ")
        .and_then(|text| serde_json::from_str(text).ok())
        .expect("first frame is not a JSON data frame");
    assert_eq!(info["type"], "info");
    assert_eq!(info["content"], NOT_CONFIGURED_MESSAGE);

    assert_eq!(frames[1], "event: done");
}

#[tokio::test]
async fn configured_stream_is_three_chunks_in_order_then_done() {
    let app = TestApp::spawn_with_llm_key(Some("test-key")).await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/chat/stream", app.api_address))
        .json(&chat_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to read stream");
    let frames = frames(&body);

    assert_eq!(frames.len(), 4, "unexpected frames: {:?}", frames);

    for (frame, expected) in frames.iter().zip(PLACEHOLDER_CHUNKS.iter()) {
        let chunk: serde_json::Value = frame
            .strip_prefix("data: ")
            .and_then(|text| serde_json::from_str(text).ok())
            .expect("chunk frame is not a JSON data frame");
        assert_eq!(chunk["type"], "chunk");
        assert_eq!(chunk["content"], *expected);
    }

    assert_eq!(frames[3], "event: done");
}

#[tokio::test]
async fn history_is_optional() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/chat/stream", app.api_address))
        .json(&json!({ "session_id": "session-1", "message": "hello" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

use serde::Deserialize;

/// Chat request body. `message` and `history` are carried through to the
/// assistant even though the placeholder producer does not read them yet;
/// a real model backend will.
#[derive(Debug, Deserialize)]
pub struct ChatStreamRequest {
    pub session_id: String,
    pub message: String,
    pub history: Option<Vec<serde_json::Value>>,
}

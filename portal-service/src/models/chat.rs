use axum::response::sse::Event;
use serde::{Deserialize, Serialize};

/// One frame of the chat event stream. Ephemeral: produced per request,
/// never persisted.
///
/// `Info` and `Chunk` are framed as `data: <JSON>` events with a `type`
/// tag and a `content` string; `Done` is framed as a named `done` event
/// with no data payload so clients can stop listening without waiting
/// for the connection to close. This framing is the joint contract with
/// the frontend and must not change when a real model backend replaces
/// the placeholder producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatEvent {
    Info { content: String },
    Chunk { content: String },
    Done,
}

impl ChatEvent {
    pub fn into_sse_event(self) -> Event {
        match &self {
            ChatEvent::Done => Event::default().event("done"),
            _ => {
                let payload =
                    serde_json::to_string(&self).unwrap_or_else(|_| "{}".to_string());
                Event::default().data(payload)
            }
        }
    }
}

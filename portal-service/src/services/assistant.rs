use crate::config::LlmConfig;
use crate::dtos::ChatStreamRequest;
use crate::models::ChatEvent;

/// Info message streamed when no LLM routing credential is configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "LLM not configured yet. Please provide an LLM API key and model routing.";

/// Canned chunks streamed while the real model integration is pending.
pub const PLACEHOLDER_CHUNKS: [&str; 3] = [
    "Thinking about your request... ",
    "Setting up AI routing... ",
    "This endpoint will respond with streamed AI messages after configuration.",
];

/// Produces the frame sequence for a chat request.
///
/// Today this is a placeholder keyed only on credential presence; it is the
/// substitution point for a real token-producing backend, which is why the
/// full request (message, history) is passed in even though it is not read.
#[derive(Clone)]
pub struct Assistant {
    api_key: Option<String>,
}

impl Assistant {
    pub fn new(config: &LlmConfig) -> Self {
        if config.api_key.is_some() {
            tracing::info!("LLM credential present; streaming placeholder chunks");
        } else {
            tracing::info!("No LLM credential; streaming not-configured notice");
        }
        Self {
            api_key: config.api_key.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn reply_events(&self, _request: &ChatStreamRequest) -> Vec<ChatEvent> {
        if !self.is_configured() {
            return vec![
                ChatEvent::Info {
                    content: NOT_CONFIGURED_MESSAGE.to_string(),
                },
                ChatEvent::Done,
            ];
        }

        PLACEHOLDER_CHUNKS
            .iter()
            .map(|chunk| ChatEvent::Chunk {
                content: (*chunk).to_string(),
            })
            .chain(std::iter::once(ChatEvent::Done))
            .collect()
    }
}

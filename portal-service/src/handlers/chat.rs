use crate::dtos::ChatStreamRequest;
use crate::startup::AppState;
use axum::{
    extract::State,
    response::sse::{Event, Sse},
    response::IntoResponse,
    Json,
};
use std::convert::Infallible;

/// Chat endpoint (`POST /api/chat/stream`).
///
/// Streams the assistant's frames as server-sent events and closes after the
/// terminal `done` frame. The frame sequence is fixed per request; there is
/// no client acknowledgement and no cancellation signal — frames past a
/// client disconnect are simply never delivered.
#[tracing::instrument(skip(state, request), fields(session_id = %request.session_id))]
pub async fn chat_stream(
    State(state): State<AppState>,
    Json(request): Json<ChatStreamRequest>,
) -> impl IntoResponse {
    let events = state.assistant.reply_events(&request);

    let stream = tokio_stream::iter(
        events
            .into_iter()
            .map(|event| Ok::<Event, Infallible>(event.into_sse_event())),
    );

    Sse::new(stream)
}

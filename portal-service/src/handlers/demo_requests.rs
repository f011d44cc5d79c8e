use crate::dtos::{CreateDemoRequest, DemoRequestResponse, ListDemoRequestsParams};
use crate::models::DemoRequest;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

const DEFAULT_LIST_LIMIT: i64 = 50;
const MAX_LIST_LIMIT: i64 = 500;

#[tracing::instrument(skip(state, request))]
pub async fn create_demo_request(
    State(state): State<AppState>,
    Json(request): Json<CreateDemoRequest>,
) -> Result<(StatusCode, Json<DemoRequestResponse>), AppError> {
    // Validation must reject before anything touches the store.
    request.validate()?;

    let demo = DemoRequest::new(request);
    state.store.insert_demo_request(&demo).await?;

    tracing::info!(demo_request_id = %demo.id, email = %demo.email, "Demo request recorded");

    Ok((StatusCode::CREATED, Json(DemoRequestResponse::from(demo))))
}

pub async fn list_demo_requests(
    State(state): State<AppState>,
    Query(params): Query<ListDemoRequestsParams>,
) -> Result<Json<Vec<DemoRequestResponse>>, AppError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let requests = state.store.list_demo_requests(limit).await?;

    Ok(Json(
        requests
            .into_iter()
            .map(DemoRequestResponse::from)
            .collect(),
    ))
}

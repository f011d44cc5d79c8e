use crate::dtos::{CreateStatusCheck, StatusCheckResponse};
use crate::models::StatusCheck;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, Json};
use service_core::error::AppError;
use validator::Validate;

/// Ceiling on how many status checks a single list call returns.
const STATUS_LIST_LIMIT: i64 = 1000;

#[tracing::instrument(skip(state, request))]
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(request): Json<CreateStatusCheck>,
) -> Result<(StatusCode, Json<StatusCheckResponse>), AppError> {
    request.validate()?;

    let check = StatusCheck::new(request.client_name);
    state.store.insert_status_check(&check).await?;

    tracing::info!(status_check_id = %check.id, client_name = %check.client_name, "Status check recorded");

    Ok((StatusCode::CREATED, Json(StatusCheckResponse::from(check))))
}

pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheckResponse>>, AppError> {
    let checks = state.store.list_status_checks(STATUS_LIST_LIMIT).await?;

    Ok(Json(
        checks.into_iter().map(StatusCheckResponse::from).collect(),
    ))
}

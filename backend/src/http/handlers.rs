//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{body::Bytes, extract::State};

use super::dto::{ApiResponse, BaziData, HealthResponse};
use super::error::AppError;
use super::response::JsonBody;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<JsonBody<T>, AppError>;

/// GET / and GET /health
pub async fn health_check() -> JsonBody<HealthResponse> {
    JsonBody::ok(HealthResponse::default())
}

/// POST /bazi
///
/// The body is read as raw bytes and decoded as JSON whatever its
/// `Content-Type` says.
pub async fn bazi(
    State(state): State<AppState>,
    body: Bytes,
) -> HandlerResult<ApiResponse<BaziData>> {
    let request = services::decode_request(&body)?;
    let data = services::compute(state.calendar.as_ref(), state.offset, &request)?;
    Ok(JsonBody::ok(ApiResponse::success(data)))
}

/// Any method other than POST on /bazi.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

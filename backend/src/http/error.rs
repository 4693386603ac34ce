//! HTTP error handling.
//!
//! Every failure is written as the `ApiResponse` envelope with
//! `success: false` and the error's display string.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use super::response::JsonBody;
use crate::api::{ApiResponse, BaziData};
use crate::error::{AdapterError, BaziError, ValidationError};

/// Application error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed body or date/time (400)
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Calendar collaborator failure (500)
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    /// Anything but POST on `/bazi` (405)
    #[error("only POST allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Adapter(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<BaziError> for AppError {
    fn from(err: BaziError) -> Self {
        match err {
            BaziError::Validation(e) => AppError::Validation(e),
            BaziError::Adapter(e) => AppError::Adapter(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Adapter(e) => error!(error = %e, "calendar conversion failed"),
            other => debug!(error = %other, status = status.as_u16(), "request rejected"),
        }

        let mut response =
            JsonBody(status, ApiResponse::<BaziData>::failure(self.to_string())).into_response();
        if matches!(self, AppError::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}

//! JSON response writer.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Content type of every JSON body the server writes.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A status code and a value serialized as the JSON body.
///
/// Unlike `axum::Json`, the content type carries an explicit charset.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub StatusCode, pub T);

impl<T> JsonBody<T> {
    pub fn ok(value: T) -> Self {
        Self(StatusCode::OK, value)
    }
}

impl<T: Serialize> IntoResponse for JsonBody<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.1) {
            Ok(body) => (
                self.0,
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                body,
            )
                .into_response(),
            Err(err) => {
                error!(error = %err, "failed to serialize response body");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug, PartialEq)]
pub enum ApiError {
    MissingField(&'static str),
    IdMismatch { path: String, body: String },
    NotFound(String),
}

/// Convert our custom errors to HTTP responses
///
/// `IntoResponse` trait: Axum calls this to convert errors to responses.
/// Validation failures come back as plain text naming the offending field,
/// and every rejected request gets one diagnostic log line.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing `{field}` in request body"),
            ),
            ApiError::IdMismatch { path, body } => (
                StatusCode::BAD_REQUEST,
                format!("Request path id ({path}) and request body id ({body}) must match"),
            ),
            ApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("No blog post with id {id}"))
            }
        };

        error!("{}", message);

        (status, message).into_response()
    }
}

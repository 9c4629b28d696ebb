//! Extractor error handlers
//!
//! Malformed JSON bodies and query strings are turned into `AppError` so
//! every error reply has the same `{"error": {...}}` shape.

use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    HttpRequest,
};

use crate::core::AppError;

/// For `web::JsonConfig::error_handler`
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let error = match &err {
        JsonPayloadError::ContentType => {
            AppError::validation("body", "Content-Type must be application/json")
        }
        JsonPayloadError::Deserialize(e) => AppError::validation("body", e.to_string()),
        other => AppError::validation("body", other.to_string()),
    };

    log_error(&error, req);
    error.into()
}

/// For `web::QueryConfig::error_handler`
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let error = AppError::validation("query", err.to_string());

    log_error(&error, req);
    error.into()
}

/// Log a rejected request
pub fn log_error(error: &AppError, req: &HttpRequest) {
    tracing::warn!(
        method = %req.method(),
        path = %req.path(),
        kind = error.kind(),
        "Request rejected: {}",
        error
    );
}

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// The first three variants are the engine's taxonomy. Validation and unknown
/// classification are recoverable and reported verbatim to the caller;
/// sequence failures are infrastructure errors the caller retries.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed or missing input, naming the first offending field
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    /// Line item references a code absent from the rate catalog
    #[error("Unknown classification code: {0}")]
    UnknownClassification(String),

    /// The sequence store could not hand out the next invoice number
    #[error("Sequence unavailable: {0}")]
    SequenceUnavailable(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rate catalog file could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        let mut body = serde_json::json!({
            "error": {
                "code": status_code.as_u16(),
                "kind": self.kind(),
                "message": self.to_string(),
            }
        });
        if let AppError::Validation { field, .. } = self {
            body["error"]["field"] = serde_json::Value::String(field.clone());
        }

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::UnknownClassification(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::SequenceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn unknown_classification(code: impl Into<String>) -> Self {
        AppError::UnknownClassification(code.into())
    }

    pub fn sequence_unavailable(reason: impl Into<String>) -> Self {
        AppError::SequenceUnavailable(reason.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Stable machine-readable name used in error bodies and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::UnknownClassification(_) => "unknown_classification",
            AppError::SequenceUnavailable(_) => "sequence_unavailable",
            AppError::NotFound(_) => "not_found",
            AppError::Configuration(_) => "configuration_error",
            AppError::Catalog(_) => "catalog_error",
            AppError::Json(_) => "json_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Whether the caller should retry the same request with backoff
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::SequenceUnavailable(_))
    }

    /// Offending field for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

use axum::http::StatusCode;
use thiserror::Error;

/// Maps a callback error to the HTTP status sent back to the client
///
/// Error types that don't override `status_code` are reported as
/// 500 Internal Server Error.
pub trait StatusTranslate {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Returns the HTTP status for a callback error
pub fn translate_error_to_status_code<E: StatusTranslate + ?Sized>(err: &E) -> StatusCode {
    err.status_code()
}

/// Errors returned by business-logic callbacks
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("too many requests")]
    TooManyRequests,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl StatusTranslate for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<String> for ServiceError {
    fn from(message: String) -> Self {
        Self::internal(message)
    }
}

impl From<&str> for ServiceError {
    fn from(message: &str) -> Self {
        Self::internal(message)
    }
}

impl StatusTranslate for std::io::Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::not_found("thing 7"), StatusCode::NOT_FOUND),
            (ServiceError::validation("name"), StatusCode::BAD_REQUEST),
            (ServiceError::Conflict("dup".into()), StatusCode::CONFLICT),
            (ServiceError::Unauthorized("token".into()), StatusCode::UNAUTHORIZED),
            (ServiceError::Forbidden("role".into()), StatusCode::FORBIDDEN),
            (ServiceError::TooManyRequests, StatusCode::TOO_MANY_REQUESTS),
            (ServiceError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(translate_error_to_status_code(&err), status, "{err}");
        }
    }

    #[test]
    fn untranslated_errors_default_to_500() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(
            translate_error_to_status_code(&err),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn string_errors_become_internal() {
        let err: ServiceError = "database unavailable".into();
        assert!(matches!(err, ServiceError::Internal(_)));
        assert_eq!(err.to_string(), "internal error: database unavailable");
    }
}

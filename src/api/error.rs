use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the remote story API.
///
/// Every request maps onto exactly one of these; callers get the error once
/// (no retries happen anywhere in this client).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connect, timeout, TLS, or a broken body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the session token (expired or invalid).
    #[error("authentication rejected: {0}")]
    Auth(String),

    /// The server rejected the submitted fields.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The referenced story or user does not exist server-side.
    #[error("not found: {0}")]
    NotFound(String),

    /// A 2xx response whose body did not match the documented shape.
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Any other non-2xx status the API is not documented to return.
    #[error("unexpected response ({status}): {message}")]
    Unexpected { status: StatusCode, message: String },
}

impl ApiError {
    /// Map a non-success status plus the server's error message onto the
    /// matching variant.
    pub(crate) fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::Validation(message)
            }
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            _ => ApiError::Unexpected { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_variants() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, "bad token".into()),
            ApiError::Auth(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, "not yours".into()),
            ApiError::Auth(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_REQUEST, "missing title".into()),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, "no such story".into()),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()),
            ApiError::Unexpected { .. }
        ));
    }
}

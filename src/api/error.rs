use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::models::ErrorResponse;
use crate::content::ContentError;

pub const INVALID_PARAMETER: &str = "Invalid Parameter";
pub const STORE_UNAVAILABLE: &str = "Content store unavailable";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unexpected query parameter: {0}")]
    InvalidParameter(String),
    #[error("content store fault: {0}")]
    ContentStore(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::ContentStore(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing marker; details stay in the logs
    pub fn marker(&self) -> &'static str {
        match self {
            ApiError::InvalidParameter(_) => INVALID_PARAMETER,
            ApiError::ContentStore(_) => STORE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = ErrorResponse {
            err: self.marker().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ContentError> for ApiError {
    fn from(value: ContentError) -> Self {
        ApiError::ContentStore(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_is_bad_request() {
        let err = ApiError::InvalidParameter("page".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.marker(), "Invalid Parameter");
    }

    #[test]
    fn content_fault_maps_to_store_error() {
        let err: ApiError = ContentError::Unavailable("down".into()).into();
        assert!(matches!(err, ApiError::ContentStore(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

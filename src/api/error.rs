//! Request-level errors and their HTTP mapping.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const NAME_REQUIRED: &str = "name is required";
pub const ID_REQUIRED: &str = "id is required";
pub const CAR_FIELDS_REQUIRED: &str = "id, type, model, and cost are required";

/// Errors a handler can answer a request with. None of them are fatal.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required parameter is absent or falsy.
    #[error("{0}")]
    MissingField(&'static str),

    #[error("car not found")]
    NotFound,

    /// Body declared as JSON but did not parse.
    #[error("malformed JSON body: {0}")]
    MalformedBody(String),

    /// Body could not be read (size limit, broken stream).
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Body(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request rejected");
        match self {
            ApiError::Body(rejection) => rejection.into_response(),
            other => (other.status(), other.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::MissingField(NAME_REQUIRED).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MalformedBody("eof".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages_are_plain_text_bodies() {
        assert_eq!(ApiError::MissingField(CAR_FIELDS_REQUIRED).to_string(), CAR_FIELDS_REQUIRED);
        assert_eq!(ApiError::NotFound.to_string(), "car not found");
        assert_eq!(
            ApiError::MalformedBody("expected value".into()).to_string(),
            "malformed JSON body: expected value"
        );
    }
}

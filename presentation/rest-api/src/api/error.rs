use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Body of every error response. `details` is only present for validation
/// failures and lists each violated rule.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details),
        }
    }

    /// Body used whenever the request payload cannot be decoded.
    pub fn invalid_request_format() -> Self {
        Self::new("invalid request format")
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

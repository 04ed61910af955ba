use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, body) = match self {
            ItemError::InvalidId => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("invalid item ID"),
            ),
            ItemError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details(
                    "validation failed",
                    violations.iter().map(ToString::to_string).collect(),
                ),
            ),
            ItemError::NotFound => (StatusCode::NOT_FOUND, ErrorResponse::new("item not found")),
            // Storage details stay in the logs.
            ItemError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("internal server error"),
            ),
        };

        (status, Json(body))
    }
}

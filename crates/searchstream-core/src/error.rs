use http::StatusCode;

use crate::googleads::{ApiError, ErrorResponse, WRONG_HEADERS, WRONG_REQUEST};

#[derive(Debug, thiserror::Error)]
pub enum SearchStreamError {
    #[error("headers are missing")]
    MissingHeaders,
    #[error("unable to read request body")]
    MalformedBody(#[source] serde_json::Error),
    #[error("query must contain a start and end date")]
    InsufficientDates { found: usize },
}

impl SearchStreamError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchStreamError::MissingHeaders => StatusCode::UNAUTHORIZED,
            SearchStreamError::MalformedBody(_) | SearchStreamError::InsufficientDates { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Machine-readable tag placed in `error.status`.
    pub fn status_tag(&self) -> &'static str {
        match self {
            SearchStreamError::MissingHeaders => WRONG_HEADERS,
            SearchStreamError::MalformedBody(_) | SearchStreamError::InsufficientDates { .. } => {
                WRONG_REQUEST
            }
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ApiError {
                code: self.status_code().as_u16(),
                message: self.to_string(),
                status: self.status_tag().to_string(),
            },
        }
    }
}

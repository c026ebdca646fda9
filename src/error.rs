use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::api::ErrorResponse;
use crate::provider::SolveError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Problem text is required")]
    MissingProblem,

    #[error("Failed to get solution")]
    Internal(#[from] SolveError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingProblem => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let details = match &self {
            Self::Internal(cause) => {
                error!(error = %cause, "Error generating solution");
                Some(cause.to_string())
            }
            _ => None,
        };

        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
                details,
            }),
        )
            .into_response()
    }
}

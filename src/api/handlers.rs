use std::{any::Any, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use crate::{error::ApiError, AppState};

use super::models::{ErrorResponse, SolveRequest, SolveResponse};

pub async fn solve(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> Result<Json<SolveResponse>, ApiError> {
    let problem = match payload {
        Ok(Json(SolveRequest {
            problem: Some(problem),
        })) if !problem.is_empty() => problem,
        Ok(_) => {
            debug!("solve request without problem text");
            return Err(ApiError::MissingProblem);
        }
        Err(rejection) => {
            debug!(%rejection, "unreadable solve request body");
            return Err(ApiError::MissingProblem);
        }
    };

    debug!(
        provider = state.provider.name(),
        problem_len = problem.len(),
        "solving problem"
    );
    let solution = state.provider.solve(&problem).await?;

    tokio::time::sleep(state.response_delay).await;

    Ok(Json(SolveResponse {
        solution: solution.content,
    }))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
            details: None,
        }),
    )
        .into_response()
}

pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "handler panicked".to_string()
    };
    error!(error = %details, "Error generating solution");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to get solution".to_string(),
            details: Some(details),
        }),
    )
        .into_response()
}

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::api::{SolveRequest, SolveResponse, SOLVE_PATH};
use crate::provider::SolutionResult;

pub const FAILED_TO_GET_SOLUTION: &str = "Failed to get solution";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[async_trait]
pub trait SolveTransport: Send + Sync {
    async fn send(&self, request: &SolveRequest) -> Result<SolutionResult, RequestError>;
}

pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}{SOLVE_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SolveTransport for HttpTransport {
    async fn send(&self, request: &SolveRequest) -> Result<SolutionResult, RequestError> {
        let response = self.client.post(&self.url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(RequestError::new(FAILED_TO_GET_SOLUTION));
        }

        let body: SolveResponse = response.json().await?;
        Ok(SolutionResult::new(body.solution))
    }
}

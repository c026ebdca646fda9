mod template;
pub mod topic;

pub use template::TemplateProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionResult {
    pub content: String,
}

impl SolutionResult {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

#[async_trait]
pub trait SolutionProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn solve(&self, problem: &str) -> Result<SolutionResult, SolveError>;
}

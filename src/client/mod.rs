mod image;
mod transport;

pub use image::ImageAttachment;
pub use transport::{HttpTransport, RequestError, SolveTransport, FAILED_TO_GET_SOLUTION};

use tracing::{debug, warn};

use crate::api::SolveRequest;
use crate::provider::SolutionResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub text: String,
    pub image: Option<ImageAttachment>,
}

impl SubmissionForm {
    pub fn is_submittable(&self) -> bool {
        !self.text.trim().is_empty() || self.image.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Solution(SolutionResult),
    Failed(RequestError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Resolved(Resolution),
}

pub struct SubmissionClient<T> {
    transport: T,
    form: SubmissionForm,
    state: ViewState,
    last_solution: Option<SolutionResult>,
}

impl<T: SolveTransport> SubmissionClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            form: SubmissionForm::default(),
            state: ViewState::Idle,
            last_solution: None,
        }
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.form.is_submittable()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        if self.is_loading() {
            return false;
        }
        self.form.text = text.into();
        true
    }

    pub fn attach_image(&mut self, image: ImageAttachment) -> bool {
        if self.is_loading() {
            return false;
        }
        self.form.image = Some(image);
        true
    }

    pub fn remove_image(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.form.image = None;
        true
    }

    /// Enter `Loading` and build the request body.
    ///
    /// Returns `None` without touching state when the form is empty or a
    /// request is already outstanding. Only the text is sent; an attached
    /// image stays local.
    pub fn begin_submit(&mut self) -> Option<SolveRequest> {
        if !self.can_submit() {
            return None;
        }

        self.state = ViewState::Loading;
        Some(SolveRequest {
            problem: Some(self.form.text.clone()),
        })
    }

    /// Settle an outstanding request. Ignored unless `Loading`.
    pub fn finish(&mut self, result: Result<SolutionResult, RequestError>) -> bool {
        if !self.is_loading() {
            return false;
        }

        let resolution = match result {
            Ok(solution) => {
                self.last_solution = Some(solution.clone());
                Resolution::Solution(solution)
            }
            Err(err) => Resolution::Failed(err),
        };
        self.state = ViewState::Resolved(resolution);
        true
    }

    pub async fn submit(&mut self) -> Option<&Resolution> {
        let request = self.begin_submit()?;
        debug!(problem_len = self.form.text.len(), "submitting problem");

        let result = self.transport.send(&request).await;
        if let Err(err) = &result {
            warn!(error = %err, "solve request failed");
        }

        self.finish(result);
        self.resolution()
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        match &self.state {
            ViewState::Resolved(resolution) => Some(resolution),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RequestError> {
        match &self.state {
            ViewState::Resolved(Resolution::Failed(err)) => Some(err),
            _ => None,
        }
    }

    /// Most recent successful solution. It stays visible while a later
    /// request loads or fails.
    pub fn last_solution(&self) -> Option<&SolutionResult> {
        self.last_solution.as_ref()
    }
}

pub mod config;
pub mod content;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use crate::content::repository::ContentRepository;
use crate::error::Result;
use crate::services::query_service::QueryService;
use crate::services::session_runner::{SessionHandle, SessionRunner};

const DEFAULT_FEEDBACK_DWELL: Duration = Duration::from_secs(2);

#[derive(Clone)]
pub struct AppState {
    pub query_service: QueryService,
    pub feedback_dwell: Duration,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentRepository>) -> Self {
        Self {
            query_service: QueryService::new(content),
            feedback_dwell: DEFAULT_FEEDBACK_DWELL,
        }
    }

    pub fn with_feedback_dwell(mut self, dwell: Duration) -> Self {
        self.feedback_dwell = dwell;
        self
    }

    /// Looks the quiz up and starts a timed session for it.
    pub fn start_session(&self, quiz_id: &str) -> Result<SessionHandle> {
        let quiz = self.query_service.get_quiz(quiz_id)?;
        Ok(SessionRunner::spawn(quiz, self.feedback_dwell))
    }
}

use serde::Serialize;

use crate::models::result::UserAnswer;
use crate::services::grading_service::ScoreBand;
use crate::services::quiz_session::SessionPhase;

/// Snapshot of a session handed to whatever renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub phase: SessionPhase,
    pub quiz_id: Option<String>,
    pub current_index: usize,
    pub question_count: usize,
    pub question: Option<QuestionView>,
    pub pending_answer: Option<usize>,
    pub feedback: Option<FeedbackView>,
    pub score: u32,
    pub total_points: u32,
    pub remaining_seconds: Option<u32>,
    pub remaining_display: Option<String>,
    pub timer_active: bool,
    pub outcome: Option<OutcomeView>,
}

/// The current prompt without its answer key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackView {
    pub selected: usize,
    pub correct_answer: usize,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeView {
    pub percentage: u32,
    pub band: ScoreBand,
    pub answers: Vec<UserAnswer>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub question_id: String,
    pub selected_answer: Option<usize>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_id: String,
    pub score: u32,
    pub total_points: u32,
    pub total_questions: usize,
    pub percentage: u32,
    pub answers: Vec<UserAnswer>,
    /// Seconds of the countdown consumed; absent for untimed quizzes.
    pub time_taken: Option<u32>,
    pub completed_at: DateTime<Utc>,
}

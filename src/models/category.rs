use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Category {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    /// Count recorded alongside the authored data. Never served: the live
    /// count is always derived from the quizzes themselves.
    #[serde(rename = "quizCount", default, skip_serializing)]
    pub stored_quiz_count: Option<u32>,
}

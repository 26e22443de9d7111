use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::question::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[serde(rename = "category")]
    #[validate(length(min = 1))]
    pub category_id: String,
    pub difficulty: Difficulty,
    /// Minutes allowed for the whole quiz; `None` means untimed.
    #[serde(rename = "timeLimit", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub time_limit_minutes: Option<u32>,
    pub created_at: DateTime<Utc>,
    #[validate(length(min = 1), nested)]
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn total_points(&self) -> u32 {
        self.questions
            .iter()
            .fold(0u32, |total, q| total.saturating_add(q.points))
    }

    pub fn time_limit_seconds(&self) -> Option<u32> {
        self.time_limit_minutes.map(|m| m.saturating_mul(60))
    }
}

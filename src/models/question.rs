use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_answer_key"))]
pub struct Question {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(rename = "question")]
    #[validate(length(min = 1))]
    pub prompt: String,
    #[validate(length(min = 2))]
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default = "default_points")]
    #[validate(range(min = 1, max = 1000))]
    pub points: u32,
}

fn default_points() -> u32 {
    1
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}

fn validate_answer_key(question: &Question) -> Result<(), ValidationError> {
    if question.correct_answer < question.options.len() {
        return Ok(());
    }
    let mut err = ValidationError::new("correct_answer_out_of_range");
    err.message = Some(
        format!(
            "question '{}' marks option {} correct but has {} options",
            question.id,
            question.correct_answer,
            question.options.len()
        )
        .into(),
    );
    Err(err)
}

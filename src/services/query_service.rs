use std::sync::Arc;

use validator::Validate;

use crate::content::repository::ContentRepository;
use crate::dto::catalog_dto::CategoryResponse;
use crate::error::{Error, Result};
use crate::models::quiz::Quiz;

const INTERNAL_MESSAGE: &str = "Internal Server Error";

#[derive(Clone)]
pub struct QueryService {
    content: Arc<dyn ContentRepository>,
}

impl QueryService {
    pub fn new(content: Arc<dyn ContentRepository>) -> Self {
        Self { content }
    }

    /// Categories decorated with the number of quizzes that actually reference them.
    pub fn list_categories(&self) -> Result<Vec<CategoryResponse>> {
        self.content
            .list_categories()
            .into_iter()
            .map(|category| {
                let quizzes = self.content.list_quizzes_for_category(&category.id);
                ensure_listed_under(&category.id, &quizzes).map_err(|e| {
                    tracing::error!(error = %e, "Failed to fetch categories");
                    Error::Internal("Failed to fetch categories".to_string())
                })?;
                Ok(CategoryResponse::with_live_count(category, quizzes.len()))
            })
            .collect()
    }

    pub fn get_quiz(&self, id: &str) -> Result<Arc<Quiz>> {
        if id.trim().is_empty() {
            return Err(Error::BadRequest("Missing quiz ID".to_string()));
        }

        let quiz = self
            .content
            .get_quiz(id)
            .ok_or_else(|| Error::NotFound(format!("Quiz '{}' not found", id)))?;

        ensure_intact(&quiz).map_err(|e| {
            tracing::error!(quiz = %id, error = %e, "Error loading quiz");
            Error::Internal(INTERNAL_MESSAGE.to_string())
        })?;
        Ok(quiz)
    }

    /// Quizzes of an existing category. An existing category without quizzes
    /// yields an empty list; an unknown one is `NotFound`.
    pub fn list_quizzes_for_category(&self, category: &str) -> Result<Vec<Arc<Quiz>>> {
        if category.trim().is_empty() {
            return Err(Error::BadRequest("Missing category parameter".to_string()));
        }

        if self.content.get_category(category).is_none() {
            return Err(Error::NotFound(format!(
                "Category '{}' not found",
                category
            )));
        }

        let quizzes = self.content.list_quizzes_for_category(category);
        ensure_listed_under(category, &quizzes)
            .and_then(|_| quizzes.iter().try_for_each(|q| ensure_intact(q)))
            .map_err(|e| {
                tracing::error!(category = %category, error = %e, "Error loading quizzes");
                Error::Internal(INTERNAL_MESSAGE.to_string())
            })?;
        Ok(quizzes)
    }
}

fn ensure_intact(quiz: &Quiz) -> Result<()> {
    quiz.validate()?;
    Ok(())
}

fn ensure_listed_under(category: &str, quizzes: &[Arc<Quiz>]) -> Result<()> {
    match quizzes.iter().find(|q| q.category_id != category) {
        Some(stray) => Err(Error::Content(format!(
            "quiz '{}' belongs to '{}' but was listed under '{}'",
            stray.id, stray.category_id, category
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::repository::MockContentRepository;
    use crate::models::category::Category;
    use crate::models::question::Question;
    use crate::models::quiz::Difficulty;
    use chrono::Utc;

    fn category(id: &str) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            icon: String::new(),
            color: String::new(),
            stored_quiz_count: None,
        }
    }

    fn quiz(id: &str, category_id: &str, correct_answer: usize) -> Arc<Quiz> {
        Arc::new(Quiz {
            id: id.to_string(),
            title: "Broken".to_string(),
            description: String::new(),
            category_id: category_id.to_string(),
            difficulty: Difficulty::Easy,
            time_limit_minutes: Some(5),
            created_at: Utc::now(),
            questions: vec![Question {
                id: "q1".to_string(),
                prompt: "Pick one".to_string(),
                options: vec!["a".to_string(), "b".to_string()],
                correct_answer,
                explanation: None,
                points: 10,
            }],
        })
    }

    #[test]
    fn corrupt_quiz_is_reported_as_internal() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_quiz()
            .returning(|_| Some(quiz("broken", "math", 7)));

        let service = QueryService::new(Arc::new(repo));
        let err = service.get_quiz("broken").unwrap_err();
        assert!(matches!(err, Error::Internal(ref msg) if msg == "Internal Server Error"));
    }

    #[test]
    fn stray_quiz_in_category_listing_is_internal() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_category()
            .returning(|id| Some(category(id)));
        repo.expect_list_quizzes_for_category()
            .returning(|_| vec![quiz("misfiled", "science", 0)]);

        let service = QueryService::new(Arc::new(repo));
        let err = service.list_quizzes_for_category("math").unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[test]
    fn category_listing_fault_uses_listing_message() {
        let mut repo = MockContentRepository::new();
        repo.expect_list_categories()
            .returning(|| vec![category("math")]);
        repo.expect_list_quizzes_for_category()
            .returning(|_| vec![quiz("misfiled", "history", 0)]);

        let service = QueryService::new(Arc::new(repo));
        let err = service.list_categories().unwrap_err();
        assert!(matches!(err, Error::Internal(ref msg) if msg == "Failed to fetch categories"));
    }

    #[test]
    fn blank_ids_never_reach_the_repository() {
        let repo = MockContentRepository::new();
        let service = QueryService::new(Arc::new(repo));

        assert!(matches!(service.get_quiz("  "), Err(Error::BadRequest(_))));
        assert!(matches!(
            service.list_quizzes_for_category(""),
            Err(Error::BadRequest(_))
        ));
    }
}

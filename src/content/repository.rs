use std::sync::Arc;

use crate::content::loader::Corpus;
use crate::models::{category::Category, quiz::Quiz};

/// Read-only access to the quiz corpus.
///
/// Absence is never an error here: lookups return `None` or an empty list and
/// callers decide what a miss means.
#[cfg_attr(test, mockall::automock)]
pub trait ContentRepository: Send + Sync {
    /// All categories in authored order.
    fn list_categories(&self) -> Vec<Category>;

    fn get_category(&self, id: &str) -> Option<Category>;

    /// Quizzes of one category in authored order. Unknown ids yield an empty list.
    fn list_quizzes_for_category(&self, category_id: &str) -> Vec<Arc<Quiz>>;

    fn get_quiz(&self, id: &str) -> Option<Arc<Quiz>>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryContentRepository {
    categories: Vec<Category>,
    quizzes: Vec<Arc<Quiz>>,
}

impl InMemoryContentRepository {
    pub fn from_corpus(corpus: Corpus) -> Self {
        Self {
            categories: corpus.categories,
            quizzes: corpus.quizzes.into_iter().map(Arc::new).collect(),
        }
    }
}

impl ContentRepository for InMemoryContentRepository {
    fn list_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn get_category(&self, id: &str) -> Option<Category> {
        self.categories.iter().find(|c| c.id == id).cloned()
    }

    fn list_quizzes_for_category(&self, category_id: &str) -> Vec<Arc<Quiz>> {
        self.quizzes
            .iter()
            .filter(|q| q.category_id == category_id)
            .cloned()
            .collect()
    }

    fn get_quiz(&self, id: &str) -> Option<Arc<Quiz>> {
        self.quizzes.iter().find(|q| q.id == id).cloned()
    }
}

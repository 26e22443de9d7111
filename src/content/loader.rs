use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use validator::Validate;

use crate::content::repository::InMemoryContentRepository;
use crate::error::{Error, Result};
use crate::models::{category::Category, quiz::Quiz};

const SAMPLE_CORPUS: &str = include_str!("../../data/corpus.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Corpus {
    pub categories: Vec<Category>,
    pub quizzes: Vec<Quiz>,
}

impl Corpus {
    fn check(&self) -> Result<()> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            category.validate()?;
            if !category_ids.insert(category.id.as_str()) {
                return Err(Error::Content(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
        }

        let mut quiz_ids = HashSet::new();
        for quiz in &self.quizzes {
            quiz.validate()?;
            if !quiz_ids.insert(quiz.id.as_str()) {
                return Err(Error::Content(format!("duplicate quiz id '{}'", quiz.id)));
            }
            if !category_ids.contains(quiz.category_id.as_str()) {
                return Err(Error::Content(format!(
                    "quiz '{}' references unknown category '{}'",
                    quiz.id, quiz.category_id
                )));
            }
            let mut question_ids = HashSet::new();
            for question in &quiz.questions {
                if !question_ids.insert(question.id.as_str()) {
                    return Err(Error::Content(format!(
                        "quiz '{}' repeats question id '{}'",
                        quiz.id, question.id
                    )));
                }
            }
        }

        Ok(())
    }

    fn warn_on_count_drift(&self) {
        for category in &self.categories {
            let Some(stored) = category.stored_quiz_count else {
                continue;
            };
            let live = self
                .quizzes
                .iter()
                .filter(|q| q.category_id == category.id)
                .count();
            if stored as usize != live {
                tracing::warn!(
                    category = %category.id,
                    stored,
                    live,
                    "Stored quiz count is stale; live count will be served"
                );
            }
        }
    }
}

pub fn parse_corpus(raw: &str) -> Result<Corpus> {
    let corpus: Corpus = serde_json::from_str(raw)?;
    corpus.check()?;
    corpus.warn_on_count_drift();
    Ok(corpus)
}

/// Reads the corpus from `path`, or the bundled sample when no path is given.
pub fn load_corpus(path: Option<&Path>) -> Result<Corpus> {
    let corpus = match path {
        Some(path) => {
            tracing::info!("Loading quiz corpus from {}", path.display());
            let raw = std::fs::read_to_string(path)?;
            parse_corpus(&raw)?
        }
        None => {
            tracing::info!("Loading bundled sample corpus");
            parse_corpus(SAMPLE_CORPUS)?
        }
    };
    tracing::info!(
        categories = corpus.categories.len(),
        quizzes = corpus.quizzes.len(),
        "Quiz corpus loaded"
    );
    Ok(corpus)
}

pub fn load_repository(path: Option<&Path>) -> Result<InMemoryContentRepository> {
    Ok(InMemoryContentRepository::from_corpus(load_corpus(path)?))
}

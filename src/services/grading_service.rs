use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::question::Question;
use crate::models::quiz::Quiz;
use crate::models::result::{QuizResult, UserAnswer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            ScoreBand::Excellent
        } else if percentage >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsWork
        }
    }
}

pub struct GradingService;

impl GradingService {
    /// Rounded share of `total_points` earned, 0 when nothing was at stake.
    pub fn final_percentage(score: u32, total_points: u32) -> u32 {
        if total_points == 0 {
            return 0;
        }
        (f64::from(score) / f64::from(total_points) * 100.0).round() as u32
    }

    /// Grades committed selections against the answer key. Slots past the end
    /// of `selected` count as unanswered.
    pub fn grade(questions: &[Question], selected: &[Option<usize>]) -> (u32, u32, Vec<UserAnswer>) {
        let mut earned_points: u32 = 0;
        let mut total_max_points: u32 = 0;
        let mut graded = Vec::with_capacity(questions.len());

        for (idx, q) in questions.iter().enumerate() {
            total_max_points = total_max_points.saturating_add(q.points);
            let selected_answer = selected.get(idx).copied().flatten();
            let is_correct = selected_answer.is_some_and(|given| q.is_correct(given));
            if is_correct {
                earned_points = earned_points.saturating_add(q.points);
            }
            graded.push(UserAnswer {
                question_id: q.id.clone(),
                selected_answer,
                is_correct,
            });
        }

        (earned_points, total_max_points, graded)
    }

    pub fn summarize(
        quiz: &Quiz,
        selected: &[Option<usize>],
        time_taken: Option<u32>,
        completed_at: DateTime<Utc>,
    ) -> QuizResult {
        let (score, total_points, answers) = Self::grade(&quiz.questions, selected);
        QuizResult {
            quiz_id: quiz.id.clone(),
            score,
            total_points,
            total_questions: quiz.questions.len(),
            percentage: Self::final_percentage(score, total_points),
            answers,
            time_taken,
            completed_at,
        }
    }
}

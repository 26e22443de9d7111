use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dto::session_dto::{FeedbackView, OutcomeView, QuestionView, SessionView};
use crate::models::question::Question;
use crate::models::quiz::Quiz;
use crate::models::result::QuizResult;
use crate::services::grading_service::{GradingService, ScoreBand};
use crate::utils::time::format_countdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Loading,
    InProgress,
    Feedback,
    Completed,
}

/// What a transition did to the session.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The input was not valid in the current phase and was ignored.
    Unchanged,
    Updated,
    /// The session just entered `Completed`; timers should be torn down.
    Completed,
}

/// One attempt at one quiz.
///
/// Owned by a single driver. Every input goes through `initialize`, `tick`,
/// `select_answer` or `advance`; inputs that are not valid in the current
/// phase come back as [`Transition::Unchanged`] and leave the state untouched.
///
/// Invariants kept by the transitions:
/// - slots after `current_index` are always unanswered;
/// - `current_index` never passes the last question;
/// - a completed session has no active timer and accepts no further input.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Option<Arc<Quiz>>,
    phase: SessionPhase,
    current_index: usize,
    selected_answers: Vec<Option<usize>>,
    pending_answer: Option<usize>,
    score: u32,
    remaining_seconds: Option<u32>,
    timer_active: bool,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            quiz: None,
            phase: SessionPhase::Loading,
            current_index: 0,
            selected_answers: Vec::new(),
            pending_answer: None,
            score: 0,
            remaining_seconds: None,
            timer_active: false,
        }
    }

    /// Starts the attempt once the quiz content is known. Only valid while loading.
    pub fn initialize(&mut self, quiz: Arc<Quiz>) -> Transition {
        if self.phase != SessionPhase::Loading {
            return Transition::Unchanged;
        }

        self.current_index = 0;
        self.selected_answers = vec![None; quiz.questions.len()];
        self.pending_answer = None;
        self.score = 0;
        self.remaining_seconds = quiz.time_limit_seconds();
        self.timer_active = self.remaining_seconds.is_some_and(|s| s > 0);

        let empty = quiz.questions.is_empty();
        self.quiz = Some(quiz);

        if empty {
            self.finish();
            return Transition::Completed;
        }
        self.phase = SessionPhase::InProgress;
        Transition::Updated
    }

    /// One elapsed second of the countdown. Reaching zero completes the
    /// session at once and discards any answer still awaiting commit.
    pub fn tick(&mut self) -> Transition {
        if !self.timer_active || !self.accepts_input() {
            return Transition::Unchanged;
        }
        let Some(remaining) = self.remaining_seconds.as_mut() else {
            return Transition::Unchanged;
        };

        *remaining = remaining.saturating_sub(1);
        if *remaining > 0 {
            return Transition::Updated;
        }

        if let Some(discarded) = self.pending_answer {
            tracing::debug!(
                question = self.current_index,
                discarded,
                "Time expired during feedback; pending answer dropped"
            );
        }
        self.finish();
        Transition::Completed
    }

    /// Records `option` as the pending answer and shows feedback. Ignored
    /// outside `InProgress` and for options the current question does not have.
    pub fn select_answer(&mut self, option: usize) -> Transition {
        if self.phase != SessionPhase::InProgress {
            return Transition::Unchanged;
        }
        let Some(question) = self.current_question() else {
            return Transition::Unchanged;
        };
        if option >= question.options.len() {
            tracing::debug!(
                option,
                options = question.options.len(),
                "Ignoring selection outside the option range"
            );
            return Transition::Unchanged;
        }

        self.pending_answer = Some(option);
        self.phase = SessionPhase::Feedback;
        Transition::Updated
    }

    /// Commits the pending answer after the feedback dwell, scores it and
    /// moves on, completing the session after the last question.
    pub fn advance(&mut self) -> Transition {
        if self.phase != SessionPhase::Feedback {
            return Transition::Unchanged;
        }
        let Some(quiz) = self.quiz.clone() else {
            return Transition::Unchanged;
        };
        let Some(answer) = self.pending_answer.take() else {
            return Transition::Unchanged;
        };
        let Some(question) = quiz.questions.get(self.current_index) else {
            return Transition::Unchanged;
        };

        self.selected_answers[self.current_index] = Some(answer);
        if question.is_correct(answer) {
            self.score = self.score.saturating_add(question.points);
        }

        if self.current_index + 1 >= quiz.questions.len() {
            self.finish();
            return Transition::Completed;
        }
        self.current_index += 1;
        self.phase = SessionPhase::InProgress;
        Transition::Updated
    }

    fn finish(&mut self) {
        self.pending_answer = None;
        self.timer_active = false;
        self.phase = SessionPhase::Completed;
    }

    fn accepts_input(&self) -> bool {
        matches!(self.phase, SessionPhase::InProgress | SessionPhase::Feedback)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn quiz(&self) -> Option<&Arc<Quiz>> {
        self.quiz.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz
            .as_ref()
            .and_then(|quiz| quiz.questions.get(self.current_index))
    }

    pub fn selected_answers(&self) -> &[Option<usize>] {
        &self.selected_answers
    }

    pub fn pending_answer(&self) -> Option<usize> {
        self.pending_answer
    }

    pub fn is_feedback_visible(&self) -> bool {
        self.phase == SessionPhase::Feedback
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_points(&self) -> u32 {
        self.quiz.as_ref().map_or(0, |quiz| quiz.total_points())
    }

    pub fn is_completed(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    pub fn remaining_seconds(&self) -> Option<u32> {
        self.remaining_seconds
    }

    pub fn is_timer_active(&self) -> bool {
        self.timer_active
    }

    pub fn final_percentage(&self) -> u32 {
        GradingService::final_percentage(self.score, self.total_points())
    }

    /// Seconds of the countdown used so far; `None` for untimed quizzes.
    pub fn time_taken(&self) -> Option<u32> {
        let limit = self.quiz.as_ref()?.time_limit_seconds()?;
        Some(limit - self.remaining_seconds.unwrap_or(0).min(limit))
    }

    /// Summary of a completed attempt, `None` while it is still running.
    pub fn result(&self, completed_at: DateTime<Utc>) -> Option<QuizResult> {
        if !self.is_completed() {
            return None;
        }
        let quiz = self.quiz.as_ref()?;
        Some(GradingService::summarize(
            quiz,
            &self.selected_answers,
            self.time_taken(),
            completed_at,
        ))
    }

    pub fn view(&self) -> SessionView {
        let question = match self.phase {
            SessionPhase::InProgress | SessionPhase::Feedback => {
                self.current_question().map(|q| QuestionView {
                    id: q.id.clone(),
                    prompt: q.prompt.clone(),
                    options: q.options.clone(),
                    points: q.points,
                })
            }
            _ => None,
        };

        let feedback = match (self.phase, self.pending_answer, self.current_question()) {
            (SessionPhase::Feedback, Some(selected), Some(q)) => Some(FeedbackView {
                selected,
                correct_answer: q.correct_answer,
                is_correct: q.is_correct(selected),
                explanation: q.explanation.clone(),
            }),
            _ => None,
        };

        let outcome = match (self.is_completed(), self.quiz.as_ref()) {
            (true, Some(quiz)) => {
                let (_, _, answers) = GradingService::grade(&quiz.questions, &self.selected_answers);
                let percentage = self.final_percentage();
                Some(OutcomeView {
                    percentage,
                    band: ScoreBand::for_percentage(percentage),
                    answers,
                })
            }
            _ => None,
        };

        SessionView {
            phase: self.phase,
            quiz_id: self.quiz.as_ref().map(|q| q.id.clone()),
            current_index: self.current_index,
            question_count: self.selected_answers.len(),
            question,
            pending_answer: self.pending_answer,
            feedback,
            score: self.score,
            total_points: self.total_points(),
            remaining_seconds: self.remaining_seconds,
            remaining_display: self.remaining_seconds.map(format_countdown),
            timer_active: self.timer_active,
            outcome,
        }
    }
}

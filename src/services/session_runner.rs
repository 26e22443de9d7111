use std::future::pending;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Sleep};
use uuid::Uuid;

use crate::dto::session_dto::SessionView;
use crate::models::quiz::Quiz;
use crate::models::result::QuizResult;
use crate::services::quiz_session::{QuizSession, Transition};
use crate::utils::time::now;

const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);
const COMMAND_BUFFER: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    SelectAnswer(usize),
}

/// Client side of a running session.
///
/// Dropping the handle discards the session and stops both of its timers.
pub struct SessionHandle {
    id: Uuid,
    commands: mpsc::Sender<SessionCommand>,
    view: watch::Receiver<SessionView>,
    task: Option<JoinHandle<Option<QuizResult>>>,
}

impl SessionHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn view(&self) -> SessionView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.view.clone()
    }

    /// Forwards a selection. Returns `false` once the session has ended.
    pub async fn select_answer(&self, option: usize) -> bool {
        self.commands
            .send(SessionCommand::SelectAnswer(option))
            .await
            .is_ok()
    }

    /// Waits for the session to complete and returns its result.
    ///
    /// An untimed session only completes once every question is answered.
    pub async fn finish(mut self) -> Option<QuizResult> {
        let task = self.task.take()?;
        match task.await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(session = %self.id, error = ?e, "Session task failed");
                None
            }
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

pub struct SessionRunner;

impl SessionRunner {
    /// Starts a session for `quiz` on its own task.
    ///
    /// The task owns the session outright and multiplexes user commands, the
    /// one-second countdown and the one-shot feedback dwell.
    pub fn spawn(quiz: Arc<Quiz>, dwell: Duration) -> SessionHandle {
        let id = Uuid::new_v4();
        let mut session = QuizSession::new();
        let _ = session.initialize(quiz);

        let (view_tx, view_rx) = watch::channel(session.view());
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);

        tracing::info!(
            session = %id,
            quiz = ?session.quiz().map(|q| q.id.as_str()),
            remaining_seconds = ?session.remaining_seconds(),
            "Quiz session started"
        );

        let task = tokio::spawn(run(id, session, command_rx, view_tx, dwell));
        SessionHandle {
            id,
            commands: command_tx,
            view: view_rx,
            task: Some(task),
        }
    }
}

async fn run(
    id: Uuid,
    mut session: QuizSession,
    mut commands: mpsc::Receiver<SessionCommand>,
    views: watch::Sender<SessionView>,
    dwell: Duration,
) -> Option<QuizResult> {
    let mut countdown = time::interval_at(Instant::now() + COUNTDOWN_PERIOD, COUNTDOWN_PERIOD);
    let mut feedback: Option<Pin<Box<Sleep>>> = None;

    while !session.is_completed() {
        // The countdown is polled first so an expiry that coincides with the
        // end of the dwell completes the session before the answer is committed.
        let transition = tokio::select! {
            biased;

            _ = countdown.tick(), if session.is_timer_active() => session.tick(),
            _ = dwell_elapsed(&mut feedback), if feedback.is_some() => {
                feedback = None;
                session.advance()
            }
            command = commands.recv() => match command {
                Some(SessionCommand::SelectAnswer(option)) => {
                    let transition = session.select_answer(option);
                    if transition == Transition::Updated {
                        feedback = Some(Box::pin(time::sleep(dwell)));
                    }
                    transition
                }
                None => {
                    tracing::debug!(session = %id, "Session handle dropped; discarding session");
                    return None;
                }
            },
        };

        match transition {
            Transition::Unchanged => {}
            Transition::Updated => {
                views.send_replace(session.view());
            }
            Transition::Completed => {
                feedback = None;
                views.send_replace(session.view());
            }
        }
    }

    let result = session.result(now());
    if let Some(result) = &result {
        tracing::info!(
            session = %id,
            quiz = %result.quiz_id,
            score = result.score,
            percentage = result.percentage,
            "Quiz session completed"
        );
    }
    result
}

async fn dwell_elapsed(feedback: &mut Option<Pin<Box<Sleep>>>) {
    match feedback {
        Some(sleep) => sleep.as_mut().await,
        None => pending().await,
    }
}

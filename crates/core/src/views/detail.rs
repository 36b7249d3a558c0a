//! Tryout detail state
//!
//! The tryout and its questions load as two requests with independent slots;
//! questions are requested only after the tryout arrived, and a failing
//! question list never hides the tryout header.

use std::collections::HashMap;

use crate::api::TryoutApi;
use crate::models::{Question, Tryout};
use crate::result::ApiResult;
use crate::views::confirm::{ConfirmStep, DeleteConfirmation};

pub const TRYOUT_LOAD_FAILED_MESSAGE: &str =
    "Failed to load tryout details. Please try again later.";
pub const TRYOUT_NOT_FOUND_MESSAGE: &str = "Tryout not found.";
pub const QUESTIONS_LOAD_FAILED_MESSAGE: &str = "Failed to load questions. Please try again later.";
pub const NO_QUESTIONS_MESSAGE: &str = "No questions available for this tryout yet.";
pub const DELETE_TRYOUT_FAILED_MESSAGE: &str = "Failed to delete tryout. Please try again.";
pub const DELETE_QUESTION_FAILED_MESSAGE: &str = "Failed to delete question. Please try again.";

/// One independently loaded piece of remote data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remote<T> {
    /// Not requested
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Remote<T> {
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Result of pressing a delete button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// First press: confirmation shown, nothing sent
    Armed,
    /// The DELETE succeeded
    Deleted,
    /// The DELETE failed; the message is also kept in `action_error`
    Failed(String),
    /// Nothing happened (request in flight, or deletion not permitted)
    Ignored,
}

/// State container for the tryout detail screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TryoutDetailState {
    tryout_id: String,
    tryout: Remote<Tryout>,
    questions: Remote<Vec<Question>>,
    tryout_delete: DeleteConfirmation,
    question_deletes: HashMap<String, DeleteConfirmation>,
    action_error: Option<String>,
}

impl TryoutDetailState {
    pub fn new(tryout_id: impl Into<String>) -> Self {
        Self {
            tryout_id: tryout_id.into(),
            tryout: Remote::Loading,
            ..Self::default()
        }
    }

    pub fn tryout_id(&self) -> &str {
        &self.tryout_id
    }

    pub const fn tryout(&self) -> &Remote<Tryout> {
        &self.tryout
    }

    pub const fn questions(&self) -> &Remote<Vec<Question>> {
        &self.questions
    }

    /// Last failed delete, shown inline
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub const fn tryout_delete(&self) -> DeleteConfirmation {
        self.tryout_delete
    }

    pub fn question_delete(&self, question_id: &str) -> DeleteConfirmation {
        self.question_deletes
            .get(question_id)
            .copied()
            .unwrap_or_default()
    }

    /// Add/edit/delete controls for questions exist only for a loaded
    /// tryout without submissions.
    pub fn question_controls_visible(&self) -> bool {
        self.tryout.loaded().is_some_and(|t| !t.has_submission)
    }

    /// Same rule for the tryout's own edit button.
    pub fn tryout_editable(&self) -> bool {
        self.question_controls_visible()
    }

    /// Store the tryout response for `requested_id`. Returns whether
    /// questions should be fetched; a response for an id this state no
    /// longer shows is dropped.
    pub fn finish_tryout(&mut self, requested_id: &str, result: ApiResult<Tryout>) -> bool {
        if requested_id != self.tryout_id {
            tracing::debug!(requested_id, tryout_id = %self.tryout_id, "dropping stale tryout response");
            return false;
        }
        match result {
            Ok(tryout) => {
                self.tryout = Remote::Loaded(tryout);
                self.questions = Remote::Loading;
                true
            }
            Err(e) => {
                tracing::warn!(tryout_id = %self.tryout_id, error = %e, "failed to load tryout");
                let message = if e.is_not_found() {
                    e.server_message()
                        .map_or_else(|| TRYOUT_NOT_FOUND_MESSAGE.to_string(), ToString::to_string)
                } else {
                    e.user_message(TRYOUT_LOAD_FAILED_MESSAGE)
                };
                self.tryout = Remote::Failed(message);
                false
            }
        }
    }

    /// Store the question list response; only the question slot changes.
    pub fn finish_questions(&mut self, requested_id: &str, result: ApiResult<Vec<Question>>) {
        if requested_id != self.tryout_id {
            tracing::debug!(requested_id, tryout_id = %self.tryout_id, "dropping stale questions response");
            return;
        }
        self.questions = match result {
            Ok(questions) => Remote::Loaded(questions),
            Err(e) => {
                tracing::warn!(tryout_id = %self.tryout_id, error = %e, "failed to load questions");
                Remote::Failed(e.user_message(QUESTIONS_LOAD_FAILED_MESSAGE))
            }
        };
    }

    /// Load the tryout, then its questions if the tryout arrived.
    pub async fn load<A: TryoutApi + ?Sized>(&mut self, api: &A) {
        self.tryout = Remote::Loading;
        let id = self.tryout_id.clone();
        let tryout = api.get_tryout(&id).await;
        if self.finish_tryout(&id, tryout) {
            let questions = api.list_questions(&id).await;
            self.finish_questions(&id, questions);
        }
    }

    /// Press the tryout delete button without sending anything.
    pub const fn press_delete_tryout(&mut self) -> ConfirmStep {
        self.tryout_delete.press()
    }

    pub const fn cancel_delete_tryout(&mut self) {
        self.tryout_delete.cancel();
    }

    /// Store the DELETE response for the tryout.
    ///
    /// On `Deleted` the caller navigates back to the list.
    pub fn finish_delete_tryout(&mut self, result: ApiResult<()>) -> DeleteOutcome {
        self.tryout_delete.settle();
        self.settle_action(result, DELETE_TRYOUT_FAILED_MESSAGE)
    }

    /// Two-click delete of the tryout.
    pub async fn click_delete_tryout<A: TryoutApi + ?Sized>(&mut self, api: &A) -> DeleteOutcome {
        match self.press_delete_tryout() {
            ConfirmStep::Arm => DeleteOutcome::Armed,
            ConfirmStep::Ignore => DeleteOutcome::Ignored,
            ConfirmStep::Execute => {
                let result = api.delete_tryout(&self.tryout_id).await;
                self.finish_delete_tryout(result)
            }
        }
    }

    /// Press a question's delete button without sending anything.
    ///
    /// Ignored while question controls are hidden.
    pub fn press_delete_question(&mut self, question_id: &str) -> ConfirmStep {
        if !self.question_controls_visible() {
            return ConfirmStep::Ignore;
        }
        self.question_deletes
            .entry(question_id.to_string())
            .or_default()
            .press()
    }

    pub fn cancel_delete_question(&mut self, question_id: &str) {
        if let Some(state) = self.question_deletes.get_mut(question_id) {
            state.cancel();
        }
    }

    /// Store the DELETE response for a question; on success splice it out of
    /// the in-memory list without refetching.
    pub fn finish_delete_question(&mut self, question_id: &str, result: ApiResult<()>) -> DeleteOutcome {
        self.question_deletes.remove(question_id);
        let outcome = self.settle_action(result, DELETE_QUESTION_FAILED_MESSAGE);
        if outcome == DeleteOutcome::Deleted {
            if let Remote::Loaded(questions) = &mut self.questions {
                questions.retain(|q| q.id != question_id);
            }
        }
        outcome
    }

    /// Two-click delete of one question.
    pub async fn click_delete_question<A: TryoutApi + ?Sized>(
        &mut self,
        api: &A,
        question_id: &str,
    ) -> DeleteOutcome {
        match self.press_delete_question(question_id) {
            ConfirmStep::Arm => DeleteOutcome::Armed,
            ConfirmStep::Ignore => DeleteOutcome::Ignored,
            ConfirmStep::Execute => {
                let result = api.delete_question(&self.tryout_id, question_id).await;
                self.finish_delete_question(question_id, result)
            }
        }
    }

    fn settle_action(&mut self, result: ApiResult<()>, fallback: &str) -> DeleteOutcome {
        match result {
            Ok(()) => {
                self.action_error = None;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::warn!(tryout_id = %self.tryout_id, error = %e, "delete failed");
                let message = e.user_message(fallback);
                self.action_error = Some(message.clone());
                DeleteOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn loaded(has_submission: bool) -> TryoutDetailState {
        let mut state = TryoutDetailState::new("t1");
        state.finish_tryout("t1", Ok(Tryout::new("t1", "Physics").with_submission(has_submission)));
        state.finish_questions("t1", Ok(vec![
            Question::new("q1", "t1", "Light is a wave", true),
            Question::new("q2", "t1", "Sound travels in vacuum", false),
        ]));
        state
    }

    #[test]
    fn test_new_state_is_loading_tryout_only() {
        let state = TryoutDetailState::new("t1");
        assert!(state.tryout().is_loading());
        assert_eq!(state.questions(), &Remote::Idle);
        assert!(!state.question_controls_visible());
    }

    #[test]
    fn test_not_found_tryout_skips_questions() {
        let mut state = TryoutDetailState::new("missing");
        let fetch_questions = state.finish_tryout("missing", Err(ApiError::from_status(404, None)));
        assert!(!fetch_questions);
        assert_eq!(state.tryout().error(), Some(TRYOUT_NOT_FOUND_MESSAGE));
        assert_eq!(state.questions(), &Remote::Idle);
    }

    #[test]
    fn test_question_failure_keeps_tryout() {
        let mut state = TryoutDetailState::new("t1");
        state.finish_tryout("t1", Ok(Tryout::new("t1", "Physics")));
        state.finish_questions("t1", Err(ApiError::Network("timeout".into())));

        assert!(state.tryout().loaded().is_some());
        assert_eq!(state.questions().error(), Some(QUESTIONS_LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn test_response_for_previous_tryout_is_dropped() {
        let mut state = TryoutDetailState::new("t2");

        let fetch_questions = state.finish_tryout("t1", Ok(Tryout::new("t1", "Physics")));
        state.finish_questions("t1", Ok(vec![Question::new("q1", "t1", "Light is a wave", true)]));

        assert!(!fetch_questions);
        assert!(state.tryout().is_loading());
        assert_eq!(state.questions(), &Remote::Idle);
    }

    #[test]
    fn test_submission_hides_question_controls() {
        assert!(loaded(false).question_controls_visible());
        assert!(!loaded(true).question_controls_visible());
        assert!(!loaded(true).tryout_editable());
    }

    #[test]
    fn test_question_delete_ignored_when_locked() {
        let mut state = loaded(true);
        assert_eq!(state.press_delete_question("q1"), ConfirmStep::Ignore);
        assert_eq!(state.question_delete("q1"), DeleteConfirmation::Idle);
    }

    #[test]
    fn test_arming_one_question_leaves_others_idle() {
        let mut state = loaded(false);
        assert_eq!(state.press_delete_question("q1"), ConfirmStep::Arm);
        assert!(state.question_delete("q1").is_armed());
        assert_eq!(state.question_delete("q2"), DeleteConfirmation::Idle);

        state.cancel_delete_question("q1");
        assert_eq!(state.question_delete("q1"), DeleteConfirmation::Idle);
    }

    #[test]
    fn test_failed_question_delete_keeps_question() {
        let mut state = loaded(false);
        state.press_delete_question("q1");
        state.press_delete_question("q1");
        let outcome = state.finish_delete_question(
            "q1",
            Err(ApiError::from_status(409, Some("Tryout is locked".into()))),
        );

        assert_eq!(outcome, DeleteOutcome::Failed("Tryout is locked".into()));
        assert_eq!(state.action_error(), Some("Tryout is locked"));
        assert_eq!(state.questions().loaded().map(Vec::len), Some(2));
        assert_eq!(state.question_delete("q1"), DeleteConfirmation::Idle);
    }
}

//! Tryout and question form behavior

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::{RecordingApi, sample_tryout};
use tryout_core::models::{Question, QuestionInput, TryoutInput};
use tryout_core::views::forms::{
    FormMode, QUESTION_NOT_FOUND_MESSAGE, QuestionFormState, TryoutFormState,
};
use tryout_core::{ApiError, Endpoint};

#[tokio::test]
async fn test_category_options_end_with_other() {
    // Given: the server knows Math and Science
    let api = RecordingApi::new().with_categories(&["Math", "Science"]);
    let mut state = TryoutFormState::new(FormMode::Create);

    // When: the create form loads
    state.load(&api).await;

    // Then: the dropdown offers Math, Science, Other in that order
    assert_eq!(state.category_choices(), vec!["Math", "Science", "Other"]);
    assert_eq!(api.calls(), vec![Endpoint::FilterOptions]);
}

#[tokio::test]
async fn test_create_posts_and_returns_to_list() {
    let api = RecordingApi::new().with_categories(&["Math"]);
    let mut state = TryoutFormState::new(FormMode::Create);
    state.load(&api).await;
    state.draft.title = "Fractions".into();
    state.draft.description = "Adding fractions".into();
    state.draft.category_choice = "Other".into();
    state.draft.custom_category = "Arithmetic".into();

    let target = state.submit(&api).await;

    assert_eq!(target.as_deref(), Some("/"));
    assert_eq!(
        api.last_tryout_input(),
        Some(TryoutInput {
            title: "Fractions".into(),
            description: "Adding fractions".into(),
            category: "Arithmetic".into(),
            duration: 30,
        })
    );
}

#[tokio::test]
async fn test_edit_prefills_and_puts() {
    let api = RecordingApi::new()
        .with_categories(&["Math", "Science"])
        .with_tryout(sample_tryout("t1", "Algebra"));
    let mut state = TryoutFormState::new(FormMode::Edit("t1".into()));

    state.load(&api).await;
    assert!(!state.is_loading());
    assert_eq!(state.draft.title, "Algebra");
    assert_eq!(state.draft.category_choice, "Math");

    state.draft.duration = "60".into();
    state.submit(&api).await;

    assert_eq!(api.calls().last(), Some(&Endpoint::UpdateTryout("t1".into())));
    assert_eq!(api.last_tryout_input().map(|i| i.duration), Some(60));
}

#[tokio::test]
async fn test_invalid_tryout_sends_nothing() {
    let api = RecordingApi::new();
    let mut state = TryoutFormState::new(FormMode::Create);
    state.draft.title = "Only a title".into();

    let target = state.submit(&api).await;

    assert_eq!(target, None);
    assert!(state.error().is_some());
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_server_message_is_shown_on_save_failure() {
    let api = RecordingApi::new().failing(
        Endpoint::CreateTryout,
        ApiError::from_status(400, Some("title already taken".into())),
    );
    let mut state = TryoutFormState::new(FormMode::Create);
    state.draft.title = "Dup".into();
    state.draft.description = "Twice".into();
    state.draft.category_choice = "Math".into();

    let target = state.submit(&api).await;

    assert_eq!(target, None);
    assert_eq!(state.error(), Some("title already taken"));
    assert!(!state.is_submitting());
}

#[tokio::test]
async fn test_question_without_answer_is_rejected() {
    // Given: question text but no answer chosen
    let api = RecordingApi::new();
    let mut state = QuestionFormState::new("t1", FormMode::Create);
    state.draft.text = "The earth is flat".into();

    // When: the form is submitted
    let target = state.submit(&api).await;

    // Then: it is rejected locally and nothing was sent
    assert_eq!(target, None);
    assert!(state.error().is_some());
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_question_save_returns_to_detail() {
    let api = RecordingApi::new();
    let mut state = QuestionFormState::new("t1", FormMode::Create);
    state.draft.text = "The earth is round".into();
    state.draft.answer = Some(true);

    let target = state.submit(&api).await;

    assert_eq!(target.as_deref(), Some("/tryout/t1"));
    assert_eq!(
        api.last_question_input(),
        Some(QuestionInput {
            text: "The earth is round".into(),
            is_true: true,
        })
    );
}

#[tokio::test]
async fn test_question_edit_prefills_answer() {
    let api = RecordingApi::new().with_question(Question::new("q1", "t1", "Ice floats", false));
    let mut state = QuestionFormState::new("t1", FormMode::Edit("q1".into()));

    state.load(&api).await;

    assert_eq!(state.draft.answer, Some(false));
    state.submit(&api).await;
    assert_eq!(
        api.calls().last(),
        Some(&Endpoint::UpdateQuestion {
            tryout_id: "t1".into(),
            question_id: "q1".into(),
        })
    );
}

#[tokio::test]
async fn test_missing_question_reports_not_found() {
    let api = RecordingApi::new();
    let mut state = QuestionFormState::new("t1", FormMode::Edit("gone".into()));

    state.load(&api).await;

    assert_eq!(state.error(), Some(QUESTION_NOT_FOUND_MESSAGE));
}

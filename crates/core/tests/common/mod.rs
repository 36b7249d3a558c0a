//! In-memory `TryoutApi` that records every call

#![allow(dead_code)]

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tryout_core::{
    ApiError, ApiResult, Endpoint, FilterOptions, Question, QuestionInput, Tryout, TryoutApi,
    TryoutInput, TryoutQuery,
};
use tryout_core::models::CategoryOption;

/// Serves canned data and remembers each endpoint it was asked for
#[derive(Debug, Default)]
pub struct RecordingApi {
    calls: RefCell<Vec<Endpoint>>,
    failures: RefCell<Vec<(Endpoint, ApiError)>>,
    tryouts: RefCell<Vec<Tryout>>,
    questions: RefCell<Vec<Question>>,
    options: FilterOptions,
    last_tryout_input: RefCell<Option<TryoutInput>>,
    last_question_input: RefCell<Option<QuestionInput>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tryout(self, tryout: Tryout) -> Self {
        self.tryouts.borrow_mut().push(tryout);
        self
    }

    pub fn with_question(self, question: Question) -> Self {
        self.questions.borrow_mut().push(question);
        self
    }

    pub fn with_categories(mut self, names: &[&str]) -> Self {
        self.options = FilterOptions {
            categories: names
                .iter()
                .map(|n| CategoryOption {
                    category: (*n).to_string(),
                })
                .collect(),
        };
        self
    }

    /// Make one endpoint fail with `error`.
    pub fn failing(self, endpoint: Endpoint, error: ApiError) -> Self {
        self.failures.borrow_mut().push((endpoint, error));
        self
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_tryout_input(&self) -> Option<TryoutInput> {
        self.last_tryout_input.borrow().clone()
    }

    pub fn last_question_input(&self) -> Option<QuestionInput> {
        self.last_question_input.borrow().clone()
    }

    fn record(&self, endpoint: Endpoint) -> ApiResult<()> {
        let failure = self
            .failures
            .borrow()
            .iter()
            .find(|(e, _)| *e == endpoint)
            .map(|(_, error)| error.clone());
        self.calls.borrow_mut().push(endpoint);
        failure.map_or(Ok(()), Err)
    }

    fn not_found() -> ApiError {
        ApiError::from_status(404, None)
    }
}

#[async_trait(?Send)]
impl TryoutApi for RecordingApi {
    async fn list_tryouts(&self, query: &TryoutQuery) -> ApiResult<Vec<Tryout>> {
        self.record(Endpoint::from(query))?;
        Ok(self.tryouts.borrow().clone())
    }

    async fn filter_options(&self) -> ApiResult<FilterOptions> {
        self.record(Endpoint::FilterOptions)?;
        Ok(self.options.clone())
    }

    async fn get_tryout(&self, id: &str) -> ApiResult<Tryout> {
        self.record(Endpoint::GetTryout(id.to_string()))?;
        self.tryouts
            .borrow()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_tryout(&self, input: &TryoutInput) -> ApiResult<()> {
        self.record(Endpoint::CreateTryout)?;
        *self.last_tryout_input.borrow_mut() = Some(input.clone());
        Ok(())
    }

    async fn update_tryout(&self, id: &str, input: &TryoutInput) -> ApiResult<()> {
        self.record(Endpoint::UpdateTryout(id.to_string()))?;
        *self.last_tryout_input.borrow_mut() = Some(input.clone());
        Ok(())
    }

    async fn delete_tryout(&self, id: &str) -> ApiResult<()> {
        self.record(Endpoint::DeleteTryout(id.to_string()))?;
        self.tryouts.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }

    async fn list_questions(&self, tryout_id: &str) -> ApiResult<Vec<Question>> {
        self.record(Endpoint::ListQuestions(tryout_id.to_string()))?;
        Ok(self
            .questions
            .borrow()
            .iter()
            .filter(|q| q.tryout_id == tryout_id)
            .cloned()
            .collect())
    }

    async fn get_question(&self, tryout_id: &str, question_id: &str) -> ApiResult<Question> {
        self.record(Endpoint::GetQuestion {
            tryout_id: tryout_id.to_string(),
            question_id: question_id.to_string(),
        })?;
        self.questions
            .borrow()
            .iter()
            .find(|q| q.tryout_id == tryout_id && q.id == question_id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_question(&self, tryout_id: &str, input: &QuestionInput) -> ApiResult<()> {
        self.record(Endpoint::CreateQuestion(tryout_id.to_string()))?;
        *self.last_question_input.borrow_mut() = Some(input.clone());
        Ok(())
    }

    async fn update_question(
        &self,
        tryout_id: &str,
        question_id: &str,
        input: &QuestionInput,
    ) -> ApiResult<()> {
        self.record(Endpoint::UpdateQuestion {
            tryout_id: tryout_id.to_string(),
            question_id: question_id.to_string(),
        })?;
        *self.last_question_input.borrow_mut() = Some(input.clone());
        Ok(())
    }

    async fn delete_question(&self, tryout_id: &str, question_id: &str) -> ApiResult<()> {
        self.record(Endpoint::DeleteQuestion {
            tryout_id: tryout_id.to_string(),
            question_id: question_id.to_string(),
        })?;
        self.questions
            .borrow_mut()
            .retain(|q| !(q.tryout_id == tryout_id && q.id == question_id));
        Ok(())
    }
}

/// A tryout created at a fixed instant
pub fn sample_tryout(id: &str, title: &str) -> Tryout {
    let at = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).single().unwrap_or_default();
    Tryout::new(id, title)
        .with_description("Practice set")
        .with_category("Math")
        .with_duration(45)
        .with_timestamps(at, at)
}

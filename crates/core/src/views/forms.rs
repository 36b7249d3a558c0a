//! Tryout and question form state
//!
//! Both forms run in create or edit mode, decided by the presence of an id in
//! the route. Edit mode pre-fills from the server before accepting input.
//! Drafts hold raw input; `to_input` is the single place where required
//! fields are enforced before any request goes out.

use crate::api::TryoutApi;
use crate::error::{ApiError, FormError};
use crate::models::{FilterOptions, Question, QuestionInput, Tryout, TryoutInput};
use crate::result::{ApiResult, ResultExt};
use crate::views::nav;

/// Escape hatch appended after the server's categories.
pub const OTHER_CATEGORY: &str = "Other";

/// Duration pre-filled on a new tryout, in minutes.
pub const DEFAULT_DURATION: u32 = 30;

pub const SAVE_TRYOUT_FAILED_MESSAGE: &str = "Failed to save tryout. Please try again.";
pub const SAVE_QUESTION_FAILED_MESSAGE: &str = "Failed to save question. Please try again.";
pub const LOAD_TRYOUT_FAILED_MESSAGE: &str =
    "Failed to load tryout details. Please try again later.";
pub const LOAD_QUESTION_FAILED_MESSAGE: &str =
    "Failed to load question details. Please try again later.";
pub const QUESTION_NOT_FOUND_MESSAGE: &str = "Question not found.";

/// Create or edit, from an optional route parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn from_param(id: Option<String>) -> Self {
        id.filter(|v| !v.trim().is_empty())
            .map_or(Self::Create, Self::Edit)
    }

    pub const fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

/// Dropdown entries: server categories in order, then `Other`.
pub fn category_choices(options: &FilterOptions) -> Vec<String> {
    let mut choices = options.category_names();
    choices.retain(|c| c != OTHER_CATEGORY);
    choices.push(OTHER_CATEGORY.to_string());
    choices
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Raw tryout form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryoutDraft {
    pub title: String,
    pub description: String,
    /// Selected dropdown value; empty until chosen
    pub category_choice: String,
    /// Free text shown when `Other` is selected
    pub custom_category: String,
    /// Number input, kept as typed
    pub duration: String,
}

impl Default for TryoutDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category_choice: String::new(),
            custom_category: String::new(),
            duration: DEFAULT_DURATION.to_string(),
        }
    }
}

impl TryoutDraft {
    /// Pre-fill from an existing tryout.
    pub fn from_tryout(tryout: &Tryout, known_categories: &[String]) -> Self {
        let mut draft = Self {
            title: tryout.title.clone(),
            description: tryout.description.clone(),
            category_choice: tryout.category.clone(),
            custom_category: String::new(),
            duration: tryout.duration.to_string(),
        };
        draft.reconcile_category(known_categories);
        draft
    }

    /// Whether the free-text category input is shown
    pub fn shows_custom_category(&self) -> bool {
        self.category_choice == OTHER_CATEGORY
    }

    /// Map the category onto the dropdown once the known values are at hand.
    ///
    /// An unknown value moves into the `Other` text box; a value typed under
    /// `Other` that turns out to be known is selected directly.
    pub fn reconcile_category(&mut self, known_categories: &[String]) {
        let is_known = |c: &str| known_categories.iter().any(|k| k == c);
        if self.shows_custom_category() {
            if is_known(self.custom_category.trim()) {
                self.category_choice = self.custom_category.trim().to_string();
                self.custom_category.clear();
            }
        } else if !self.category_choice.is_empty() && !is_known(&self.category_choice) {
            self.custom_category =
                std::mem::replace(&mut self.category_choice, OTHER_CATEGORY.to_string());
        }
    }

    /// The category that will be sent.
    ///
    /// `Other` with an empty text box is sent as the literal `Other`.
    pub fn resolved_category(&self) -> String {
        if self.shows_custom_category() {
            let custom = self.custom_category.trim();
            if custom.is_empty() {
                OTHER_CATEGORY.to_string()
            } else {
                custom.to_string()
            }
        } else {
            self.category_choice.trim().to_string()
        }
    }

    /// Validate into a request body.
    ///
    /// # Errors
    ///
    /// `MissingField` for a blank title, description or category;
    /// `InvalidDuration` unless the duration is a whole number >= 1.
    pub fn to_input(&self) -> Result<TryoutInput, FormError> {
        let title = required(&self.title, "title")?;
        let category = required(&self.resolved_category(), "category")?;
        let duration = self
            .duration
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|d| *d >= 1)
            .ok_or(FormError::InvalidDuration)?;
        let description = required(&self.description, "description")?;
        Ok(TryoutInput {
            title,
            description,
            category,
            duration,
        })
    }
}

/// Raw question form input
///
/// The answer starts unset and must be chosen explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub answer: Option<bool>,
}

impl QuestionDraft {
    pub fn from_question(question: &Question) -> Self {
        Self {
            text: question.text.clone(),
            answer: Some(question.is_true),
        }
    }

    /// Validate into a request body.
    ///
    /// # Errors
    ///
    /// `MissingField` for blank text, `AnswerNotSelected` when no answer
    /// was chosen.
    pub fn to_input(&self) -> Result<QuestionInput, FormError> {
        let text = required(&self.text, "question text")?;
        let is_true = self.answer.ok_or(FormError::AnswerNotSelected)?;
        Ok(QuestionInput { text, is_true })
    }
}

/// State container for the tryout create/edit screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryoutFormState {
    mode: FormMode,
    pub draft: TryoutDraft,
    categories: Vec<String>,
    loading: bool,
    submitting: bool,
    error: Option<String>,
}

impl TryoutFormState {
    pub fn new(mode: FormMode) -> Self {
        Self {
            loading: mode.is_edit(),
            mode,
            draft: TryoutDraft::default(),
            categories: Vec::new(),
            submitting: false,
            error: None,
        }
    }

    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Edit mode blocks input until the existing values arrive
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn heading(&self) -> &'static str {
        if self.mode.is_edit() { "Edit Tryout" } else { "Create New Tryout" }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.submitting, self.mode.is_edit()) {
            (true, _) => "Saving...",
            (false, true) => "Update Tryout",
            (false, false) => "Create Tryout",
        }
    }

    /// Dropdown entries including the trailing `Other`
    pub fn category_choices(&self) -> Vec<String> {
        let mut choices = self.categories.clone();
        choices.push(OTHER_CATEGORY.to_string());
        choices
    }

    pub fn set_categories(&mut self, options: &FilterOptions) {
        self.categories = options
            .category_names()
            .into_iter()
            .filter(|c| c != OTHER_CATEGORY)
            .collect();
        self.draft.reconcile_category(&self.categories);
    }

    /// Re-map the draft's category after it was set directly.
    pub fn reconcile_category(&mut self) {
        self.draft.reconcile_category(&self.categories);
    }

    /// Store the edit-mode pre-fill response.
    pub fn finish_load(&mut self, result: ApiResult<Tryout>) {
        match result {
            Ok(tryout) => {
                self.draft = TryoutDraft::from_tryout(&tryout, &self.categories);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(mode = ?self.mode, error = %e, "failed to load tryout for editing");
                self.error = Some(e.user_message(LOAD_TRYOUT_FAILED_MESSAGE));
            }
        }
        self.loading = false;
    }

    /// Fetch categories, and in edit mode the existing tryout.
    pub async fn load<A: TryoutApi + ?Sized>(&mut self, api: &A) {
        if let Some(options) = api.filter_options().await.into_option_logged("filter options") {
            self.set_categories(&options);
        }
        if let FormMode::Edit(id) = &self.mode {
            let result = api.get_tryout(id).await;
            self.finish_load(result);
        }
    }

    /// Validate and mark the submission as started.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<TryoutInput, FormError> {
        match self.draft.to_input() {
            Ok(input) => {
                self.submitting = true;
                self.error = None;
                Ok(input)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Store the save response; returns where to navigate on success.
    pub fn finish_submit(&mut self, result: ApiResult<()>) -> Option<String> {
        self.submitting = false;
        match result {
            Ok(()) => Some(nav::LIST.to_string()),
            Err(e) => {
                tracing::warn!(mode = ?self.mode, error = %e, "failed to save tryout");
                self.error = Some(e.user_message(SAVE_TRYOUT_FAILED_MESSAGE));
                None
            }
        }
    }

    /// POST in create mode, PUT in edit mode.
    pub async fn submit<A: TryoutApi + ?Sized>(&mut self, api: &A) -> Option<String> {
        let input = self.begin_submit().ok()?;
        let result = save_tryout(api, &self.mode, &input).await;
        self.finish_submit(result)
    }
}

/// Send a validated tryout body according to the form mode.
///
/// # Errors
///
/// Propagates the API failure.
pub async fn save_tryout<A: TryoutApi + ?Sized>(
    api: &A,
    mode: &FormMode,
    input: &TryoutInput,
) -> ApiResult<()> {
    match mode {
        FormMode::Create => api.create_tryout(input).await,
        FormMode::Edit(id) => api.update_tryout(id, input).await,
    }
}

/// State container for the question create/edit screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFormState {
    tryout_id: String,
    mode: FormMode,
    pub draft: QuestionDraft,
    loading: bool,
    submitting: bool,
    error: Option<String>,
}

impl QuestionFormState {
    pub fn new(tryout_id: impl Into<String>, mode: FormMode) -> Self {
        Self {
            tryout_id: tryout_id.into(),
            loading: mode.is_edit(),
            mode,
            draft: QuestionDraft::default(),
            submitting: false,
            error: None,
        }
    }

    pub fn tryout_id(&self) -> &str {
        &self.tryout_id
    }

    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn heading(&self) -> &'static str {
        if self.mode.is_edit() { "Edit Question" } else { "Add New Question" }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.submitting, self.mode.is_edit()) {
            (true, _) => "Saving...",
            (false, true) => "Update Question",
            (false, false) => "Add Question",
        }
    }

    /// Where both cancel and a successful save lead
    pub fn back_target(&self) -> String {
        nav::tryout_detail(&self.tryout_id)
    }

    /// Store the edit-mode pre-fill response. A 404 is reported as such.
    pub fn finish_load(&mut self, result: ApiResult<Question>) {
        match result {
            Ok(question) => {
                self.draft = QuestionDraft::from_question(&question);
                self.error = None;
            }
            Err(ApiError::NotFound { message }) => {
                self.error = Some(message.unwrap_or_else(|| QUESTION_NOT_FOUND_MESSAGE.to_string()));
            }
            Err(e) => {
                tracing::warn!(tryout_id = %self.tryout_id, error = %e, "failed to load question");
                self.error = Some(e.user_message(LOAD_QUESTION_FAILED_MESSAGE));
            }
        }
        self.loading = false;
    }

    /// In edit mode, fetch the existing question.
    pub async fn load<A: TryoutApi + ?Sized>(&mut self, api: &A) {
        if let FormMode::Edit(question_id) = &self.mode {
            let result = api.get_question(&self.tryout_id, question_id).await;
            self.finish_load(result);
        }
    }

    /// Validate and mark the submission as started.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<QuestionInput, FormError> {
        match self.draft.to_input() {
            Ok(input) => {
                self.submitting = true;
                self.error = None;
                Ok(input)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Store the save response; returns where to navigate on success.
    pub fn finish_submit(&mut self, result: ApiResult<()>) -> Option<String> {
        self.submitting = false;
        match result {
            Ok(()) => Some(self.back_target()),
            Err(e) => {
                tracing::warn!(tryout_id = %self.tryout_id, error = %e, "failed to save question");
                self.error = Some(e.user_message(SAVE_QUESTION_FAILED_MESSAGE));
                None
            }
        }
    }

    /// POST in create mode, PUT in edit mode.
    pub async fn submit<A: TryoutApi + ?Sized>(&mut self, api: &A) -> Option<String> {
        let input = self.begin_submit().ok()?;
        let result = save_question(api, &self.tryout_id, &self.mode, &input).await;
        self.finish_submit(result)
    }
}

/// Send a validated question body according to the form mode.
///
/// # Errors
///
/// Propagates the API failure.
pub async fn save_question<A: TryoutApi + ?Sized>(
    api: &A,
    tryout_id: &str,
    mode: &FormMode,
    input: &QuestionInput,
) -> ApiResult<()> {
    match mode {
        FormMode::Create => api.create_question(tryout_id, input).await,
        FormMode::Edit(question_id) => api.update_question(tryout_id, question_id, input).await,
    }
}

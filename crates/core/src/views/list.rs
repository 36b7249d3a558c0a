//! Tryout list state
//!
//! Two copies of the filters are kept: `pending` follows the inputs as the
//! user types, `applied` only changes on an explicit search. Requests are
//! issued for `applied` alone, so typing never triggers a fetch.

use chrono::{NaiveDate, TimeZone};

use crate::api::{TryoutApi, TryoutQuery};
use crate::error::FilterError;
use crate::filters::TryoutFilters;
use crate::models::{FilterOptions, Tryout};
use crate::result::{ApiResult, ResultExt};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load tryouts. Please try again later.";
pub const NO_MATCHES_MESSAGE: &str = "No tryouts match your filters. Try adjusting them.";
pub const EMPTY_MESSAGE: &str = "No tryouts yet. Create your first tryout!";

/// Fetch lifecycle of the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListPhase {
    /// First fetch in flight; nothing rendered yet
    #[default]
    InitialLoad,
    /// A later fetch in flight; the previous list stays on screen
    Searching,
    Idle,
}

/// What the list area should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDisplay<'a> {
    Loading,
    Failed(&'a str),
    /// Filters are active and nothing matched
    NoMatches,
    /// No filters and no tryouts at all
    Empty,
    Items(&'a [Tryout]),
}

/// State container for the tryout list screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TryoutListState {
    /// Bound to the filter inputs
    pub pending: TryoutFilters,
    applied: TryoutFilters,
    tryouts: Vec<Tryout>,
    phase: ListPhase,
    error: Option<String>,
    validation: Option<String>,
    categories: Vec<String>,
}

impl TryoutListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn applied(&self) -> &TryoutFilters {
        &self.applied
    }

    pub fn tryouts(&self) -> &[Tryout] {
        &self.tryouts
    }

    pub const fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Inline message under the filter form
    pub fn validation(&self) -> Option<&str> {
        self.validation.as_deref()
    }

    /// Values for the category filter dropdown
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_active_filters(&self) -> bool {
        !self.applied.is_empty()
    }

    /// Non-blocking overlay while a search runs over an existing list
    pub fn is_searching(&self) -> bool {
        self.phase == ListPhase::Searching
    }

    /// Promote the pending filters to applied.
    ///
    /// Returns `Ok(true)` when a fetch is due: the applied filters changed, or
    /// the last fetch failed and pressing search again is a retry.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the applied filters are left untouched
    /// and the message is kept for display.
    pub fn apply(&mut self, today: NaiveDate) -> Result<bool, FilterError> {
        if let Err(e) = self.pending.validate(today) {
            self.validation = Some(e.to_string());
            return Err(e);
        }
        self.validation = None;
        let retry = self.error.is_some();
        if self.pending == self.applied {
            return Ok(retry);
        }
        self.applied = self.pending.clone();
        Ok(true)
    }

    /// Clear both filter copies. Returns whether a fetch is due.
    pub fn reset(&mut self) -> bool {
        self.pending = TryoutFilters::default();
        self.validation = None;
        let changed = !self.applied.is_empty() || self.error.is_some();
        self.applied = TryoutFilters::default();
        changed
    }

    /// Request for the applied filters.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` when an applied date cannot be resolved in `tz`.
    pub fn request<Tz: TimeZone>(&self, tz: &Tz) -> Result<TryoutQuery, FilterError> {
        self.applied.to_query(tz)
    }

    /// Mark a fetch as started.
    pub fn begin_fetch(&mut self) {
        if self.phase != ListPhase::InitialLoad {
            self.phase = ListPhase::Searching;
        }
    }

    /// Store a fetch result. A failure keeps the previously rendered list.
    pub fn finish_fetch(&mut self, result: ApiResult<Vec<Tryout>>) {
        match result {
            Ok(tryouts) => {
                self.tryouts = tryouts;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load tryouts");
                self.error = Some(e.user_message(LOAD_FAILED_MESSAGE));
            }
        }
        self.phase = ListPhase::Idle;
    }

    /// Resolve the request for the applied filters and mark the fetch as
    /// started. `None` means the dates could not be resolved; the reason is
    /// kept as the validation message and nothing should be sent.
    pub fn begin_refresh<Tz: TimeZone>(&mut self, tz: &Tz) -> Option<TryoutQuery> {
        match self.request(tz) {
            Ok(query) => {
                self.begin_fetch();
                Some(query)
            }
            Err(e) => {
                self.validation = Some(e.to_string());
                None
            }
        }
    }

    /// Fetch the list for the applied filters, exactly one request.
    pub async fn refresh<A, Tz>(&mut self, api: &A, tz: &Tz)
    where
        A: TryoutApi + ?Sized,
        Tz: TimeZone,
    {
        if let Some(query) = self.begin_refresh(tz) {
            let result = api.list_tryouts(&query).await;
            self.finish_fetch(result);
        }
    }

    /// The search button: validate, apply, fetch if anything changed or the
    /// previous fetch failed.
    ///
    /// # Errors
    ///
    /// Returns the validation failure without contacting the server.
    pub async fn search<A, Tz>(&mut self, api: &A, today: NaiveDate, tz: &Tz) -> Result<bool, FilterError>
    where
        A: TryoutApi + ?Sized,
        Tz: TimeZone,
    {
        let changed = self.apply(today)?;
        if changed {
            self.refresh(api, tz).await;
        }
        Ok(changed)
    }

    pub fn set_categories(&mut self, options: &FilterOptions) {
        self.categories = options.category_names();
    }

    /// Fill the category dropdown. Failure leaves it empty and only logs.
    pub async fn load_categories<A: TryoutApi + ?Sized>(&mut self, api: &A) {
        let options = api
            .filter_options()
            .await
            .or_default_logged("filter options", FilterOptions::default());
        self.set_categories(&options);
    }

    pub fn display(&self) -> ListDisplay<'_> {
        match (&self.phase, &self.error) {
            (ListPhase::InitialLoad, _) => ListDisplay::Loading,
            (_, Some(message)) if self.tryouts.is_empty() => ListDisplay::Failed(message),
            _ if self.tryouts.is_empty() && self.has_active_filters() => ListDisplay::NoMatches,
            _ if self.tryouts.is_empty() => ListDisplay::Empty,
            _ => ListDisplay::Items(&self.tryouts),
        }
    }

    /// Message for an empty result, depending on whether filters are active
    pub fn empty_message(&self) -> &'static str {
        if self.has_active_filters() {
            NO_MATCHES_MESSAGE
        } else {
            EMPTY_MESSAGE
        }
    }
}

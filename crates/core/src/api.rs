//! REST contract and the client trait
//!
//! `Endpoint` names the twelve routes under `/api/v1`; `TryoutApi` is the
//! seam each transport implements (`gloo-net` in the browser, `reqwest` on
//! the command line). Transports stay thin: they send the request and hand
//! the raw status and body to [`check_status`] and [`decode`], so the failure
//! taxonomy lives in one place. No request is retried, cached or
//! authenticated.

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::error::ApiError;
use crate::models::{FilterOptions, Question, QuestionInput, Tryout, TryoutInput};
use crate::result::ApiResult;

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Query parameter pairs for the filter endpoint, in wire order
pub type FilterParams = Vec<(&'static str, String)>;

/// Which list request the tryout list issues
///
/// An empty filter set must hit the plain list route, never the filter route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryoutQuery {
    All,
    Filtered(FilterParams),
}

/// Every route the client calls, relative to `/api/v1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    ListTryouts,
    FilterTryouts(FilterParams),
    FilterOptions,
    GetTryout(String),
    CreateTryout,
    UpdateTryout(String),
    DeleteTryout(String),
    ListQuestions(String),
    GetQuestion { tryout_id: String, question_id: String },
    CreateQuestion(String),
    UpdateQuestion { tryout_id: String, question_id: String },
    DeleteQuestion { tryout_id: String, question_id: String },
}

impl Endpoint {
    pub const fn method(&self) -> Method {
        match self {
            Self::ListTryouts
            | Self::FilterTryouts(_)
            | Self::FilterOptions
            | Self::GetTryout(_)
            | Self::ListQuestions(_)
            | Self::GetQuestion { .. } => Method::Get,
            Self::CreateTryout | Self::CreateQuestion(_) => Method::Post,
            Self::UpdateTryout(_) | Self::UpdateQuestion { .. } => Method::Put,
            Self::DeleteTryout(_) | Self::DeleteQuestion { .. } => Method::Delete,
        }
    }

    /// Path below `/api/v1`, with the query string for the filter route
    pub fn path_and_query(&self) -> String {
        match self {
            Self::ListTryouts | Self::CreateTryout => "/tryouts".to_string(),
            Self::FilterTryouts(params) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
                    .finish();
                format!("/tryouts/filter?{query}")
            }
            Self::FilterOptions => "/tryouts/filter/options".to_string(),
            Self::GetTryout(id) | Self::UpdateTryout(id) | Self::DeleteTryout(id) => {
                format!("/tryouts/{}", segment(id))
            }
            Self::ListQuestions(tryout_id) | Self::CreateQuestion(tryout_id) => {
                format!("/tryouts/{}/questions", segment(tryout_id))
            }
            Self::GetQuestion {
                tryout_id,
                question_id,
            }
            | Self::UpdateQuestion {
                tryout_id,
                question_id,
            }
            | Self::DeleteQuestion {
                tryout_id,
                question_id,
            } => format!(
                "/tryouts/{}/questions/{}",
                segment(tryout_id),
                segment(question_id)
            ),
        }
    }
}

impl From<&TryoutQuery> for Endpoint {
    fn from(query: &TryoutQuery) -> Self {
        match query {
            TryoutQuery::All => Self::ListTryouts,
            TryoutQuery::Filtered(params) => Self::FilterTryouts(params.clone()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path_and_query())
    }
}

/// Server ids are opaque; keep them from breaking out of their path segment.
///
/// Form encoding writes a space as `+`, which is literal in a path. A `+` in
/// the id itself comes out as `%2B`, so every remaining `+` was a space.
fn segment(id: &str) -> String {
    form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Error payload shape: `{"error": "..."}`, every field optional
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Extract the server's `error` message from a response body, if any.
pub fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}

/// Classify a response by status; 2xx passes through.
///
/// # Errors
///
/// Returns the matching `ApiError` for any non-2xx status.
pub fn check_status(status: u16, body: &str) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::from_status(status, server_message(body)))
    }
}

/// Parse a success body against its schema.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body does not match `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Client for the tryout REST API
///
/// Futures are not required to be `Send` so the browser transport can
/// implement this directly.
#[async_trait(?Send)]
pub trait TryoutApi {
    /// `GET /tryouts` or `GET /tryouts/filter?...`
    async fn list_tryouts(&self, query: &TryoutQuery) -> ApiResult<Vec<Tryout>>;

    /// `GET /tryouts/filter/options`
    async fn filter_options(&self) -> ApiResult<FilterOptions>;

    async fn get_tryout(&self, id: &str) -> ApiResult<Tryout>;

    async fn create_tryout(&self, input: &TryoutInput) -> ApiResult<()>;

    /// Full replacement
    async fn update_tryout(&self, id: &str, input: &TryoutInput) -> ApiResult<()>;

    async fn delete_tryout(&self, id: &str) -> ApiResult<()>;

    async fn list_questions(&self, tryout_id: &str) -> ApiResult<Vec<Question>>;

    async fn get_question(&self, tryout_id: &str, question_id: &str) -> ApiResult<Question>;

    async fn create_question(&self, tryout_id: &str, input: &QuestionInput) -> ApiResult<()>;

    /// Full replacement
    async fn update_question(
        &self,
        tryout_id: &str,
        question_id: &str,
        input: &QuestionInput,
    ) -> ApiResult<()>;

    async fn delete_question(&self, tryout_id: &str, question_id: &str) -> ApiResult<()>;
}

//! Client core for the tryout quiz platform
//!
//! Everything here is transport-agnostic and free of UI types, so the
//! browser front end and the command line share one implementation of the
//! REST contract, filter serialization and screen state.
//!
//! ## Module Structure
//! - `models`: wire schemas for tryouts, questions and filter options
//! - `api`: endpoints, response classification and the `TryoutApi` trait
//! - `config`: API base URL
//! - `filters`: list filters and their date-range encoding
//! - `views`: list, detail and form state containers
//! - `display`: truncation and date formatting
//! - `error`: error types
//! - `result`: `ApiResult` and logged combinators

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod filters;
pub mod models;
pub mod result;
pub mod views;

pub use api::{Endpoint, Method, TryoutApi, TryoutQuery};
pub use config::ApiConfig;
pub use error::{ApiError, ConfigError, FilterError, FormError};
pub use filters::TryoutFilters;
pub use models::{CategoryOption, FilterOptions, Question, QuestionInput, Tryout, TryoutInput};
pub use result::{ApiResult, ResultExt};

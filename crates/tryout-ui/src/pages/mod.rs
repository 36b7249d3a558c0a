//! Page components for the tryout UI
//!
//! This module contains the top-level page components for each route.

pub mod not_found;
pub mod question_form;
pub mod tryout_detail;
pub mod tryout_form;
pub mod tryout_list;

pub use not_found::NotFound;
pub use question_form::QuestionFormPage;
pub use tryout_detail::TryoutDetailPage;
pub use tryout_form::TryoutFormPage;
pub use tryout_list::TryoutListPage;

use leptos_router::params::ParamsMap;

use crate::error::{Result, UiError};

/// Read a required route parameter.
///
/// # Errors
///
/// Returns `UiError::MissingRouteParam` if it is absent or blank.
pub fn required_param(params: &ParamsMap, name: &'static str) -> Result<String> {
    params
        .get(name)
        .filter(|value| !value.is_empty())
        .ok_or(UiError::MissingRouteParam(name))
}

//! Wire schemas for the tryout REST API
//!
//! The server owns every entity; the client only reflects it. Payloads are
//! parsed into these types at the API boundary so a shape mismatch surfaces
//! as a typed decode error instead of leaking into the views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A quiz made of true/false questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tryout {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Minutes
    pub duration: u32,
    /// Set by the server once anyone has submitted answers; editing is hidden afterwards
    #[serde(default)]
    pub has_submission: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tryout {
    /// Creates a tryout with minimal required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            duration: 30,
            has_submission: false,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Builder pattern: set description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder pattern: set category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder pattern: set duration in minutes
    #[must_use]
    pub const fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Builder pattern: mark as having submissions
    #[must_use]
    pub const fn with_submission(mut self, has_submission: bool) -> Self {
        self.has_submission = has_submission;
        self
    }

    /// Builder pattern: set both timestamps
    #[must_use]
    pub const fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// The body that would recreate this tryout
    pub fn to_input(&self) -> TryoutInput {
        TryoutInput {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            duration: self.duration,
        }
    }
}

/// POST/PUT body for a tryout. PUT replaces every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TryoutInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: u32,
}

/// A true/false prompt belonging to exactly one tryout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub tryout_id: String,
    pub text: String,
    /// The correct answer
    pub is_true: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Creates a question with minimal required fields
    pub fn new(
        id: impl Into<String>,
        tryout_id: impl Into<String>,
        text: impl Into<String>,
        is_true: bool,
    ) -> Self {
        Self {
            id: id.into(),
            tryout_id: tryout_id.into(),
            text: text.into(),
            is_true,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

/// POST/PUT body for a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    pub text: String,
    pub is_true: bool,
}

/// Response of `GET /tryouts/filter/options`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub categories: Vec<CategoryOption>,
}

/// One distinct category value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub category: String,
}

impl FilterOptions {
    /// Category names in server order
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.category.clone()).collect()
    }
}

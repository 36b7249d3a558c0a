//! Error types for tryout client operations.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.
//! Every failure is converted to inline text by the view that triggered it;
//! none of them is fatal to the application.

use thiserror::Error;

/// Message shown for a 400 response that carries no server detail.
pub const CHECK_INPUT_MESSAGE: &str = "Please check your input and try again.";

/// Failure of a single REST call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// 404 - the entity does not exist.
    #[error("not found{}", detail(.message.as_deref()))]
    NotFound { message: Option<String> },

    /// 400 - the server rejected the payload.
    #[error("validation failed{}", detail(.message.as_deref()))]
    Validation { message: Option<String> },

    /// Any other non-success status.
    #[error("unexpected status {status}{}", detail(.message.as_deref()))]
    Status { status: u16, message: Option<String> },

    /// A success response whose body did not match the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

fn detail(message: Option<&str>) -> String {
    message.map_or_else(String::new, |m| format!(": {m}"))
}

impl ApiError {
    /// Create an error for a non-success HTTP status.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            400 => Self::Validation { message },
            404 => Self::NotFound { message },
            _ => Self::Status { status, message },
        }
    }

    /// Server-supplied `error` text, if the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::NotFound { message }
            | Self::Validation { message }
            | Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Whether the error is a 404.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Human-readable text for the view.
    ///
    /// The server's message wins when present; a bare 400 asks the user to
    /// check their input; everything else falls back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match (self.server_message(), self) {
            (Some(message), _) => message.to_string(),
            (None, Self::Validation { .. }) => CHECK_INPUT_MESSAGE.to_string(),
            (None, _) => fallback.to_string(),
        }
    }
}

/// Client-side form validation failures, raised before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("duration must be a whole number of minutes, at least 1")]
    InvalidDuration,

    #[error("select whether the correct answer is True or False")]
    AnswerNotSelected,
}

/// Filter validation failures on the tryout list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("start date cannot be later than today")]
    StartDateInFuture,

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("date '{0}' does not exist in the local time zone")]
    NonexistentLocalTime(String),
}

/// API base URL configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unsupported scheme '{0}' in API base URL, expected http or https")]
    UnsupportedScheme(String),
}

impl ConfigError {
    /// Create an invalid base URL error.
    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classifies_codes() {
        assert!(matches!(ApiError::from_status(400, None), ApiError::Validation { .. }));
        assert!(ApiError::from_status(404, None).is_not_found());
        assert_eq!(
            ApiError::from_status(500, None),
            ApiError::Status {
                status: 500,
                message: None
            }
        );
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::from_status(409, Some("Tryout already has submissions".into()));
        assert_eq!(err.user_message("fallback"), "Tryout already has submissions");
    }

    #[test]
    fn test_user_message_bare_validation_asks_to_check_input() {
        let err = ApiError::from_status(400, None);
        assert_eq!(err.user_message("fallback"), CHECK_INPUT_MESSAGE);
    }

    #[test]
    fn test_user_message_falls_back() {
        assert_eq!(ApiError::Network("refused".into()).user_message("try later"), "try later");
        assert_eq!(ApiError::from_status(503, None).user_message("try later"), "try later");
        assert_eq!(ApiError::Decode("eof".into()).user_message("try later"), "try later");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ApiError::from_status(404, None).to_string(), "not found");
        assert_eq!(
            ApiError::from_status(502, Some("bad gateway".into())).to_string(),
            "unexpected status 502: bad gateway"
        );
        assert_eq!(FormError::MissingField("title").to_string(), "title is required");
    }
}

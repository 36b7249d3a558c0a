//! Result type definitions and extension traits for Railway-Oriented Programming.
//!
//! Provides combinators for API results so call sites that can tolerate a
//! failure (the category dropdown, for instance) degrade without unwrap/expect.

use crate::error::ApiError;

/// The standard Result type for REST calls.
///
/// # Examples
///
/// ```ignore
/// async fn title_of(api: &impl TryoutApi, id: &str) -> ApiResult<String> {
///     let tryout = api.get_tryout(id).await?;
///     Ok(tryout.title)
/// }
/// ```
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Extension trait providing logged combinators for API results.
pub trait ResultExt<T> {
    /// Convert to an Option, logging the error if present.
    fn into_option_logged(self, operation: &str) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, operation: &str, default: T) -> T;
}

impl<T> ResultExt<T> for ApiResult<T> {
    fn into_option_logged(self, operation: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(operation, error = %e, "request failed");
                None
            }
        }
    }

    fn or_default_logged(self, operation: &str, default: T) -> T {
        self.into_option_logged(operation).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_option_ok() {
        let result: ApiResult<i32> = Ok(42);
        assert_eq!(result.into_option_logged("op"), Some(42));
    }

    #[test]
    fn test_into_option_err() {
        let result: ApiResult<i32> = Err(ApiError::Network("down".into()));
        assert_eq!(result.into_option_logged("op"), None);
    }

    #[test]
    fn test_or_default_logged() {
        let ok: ApiResult<Vec<u8>> = Ok(vec![1]);
        assert_eq!(ok.or_default_logged("op", Vec::new()), vec![1]);

        let err: ApiResult<Vec<u8>> = Err(ApiError::from_status(500, None));
        assert_eq!(err.or_default_logged("op", Vec::new()), Vec::<u8>::new());
    }
}

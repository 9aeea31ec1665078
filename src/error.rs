//! Error types for the remote task client.
//!
//! One variant per operation so the banner message always names what
//! failed. The payload is the human-readable cause, either an HTTP status
//! line or a network-level failure.

use thiserror::Error;

/// Errors surfaced by the remote task client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Listing tasks failed; prior task state is left unchanged.
    #[error("failed to load tasks: {0}")]
    FetchFailed(String),

    /// Creating a task failed; the typed input is left as-is.
    #[error("failed to create task: {0}")]
    CreateFailed(String),

    /// Deleting a task failed.
    #[error("failed to delete task: {0}")]
    DeleteFailed(String),

    /// Toggling a task's completion failed.
    #[error("failed to toggle task: {0}")]
    ToggleFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operation() {
        let cases = [
            (ApiError::FetchFailed("HTTP 500".into()), "load"),
            (ApiError::CreateFailed("HTTP 500".into()), "create"),
            (ApiError::DeleteFailed("HTTP 500".into()), "delete"),
            (ApiError::ToggleFailed("HTTP 500".into()), "toggle"),
        ];
        for (error, verb) in cases {
            let message = error.to_string();
            assert!(message.contains(verb), "{message} should mention {verb}");
            assert!(message.contains("HTTP 500"));
        }
    }

    #[test]
    fn messages_are_never_empty() {
        assert!(!ApiError::FetchFailed(String::new()).to_string().is_empty());
    }
}

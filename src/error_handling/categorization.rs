//! Error categorization.
//!
//! Maps transport-level `reqwest` failures onto `ResolveError` so the redirect
//! probe can report them as values instead of propagating them.

use super::types::ResolveError;

/// Categorizes a `reqwest::Error` into a `ResolveError`.
///
/// Timeouts are checked before connect errors: a connect that exceeds
/// `connect_timeout` reports both, and the timeout is the more useful message.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ResolveError` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ResolveError {
    let message = error.to_string();
    if error.is_builder() {
        let url = error
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        ResolveError::InvalidUrl {
            url,
            reason: message,
        }
    } else if error.is_timeout() {
        ResolveError::Timeout(message)
    } else if error.is_connect() {
        ResolveError::Connect(message)
    } else {
        ResolveError::Transport(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_categorize_builder_error() {
        let client = reqwest::Client::new();
        let err = client
            .get("not a url")
            .send()
            .await
            .expect_err("Relative URL must fail to build");
        assert!(matches!(
            categorize_reqwest_error(&err),
            ResolveError::InvalidUrl { .. }
        ));
    }

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Port 1 on loopback is closed in any sane test environment
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(2))
            .build()
            .expect("Failed to build client");
        let err = client
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .expect_err("Closed port must refuse the connection");
        assert!(matches!(
            categorize_reqwest_error(&err),
            ResolveError::Connect(_)
        ));
    }
}

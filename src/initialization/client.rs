//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client used for redirect probing.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirects disabled, so the first 3xx response is observed directly
/// - Total timeout from `timeout_seconds`
/// - TCP connect timeout from `connect_timeout_seconds`
/// - User-Agent header from the configuration
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_redirect_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    build_redirect_client(
        Duration::from_secs(config.timeout_seconds),
        Duration::from_secs(config.connect_timeout_seconds),
        &config.user_agent,
    )
}

/// Builds a redirect-disabled client from explicit timeouts.
///
/// Useful when timeouts finer than whole seconds are needed.
pub fn build_redirect_client(
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: &str,
) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(user_agent)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_redirect_client_from_default_config() {
        let client = init_redirect_client(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_redirect_client_sub_second_timeouts() {
        let client = build_redirect_client(
            Duration::from_millis(250),
            Duration::from_millis(100),
            "url_expander-test",
        );
        assert!(client.is_ok());
    }
}

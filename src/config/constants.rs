//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts and the redirect status codes that count as a hop.

// Network operation timeouts
/// Total per-request timeout in seconds (connect, send and response headers)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
///
/// Some link shorteners answer bot-looking clients with an interstitial page
/// instead of a redirect, so the default mimics a desktop browser.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Redirect handling
/// Status codes treated as a redirect hop (Moved Permanently, Found, Temporary Redirect).
///
/// 303 and 308 are reported as "no redirect".
pub const REDIRECT_STATUS_CODES: &[u16] = &[301, 302, 307];

/// Message shown when a redirect target cannot be turned into a clean URL.
pub const INVALID_URL_MESSAGE: &str = "invalid URL!";

/// Message shown when an input produced no clean URL.
pub const NO_REDIRECT_MESSAGE: &str = "no redirect found";

//! Single-hop HTTP redirect resolution.
//!
//! One GET with redirect-following disabled; the `Location` of a 301/302/307
//! response is the answer. Chains are never walked.

use std::future::Future;

use reqwest::header::LOCATION;
use reqwest::Url;

use crate::config::{Config, REDIRECT_STATUS_CODES};
use crate::error_handling::{categorize_reqwest_error, InitializationError, ResolveError};
use crate::initialization::init_redirect_client;

/// Result of probing one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The server answered 301, 302 or 307; holds the `Location` as sent, or
    /// joined to the request URL when it was relative.
    Redirected(String),
    /// The server answered with any other status.
    NoRedirect { status: u16 },
    /// The probe did not produce a usable answer.
    Failed(ResolveError),
}

/// The HTTP boundary: probe a URL for exactly one redirect hop.
///
/// Implementations must not panic or return early with errors; every failure
/// is reported as `ResolutionOutcome::Failed`.
pub trait Resolve {
    fn resolve(&self, url: &str) -> impl Future<Output = ResolutionOutcome> + Send;
}

/// Redirect probe backed by a redirect-disabled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct RedirectResolver {
    client: reqwest::Client,
    prefer_https: bool,
}

impl RedirectResolver {
    /// Wraps an existing client.
    ///
    /// The client must have redirects disabled
    /// (`reqwest::redirect::Policy::none()`), otherwise every probe reports the
    /// final status of the chain instead of the first hop.
    pub fn new(client: reqwest::Client, prefer_https: bool) -> Self {
        Self {
            client,
            prefer_https,
        }
    }

    /// Builds the client from the configured timeouts and User-Agent.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_redirect_client(config)?;
        Ok(Self::new(client, config.prefer_https))
    }

    /// Applies the `http://` to `https://` upgrade when enabled.
    fn request_url(&self, url: &str) -> String {
        match url.strip_prefix("http://") {
            Some(rest) if self.prefer_https => format!("https://{rest}"),
            _ => url.to_string(),
        }
    }

    /// Probes `url` and reports the first redirect hop, if any.
    ///
    /// The response is dropped without reading the body, which releases the
    /// connection on every return path.
    pub async fn resolve(&self, url: &str) -> ResolutionOutcome {
        let target = self.request_url(url);
        log::debug!("Probing {} for a redirect", target);

        let resp = match self.client.get(&target).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!(
                    "HTTP request error for {}: {} (is_timeout: {}, is_connect: {})",
                    target,
                    e,
                    e.is_timeout(),
                    e.is_connect()
                );
                return ResolutionOutcome::Failed(categorize_reqwest_error(&e));
            }
        };

        let status = resp.status().as_u16();
        log::debug!("Response code {} for {}", status, target);

        if !REDIRECT_STATUS_CODES.contains(&status) {
            return ResolutionOutcome::NoRedirect { status };
        }

        let Some(loc) = resp.headers().get(LOCATION) else {
            log::warn!(
                "Redirect status {} for {} but no Location header",
                status,
                target
            );
            return ResolutionOutcome::Failed(ResolveError::MissingLocation { status });
        };

        let loc = match loc.to_str() {
            Ok(loc) => loc.trim(),
            Err(e) => {
                return ResolutionOutcome::Failed(ResolveError::InvalidLocation {
                    status,
                    reason: e.to_string(),
                })
            }
        };

        // Absolute locations are passed on as sent; relative ones are resolved
        // against the URL that was requested
        let location = match Url::parse(loc) {
            Ok(_) => Ok(loc.to_string()),
            Err(_) => resp.url().join(loc).map(String::from),
        };
        match location {
            Ok(location) => {
                log::debug!("Location for {}: {}", target, location);
                ResolutionOutcome::Redirected(location)
            }
            Err(e) => ResolutionOutcome::Failed(ResolveError::InvalidLocation {
                status,
                reason: e.to_string(),
            }),
        }
    }
}

impl Resolve for RedirectResolver {
    fn resolve(&self, url: &str) -> impl Future<Output = ResolutionOutcome> + Send {
        RedirectResolver::resolve(self, url)
    }
}

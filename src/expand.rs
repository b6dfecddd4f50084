//! Expanding a shared link into its clean destination.
//!
//! Extract the URL from the text, probe it for one redirect hop, clean the
//! target and splice it back into the text.

use crate::config::Config;
use crate::error_handling::{ExpandError, InitializationError};
use crate::fetch::{RedirectResolver, Resolve, ResolutionOutcome};
use crate::parse::{clean_url, extract_url, upgrade_scheme};

/// A successful expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The URL found in the input (after the optional `https://` upgrade)
    pub original_url: String,
    /// The cleaned redirect target
    pub clean_url: String,
    /// The input with `original_url` replaced by the padded clean URL
    pub text: String,
}

/// Stateless expander over a redirect probe.
///
/// Calls share nothing but the probe, so one `Expander` can serve concurrent
/// calls.
#[derive(Debug, Clone)]
pub struct Expander<R = RedirectResolver> {
    resolver: R,
    prefer_https: bool,
}

impl Expander<RedirectResolver> {
    /// Builds an expander with a real HTTP probe.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(
            RedirectResolver::from_config(config)?,
            config.prefer_https,
        ))
    }
}

impl<R: Resolve> Expander<R> {
    pub fn new(resolver: R, prefer_https: bool) -> Self {
        Self {
            resolver,
            prefer_https,
        }
    }

    /// Expands `text`, reporting why nothing was produced on failure.
    ///
    /// On success the expansion's text is the input (with `http://` upgraded when
    /// enabled) where every occurrence of the extracted URL is replaced by
    /// `" " + clean_url + " "`.
    ///
    /// # Errors
    ///
    /// - `ExpandError::NoUrlFound` if the text holds no URL
    /// - `ExpandError::NoRedirect` if the URL answered without redirecting
    /// - `ExpandError::Resolve` if the probe failed
    /// - `ExpandError::Normalize` if the redirect target is not a cleanable URL
    pub async fn try_expand(&self, text: &str) -> Result<Expansion, ExpandError> {
        let text = if self.prefer_https {
            upgrade_scheme(text)
        } else {
            text.to_string()
        };
        let original = extract_url(&text).ok_or(ExpandError::NoUrlFound)?;

        let location = match self.resolver.resolve(original).await {
            ResolutionOutcome::Redirected(location) => location,
            ResolutionOutcome::NoRedirect { status } => {
                return Err(ExpandError::NoRedirect { status })
            }
            ResolutionOutcome::Failed(e) => return Err(e.into()),
        };

        let clean = clean_url(&location).map_err(|source| ExpandError::Normalize {
            location: location.clone(),
            source,
        })?;
        log::info!("Expanded {} to {}", original, clean);

        Ok(Expansion {
            original_url: original.to_string(),
            text: text.replace(original, &format!(" {clean} ")),
            clean_url: clean,
        })
    }

    /// Expands `text`, or returns `None` when no clean URL is available.
    ///
    /// Failures are logged and absorbed; this never panics on any input.
    pub async fn expand(&self, text: &str) -> Option<String> {
        match self.try_expand(text).await {
            Ok(expansion) => Some(expansion.text),
            Err(ExpandError::NoUrlFound) => {
                log::debug!("No URL found in input");
                None
            }
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    /// Callback form of [`Expander::expand`].
    ///
    /// `on_result` runs at most once, and only when a clean URL was produced;
    /// silence means no redirect or no URL.
    pub async fn expand_then<F>(&self, text: &str, on_result: F)
    where
        F: FnOnce(String),
    {
        if let Some(result) = self.expand(text).await {
            on_result(result);
        }
    }
}

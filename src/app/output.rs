//! Result records and their rendering.

use serde::Serialize;

use crate::config::{OutputFormat, NO_REDIRECT_MESSAGE};
use crate::error_handling::{ErrorType, ExpandError};
use crate::expand::Expansion;

/// Outcome of expanding one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandRecord {
    /// The input text as given
    pub input: String,
    /// The rewritten text, when a clean URL was found
    pub output: Option<String>,
    /// The clean URL a browser should open, when a clean URL was found
    pub clean_url: Option<String>,
    /// Why nothing was produced
    pub error: Option<String>,
    /// Category of the failure, when there was one
    #[serde(skip)]
    pub error_type: Option<ErrorType>,
}

impl ExpandRecord {
    pub fn from_result(input: &str, result: &Result<Expansion, ExpandError>) -> Self {
        match result {
            Ok(expansion) => Self {
                input: input.to_string(),
                output: Some(expansion.text.clone()),
                clean_url: Some(expansion.clean_url.clone()),
                error: None,
                error_type: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                output: None,
                clean_url: None,
                error: Some(e.to_string()),
                error_type: Some(e.error_type()),
            },
        }
    }

    /// Renders the record as one output line.
    ///
    /// Text output prints the result (or the clean URL with `url_only`); a
    /// failed record prints nothing in text mode. JSON output always prints.
    pub fn render(&self, format: &OutputFormat, url_only: bool) -> Option<String> {
        match format {
            OutputFormat::Json => Some(
                serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string()),
            ),
            OutputFormat::Text if url_only => self.clean_url.clone(),
            OutputFormat::Text => self.output.clone(),
        }
    }

    /// Message for the user when the record produced nothing.
    ///
    /// Inputs without any URL are reported as such, not as a missing redirect.
    pub fn failure_message(&self) -> Option<String> {
        let error = self.error.as_ref()?;
        match self.error_type {
            Some(ErrorType::ExtractionMiss) => Some(error.clone()),
            _ => Some(format!("{NO_REDIRECT_MESSAGE}: {error}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success() -> ExpandRecord {
        ExpandRecord::from_result(
            "check https://s.example/1 out",
            &Ok(Expansion {
                original_url: "https://s.example/1".to_string(),
                clean_url: "https://clean.example/x".to_string(),
                text: "check  https://clean.example/x  out".to_string(),
            }),
        )
    }

    fn failure() -> ExpandRecord {
        ExpandRecord::from_result("hello", &Err(ExpandError::NoUrlFound))
    }

    #[test]
    fn test_record_from_success() {
        let record = success();
        assert_eq!(
            record.clean_url,
            Some("https://clean.example/x".to_string())
        );
        assert_eq!(record.error, None);
        assert_eq!(record.failure_message(), None);
    }

    #[test]
    fn test_record_from_failure() {
        let record = failure();
        assert_eq!(record.output, None);
        assert_eq!(record.clean_url, None);
        assert_eq!(record.error, Some("No URL found in input".to_string()));
        assert_eq!(record.error_type, Some(ErrorType::ExtractionMiss));
        assert_eq!(
            record.failure_message(),
            Some("No URL found in input".to_string())
        );
    }

    #[test]
    fn test_failure_message_prefixes_probe_failures() {
        let record = ExpandRecord::from_result(
            "https://s.example/1",
            &Err(ExpandError::NoRedirect { status: 200 }),
        );
        assert_eq!(record.error_type, Some(ErrorType::NoRedirect));
        assert_eq!(
            record.failure_message(),
            Some("no redirect found: No redirect found (status 200)".to_string())
        );
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            success().render(&OutputFormat::Text, false),
            Some("check  https://clean.example/x  out".to_string())
        );
        assert_eq!(
            success().render(&OutputFormat::Text, true),
            Some("https://clean.example/x".to_string())
        );
        assert_eq!(failure().render(&OutputFormat::Text, false), None);
    }

    #[test]
    fn test_render_json() {
        let line = failure()
            .render(&OutputFormat::Json, false)
            .expect("json always renders");
        let value: serde_json::Value = serde_json::from_str(&line).expect("valid json");
        assert_eq!(value["input"], "hello");
        assert!(value["output"].is_null());
        assert_eq!(value["error"], "No URL found in input");
        assert!(value.get("error_type").is_none());
    }
}

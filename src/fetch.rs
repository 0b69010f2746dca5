//! Lenient document fetch.
//!
//! Fetching source text is the one boundary where this crate is
//! deliberately forgiving: a missing document is an ordinary outcome for
//! callers assembling a corpus from many URLs, not an exceptional one.
//! So [`fetch`] never returns `Err` — it returns a three-way
//! [`FetchOutcome`] that callers must match on, which keeps the
//! "unavailable" case from being silently string-compared away.
//!
//! Everything downstream of fetch (splitting, embedding, clustering)
//! stays fail-fast; the leniency is confined to this module.

/// Result of fetching a document over HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The document body.
    Content(String),
    /// The server answered with an error status (404 and friends).
    Unavailable,
    /// The request itself failed (DNS, connect, read, decode).
    Failed(String),
}

impl FetchOutcome {
    /// The fetched content, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Content(text) => Some(text),
            _ => None,
        }
    }

    /// Whether the server reported the document unavailable.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Fetch text from a URL, leniently.
///
/// Blocking call with no internal timeout or cancellation; callers
/// needing a deadline wrap this externally.
///
/// ## Example
///
/// ```rust,no_run
/// use pith::{fetch, FetchOutcome};
///
/// match fetch("https://example.com/report.txt") {
///     FetchOutcome::Content(text) => println!("{} bytes", text.len()),
///     FetchOutcome::Unavailable => eprintln!("document gone"),
///     FetchOutcome::Failed(why) => eprintln!("request failed: {why}"),
/// }
/// ```
#[must_use]
pub fn fetch(url: &str) -> FetchOutcome {
    let response = match reqwest::blocking::get(url) {
        Ok(response) => response,
        Err(e) => return FetchOutcome::Failed(e.to_string()),
    };

    if !response.status().is_success() {
        return FetchOutcome::Unavailable;
    }

    match response.text() {
        Ok(text) => FetchOutcome::Content(text),
        Err(e) => FetchOutcome::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_accessor() {
        let outcome = FetchOutcome::Content("body".to_string());
        assert_eq!(outcome.content(), Some("body"));
        assert!(!outcome.is_unavailable());

        assert_eq!(FetchOutcome::Unavailable.content(), None);
        assert!(FetchOutcome::Unavailable.is_unavailable());
    }

    #[test]
    fn test_bad_url_fails_without_panicking() {
        let outcome = fetch("not a url");
        assert!(matches!(outcome, FetchOutcome::Failed(_)));
    }

    #[test]
    #[ignore] // Requires network access
    fn test_http_error_maps_to_unavailable() {
        let outcome = fetch("https://example.com/definitely-not-here-404");
        assert!(outcome.is_unavailable());
    }
}

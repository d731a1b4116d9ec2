//! Watch-link validation and identifier extraction.
//!
//! A submitted URL is accepted only if it is exactly a
//! `https://www.youtube.com/watch?v=<id>` link. The checks run in a fixed
//! order and the first failure wins, so error messages always name the
//! earliest violated rule.

use thiserror::Error;
use url::{form_urlencoded, Url};

/// The only host the catalog accepts links from.
pub const WATCH_HOST: &str = "www.youtube.com";

/// The only path a watch link may have.
pub const WATCH_PATH: &str = "/watch";

/// A rejected URL, tagged with the check that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchLinkError {
    #[error("not a parseable URL: {url}")]
    Unparseable { url: String },

    #[error("scheme must be https: {url}")]
    Scheme { url: String },

    #[error("not a YouTube URL: {url}")]
    Host { url: String },

    #[error("not a watch link: {url}")]
    Path { url: String },

    #[error("watch link has no query string: {url}")]
    EmptyQuery { url: String },

    #[error("malformed query string: {url}")]
    MalformedQuery { url: String },

    #[error("missing v parameter: {url}")]
    MissingVideoParam { url: String },

    #[error("empty video identifier: {url}")]
    EmptyVideoId { url: String },
}

/// Validate `raw_url` as a watch link and extract its video identifier.
///
/// Pure function: same input, same result, no side effects. Callers run
/// this on every creation attempt before touching storage.
pub fn validate_and_extract(raw_url: &str) -> Result<String, WatchLinkError> {
    let err_url = || raw_url.to_string();

    // Well-formedness only; the component checks below run against the
    // raw string because Url::parse lowercases the scheme and host,
    // which would mask a miscased link.
    Url::parse(raw_url).map_err(|_| WatchLinkError::Unparseable { url: err_url() })?;

    let (scheme, rest) = raw_url
        .split_once(':')
        .ok_or_else(|| WatchLinkError::Unparseable { url: err_url() })?;
    if scheme != "https" {
        return Err(WatchLinkError::Scheme { url: err_url() });
    }

    // A link without an authority section ("https:www...") has no host.
    let rest = rest
        .strip_prefix("//")
        .ok_or_else(|| WatchLinkError::Host { url: err_url() })?;
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    if &rest[..authority_end] != WATCH_HOST {
        return Err(WatchLinkError::Host { url: err_url() });
    }

    let after_host = &rest[authority_end..];
    let path_end = after_host.find(['?', '#']).unwrap_or(after_host.len());
    if &after_host[..path_end] != WATCH_PATH {
        return Err(WatchLinkError::Path { url: err_url() });
    }

    let query = match after_host[path_end..].strip_prefix('?') {
        Some(q) => q.split('#').next().unwrap_or(""),
        None => "",
    };
    if query.is_empty() {
        return Err(WatchLinkError::EmptyQuery { url: err_url() });
    }

    let pairs =
        parse_query_strict(query).ok_or_else(|| WatchLinkError::MalformedQuery { url: err_url() })?;

    // First v value wins, even when v appears more than once.
    let video_id = pairs
        .into_iter()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value)
        .ok_or_else(|| WatchLinkError::MissingVideoParam { url: err_url() })?;

    if video_id.is_empty() {
        return Err(WatchLinkError::EmptyVideoId { url: err_url() });
    }

    Ok(video_id)
}

/// Strict query parsing: every `&`-separated field must be a `key=value`
/// token. A bare token or an empty field makes the whole query malformed.
fn parse_query_strict(query: &str) -> Option<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for field in query.split('&') {
        if field.is_empty() || !field.contains('=') {
            return None;
        }
        // A single field decodes to exactly one key/value pair.
        if let Some((key, value)) = form_urlencoded::parse(field.as_bytes()).next() {
            pairs.push((key.into_owned(), value.into_owned()));
        }
    }
    Some(pairs)
}

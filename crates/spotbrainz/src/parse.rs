//! Spotify web URL and URI parsing.
//!
//! Two forms are accepted:
//!
//! - `http(s)://{host}/{type}/{id}`: the host is not checked, and the first
//!   two non-empty path segments are used.
//! - `spotify:{type}:{id}`: the first two non-empty `:`-separated tokens
//!   after the scheme are used.
//!
//! Anything after the second segment (more path, query, fragment) is ignored.

use crate::error::{Error, Result};
use crate::reference::SpotifyReference;

/// Parse a Spotify web URL or URI into a [`SpotifyReference`].
///
/// The input is sliced, never normalized: the host and port are skipped
/// without being checked, percent-escapes and `..` stay as written, and case
/// is kept. The entity type is not checked against the mapping table.
///
/// # Errors
///
/// Returns [`Error::InvalidSpotifyUrl`] if the scheme is missing or not one
/// of `http`, `https`, `spotify`, or if fewer than two segments are present.
pub fn parse(url: &str) -> Result<SpotifyReference> {
    let Some((scheme, rest)) = split_scheme(url) else {
        return Err(Error::invalid_url(url));
    };
    let rest = strip_query_and_fragment(rest);

    let (path, separator) = match scheme.as_str() {
        "http" | "https" => (strip_authority(rest), '/'),
        "spotify" => (rest, ':'),
        _ => return Err(Error::invalid_url(url)),
    };

    let mut segments = path.split(separator).filter(|s| !s.is_empty());
    let (Some(entity_type), Some(id)) = (segments.next(), segments.next()) else {
        return Err(Error::invalid_url(url));
    };

    let reference = SpotifyReference::new(entity_type, id);
    log::debug!("Parsed {} as {}", url, reference);
    Ok(reference)
}

/// Split off a lowercased scheme: an ASCII letter followed by letters,
/// digits, `+`, `-` or `.`, terminated by `:`.
fn split_scheme(url: &str) -> Option<(String, &str)> {
    let (scheme, rest) = url.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then(|| (scheme.to_ascii_lowercase(), rest))
}

fn strip_query_and_fragment(rest: &str) -> &str {
    rest.find(['?', '#']).map_or(rest, |end| &rest[..end])
}

/// Drop a leading `//authority`, keeping the path that follows it.
fn strip_authority(rest: &str) -> &str {
    rest.strip_prefix("//")
        .map_or(rest, |after| after.find('/').map_or("", |start| &after[start..]))
}

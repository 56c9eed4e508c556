//! Spotify identifier checks.
//!
//! Spotify IDs are base62 tokens. Nothing in the parser or the default
//! builder calls these; [`UrlBuilder::with_id_validation`] opts in.
//!
//! [`UrlBuilder::with_id_validation`]: crate::UrlBuilder::with_id_validation

use crate::error::{Error, Result};

/// Length of a canonical Spotify ID, checked by [`is_canonical_spotify_id`].
pub const SPOTIFY_ID_LEN: usize = 22;

/// Returns `true` if `id` is non-empty and entirely ASCII alphanumeric.
pub fn is_valid_spotify_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Stricter than [`is_valid_spotify_id`]: the ID must also be exactly
/// [`SPOTIFY_ID_LEN`] characters long.
pub fn is_canonical_spotify_id(id: &str) -> bool {
    id.len() == SPOTIFY_ID_LEN && is_valid_spotify_id(id)
}

pub fn validate_spotify_id(id: &str) -> Result<()> {
    if is_valid_spotify_id(id) {
        Ok(())
    } else {
        Err(Error::InvalidSpotifyId { id: id.to_string() })
    }
}

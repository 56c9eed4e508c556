//! Canonical Spotify web URL construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;
use crate::entity::SpotifyEntityType;
use crate::error::Result;
use crate::id::validate_spotify_id;
use crate::reference::SpotifyReference;

/// Host used in every built URL.
pub const SPOTIFY_WEB_HOST: &str = "open.spotify.com";

/// Scheme of built URLs.
///
/// `Http` is the historical canonical form and the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlScheme {
    #[default]
    Http,
    Https,
}

impl UrlScheme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for UrlScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds `{scheme}://open.spotify.com/{type}/{id}` URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlBuilder {
    scheme: UrlScheme,
    validate_ids: bool,
}

impl UrlBuilder {
    /// A builder producing `http://` URLs without ID validation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_scheme(config.url_scheme)
            .with_id_validation(config.validate_ids)
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: UrlScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Reject IDs that are not base62 before building.
    #[must_use]
    pub fn with_id_validation(mut self, enabled: bool) -> Self {
        self.validate_ids = enabled;
        self
    }

    #[must_use]
    pub const fn scheme(&self) -> UrlScheme {
        self.scheme
    }

    /// Build the URL for `id` as an entity of type `entity_type`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidSpotifyId`](crate::Error::InvalidSpotifyId)
    /// only when ID validation is enabled.
    pub fn build(&self, id: &str, entity_type: SpotifyEntityType) -> Result<String> {
        if self.validate_ids {
            validate_spotify_id(id)?;
        }
        let url = format!(
            "{}://{}/{}/{}",
            self.scheme, SPOTIFY_WEB_HOST, entity_type, id
        );
        log::debug!("Built {}", url);
        Ok(url)
    }

    /// Like [`build`](Self::build), with the entity type given by name.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnrecognizedEntityType`](crate::Error::UnrecognizedEntityType)
    /// if `entity_type` is not in the mapping table.
    pub fn build_with_type(&self, id: &str, entity_type: &str) -> Result<String> {
        self.build(id, entity_type.parse()?)
    }

    /// Build the canonical URL for a parsed reference.
    pub fn rebuild(&self, reference: &SpotifyReference) -> Result<String> {
        self.build_with_type(&reference.id, &reference.entity_type)
    }
}

/// Build the `http://` album URL for `id`.
pub fn build(id: &str) -> Result<String> {
    UrlBuilder::new().build(id, SpotifyEntityType::default())
}

/// Build the `http://` URL for `id` with the named entity type.
pub fn build_with_type(id: &str, entity_type: &str) -> Result<String> {
    UrlBuilder::new().build_with_type(id, entity_type)
}

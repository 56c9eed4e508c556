//! Spotify and MusicBrainz entity types and the mapping between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An entity type recognised in Spotify links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotifyEntityType {
    #[default]
    Album,
    Artist,
    Track,
}

/// The MusicBrainz entity a Spotify entity corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MusicBrainzEntityType {
    Release,
    Artist,
    Recording,
}

/// Every recognised Spotify entity type with its MusicBrainz counterpart.
pub const SPOTIFY_TO_MUSICBRAINZ_TYPE: &[(SpotifyEntityType, MusicBrainzEntityType)] = &[
    (SpotifyEntityType::Album, MusicBrainzEntityType::Release),
    (SpotifyEntityType::Artist, MusicBrainzEntityType::Artist),
    (SpotifyEntityType::Track, MusicBrainzEntityType::Recording),
];

impl SpotifyEntityType {
    /// The name used in Spotify URL paths and URIs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Artist => "artist",
            Self::Track => "track",
        }
    }

    #[must_use]
    pub const fn musicbrainz_type(self) -> MusicBrainzEntityType {
        match self {
            Self::Album => MusicBrainzEntityType::Release,
            Self::Artist => MusicBrainzEntityType::Artist,
            Self::Track => MusicBrainzEntityType::Recording,
        }
    }
}

impl MusicBrainzEntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Artist => "artist",
            Self::Recording => "recording",
        }
    }
}

impl FromStr for SpotifyEntityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SPOTIFY_TO_MUSICBRAINZ_TYPE
            .iter()
            .map(|(spotify, _)| *spotify)
            .find(|spotify| spotify.as_str() == s)
            .ok_or_else(|| Error::unrecognized_type(s))
    }
}

impl fmt::Display for SpotifyEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MusicBrainzEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the MusicBrainz entity type for a Spotify type name.
///
/// Returns `None` for names outside the mapping table; matching is exact and
/// case-sensitive.
pub fn musicbrainz_type_for(spotify_type: &str) -> Option<MusicBrainzEntityType> {
    SPOTIFY_TO_MUSICBRAINZ_TYPE
        .iter()
        .find(|(spotify, _)| spotify.as_str() == spotify_type)
        .map(|(_, musicbrainz)| *musicbrainz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_table_contents() {
        let pairs: Vec<(&str, &str)> = SPOTIFY_TO_MUSICBRAINZ_TYPE
            .iter()
            .map(|(s, m)| (s.as_str(), m.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("album", "release"),
                ("artist", "artist"),
                ("track", "recording"),
            ]
        );
    }

    #[test]
    fn test_table_agrees_with_match() {
        for (spotify, musicbrainz) in SPOTIFY_TO_MUSICBRAINZ_TYPE {
            assert_eq!(spotify.musicbrainz_type(), *musicbrainz);
        }
    }

    #[test]
    fn test_default_is_album() {
        assert_eq!(SpotifyEntityType::default(), SpotifyEntityType::Album);
    }

    #[test]
    fn test_from_str_recognised() {
        assert_eq!(
            "track".parse::<SpotifyEntityType>().unwrap(),
            SpotifyEntityType::Track
        );
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        let err = "Album".parse::<SpotifyEntityType>().unwrap_err();
        assert!(matches!(
            err,
            Error::UnrecognizedEntityType { ref entity_type } if entity_type == "Album"
        ));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("playlist".parse::<SpotifyEntityType>().is_err());
        assert!("tinny word".parse::<SpotifyEntityType>().is_err());
    }

    #[test]
    fn test_musicbrainz_type_for() {
        assert_eq!(
            musicbrainz_type_for("album"),
            Some(MusicBrainzEntityType::Release)
        );
        assert_eq!(
            musicbrainz_type_for("track"),
            Some(MusicBrainzEntityType::Recording)
        );
        assert_eq!(musicbrainz_type_for("episode"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(SpotifyEntityType::Artist.to_string(), "artist");
        assert_eq!(MusicBrainzEntityType::Recording.to_string(), "recording");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&SpotifyEntityType::Track).unwrap();
        assert_eq!(json, "\"track\"");
        let mb: MusicBrainzEntityType = serde_json::from_str("\"release\"").unwrap();
        assert_eq!(mb, MusicBrainzEntityType::Release);
    }
}

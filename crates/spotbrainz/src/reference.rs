use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entity::{MusicBrainzEntityType, SpotifyEntityType};
use crate::error::Result;

/// A Spotify entity as found in a link: its type and identifier.
///
/// Both fields are taken verbatim from the input, so `entity_type` need not
/// be one of the recognised [`SpotifyEntityType`]s. Use
/// [`recognized_type`](Self::recognized_type) or
/// [`musicbrainz_type`](Self::musicbrainz_type) to check it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotifyReference {
    pub entity_type: String,
    pub id: String,
}

impl SpotifyReference {
    #[must_use]
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    pub fn recognized_type(&self) -> Result<SpotifyEntityType> {
        self.entity_type.parse()
    }

    pub fn musicbrainz_type(&self) -> Result<MusicBrainzEntityType> {
        self.recognized_type().map(SpotifyEntityType::musicbrainz_type)
    }
}

impl From<(SpotifyEntityType, &str)> for SpotifyReference {
    fn from((entity_type, id): (SpotifyEntityType, &str)) -> Self {
        Self::new(entity_type.as_str(), id)
    }
}

/// Renders the `spotify:{type}:{id}` URI form.
impl fmt::Display for SpotifyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spotify:{}:{}", self.entity_type, self.id)
    }
}

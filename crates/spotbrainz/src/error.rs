use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input is neither an `http(s)` web URL nor a `spotify:` URI, or it
    /// does not carry both an entity type and an identifier.
    #[error("{url} is not a recognised Spotify URL")]
    InvalidSpotifyUrl { url: String },

    #[error("\"{entity_type}\" is not a recognised Spotify entity type")]
    UnrecognizedEntityType { entity_type: String },

    /// Only raised when ID validation is switched on.
    #[error("\"{id}\" contains characters invalid in Spotify IDs")]
    InvalidSpotifyId { id: String },
}

impl Error {
    pub(crate) fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidSpotifyUrl { url: url.into() }
    }

    pub(crate) fn unrecognized_type(entity_type: impl Into<String>) -> Self {
        Self::UnrecognizedEntityType {
            entity_type: entity_type.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message_carries_input() {
        let err = Error::invalid_url("ftp://open.spotify.com/album/2QE5TZ3P547etzfMWgE8lL");
        assert_eq!(
            err.to_string(),
            "ftp://open.spotify.com/album/2QE5TZ3P547etzfMWgE8lL is not a recognised Spotify URL"
        );
    }

    #[test]
    fn test_unrecognized_type_message_quotes_input() {
        let err = Error::unrecognized_type("tinny word");
        assert_eq!(
            err.to_string(),
            "\"tinny word\" is not a recognised Spotify entity type"
        );
    }

    #[test]
    fn test_invalid_id_message() {
        let err = Error::InvalidSpotifyId {
            id: "Æøå".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "\"Æøå\" contains characters invalid in Spotify IDs"
        );
    }
}

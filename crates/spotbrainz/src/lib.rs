//! Spotify link handling for MusicBrainz seeding tools.
//!
//! This crate turns Spotify web URLs and `spotify:` URIs into a
//! [`SpotifyReference`], builds canonical Spotify web URLs back from an
//! identifier and entity type, and maps Spotify entity types onto the
//! MusicBrainz entity vocabulary.
//!
//! ```
//! use spotbrainz::{MusicBrainzEntityType, build, parse};
//!
//! let reference = parse("spotify:album:2QE5TZ3P547etzfMWgE8lL").unwrap();
//! assert_eq!(reference.entity_type, "album");
//! assert_eq!(reference.musicbrainz_type().unwrap(), MusicBrainzEntityType::Release);
//!
//! let url = build(&reference.id).unwrap();
//! assert_eq!(url, "http://open.spotify.com/album/2QE5TZ3P547etzfMWgE8lL");
//! ```

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod build;
pub mod config;
pub mod entity;
pub mod error;
pub mod id;
pub mod parse;
pub mod reference;

pub use build::{build, build_with_type, UrlBuilder, UrlScheme, SPOTIFY_WEB_HOST};
pub use config::{Config, MUSICBRAINZ_SERVER};
pub use entity::{
    musicbrainz_type_for, MusicBrainzEntityType, SpotifyEntityType, SPOTIFY_TO_MUSICBRAINZ_TYPE,
};
pub use error::{Error, Result};
pub use id::{is_canonical_spotify_id, is_valid_spotify_id, validate_spotify_id, SPOTIFY_ID_LEN};
pub use parse::parse;
pub use reference::SpotifyReference;

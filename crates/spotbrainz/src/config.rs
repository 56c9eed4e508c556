use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::build::UrlScheme;
use crate::entity::MusicBrainzEntityType;

/// Default MusicBrainz server that seeded edit forms point at.
pub const MUSICBRAINZ_SERVER: &str = "https://musicbrainz.org/";

/// Configuration for spotbrainz.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. Environment variables (SPOTBRAINZ_* prefix, highest priority)
/// 2. Config file (~/.config/spotbrainz/config.toml)
/// 3. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheme of built Spotify URLs.
    ///
    /// Can be set via:
    /// - ENV: SPOTBRAINZ_URL_SCHEME
    /// - Config: url_scheme = "https"
    /// - Default: "http"
    pub url_scheme: UrlScheme,

    /// Reject non-base62 Spotify IDs when building URLs.
    ///
    /// Can be set via:
    /// - ENV: SPOTBRAINZ_VALIDATE_IDS
    /// - Config: validate_ids = true
    /// - Default: false
    pub validate_ids: bool,

    /// MusicBrainz server used by seeding tools and by
    /// [`Config::musicbrainz_entity_url`].
    ///
    /// Can be set via:
    /// - ENV: SPOTBRAINZ_MUSICBRAINZ_SERVER
    /// - Config: musicbrainz_server = "https://beta.musicbrainz.org/"
    pub musicbrainz_server: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url_scheme: UrlScheme::default(),
            validate_ids: false,
            musicbrainz_server: MUSICBRAINZ_SERVER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/spotbrainz/config.toml
    /// Reads environment variables with SPOTBRAINZ_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("spotbrainz");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        log::debug!(
            "Loaded configuration (url_scheme={}, validate_ids={})",
            config.url_scheme,
            config.validate_ids
        );
        Ok(config)
    }

    /// URL of a MusicBrainz entity on the configured server, e.g.
    /// `https://musicbrainz.org/release/{mbid}`.
    pub fn musicbrainz_entity_url(&self, entity_type: MusicBrainzEntityType, mbid: &str) -> String {
        format!(
            "{}/{}/{}",
            self.musicbrainz_server.trim_end_matches('/'),
            entity_type,
            mbid
        )
    }

    /// Load configuration from a single TOML file, ignoring the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/spotbrainz/config.toml
/// - macOS: ~/Library/Application Support/spotbrainz/config.toml
/// - Windows: %APPDATA%\spotbrainz\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spotbrainz")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Spotbrainz Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. Environment variables (SPOTBRAINZ_* prefix)
# 2. This config file
# 3. Built-in defaults (lowest priority)

# Scheme of built Spotify URLs: "http" (historical canonical form) or "https"
#
# Can also be set via:
# - Environment: SPOTBRAINZ_URL_SCHEME=https
url_scheme = "http"

# Reject Spotify IDs containing anything other than ASCII letters and digits
# when building URLs
#
# Can also be set via:
# - Environment: SPOTBRAINZ_VALIDATE_IDS=true
validate_ids = false

# MusicBrainz server that seeded edit forms point at
#
# Can also be set via:
# - Environment: SPOTBRAINZ_MUSICBRAINZ_SERVER=https://beta.musicbrainz.org/
musicbrainz_server = "https://musicbrainz.org/"
"#
}

/// Create default config file at `path` if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file_at(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(path, example_config()).context("Failed to write config file")?;
    log::info!("Wrote default configuration to {}", path.display());

    Ok(true)
}

/// Create the default config file at [`config_file_path`] if it doesn't exist.
pub fn ensure_config_file() -> Result<bool> {
    ensure_config_file_at(&config_file_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.url_scheme, UrlScheme::Http);
        assert!(!config.validate_ids);
        assert_eq!(config.musicbrainz_server, MUSICBRAINZ_SERVER);
    }

    #[test]
    fn test_musicbrainz_entity_url() {
        let config = Config::default();
        assert_eq!(
            config.musicbrainz_entity_url(MusicBrainzEntityType::Release, "abc-123"),
            "https://musicbrainz.org/release/abc-123"
        );
    }

    #[test]
    fn test_musicbrainz_entity_url_without_trailing_slash() {
        let config = Config {
            musicbrainz_server: "https://beta.musicbrainz.org".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.musicbrainz_entity_url(MusicBrainzEntityType::Recording, "abc-123"),
            "https://beta.musicbrainz.org/recording/abc-123"
        );
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("url_scheme = \"https\"").unwrap();
        assert_eq!(config.url_scheme, UrlScheme::Https);
        assert!(!config.validate_ids);
        assert_eq!(config.musicbrainz_server, MUSICBRAINZ_SERVER);
    }

    #[test]
    fn test_unknown_scheme_rejected() {
        assert!(toml::from_str::<Config>("url_scheme = \"ftp\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "validate_ids = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.validate_ids);
        assert_eq!(config.url_scheme, UrlScheme::Http);
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(Config::load_from(&temp_dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_ensure_config_file_at() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        assert!(ensure_config_file_at(&path).unwrap());
        assert!(!ensure_config_file_at(&path).unwrap());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_config_file_path() {
        let path = config_file_path();
        assert!(path.ends_with("spotbrainz/config.toml"));
    }
}

//! Development server settings from `pm-web.toml`.
//!
//! The file is optional; every field has a default. `PM_CONFIG` points at a
//! different file, which then must exist.

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_ENV: &str = "PM_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "pm-web.toml";
/// Upper bound on photos rendered per page.
pub const MAX_PHOTOS_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Number of gallery pages served before fragments come back empty.
    pub gallery_pages: u32,
    pub photos_per_page: u32,
    /// Status polls answered as "processing" before the selfie is reported recognised.
    pub selfie_pending_polls: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            gallery_pages: 3,
            photos_per_page: 12,
            selfie_pending_polls: 3,
        }
    }
}

impl ServerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            (1..=MAX_PHOTOS_PER_PAGE).contains(&self.photos_per_page),
            "photos_per_page must be between 1 and {}, got {}",
            MAX_PHOTOS_PER_PAGE,
            self.photos_per_page
        );
        Ok(())
    }

    /// `$PM_CONFIG` if set, else `./pm-web.toml` if present, else defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() { Self::load(path) } else { Ok(Self::default()) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(ServerConfig::parse("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_partial_file_overrides() {
        let config = ServerConfig::parse("gallery_pages = 5\n").unwrap();
        assert_eq!(config.gallery_pages, 5);
        assert_eq!(config.photos_per_page, 12);
        assert_eq!(config.selfie_pending_polls, 3);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(ServerConfig::parse("photos_per_page = \"many\"").is_err());
    }

    #[test]
    fn test_photos_per_page_is_bounded() {
        assert!(ServerConfig::parse("photos_per_page = 0").is_err());
        let err = ServerConfig::parse("photos_per_page = 4000000000").unwrap_err();
        assert!(err.to_string().contains("photos_per_page must be between 1 and 100"));
        assert_eq!(ServerConfig::parse("photos_per_page = 100").unwrap().photos_per_page, 100);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = ServerConfig::load(Path::new("/nonexistent/pm-web.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config"));
    }
}

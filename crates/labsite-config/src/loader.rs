//! Loading the descriptor from `site.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::SiteConfig;
use crate::workshop::workshop;

/// Errors that can occur while loading or saving a descriptor.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Load a descriptor from a TOML file.
pub fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: SiteConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Parsed {} nav entries and {} sidebar groups",
        config.theme_config.nav.len(),
        config.theme_config.sidebar.len()
    );

    Ok(config)
}

/// Load a descriptor from `path` if it exists, else use the built-in workshop descriptor.
///
/// Returns an error if the file exists but is malformed.
pub fn load_or_default(path: &Path) -> Result<SiteConfig, ConfigError> {
    if path.exists() {
        let config = load(path)?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }

    tracing::info!(
        "{} not found, using built-in workshop descriptor",
        path.display()
    );
    Ok(workshop())
}

/// Serialize a descriptor to TOML.
pub fn to_toml(config: &SiteConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SocialIcon;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn loads_minimal_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(
            &path,
            r#"
title = "Docs"

[[themeConfig.nav]]
text = "Home"
link = "/"

[[themeConfig.sidebar]]
text = "Guides"

[[themeConfig.sidebar.items]]
text = "Intro"
link = "/intro"

[[themeConfig.socialLinks]]
icon = "github"
link = "https://github.com/example/docs"
"#,
        )
        .unwrap();

        let config = load(&path).unwrap();

        assert_eq!(config.title, "Docs");
        assert_eq!(config.base, "/");
        assert_eq!(config.description, "");
        assert_eq!(config.theme_config.nav[0].link.as_deref(), Some("/"));
        assert_eq!(config.theme_config.sidebar[0].items[0].text, "Intro");
        assert_eq!(config.theme_config.social_links[0].icon, SocialIcon::Github);
    }

    #[test]
    fn round_trips_workshop() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");

        fs::write(&path, to_toml(&workshop()).unwrap()).unwrap();

        assert_eq!(load(&path).unwrap(), workshop());
    }

    #[test]
    fn falls_back_when_missing() {
        let temp = tempdir().unwrap();

        let config = load_or_default(&temp.path().join("missing.toml")).unwrap();

        assert_eq!(config, workshop());
    }

    #[test]
    fn errors_on_malformed_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "title = [unclosed").unwrap();

        let result = load_or_default(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn errors_on_unknown_icon() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(
            &path,
            "title = \"Docs\"\n\n[[themeConfig.socialLinks]]\nicon = \"myspace\"\nlink = \"https://example.com\"\n",
        )
        .unwrap();

        let err = load(&path).unwrap_err();

        assert!(err.to_string().contains("myspace"));
    }
}

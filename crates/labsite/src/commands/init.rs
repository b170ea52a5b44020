//! Write the built-in descriptor to disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use labsite_config::{to_toml, workshop};

const HEADER: &str = "# Workshop lab site configuration\n\
# Nav and sidebar entries are kept in sync by hand; run `labsite check` after editing.\n\n";

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing {}...", config_path.display());

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    let body = to_toml(&workshop()).context("Failed to serialize workshop descriptor")?;

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
    }

    fs::write(config_path, format!("{}{}", HEADER, body))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'labsite emit' to generate the site config.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_loadable_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");

        run(&path, false).unwrap();

        assert_eq!(labsite_config::load(&path).unwrap(), workshop());
    }

    #[test]
    fn keeps_existing_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "title = \"Mine\"\n").unwrap();

        run(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "title = \"Mine\"\n");

        run(&path, true).unwrap();
        assert_eq!(labsite_config::load(&path).unwrap(), workshop());
    }
}

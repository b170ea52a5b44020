//! Emit the site config.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use labsite_config::{emit, load_or_default, Format};

/// Run the emit command.
pub fn run(config_path: &Path, format: Format, output: Option<PathBuf>) -> Result<()> {
    let config = load_or_default(config_path)?;

    let report = labsite_config::check(&config);
    if !report.is_clean() {
        tracing::warn!(
            "Config has {} error(s); emitting anyway. Run 'labsite check' for details.",
            report.errors()
        );
    }

    match output {
        Some(path) => emit::write(&config, &path, format)?,
        None => {
            let rendered = emit::render(&config, format)?;
            std::io::stdout()
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

//! Consistency check command.

use std::path::Path;

use anyhow::Result;
use labsite_config::{load_or_default, Severity};

/// Run the check command.
pub fn run(config_path: &Path) -> Result<()> {
    let config = load_or_default(config_path)?;
    let report = labsite_config::check(&config);

    for finding in &report.findings {
        match finding.severity {
            Severity::Error => tracing::error!("{}", finding.message),
            Severity::Warning => tracing::warn!("{}", finding.message),
        }
    }

    if !report.is_clean() {
        anyhow::bail!(
            "{} error(s), {} warning(s)",
            report.errors(),
            report.warnings()
        );
    }

    tracing::info!(
        "Config OK: {} nav entries, {} sidebar groups",
        config.theme_config.nav.len(),
        config.theme_config.sidebar.len()
    );

    Ok(())
}

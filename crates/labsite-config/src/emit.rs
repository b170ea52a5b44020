//! Emitting the descriptor in the form the static-site generator loads.

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{context, Environment};

use crate::model::SiteConfig;

/// Output form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain JSON object in the generator's schema
    Json,
    /// TypeScript config module wrapping the JSON in `defineConfig`
    Module,
}

/// Errors that can occur while emitting.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Failed to serialize config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

const MODULE_TEMPLATE: &str = r#"import { defineConfig } from 'vitepress'

// Generated by labsite. Edit site.toml and re-run `labsite emit` instead.
export default defineConfig({{ config | safe }})
"#;

/// Serialize to JSON.
pub fn to_json(config: &SiteConfig, pretty: bool) -> Result<String, EmitError> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(json)
}

/// Render the TypeScript config module.
pub fn to_module(config: &SiteConfig) -> Result<String, EmitError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template("config.mts", MODULE_TEMPLATE)?;

    let json = to_json(config, true)?;
    let rendered = env
        .get_template("config.mts")?
        .render(context! { config => json })?;

    Ok(rendered)
}

/// Render in the requested format.
pub fn render(config: &SiteConfig, format: Format) -> Result<String, EmitError> {
    match format {
        Format::Json => {
            let mut json = to_json(config, true)?;
            json.push('\n');
            Ok(json)
        }
        Format::Module => to_module(config),
    }
}

/// Render and write to `path`, creating parent directories as needed.
pub fn write(config: &SiteConfig, path: &Path, format: Format) -> Result<(), EmitError> {
    let output = render(config, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| EmitError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, output).map_err(|source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Wrote {:?} config to {}", format, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workshop::workshop;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn json_matches_generator_schema() {
        let json = to_json(&workshop(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["base"], "/scs25-copilot-studio-extensibility/");
        assert_eq!(value["themeConfig"]["nav"].as_array().unwrap().len(), 6);
        assert_eq!(value["themeConfig"]["sidebar"][0]["text"], "Labs");
        assert_eq!(value["themeConfig"]["socialLinks"][0]["icon"], "github");
    }

    #[test]
    fn json_parses_back_to_same_descriptor() {
        let json = to_json(&workshop(), true).unwrap();

        assert_eq!(serde_json::from_str::<SiteConfig>(&json).unwrap(), workshop());
    }

    #[test]
    fn module_wraps_define_config() {
        let module = to_module(&workshop()).unwrap();

        assert!(module.starts_with("import { defineConfig } from 'vitepress'"));
        assert!(module.contains("export default defineConfig({"));
        assert!(module.contains("\"link\": \"/lab-05/\""));
        assert!(module.trim_end().ends_with("})"));
        assert!(module.ends_with('\n'));
    }

    #[test]
    fn module_does_not_escape_quotes() {
        let module = to_module(&workshop()).unwrap();

        assert!(!module.contains("&quot;"));
    }

    #[test]
    fn writes_into_new_directory() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docs/.vitepress/config.mts");

        write(&workshop(), &path, Format::Module).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_module(&workshop()).unwrap());
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HoneyError;

pub const CONFIG_BASENAME: &str = "honeybadger";

const CONFIG_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Optional `honeybadger.{json,yaml,yml}` file. Keys mirror the global flag names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub configkey: Option<String>,

    #[serde(default)]
    pub api_host: Option<String>,

    #[serde(rename = "dry-run", default)]
    pub dry_run: Option<bool>,

    #[serde(default)]
    pub timeout: Option<u64>,
}

pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{CONFIG_BASENAME}.{ext}")))
        .find(|p| p.is_file())
}

fn parse_config(path: &Path, text: &str) -> Result<AppConfig, HoneyError> {
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    if is_json {
        serde_json::from_str(text).map_err(|e| {
            HoneyError::config(format!("invalid config json {}: {e}", path.display()))
        })
    } else {
        // An empty YAML document is a valid, empty config.
        if text.trim().is_empty() {
            return Ok(AppConfig::default());
        }
        serde_yaml::from_str(text).map_err(|e| {
            HoneyError::config(format!("invalid config yaml {}: {e}", path.display()))
        })
    }
}

/// Reads the config file from `dir`. A missing file is not an error.
pub fn read_config_in(dir: &Path) -> Result<Option<(AppConfig, PathBuf)>, HoneyError> {
    let Some(path) = find_config_file(dir) else {
        return Ok(None);
    };

    let text = fs::read_to_string(&path).map_err(|e| {
        HoneyError::config(format!("failed to read config {}: {e}", path.display()))
    })?;
    let cfg = parse_config(&path, &text)?;
    Ok(Some((cfg, path)))
}

/// Only the current working directory is searched.
pub fn read_config() -> Result<Option<(AppConfig, PathBuf)>, HoneyError> {
    let cwd = std::env::current_dir()
        .map_err(|e| HoneyError::config(format!("cannot determine working directory: {e}")))?;
    read_config_in(&cwd)
}

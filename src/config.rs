//! Configuration file loading.
//!
//! An optional `.prefdiffrc.json` in the working directory supplies defaults
//! for options that would otherwise be repeated on every invocation. Command
//! line arguments always win over config values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".prefdiffrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Default report destination.
    #[serde(default = "default_output")]
    pub output: String,
    /// Report sections to hide, by CLI section name (e.g. "matching").
    #[serde(default)]
    pub hide: Vec<String>,
    /// Skip comment parsing for side A.
    #[serde(default)]
    pub no_comments_a: bool,
    /// Skip comment parsing for side B.
    #[serde(default)]
    pub no_comments_b: bool,
}

fn default_output() -> String {
    "prefdiff.log".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            hide: Vec::new(),
            no_comments_a: false,
            no_comments_b: false,
        }
    }
}

/// Loads the config file from `dir`, falling back to defaults when absent.
///
/// A present but malformed config file is an error; silently ignoring it
/// would make a typo look like a missing file.
pub fn load_config(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

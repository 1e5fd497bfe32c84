//! Configuration management utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// License notice appended beneath a freshly created copyright block.
pub static LICENSE_TEXT: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/license-text.txt"));

static DEFAULT_CONFIG_PATH: &str = ".license-header.toml";

/// Tool configuration loaded from an optional TOML file, falling back to the
/// built-in defaults field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root directories to scan, relative to the invocation directory.
    #[serde(default = "Config::default_roots")]
    pub roots: Vec<PathBuf>,
    /// Exact path prefixes excluded from processing (not globs).
    #[serde(default = "Config::default_ignore")]
    pub ignore: Vec<String>,
    /// Copyright holder line this tool maintains.
    #[serde(default = "Config::default_holder")]
    pub holder: String,
}

impl Config {
    fn default_roots() -> Vec<PathBuf> {
        vec![PathBuf::from("internal"), PathBuf::from("pkg")]
    }

    fn default_ignore() -> Vec<String> {
        vec!["internal/workflows/sbom/interfaces_mocks.go".to_owned()]
    }

    fn default_holder() -> String {
        "Khulnasoft Limited All rights reserved.".to_owned()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: Self::default_roots(),
            ignore: Self::default_ignore(),
            holder: Self::default_holder(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit file, the workspace file if one
    /// exists, or the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let workspace = Path::new(DEFAULT_CONFIG_PATH);
                if workspace.exists() {
                    Self::from_file(workspace)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }
}

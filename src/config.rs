//! Project configuration describing where the entrypoint and public assets live.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "assetcheck.config.json";

/// Discoverable project configuration describing the checked filesystem layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Directory of public assets, relative to the project root.
    pub public_dir: String,
    /// File name of the entrypoint HTML document inside the public directory.
    pub index_html_file: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            public_dir: "public".into(),
            index_html_file: "index.html".into(),
        }
    }
}

/// Command line overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit configuration file used instead of the discovered one.
    pub config_file: Option<PathBuf>,
    /// Replacement for the configured public directory.
    pub public_dir: Option<String>,
}

impl CheckConfig {
    /// Attempt to load configuration from the provided project root.
    ///
    /// When the configuration file does not exist or fails to parse we fall back to
    /// default values so the checker keeps working in unconfigured projects.
    pub fn discover(project_root: &Path) -> Self {
        let candidate = project_root.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Read configuration from an explicitly named JSON file.
    ///
    /// Unlike [`CheckConfig::discover`], a file the caller asked for by name
    /// must load; read and parse failures are reported instead of silently
    /// replaced with defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Resolve the effective configuration for one run.
    ///
    /// An explicit config file takes the place of discovery, and individual
    /// command line values win over whatever the file provided.
    pub fn resolve(project_root: &Path, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match &overrides.config_file {
            Some(path) => Self::load(path)?,
            None => Self::discover(project_root),
        };
        if let Some(public_dir) = &overrides.public_dir {
            config.public_dir = public_dir.clone();
        }
        Ok(config)
    }

    /// Directory of public assets under the given project root.
    pub fn public_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.public_dir)
    }

    /// Path to the entrypoint HTML document under the given project root.
    pub fn entrypoint_path(&self, project_root: &Path) -> PathBuf {
        self.public_root(project_root).join(&self.index_html_file)
    }
}

//! Configuration management for the catalog TUI application.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages the service endpoint, paging defaults, and output paths.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Products endpoint of the public demo catalog service.
pub const DEFAULT_API_URL: &str = "https://api.escuelajs.co/api/v1/products";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Products collection endpoint
    pub api_url: String,
    /// Rows per page on startup
    pub page_size: usize,
    /// Where exports are written (relative to the working directory or absolute)
    pub export_path: String,
    /// Log directory (relative to config dir or absolute)
    pub log_dir: String,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: 10,
            export_path: "products_export.csv".to_string(),
            log_dir: "logs".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/catalog-tui/config.jsonc`
    /// 3. `~/.config/catalog-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path written to, or error
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(config_path)
    }

    /// Check values that would make the application unusable.
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(anyhow::anyhow!("api_url must not be empty"));
        }
        if self.page_size == 0 {
            return Err(anyhow::anyhow!("page_size must be at least 1"));
        }
        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/catalog-tui/config.jsonc` or error
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(app_config_dir()?.join("config.jsonc"))
    }

    /// Get log directory path.
    ///
    /// # Details
    /// If log_dir is absolute, returns it as-is.
    /// Otherwise, returns path relative to config directory.
    pub fn log_dir_path(&self) -> Result<PathBuf> {
        let log_dir = Path::new(&self.log_dir);
        if log_dir.is_absolute() {
            Ok(log_dir.to_path_buf())
        } else {
            Ok(app_config_dir()?.join(log_dir))
        }
    }

    /// Get export file path.
    pub fn export_file_path(&self) -> PathBuf {
        PathBuf::from(&self.export_path)
    }
}

fn app_config_dir() -> Result<PathBuf> {
    let config_dir =
        config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
    Ok(config_dir.join("catalog-tui"))
}

/// Remove `//` comments from JSONC content.
///
/// A `//` inside a string literal (such as a URL) is kept.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| match comment_start(line) {
            Some(pos) => line[..pos].trim_end(),
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Byte offset of the first `//` outside a string literal.
fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
        } else if b == b'"' {
            in_string = true;
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            return Some(i);
        }
    }
    None
}

//! Command-line arguments.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Terminal manager for a REST product catalog.
#[derive(Debug, Parser)]
#[command(name = "catalog-tui", version)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/catalog-tui/config.jsonc)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Products endpoint of the catalog service
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Rows per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Where exports are written
    #[arg(long, value_name = "PATH")]
    pub export_path: Option<String>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Cli {
    /// Override config values with the flags that were given.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(export_path) = &self.export_path {
            config.export_path = export_path.clone();
        }
    }
}

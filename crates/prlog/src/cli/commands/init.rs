//! Init command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use prlog_core::config::{DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TEMPLATE};
use prlog_core::ConfigError;

use crate::cli::output;
use crate::cli::Cli;

/// Write a starter configuration file
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration file to create
    #[arg(short, long, env = "PRLOG_CONFIG_FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, config = %self.config_file.display(), "executing init command");

        if self.config_file.exists() && !self.force {
            return Err(prlog_core::PrlogError::from(ConfigError::AlreadyExists(
                self.config_file.clone(),
            ))
            .into());
        }

        if let Some(parent) = self.config_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.config_file, DEFAULT_CONFIG_TEMPLATE)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                output::path_style().apply_to(self.config_file.display())
            ));
            println!();
            println!("Next steps:");
            println!("  1. Edit {} to match your changelog style", self.config_file.display());
            println!("  2. Run {} to verify it", style("prlog validate").cyan());
            println!(
                "  3. Run {} from your merge workflow",
                style("prlog generate").cyan()
            );
        }

        Ok(())
    }
}

//! Validate command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use prlog_core::config::{load_config, validate_group_types, DEFAULT_CONFIG_FILE};

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Check a configuration file
///
/// Unlike `generate`, a missing or unparsable file is an error here, and every
/// label group type is resolved up front.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Configuration file to check
    #[arg(short, long, env = "PRLOG_CONFIG_FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(config = %self.config_file.display(), "executing validate command");

        let loaded = load_config(&self.config_file);
        if cli.format == OutputFormat::Text && !cli.quiet {
            println!(
                "Config: {}",
                output::path_style().apply_to(self.config_file.display())
            );
            if let Ok(config) = &loaded {
                output::print_config(config);
            }
        }

        let result = loaded.and_then(|config| {
            validate_group_types(&config)?;
            Ok(config)
        });

        if cli.format == OutputFormat::Json {
            let output = serde_json::json!({
                "valid": result.is_ok(),
                "config_path": self.config_file,
                "label_groups": result.as_ref().map(|c| c.label_groups.len()).unwrap_or(0),
                "error": result.as_ref().err().map(|e| e.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        let config = result?;
        if cli.format == OutputFormat::Text && !cli.quiet {
            output::success(&format!(
                "Configuration is valid ({} label group(s))",
                config.label_groups.len()
            ));
        }

        Ok(())
    }
}

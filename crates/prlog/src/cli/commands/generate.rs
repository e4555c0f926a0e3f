//! Generate command

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use prlog_changelog::EntryGenerator;
use prlog_core::config::{load_config_or_default, DEFAULT_CONFIG_FILE};
use prlog_core::load_pull_request;

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Render the entry for a pull request and prepend it to the changelog
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Event payload containing the pull request
    #[arg(long, env = "GITHUB_EVENT_PATH", value_name = "FILE")]
    pub event_path: PathBuf,

    /// Configuration file (defaults apply when missing or invalid)
    #[arg(short, long, env = "PRLOG_CONFIG_FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Skip pull requests carrying this label
    #[arg(long, env = "PRLOG_IGNORE_LABEL")]
    pub ignore_label: Option<String>,

    /// Print the entry without touching the changelog
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            event = %self.event_path.display(),
            config = %self.config_file.display(),
            dry_run = self.dry_run,
            "executing generate command"
        );

        let pr = load_pull_request(&self.event_path).with_context(|| {
            format!(
                "Failed to read pull request from {}",
                self.event_path.display()
            )
        })?;

        let generator = EntryGenerator::new(load_config_or_default(&self.config_file));

        if generator.should_skip(&pr, self.ignore_label.as_deref()) {
            info!(number = pr.number, "pull request carries the ignore label, skipping");
            match cli.format {
                OutputFormat::Json => {
                    let output = serde_json::json!({ "skipped": true, "number": pr.number });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text => {
                    if !cli.quiet {
                        output::info(&format!(
                            "Pull request #{} is labelled '{}', changelog left untouched",
                            pr.number,
                            self.ignore_label.as_deref().unwrap_or_default()
                        ));
                    }
                }
            }
            return Ok(());
        }

        if cli.format == OutputFormat::Text && !cli.quiet {
            output::print_config(generator.config());
        }

        let entry = if self.dry_run {
            generator.generate(&pr)?
        } else {
            generator.write(&pr, &generator.file_writer())?
        };

        let changelog_path = &generator.config().changelog_file_path;
        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "skipped": false,
                    "dry_run": self.dry_run,
                    "changelog": changelog_path,
                    "entry": entry,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::print_entry(&entry);
                    if self.dry_run {
                        output::info("Dry run: changelog not modified");
                    } else {
                        output::success(&format!(
                            "Changelog written to {}",
                            output::path_style().apply_to(changelog_path.display())
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

//! Changelog entry generation

use prlog_core::config::Config;
use prlog_core::{PullRequest, Result};
use tracing::{debug, info, instrument};

use crate::labels::label_variables;
use crate::table::extract_table;
use crate::template::render_template;
use crate::types::ChangelogEntry;
use crate::variables::{fixed_variables, resolve_variables, VariableMap};
use crate::writer::{ChangelogWriter, FileChangelogWriter};

/// Changelog entry generator
pub struct EntryGenerator {
    config: Config,
}

impl EntryGenerator {
    /// Create a generator for the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check whether the pull request opted out of the changelog
    ///
    /// An unset or empty ignore label never skips, nor does a pull request
    /// without labels.
    pub fn should_skip(&self, pr: &PullRequest, ignore_label: Option<&str>) -> bool {
        match ignore_label {
            Some(label) if !label.is_empty() => pr.has_label(label),
            _ => false,
        }
    }

    /// Resolve every template variable for a pull request
    #[instrument(skip(self, pr), fields(number = pr.number))]
    pub fn resolve(&self, pr: &PullRequest) -> Result<VariableMap> {
        let table_vars = extract_table(&pr.body);
        let label_vars = label_variables(&self.config.label_groups, &pr.labels)?;
        let fixed_vars = fixed_variables(pr);
        Ok(resolve_variables(&table_vars, &label_vars, &fixed_vars))
    }

    /// Render the changelog entry for a pull request
    #[instrument(skip(self, pr), fields(number = pr.number))]
    pub fn generate(&self, pr: &PullRequest) -> Result<ChangelogEntry> {
        info!(number = pr.number, title = %pr.title, "generating changelog entry");
        let variables = self.resolve(pr)?;
        let text = render_template(&self.config.template, &variables);
        debug!(entry_len = text.len(), variable_count = variables.len(), "entry rendered");

        Ok(ChangelogEntry {
            number: pr.number,
            variables,
            text,
        })
    }

    /// Render the entry and prepend it with the given writer
    ///
    /// Nothing is written when rendering fails.
    pub fn write<W: ChangelogWriter + ?Sized>(
        &self,
        pr: &PullRequest,
        writer: &W,
    ) -> Result<ChangelogEntry> {
        let entry = self.generate(pr)?;
        writer.prepend(&entry.text)?;
        Ok(entry)
    }

    /// Writer for the configured changelog file
    pub fn file_writer(&self) -> FileChangelogWriter {
        FileChangelogWriter::new(&self.config.changelog_file_path)
    }
}

//! prlog Changelog - Changelog entry resolution for merged pull requests
//!
//! This crate turns a pull request into a changelog entry: it reads the
//! description's `Key | Value` table, formats label groups, merges every
//! variable source, renders the configured template, and prepends the
//! result to the changelog file.

pub mod generator;
pub mod labels;
pub mod table;
pub mod template;
pub mod types;
pub mod variables;
pub mod writer;

pub use generator::EntryGenerator;
pub use labels::{format_label_group, label_variables};
pub use table::extract_table;
pub use template::render_template;
pub use types::ChangelogEntry;
pub use variables::{fixed_variables, resolve_variables, VariableMap};
pub use writer::{compose_changelog, ChangelogWriter, FileChangelogWriter};

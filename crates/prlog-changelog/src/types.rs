//! Changelog entry types

use serde::Serialize;

use crate::variables::VariableMap;

/// A rendered changelog entry for one pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogEntry {
    /// Pull request number the entry was generated for
    pub number: u64,
    /// Variables the template was rendered with
    pub variables: VariableMap,
    /// Rendered text, without the trailing newline added on write
    pub text: String,
}

impl ChangelogEntry {
    /// Check if the rendered text is blank
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

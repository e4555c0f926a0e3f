//! Template variables and their precedence
//!
//! Variable names are case-insensitive: every key is trimmed and upper-cased on
//! the way in, and lookups normalize the same way. A template placeholder for a
//! variable is therefore always `$CL_` followed by the upper-cased name.

use std::collections::BTreeMap;

use prlog_core::PullRequest;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mapping from normalized variable name to value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableMap {
    vars: BTreeMap<String, String>,
}

impl VariableMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a variable name the way the map stores it
    pub fn normalize_key(key: &str) -> String {
        key.trim().to_uppercase()
    }

    /// Insert a value, replacing any value stored under the same normalized name
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        self.vars
            .insert(Self::normalize_key(key.as_ref()), value.into())
    }

    /// Look up a value by name, ignoring case and surrounding whitespace
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&Self::normalize_key(key)).map(String::as_str)
    }

    /// Check whether a variable is defined
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(&Self::normalize_key(key))
    }

    /// Copy every variable of `other` into this map; `other` wins on collision
    pub fn merge(&mut self, other: &VariableMap) {
        for (key, value) in &other.vars {
            self.vars.insert(key.clone(), value.clone());
        }
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over normalized names and values, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for VariableMap
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = VariableMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Variables taken straight from the pull request
///
/// `MERGER` and `MERGER_URL` are only defined when the pull request was merged.
pub fn fixed_variables(pr: &PullRequest) -> VariableMap {
    let mut vars = VariableMap::new();
    vars.insert("author", pr.author.name.as_str());
    vars.insert("author_url", pr.author.url.as_str());
    vars.insert("title", pr.title.as_str());
    vars.insert("number", pr.number.to_string());
    vars.insert("url", pr.url.as_str());
    if let Some(merger) = &pr.merger {
        vars.insert("merger", merger.name.as_str());
        vars.insert("merger_url", merger.url.as_str());
    }
    vars
}

/// Merge variable sources, lowest precedence first
///
/// Fixed pull request fields always win so a description table cannot
/// override the title or number.
pub fn resolve_variables(
    table_vars: &VariableMap,
    label_vars: &VariableMap,
    fixed_vars: &VariableMap,
) -> VariableMap {
    let mut resolved = VariableMap::new();
    resolved.merge(table_vars);
    resolved.merge(label_vars);
    resolved.merge(fixed_vars);

    debug!(
        table = table_vars.len(),
        labels = label_vars.len(),
        fixed = fixed_vars.len(),
        resolved = resolved.len(),
        "variables resolved"
    );
    resolved
}

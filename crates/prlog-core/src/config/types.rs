//! Configuration types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

use super::defaults::{DEFAULT_CHANGELOG_FILE, DEFAULT_TEMPLATE};

/// Main configuration for prlog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Changelog file the entry is prepended to
    pub changelog_file_path: PathBuf,

    /// Entry template with `$CL_<NAME>` placeholders
    pub template: String,

    /// Label group rules
    pub label_groups: Vec<LabelGroupConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            changelog_file_path: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            template: DEFAULT_TEMPLATE.to_string(),
            label_groups: Vec::new(),
        }
    }
}

/// A rule that renders a subset of the pull request labels into one variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelGroupConfig {
    /// Unique id, published as `label_<id>`
    pub id: String,

    /// Which labels belong to the group
    pub labels: LabelMatcher,

    /// How matched labels are combined (`combined` or `separate`)
    ///
    /// Left empty when omitted, which [`group_kind`](Self::group_kind) rejects.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Joiner between labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Text placed before the group (combined) or each label (separate)
    #[serde(default)]
    pub prefix: String,

    /// Text placed after the group (combined) or each label (separate)
    #[serde(default)]
    pub suffix: String,

    /// Value used when no label matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Substitutions applied to each matched label, in order
    #[serde(default)]
    pub replacers: Vec<Replacer>,
}

impl LabelGroupConfig {
    /// Create a group with no decoration
    pub fn new(id: impl Into<String>, labels: LabelMatcher, kind: GroupKind) -> Self {
        Self {
            id: id.into(),
            labels,
            kind: kind.to_string(),
            separator: None,
            prefix: String::new(),
            suffix: String::new(),
            default: None,
            replacers: Vec::new(),
        }
    }

    /// Resolve the declared type
    pub fn group_kind(&self) -> Result<GroupKind, ConfigError> {
        self.kind.parse().map_err(|_| ConfigError::UnknownGroupType {
            group: self.id.clone(),
            kind: self.kind.clone(),
        })
    }

    /// Separator to use for the given kind, honouring an explicit override
    pub fn separator_for(&self, kind: GroupKind) -> &str {
        self.separator
            .as_deref()
            .unwrap_or_else(|| kind.default_separator())
    }

    /// Name of the variable this group is published under
    pub fn variable_name(&self) -> String {
        format!("label_{}", self.id.to_lowercase())
    }

    /// Wrap text in the group's prefix and suffix
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.prefix, text, self.suffix)
    }

    /// Set the separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Set prefix and suffix
    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    /// Set the default value
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Add a replacer
    pub fn with_replacer(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.replacers.push(Replacer {
            from: from.into(),
            to: to.into(),
        });
        self
    }
}

/// Label selection: an explicit list of names or a name prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelMatcher {
    /// Labels listed by name, in declaration order
    List(Vec<String>),
    /// Every label starting with this text
    Prefix(String),
}

/// Literal substring substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacer {
    /// Text to look for
    pub from: String,
    /// Replacement
    pub to: String,
}

/// How a label group renders its matched labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Join all labels, then wrap once
    Combined,
    /// Wrap each label, then join
    Separate,
}

impl GroupKind {
    /// Separator used when the group does not set one
    pub fn default_separator(&self) -> &'static str {
        match self {
            Self::Combined => ",",
            Self::Separate => " ",
        }
    }
}

impl FromStr for GroupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "combined" => Ok(Self::Combined),
            "separate" => Ok(Self::Separate),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combined => write!(f, "combined"),
            Self::Separate => write!(f, "separate"),
        }
    }
}

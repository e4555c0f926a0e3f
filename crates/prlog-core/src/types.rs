//! Core types shared across prlog crates

use serde::{Deserialize, Serialize};

/// A GitHub user as seen by a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Login name
    pub name: String,
    /// Profile URL
    pub url: String,
}

impl Identity {
    /// Create a new identity
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The merged pull request a changelog entry is generated for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// Pull request number
    pub number: u64,
    /// Title
    pub title: String,
    /// Description, empty when the author left none
    pub body: String,
    /// Label names, unique, in payload order
    pub labels: Vec<String>,
    /// Who opened the pull request
    pub author: Identity,
    /// Who merged it; absent for non-merge events
    pub merger: Option<Identity>,
    /// Web URL
    pub url: String,
}

impl PullRequest {
    /// Create a pull request with no body, labels or merger
    pub fn new(
        number: u64,
        title: impl Into<String>,
        author: Identity,
        url: impl Into<String>,
    ) -> Self {
        Self {
            number,
            title: title.into(),
            body: String::new(),
            labels: Vec::new(),
            author,
            merger: None,
            url: url.into(),
        }
    }

    /// Set the description
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the labels, dropping repeated names
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.clear();
        for label in labels {
            let label = label.into();
            if !self.labels.contains(&label) {
                self.labels.push(label);
            }
        }
        self
    }

    /// Set the merger
    pub fn with_merger(mut self, merger: Identity) -> Self {
        self.merger = Some(merger);
        self
    }

    /// Check whether the pull request carries a label
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pr() -> PullRequest {
        PullRequest::new(
            7,
            "Add thing",
            Identity::new("octocat", "https://github.com/octocat"),
            "https://github.com/o/r/pull/7",
        )
    }

    #[test]
    fn test_with_labels_deduplicates() {
        let pr = make_pr().with_labels(["bug", "ui", "bug"]);
        assert_eq!(pr.labels, vec!["bug", "ui"]);
    }

    #[test]
    fn test_has_label() {
        let pr = make_pr().with_labels(["skip-changelog"]);
        assert!(pr.has_label("skip-changelog"));
        assert!(!pr.has_label("skip"));
    }

    #[test]
    fn test_defaults() {
        let pr = make_pr();
        assert!(pr.body.is_empty());
        assert!(pr.labels.is_empty());
        assert!(pr.merger.is_none());
    }
}

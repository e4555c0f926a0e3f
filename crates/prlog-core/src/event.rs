//! Pull request extraction from a GitHub event payload
//!
//! The payload is the JSON document GitHub writes to `GITHUB_EVENT_PATH` for
//! `pull_request` events. Only the fields needed for a changelog entry are read.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{InputError, Result};
use crate::types::{Identity, PullRequest};

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: Option<u64>,
    title: Option<String>,
    body: Option<String>,
    #[serde(default)]
    labels: Vec<LabelPayload>,
    user: Option<UserPayload>,
    merged_by: Option<UserPayload>,
    html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LabelPayload {
    name: String,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    login: String,
    html_url: String,
}

impl From<UserPayload> for Identity {
    fn from(user: UserPayload) -> Self {
        Identity::new(user.login, user.html_url)
    }
}

/// Load the pull request from an event payload file
pub fn load_pull_request(path: &Path) -> Result<PullRequest> {
    info!(path = %path.display(), "loading event payload");

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InputError::EventNotFound(path.to_path_buf())
        } else {
            InputError::Io(e)
        }
    })?;

    parse_pull_request(&content)
}

/// Parse the pull request out of an event payload document
pub fn parse_pull_request(json: &str) -> Result<PullRequest> {
    let payload: EventPayload = serde_json::from_str(json).map_err(InputError::Json)?;
    let pr = payload.pull_request.ok_or(InputError::MissingPullRequest)?;

    let number = pr.number.ok_or_else(|| missing("number"))?;
    if number == 0 {
        return Err(InputError::MissingField("number".to_string()).into());
    }
    let title = pr.title.ok_or_else(|| missing("title"))?;
    let author = pr.user.ok_or_else(|| missing("user"))?;
    let url = pr.html_url.ok_or_else(|| missing("html_url"))?;

    let mut pull_request = PullRequest::new(number, title, author.into(), url)
        .with_body(pr.body.unwrap_or_default())
        .with_labels(pr.labels.into_iter().map(|l| l.name));

    if let Some(merger) = pr.merged_by {
        pull_request = pull_request.with_merger(merger.into());
    }

    debug!(
        number = pull_request.number,
        label_count = pull_request.labels.len(),
        merged = pull_request.merger.is_some(),
        "pull request parsed"
    );
    Ok(pull_request)
}

fn missing(field: &str) -> InputError {
    InputError::MissingField(field.to_string())
}

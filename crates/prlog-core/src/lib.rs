//! prlog Core - Core library for changelog entry generation
//!
//! This crate provides the error taxonomy, configuration model and loader,
//! and the pull request model read from a CI event payload.

pub mod config;
pub mod error;
pub mod event;
pub mod types;

pub use error::{ChangelogError, ConfigError, InputError, PrlogError, Result};
pub use event::{load_pull_request, parse_pull_request};
pub use types::{Identity, PullRequest};

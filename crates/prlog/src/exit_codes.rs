//! Exit codes for the CLI

use prlog_core::PrlogError;

/// Success, including runs skipped by the ignore label
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Pull request input error
pub const INPUT_ERROR: i32 = 3;

/// Changelog file error
pub const CHANGELOG_ERROR: i32 = 4;

/// Exit code for a failed run
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.chain().find_map(|e| e.downcast_ref::<PrlogError>()) {
        Some(PrlogError::Config(_)) => CONFIG_ERROR,
        Some(PrlogError::Input(_)) => INPUT_ERROR,
        Some(PrlogError::Changelog(_)) => CHANGELOG_ERROR,
        _ => ERROR,
    }
}

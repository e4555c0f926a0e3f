//! Configuration validation

use std::collections::HashSet;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
///
/// Group types are not checked here; an unknown type is reported when the
/// group is formatted, or up front by [`validate_group_types`].
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog_path(config)?;
    validate_label_groups(config)?;
    debug!("configuration validation passed");
    Ok(())
}

/// Check that every label group declares a known type
pub fn validate_group_types(config: &Config) -> Result<()> {
    for group in &config.label_groups {
        group.group_kind()?;
    }
    Ok(())
}

fn validate_changelog_path(config: &Config) -> Result<()> {
    if config.changelog_file_path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog-file-path".to_string(),
            message: "path cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_label_groups(config: &Config) -> Result<()> {
    if !config.label_groups.is_empty() {
        debug!(count = config.label_groups.len(), "validating label groups");
    }

    let mut seen = HashSet::new();
    for (i, group) in config.label_groups.iter().enumerate() {
        if group.id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("label-groups[{}].id", i),
                message: "id cannot be empty".to_string(),
            }
            .into());
        }

        if !seen.insert(group.id.to_lowercase()) {
            return Err(ConfigError::InvalidValue {
                field: format!("label-groups[{}].id", i),
                message: format!("duplicate id '{}'", group.id),
            }
            .into());
        }
    }

    Ok(())
}

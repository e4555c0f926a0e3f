//! Label group formatting

use prlog_core::config::{GroupKind, LabelGroupConfig, LabelMatcher};
use prlog_core::ConfigError;
use tracing::{debug, instrument};

use crate::variables::VariableMap;

/// Render one label group against the pull request labels
pub fn format_label_group(
    group: &LabelGroupConfig,
    labels: &[String],
) -> Result<String, ConfigError> {
    let kind = group.group_kind()?;

    let matched = match_labels(&group.labels, labels);
    if matched.is_empty() {
        return Ok(group
            .default
            .as_deref()
            .map(|default| group.wrap(default))
            .unwrap_or_default());
    }

    let replaced: Vec<String> = matched
        .into_iter()
        .map(|label| {
            group
                .replacers
                .iter()
                .fold(label.to_string(), |acc, r| acc.replace(&r.from, &r.to))
        })
        .collect();

    let separator = group.separator_for(kind);
    let formatted = match kind {
        GroupKind::Combined => group.wrap(&replaced.join(separator)),
        GroupKind::Separate => replaced
            .iter()
            .map(|label| group.wrap(label))
            .collect::<Vec<_>>()
            .join(separator),
    };

    Ok(formatted)
}

/// Render every label group into `label_<id>` variables
#[instrument(skip(groups, labels), fields(group_count = groups.len(), label_count = labels.len()))]
pub fn label_variables(
    groups: &[LabelGroupConfig],
    labels: &[String],
) -> Result<VariableMap, ConfigError> {
    let mut vars = VariableMap::new();
    for group in groups {
        let value = format_label_group(group, labels)?;
        debug!(group = %group.id, value = %value, "label group formatted");
        vars.insert(group.variable_name(), value);
    }
    Ok(vars)
}

fn match_labels<'a>(matcher: &'a LabelMatcher, labels: &'a [String]) -> Vec<&'a str> {
    match matcher {
        LabelMatcher::List(names) => {
            let mut matched: Vec<&str> = Vec::new();
            for name in names {
                if labels.contains(name) && !matched.contains(&name.as_str()) {
                    matched.push(name.as_str());
                }
            }
            matched
        }
        LabelMatcher::Prefix(prefix) => labels
            .iter()
            .filter(|label| label.starts_with(prefix.as_str()))
            .map(String::as_str)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn list(names: &[&str]) -> LabelMatcher {
        LabelMatcher::List(labels(names))
    }

    #[test]
    fn test_combined_wraps_once() {
        let group = LabelGroupConfig::new("g", list(&["a", "b"]), GroupKind::Combined)
            .with_separator(", ")
            .with_affixes("[", "]");
        let out = format_label_group(&group, &labels(&["a", "b"])).unwrap();
        assert_eq!(out, "[a, b]");
    }

    #[test]
    fn test_separate_wraps_each() {
        let group = LabelGroupConfig::new("g", list(&["a", "b"]), GroupKind::Separate)
            .with_affixes("[", "]");
        let out = format_label_group(&group, &labels(&["a", "b"])).unwrap();
        assert_eq!(out, "[a] [b]");
    }

    #[test]
    fn test_combined_default_separator() {
        let group = LabelGroupConfig::new("g", list(&["a", "b"]), GroupKind::Combined);
        let out = format_label_group(&group, &labels(&["b", "a"])).unwrap();
        assert_eq!(out, "a,b");
    }

    #[test]
    fn test_no_match_without_default() {
        let group = LabelGroupConfig::new("g", list(&["a"]), GroupKind::Combined)
            .with_affixes("[", "]");
        let out = format_label_group(&group, &labels(&["z"])).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_no_match_with_default() {
        let group = LabelGroupConfig::new("g", list(&["a"]), GroupKind::Separate)
            .with_affixes("[", "]")
            .with_default("none");
        let out = format_label_group(&group, &[]).unwrap();
        assert_eq!(out, "[none]");
    }

    #[test]
    fn test_list_preserves_declared_order() {
        let group = LabelGroupConfig::new("g", list(&["c", "a", "c"]), GroupKind::Combined)
            .with_separator("/");
        let out = format_label_group(&group, &labels(&["a", "b", "c"])).unwrap();
        assert_eq!(out, "c/a");
    }

    #[test]
    fn test_prefix_match_with_replacer() {
        let group = LabelGroupConfig::new(
            "type",
            LabelMatcher::Prefix("type:".to_string()),
            GroupKind::Combined,
        )
        .with_replacer("type:", "");
        let out = format_label_group(&group, &labels(&["ui", "type:bugfix"])).unwrap();
        assert_eq!(out, "bugfix");
    }

    #[test]
    fn test_replacers_apply_in_order() {
        let group = LabelGroupConfig::new(
            "area",
            LabelMatcher::Prefix("area/".to_string()),
            GroupKind::Separate,
        )
        .with_separator(", ")
        .with_replacer("area/", "")
        .with_replacer("-", " ")
        .with_replacer("ui ", "UI ");
        let out =
            format_label_group(&group, &labels(&["area/ui-kit", "area/build-system"])).unwrap();
        assert_eq!(out, "UI kit, build system");
    }

    #[test]
    fn test_replacers_not_applied_to_default() {
        let group = LabelGroupConfig::new("g", list(&["x"]), GroupKind::Combined)
            .with_default("a-b")
            .with_replacer("-", " ");
        assert_eq!(format_label_group(&group, &[]).unwrap(), "a-b");
    }

    #[test]
    fn test_unknown_kind_is_error() {
        let mut group = LabelGroupConfig::new("g", list(&["a"]), GroupKind::Combined);
        group.kind = "together".to_string();
        let err = format_label_group(&group, &labels(&["a"])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownGroupType { ref group, .. } if group == "g"));
    }

    #[test]
    fn test_label_variables_publishes_each_group() {
        let groups = vec![
            LabelGroupConfig::new("Type", LabelMatcher::Prefix("type:".into()), GroupKind::Combined)
                .with_replacer("type:", ""),
            LabelGroupConfig::new("scope", LabelMatcher::Prefix("type:".into()), GroupKind::Combined),
        ];
        let vars = label_variables(&groups, &labels(&["type:feat"])).unwrap();
        assert_eq!(vars.get("LABEL_TYPE"), Some("feat"));
        // one label may feed several groups
        assert_eq!(vars.get("label_scope"), Some("type:feat"));
    }

    #[test]
    fn test_label_variables_empty_group_defined_as_empty() {
        let groups = vec![LabelGroupConfig::new("g", list(&["a"]), GroupKind::Combined)];
        let vars = label_variables(&groups, &[]).unwrap();
        assert_eq!(vars.get("label_g"), Some(""));
    }
}

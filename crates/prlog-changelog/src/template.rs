//! Placeholder substitution for entry templates
//!
//! A placeholder is `$CL_` followed by a variable name in upper case, e.g.
//! `$CL_TITLE` or `$CL_LABEL_TYPE`. Substitution is a single pass over the
//! template, so values are inserted verbatim and never expanded again.
//! Placeholders without a matching variable are left as they are.
//!
//! When one variable name is a prefix of another, the longer name wins at that
//! position, so `$CL_AUTHOR_URL` is never read as `$CL_AUTHOR` followed by `_URL`.

use tracing::trace;

use crate::variables::VariableMap;

/// Marker that starts every placeholder
pub const PLACEHOLDER_PREFIX: &str = "$CL_";

/// Render a template against resolved variables
pub fn render_template(template: &str, vars: &VariableMap) -> String {
    if vars.is_empty() || !template.contains(PLACEHOLDER_PREFIX) {
        return template.to_string();
    }

    // Longest name first: `$CL_AUTHOR_URL` must not be read as `$CL_AUTHOR` + "_URL".
    let mut names: Vec<(&str, &str)> = vars.iter().filter(|(name, _)| !name.is_empty()).collect();
    names.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(PLACEHOLDER_PREFIX) {
        output.push_str(&rest[..pos]);
        let after = &rest[pos + PLACEHOLDER_PREFIX.len()..];

        match names.iter().find(|(name, _)| after.starts_with(name)) {
            Some((name, value)) => {
                trace!(placeholder = %name, "placeholder substituted");
                output.push_str(value);
                rest = &after[name.len()..];
            }
            None => {
                output.push_str(PLACEHOLDER_PREFIX);
                rest = after;
            }
        }
    }
    output.push_str(rest);

    output
}

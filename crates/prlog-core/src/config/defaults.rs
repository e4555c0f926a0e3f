//! Default configuration values

/// Default configuration file location
pub const DEFAULT_CONFIG_FILE: &str = ".github/prlog.yml";

/// Default changelog file
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Default entry template
pub const DEFAULT_TEMPLATE: &str = "$CL_TITLE";

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# prlog configuration
#
# Placeholders available in the template:
#   $CL_TITLE $CL_NUMBER $CL_URL $CL_AUTHOR $CL_AUTHOR_URL $CL_MERGER $CL_MERGER_URL
#   $CL_LABEL_<ID> for each label group below
#   $CL_<KEY> for each row of a "Key | Value" table in the pull request description

changelog-file-path: CHANGELOG.md

template: "- $CL_LABEL_TYPE$CL_TITLE ([#$CL_NUMBER]($CL_URL)) by [@$CL_AUTHOR]($CL_AUTHOR_URL)"

label-groups:
  - id: type
    labels: "type:"
    type: combined
    separator: ", "
    prefix: "**"
    suffix: "**: "
    replacers:
      - from: "type:"
        to: ""
"#;

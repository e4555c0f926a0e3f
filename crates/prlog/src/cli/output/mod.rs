//! Output formatting utilities

use console::{style, Style};

use prlog_changelog::ChangelogEntry;
use prlog_core::config::Config;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Create a styled key-value line
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {}: {}", style(key).dim(), value)
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}

/// Print the changelog target, template and label groups of a configuration
///
/// Groups with an unrecognised type are flagged in red.
pub fn print_config(config: &Config) {
    println!("{}", header("Configuration"));
    println!(
        "{}",
        key_value(
            "changelog",
            &path_style()
                .apply_to(config.changelog_file_path.display())
                .to_string()
        )
    );
    println!("{}", key_value("template", &config.template));
    for group in &config.label_groups {
        let kind = match group.group_kind() {
            Ok(kind) => style(kind.to_string()).green(),
            Err(_) if group.kind.is_empty() => style("(missing type)".to_string()).red(),
            Err(_) => style(format!("{} (unknown)", group.kind)).red(),
        };
        println!(
            "{}",
            key_value(
                &format!("{} -> $CL_{}", group.id, group.variable_name().to_uppercase()),
                &kind.to_string()
            )
        );
    }
    println!();
}

/// Print the resolved variables as placeholders, then the rendered entry
pub fn print_entry(entry: &ChangelogEntry) {
    println!("{}", header(&format!("Variables for #{}", entry.number)));
    for (name, value) in entry.variables.iter() {
        let shown = if value.is_empty() {
            style("(empty)").dim().to_string()
        } else {
            value.to_string()
        };
        println!("{}", key_value(&format!("$CL_{}", name), &shown));
    }
    println!();

    println!("{}", header("Entry"));
    if entry.is_blank() {
        println!("  {}", style("(empty)").dim());
    } else {
        for line in entry.text.lines() {
            println!("  {}", line);
        }
    }
    println!();
}

//! Terminal output helpers

use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a header
pub fn header(message: &str) {
    println!("{}", message.bold());
    println!("{}", "─".repeat(message.chars().count()));
}

/// Print a `label: value` line with an aligned label
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {:<18} {}", format!("{label}:").dimmed(), value);
}

/// Comma-separated list, or a dash when empty
pub fn list<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

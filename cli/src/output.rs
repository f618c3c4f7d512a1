//! Output formatting for lookup reports and trees.

use command_tree_core::{Command, CommandTree, Lookup};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Owned summary of a [`Lookup`], handed to the flag-parsing stage or printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupReport {
    /// Canonical name of the deepest command reached.
    pub command: String,
    /// Names from the root down to `command`.
    pub path: Vec<String>,
    pub found: bool,
    /// Unconsumed tokens, in input order.
    pub remaining: Vec<String>,
}

impl LookupReport {
    pub fn from_lookup<S: AsRef<str>>(lookup: &Lookup<'_, '_, S>) -> Self {
        Self {
            command: lookup.command.name().to_string(),
            path: lookup
                .command
                .path()
                .into_iter()
                .map(String::from)
                .collect(),
            found: lookup.found,
            remaining: lookup
                .remaining
                .iter()
                .map(|arg| arg.as_ref().to_string())
                .collect(),
        }
    }
}

/// Formats a lookup report in the requested output format.
pub fn format_report(report: &LookupReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Text => Ok(report_to_text(report)),
    }
}

/// Formats a whole command tree in the requested output format.
pub fn format_tree(tree: &CommandTree, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tree)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(tree)?),
        OutputFormat::Text => {
            let mut out = String::new();
            tree_to_text(tree.root(), 0, &mut out);
            Ok(out)
        }
    }
}

fn report_to_text(report: &LookupReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("command: {}\n", report.path.join(" ")));
    out.push_str(&format!("found: {}\n", report.found));
    if !report.remaining.is_empty() {
        out.push_str(&format!("remaining: {}\n", report.remaining.join(" ")));
    }
    out
}

fn tree_to_text(command: Command<'_>, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let mut line = format!("{indent}{}", command.name());
    if !command.alt_names().is_empty() {
        line.push_str(&format!(" ({})", command.alt_names().join(", ")));
    }
    if !command.description().is_empty() {
        line.push_str(&format!(" - {}", command.description()));
    }
    out.push_str(&line);
    out.push('\n');

    for child in command.children() {
        tree_to_text(child, depth + 1, out);
    }
}

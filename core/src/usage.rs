//! Plain-text usage output for commands.
//!
//! Lookup only reports where resolution stopped. These helpers turn that into
//! the text a CLI prints: a usage block for the deepest command reached, and
//! an error line naming the token that could not be resolved.

use crate::{Command, Lookup};

/// Renders the usage block for `command`.
///
/// # Examples
///
/// ```
/// use command_tree_core::{CommandDef, CommandTree, render_usage};
///
/// let tree = CommandTree::from_def(
///     CommandDef::new("tool", "Example tool")
///         .with_child(CommandDef::new("build", "Build the project").with_alt_name("b"))
///         .with_child(CommandDef::new("test", "Run the tests")),
/// )
/// .unwrap();
///
/// let usage = render_usage(tree.root());
/// assert!(usage.contains("  tool [command]\n"));
/// assert!(usage.contains("  build  Build the project (aliases: b)\n"));
/// ```
pub fn render_usage(command: Command<'_>) -> String {
    let mut out = String::new();
    let path = command.path().join(" ");

    if !command.description().is_empty() {
        out.push_str(command.description());
        out.push_str("\n\n");
    }

    out.push_str("Usage:\n");
    if command.children().next().is_some() {
        out.push_str(&format!("  {path} [command]\n"));
    } else {
        out.push_str(&format!("  {path} [flags]\n"));
    }

    let children: Vec<Command<'_>> = command.children().collect();
    if !children.is_empty() {
        let width = children.iter().map(|c| c.name().len()).max().unwrap_or(0);
        out.push_str("\nAvailable commands:\n");
        for child in children {
            let mut line = format!("  {:<width$}  {}", child.name(), child.description());
            if !child.alt_names().is_empty() {
                line.push_str(&format!(" (aliases: {})", child.alt_names().join(", ")));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out
}

/// Error line for a failed lookup, `None` when the lookup succeeded.
///
/// # Examples
///
/// ```
/// use command_tree_core::{CommandDef, CommandTree, unknown_command_message};
///
/// let tree = CommandTree::from_def(
///     CommandDef::new("tool", "").with_child(CommandDef::new("build", "")),
/// )
/// .unwrap();
///
/// let result = tree.lookup(&["build", "fast"]);
/// assert_eq!(
///     unknown_command_message(&result).as_deref(),
///     Some(r#"unknown command "fast" for "tool build""#)
/// );
/// assert!(unknown_command_message(&tree.lookup(&["build"])).is_none());
/// ```
pub fn unknown_command_message<S: AsRef<str>>(lookup: &Lookup<'_, '_, S>) -> Option<String> {
    let token = lookup.offending_token()?;
    Some(format!(
        "unknown command \"{token}\" for \"{}\"",
        lookup.command.path().join(" ")
    ))
}

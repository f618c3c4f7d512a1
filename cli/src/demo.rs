//! Built-in command tree that `cmdtree` resolves against.

use command_tree_core::{CommandDef, CommandTree};

use crate::error::Result;

/// Name of the root command of the built-in tree.
pub const ROOT_NAME: &str = "tool";

pub fn demo_tree() -> Result<CommandTree> {
    let tree = CommandTree::from_def(
        CommandDef::new(ROOT_NAME, "Example code generation tool")
            .with_child(
                CommandDef::new("generate", "Generate a new client library").with_alt_name("gen"),
            )
            .with_child(CommandDef::new("refresh", "Regenerate an existing library"))
            .with_child(
                CommandDef::new("refresh-all", "Regenerate every library in the workspace")
                    .with_alt_name("refreshall"),
            )
            .with_child(
                CommandDef::new("update", "Update dependencies and regenerate")
                    .with_alt_name("up"),
            )
            .with_child(
                CommandDef::new("config", "Inspect or change settings")
                    .with_alt_name("cfg")
                    .with_child(CommandDef::new("get", "Print a setting"))
                    .with_child(CommandDef::new("set", "Change a setting"))
                    .with_child(CommandDef::new("list", "List all settings").with_alt_name("ls")),
            ),
    )?;
    Ok(tree)
}

use crate::error::Result;
use crate::{CommandId, CommandTree};

/// Owned, nested description of a command hierarchy.
///
/// Lets a whole tree be written as one expression and handed to
/// [`CommandTree::from_def`], which registers every command and alternate
/// name through the same checks as the incremental API.
///
/// # Examples
///
/// ```
/// use command_tree_core::{CommandDef, CommandTree};
///
/// let tree = CommandTree::from_def(
///     CommandDef::new("git", "The stupid content tracker")
///         .with_child(
///             CommandDef::new("remote", "Manage remotes")
///                 .with_alt_name("rem")
///                 .with_child(CommandDef::new("add", "Add a remote")),
///         )
///         .with_child(CommandDef::new("commit", "Record changes").with_alt_name("ci")),
/// )
/// .unwrap();
///
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.lookup(&["rem", "add"]).command.name(), "add");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandDef {
    /// Canonical name
    pub name: String,
    /// Short description
    pub description: String,
    /// Alternate names
    pub alt_names: Vec<String>,
    /// Nested commands
    pub children: Vec<CommandDef>,
}

impl CommandDef {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    /// Adds an alternate name.
    pub fn with_alt_name(mut self, alt: &str) -> Self {
        self.alt_names.push(alt.to_string());
        self
    }

    /// Adds a nested command.
    pub fn with_child(mut self, child: CommandDef) -> Self {
        self.children.push(child);
        self
    }
}

impl CommandTree {
    /// Builds a tree from a nested [`CommandDef`], root first.
    ///
    /// # Errors
    ///
    /// Fails with the first [`TreeError`](crate::TreeError) raised while
    /// registering commands or alternate names.
    pub fn from_def(def: CommandDef) -> Result<Self> {
        let CommandDef {
            name,
            description,
            alt_names,
            children,
        } = def;

        let mut tree = CommandTree::new(name, description);
        tree.attach_names(CommandId::ROOT, alt_names)?;
        for child in children {
            tree.attach(CommandId::ROOT, child)?;
        }
        Ok(tree)
    }

    fn attach(&mut self, parent: CommandId, def: CommandDef) -> Result<CommandId> {
        let id = self.add_command(parent, def.name, def.description)?;
        self.attach_names(id, def.alt_names)?;
        for child in def.children {
            self.attach(id, child)?;
        }
        Ok(id)
    }

    fn attach_names(&mut self, id: CommandId, alt_names: Vec<String>) -> Result<()> {
        for alt in alt_names {
            self.add_alt_name(id, alt)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeError;

    #[test]
    fn test_from_def_preserves_order_and_aliases() {
        let tree = CommandTree::from_def(
            CommandDef::new("root", "root command")
                .with_child(
                    CommandDef::new("child1", "child command")
                        .with_alt_name("ch1")
                        .with_child(CommandDef::new("grandchild", "grandchild command")),
                )
                .with_child(CommandDef::new("child2", "another child command")),
        )
        .unwrap();

        let names: Vec<&str> = tree.root().children().map(|c| c.name()).collect();
        assert_eq!(names, vec!["child1", "child2"]);

        let grandchild = tree.lookup(&["ch1", "grandchild"]).command;
        assert_eq!(grandchild.path(), vec!["root", "child1", "grandchild"]);
        assert_eq!(grandchild.description(), "grandchild command");
    }

    #[test]
    fn test_from_def_reports_nested_collision() {
        let result = CommandTree::from_def(
            CommandDef::new("root", "").with_child(
                CommandDef::new("remote", "")
                    .with_child(CommandDef::new("add", "").with_alt_name("a"))
                    .with_child(CommandDef::new("a", "")),
            ),
        );

        assert_eq!(
            result.unwrap_err(),
            TreeError::DuplicateName {
                parent: "remote".to_string(),
                name: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_from_def_rejects_empty_child_name() {
        let result =
            CommandTree::from_def(CommandDef::new("root", "").with_child(CommandDef::default()));

        assert_eq!(result.unwrap_err(), TreeError::EmptyName);
    }
}

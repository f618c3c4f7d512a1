//! Command tree storage and navigation.
//!
//! Nodes live in a flat arena owned by [`CommandTree`] and refer to each other
//! by [`CommandId`]. The parent link is a plain id, so nothing upstream of a
//! node is kept alive through it. Reads go through the borrowed [`Command`]
//! handle, which is what lookups return.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use crate::error::{Result, TreeError};
use crate::lookup::{self, Lookup};

/// Index of a command within its [`CommandTree`].
///
/// Ids are plain indices and carry no reference to the tree that issued
/// them. Passing an id to a different tree refers to whatever node sits at
/// that index there, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(usize);

impl CommandId {
    /// The root command of every tree.
    pub const ROOT: CommandId = CommandId(0);

    /// Returns the arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single command in the tree.
#[derive(Debug, Clone)]
pub struct CommandNode {
    name: String,
    description: String,
    alt_names: Vec<String>,
    parent: Option<CommandId>,
    children: Vec<CommandId>,
}

impl CommandNode {
    fn new(name: String, description: String, parent: Option<CommandId>) -> Self {
        Self {
            name,
            description,
            alt_names: Vec::new(),
            parent,
            children: Vec::new(),
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description, used for usage output.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Alternate names, in registration order.
    pub fn alt_names(&self) -> &[String] {
        &self.alt_names
    }

    /// Owning command, `None` for the root.
    pub fn parent(&self) -> Option<CommandId> {
        self.parent
    }

    /// Child commands, in insertion order.
    pub fn children(&self) -> &[CommandId] {
        &self.children
    }

    /// Returns `true` if `token` is the canonical name or one of the alternate
    /// names.
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.alt_names.iter().any(|alt| alt == token)
    }
}

/// Arena holding a whole command hierarchy.
///
/// A tree is assembled with [`add_command`](CommandTree::add_command) and
/// [`add_alt_name`](CommandTree::add_alt_name) (or in one go with
/// [`from_def`](CommandTree::from_def)), then only read. Both construction
/// methods reject names that collide with a sibling, so lookups never have
/// to break ties.
///
/// # Examples
///
/// ```
/// use command_tree_core::{CommandId, CommandTree};
///
/// let mut tree = CommandTree::new("tool", "Example tool");
/// let remote = tree.add_command(CommandId::ROOT, "remote", "Manage remotes").unwrap();
/// tree.add_alt_name(remote, "r").unwrap();
/// let add = tree.add_command(remote, "add", "Add a remote").unwrap();
///
/// let result = tree.lookup(&["r", "add", "--fetch", "origin"]);
/// assert_eq!(result.command.id(), add);
/// assert!(result.found);
/// assert_eq!(result.remaining, ["--fetch", "origin"]);
/// ```
#[derive(Debug, Clone)]
pub struct CommandTree {
    nodes: Vec<CommandNode>,
}

impl CommandTree {
    /// Creates a tree containing only the root command.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            nodes: vec![CommandNode::new(name.into(), description.into(), None)],
        }
    }

    /// Handle to the root command.
    pub fn root(&self) -> Command<'_> {
        Command {
            tree: self,
            id: CommandId::ROOT,
        }
    }

    /// Handle to the command with the given id, if the id is in range.
    ///
    /// Only the range is checked: an id issued by another tree resolves to
    /// this tree's node at the same index.
    pub fn get(&self, id: CommandId) -> Option<Command<'_>> {
        (id.index() < self.len()).then_some(Command { tree: self, id })
    }

    /// Number of commands, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registers a new command under `parent` and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyName`] for an empty name,
    /// [`TreeError::UnknownCommand`] if `parent` is not in this tree, and
    /// [`TreeError::DuplicateName`] if a sibling already answers to `name`.
    pub fn add_command(
        &mut self,
        parent: CommandId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<CommandId> {
        let name = name.into();
        if name.is_empty() {
            return Err(TreeError::EmptyName);
        }
        self.node(parent)?;
        if self.name_taken(parent, &name, None) {
            return Err(self.duplicate(parent, name));
        }

        let id = CommandId(self.nodes.len());
        debug!(parent = %self.nodes[parent.0].name, command = %name, "registering command");
        self.nodes
            .push(CommandNode::new(name, description.into(), Some(parent)));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Registers an alternate name for `id`.
    ///
    /// Returns `&mut Self` so registrations can be chained. Adding the
    /// command's own name or an alternate name it already has is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyName`] for an empty name,
    /// [`TreeError::UnknownCommand`] if `id` is not in this tree, and
    /// [`TreeError::DuplicateName`] if a sibling already answers to `alt`.
    pub fn add_alt_name(&mut self, id: CommandId, alt: impl Into<String>) -> Result<&mut Self> {
        let alt = alt.into();
        if alt.is_empty() {
            return Err(TreeError::EmptyName);
        }
        let (already_named, parent) = {
            let node = self.node(id)?;
            (node.matches(&alt), node.parent)
        };
        if already_named {
            return Ok(self);
        }
        if let Some(parent) = parent {
            if self.name_taken(parent, &alt, Some(id)) {
                return Err(self.duplicate(parent, alt));
            }
        }

        debug!(command = %self.nodes[id.0].name, alt = %alt, "registering alternate name");
        self.nodes[id.0].alt_names.push(alt);
        Ok(self)
    }

    /// Resolves `args` starting from the root. See [`Command::lookup`].
    pub fn lookup<'a, S: AsRef<str>>(&self, args: &'a [S]) -> Lookup<'_, 'a, S> {
        self.root().lookup(args)
    }

    fn node(&self, id: CommandId) -> Result<&CommandNode> {
        self.nodes.get(id.0).ok_or(TreeError::UnknownCommand(id))
    }

    fn name_taken(&self, parent: CommandId, name: &str, except: Option<CommandId>) -> bool {
        self.nodes[parent.0]
            .children
            .iter()
            .filter(|&&child| Some(child) != except)
            .any(|child| self.nodes[child.0].matches(name))
    }

    fn duplicate(&self, parent: CommandId, name: String) -> TreeError {
        TreeError::DuplicateName {
            parent: self.nodes[parent.0].name.clone(),
            name,
        }
    }
}

impl Serialize for CommandTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.root().serialize(serializer)
    }
}

/// Borrowed handle to one command of a [`CommandTree`].
///
/// Handles are cheap to copy. Two handles are equal when they point at the
/// same node of the same tree.
#[derive(Clone, Copy)]
pub struct Command<'t> {
    tree: &'t CommandTree,
    id: CommandId,
}

impl<'t> Command<'t> {
    /// Id of this command within its tree.
    pub fn id(&self) -> CommandId {
        self.id
    }

    /// Underlying node data.
    pub fn node(&self) -> &'t CommandNode {
        &self.tree.nodes[self.id.0]
    }

    pub fn name(&self) -> &'t str {
        &self.node().name
    }

    pub fn description(&self) -> &'t str {
        &self.node().description
    }

    pub fn alt_names(&self) -> &'t [String] {
        &self.node().alt_names
    }

    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// Owning command, `None` for the root.
    pub fn parent(&self) -> Option<Command<'t>> {
        let tree = self.tree;
        self.node().parent.map(|id| Command { tree, id })
    }

    /// Child commands, in insertion order.
    pub fn children(&self) -> impl Iterator<Item = Command<'t>> + 't {
        let tree = self.tree;
        self.node()
            .children
            .iter()
            .map(move |&id| Command { tree, id })
    }

    /// First child whose name or alternate name equals `token`.
    pub fn find_child(&self, token: &str) -> Option<Command<'t>> {
        self.children().find(|child| child.matches(token))
    }

    /// See [`CommandNode::matches`].
    pub fn matches(&self, token: &str) -> bool {
        self.node().matches(token)
    }

    /// Canonical names from the root down to this command.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree_core::{CommandId, CommandTree};
    ///
    /// let mut tree = CommandTree::new("tool", "");
    /// let remote = tree.add_command(CommandId::ROOT, "remote", "").unwrap();
    /// let add = tree.add_command(remote, "add", "").unwrap();
    ///
    /// assert_eq!(tree.get(add).unwrap().path(), vec!["tool", "remote", "add"]);
    /// ```
    pub fn path(&self) -> Vec<&'t str> {
        let mut names = vec![self.name()];
        let mut current = self.parent();
        while let Some(command) = current {
            names.push(command.name());
            current = command.parent();
        }
        names.reverse();
        names
    }

    /// Walks the subtree below this command following `args`.
    ///
    /// Descends one level per token whose text names a child (canonically or
    /// through an alternate name). Descent stops at the first token starting
    /// with `-`, which reports `found = true`, or at the first token no child
    /// answers to, which reports `found = false`. Either way the stopping
    /// token and everything after it are returned as
    /// [`remaining`](Lookup::remaining), and the deepest command reached is
    /// returned as [`command`](Lookup::command).
    ///
    /// # Examples
    ///
    /// ```
    /// use command_tree_core::{CommandId, CommandTree};
    ///
    /// let mut tree = CommandTree::new("tool", "");
    /// let build = tree.add_command(CommandId::ROOT, "build", "").unwrap();
    ///
    /// let result = tree.lookup(&["build", "release"]);
    /// assert_eq!(result.command.id(), build);
    /// assert!(!result.found);
    /// assert_eq!(result.offending_token(), Some("release"));
    /// ```
    pub fn lookup<'a, S: AsRef<str>>(&self, args: &'a [S]) -> Lookup<'t, 'a, S> {
        lookup::resolve(*self, args)
    }
}

impl PartialEq for Command<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Command<'_> {}

impl fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}

impl Serialize for Command<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let children: Vec<Command<'_>> = self.children().collect();
        let mut state = serializer.serialize_struct("Command", 4)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("description", self.description())?;
        state.serialize_field("alt_names", self.alt_names())?;
        state.serialize_field("children", &children)?;
        state.end()
    }
}

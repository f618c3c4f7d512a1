//! Error types for command tree construction.
//!
//! Lookup never fails; only assembling a tree can, when a new name would break
//! sibling uniqueness or refer to a node that does not exist.

use thiserror::Error;

use crate::CommandId;

/// Errors that can occur while building a [`CommandTree`](crate::CommandTree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Command names and alternate names must be non-empty.
    #[error("command name cannot be empty")]
    EmptyName,

    /// The name (or alternate name) is already used by a sibling.
    #[error("duplicate command name under '{parent}': {name}")]
    DuplicateName {
        /// Canonical name of the parent whose children collide.
        parent: String,
        /// The colliding name.
        name: String,
    },

    /// The id does not refer to a node of this tree.
    #[error("unknown command id: {0}")]
    UnknownCommand(CommandId),
}

/// Convenience alias for results with [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;

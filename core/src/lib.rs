//! Hierarchical command lookup for command-line tools.
//!
//! This crate models a tool's command hierarchy and resolves argument vectors
//! against it:
//!
//! - [`CommandTree`]: arena owning every command; built once, then shared
//!   read-only.
//! - [`Command`]: borrowed handle to one command, used for navigation and
//!   returned by lookups.
//! - [`CommandDef`]: nested builder for assembling a tree in one expression.
//! - [`Lookup`]: the deepest command selected by the arguments, whether the
//!   path resolved, and the tokens left for flag parsing.
//!
//! Lookup walks children left to right, matching each token against child
//! names and alternate names. A token starting with `-` ends the command path;
//! a token no child answers to stops resolution with `found = false`. Flag
//! parsing and execution are left to the caller, which receives the
//! unconsumed tokens untouched.
//!
//! [`render_usage`] and [`unknown_command_message`] produce the text a CLI
//! prints when a lookup fails.
//!
//! # Example
//!
//! ```
//! use command_tree_core::*;
//!
//! let tree = CommandTree::from_def(
//!     CommandDef::new("root", "root command")
//!         .with_child(
//!             CommandDef::new("child1", "child command")
//!                 .with_alt_name("ch1")
//!                 .with_child(CommandDef::new("grandchild", "grandchild command")),
//!         )
//!         .with_child(CommandDef::new("child2", "another child command")),
//! )
//! .unwrap();
//!
//! let result = tree.lookup(&["ch1", "grandchild"]);
//! assert!(result.found);
//! assert_eq!(result.command.name(), "grandchild");
//!
//! let result = tree.lookup(&["child2", "-flag", "value"]);
//! assert!(result.found);
//! assert_eq!(result.command.name(), "child2");
//! assert_eq!(result.remaining, ["-flag", "value"]);
//!
//! let result = tree.lookup(&["child2", "badparam"]);
//! assert!(!result.found);
//! assert_eq!(result.offending_token(), Some("badparam"));
//! ```

mod def;
mod error;
mod lookup;
mod tree;
mod usage;

pub use def::CommandDef;
pub use error::{Result, TreeError};
pub use lookup::{FLAG_SENTINEL, Lookup};
pub use tree::{Command, CommandId, CommandNode, CommandTree};
pub use usage::{render_usage, unknown_command_message};

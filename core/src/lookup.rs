//! Resolution of argument tokens against a command tree.

use crate::Command;

/// Leading character that marks a token as flag syntax.
pub const FLAG_SENTINEL: char = '-';

/// Outcome of [`Command::lookup`].
///
/// `command` is always a real node: the deepest one reached, even when
/// `found` is `false`. `remaining` borrows the unconsumed suffix of the
/// input.
#[derive(Debug, PartialEq, Eq)]
pub struct Lookup<'t, 'a, S> {
    /// Deepest command reached.
    pub command: Command<'t>,
    /// `false` when descent stopped on a token that is neither a flag nor a
    /// child of `command`.
    pub found: bool,
    /// Tokens left for the flag-parsing stage, starting at the token that
    /// stopped descent.
    pub remaining: &'a [S],
}

// Manual impls: the fields are references, so no `S: Clone` bound is needed.
impl<S> Clone for Lookup<'_, '_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Lookup<'_, '_, S> {}

impl<'t, 'a, S: AsRef<str>> Lookup<'t, 'a, S> {
    /// The token no child answered to, if resolution failed.
    pub fn offending_token(&self) -> Option<&'a str> {
        if self.found {
            return None;
        }
        self.remaining.first().map(AsRef::as_ref)
    }

    /// `true` when every token named a command.
    pub fn is_exact(&self) -> bool {
        self.found && self.remaining.is_empty()
    }
}

pub(crate) fn resolve<'t, 'a, S: AsRef<str>>(
    start: Command<'t>,
    args: &'a [S],
) -> Lookup<'t, 'a, S> {
    let mut current = start;

    for (index, arg) in args.iter().enumerate() {
        let token = arg.as_ref();
        // Flags end the command path before any name matching.
        if token.starts_with(FLAG_SENTINEL) {
            return Lookup {
                command: current,
                found: true,
                remaining: &args[index..],
            };
        }
        match current.find_child(token) {
            Some(child) => current = child,
            None => {
                return Lookup {
                    command: current,
                    found: false,
                    remaining: &args[index..],
                };
            }
        }
    }

    Lookup {
        command: current,
        found: true,
        remaining: &args[args.len()..],
    }
}

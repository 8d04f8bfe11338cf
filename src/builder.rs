//! The builder root: a tiny factory bound to an initial slot hint.

use crate::commands::CommandState;
use crate::flags::CommandFlags;
use crate::slot::{INIT_SLOT, NO_SLOT};

/// The slot hint a builder starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialSlot {
    /// No key seen yet; the first key determines the slot.
    InitSlot,
    /// The command targets no key (database-level commands); key slots become
    /// routing hints rather than requirements.
    NoSlot,
}

/// Factory for per-command builders.
///
/// Every command method on this type lives next to its state machine in
/// [`crate::commands`]; the root itself only carries the slot hint forward.
///
/// ```
/// use redis_cmds::{Builder, InitialSlot};
///
/// let cmd = Builder::new(InitialSlot::InitSlot)
///     .get()
///     .key("my_key")
///     .build();
/// assert_eq!(cmd.tokens(), &["GET", "my_key"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Builder {
    pub(crate) ks: u16,
}

impl Builder {
    /// Creates a builder root with the given slot hint.
    pub fn new(hint: InitialSlot) -> Builder {
        let ks = match hint {
            InitialSlot::InitSlot => INIT_SLOT,
            InitialSlot::NoSlot => NO_SLOT,
        };
        Builder { ks }
    }

    /// Opens a command's state machine: fresh buffer from the pool, the flag
    /// word fixed at construction, and the command name as first token(s).
    pub(crate) fn cmd(self, flags: CommandFlags, name: &[&str]) -> CommandState {
        let mut state = CommandState::new(self.ks, flags);
        for part in name {
            state = state.arg(*part);
        }
        state
    }
}

//! Per-command type-state builders.
//!
//! Each Redis command is modeled as a DAG of states where a state's methods
//! are exactly the tokens that may legally follow.  States own the in-flight
//! token buffer, the accumulated slot word, and the flag word; ownership
//! moves linearly through the chain until a terminal yields a
//! [`Completed`](crate::cmd::Completed) (or
//! [`Cacheable`](crate::cmd::Cacheable) on read-only paths).

#[macro_use]
mod macros;

pub mod ai;
pub mod generic;
pub mod geo;
pub mod hyperloglog;
pub mod json;
pub mod list;
pub mod pubsub;
pub mod scripting;
pub mod search;
pub mod sorted_set;
pub mod stream;
pub mod string;
pub mod timeseries;

use crate::buffer;
use crate::cmd::{Cacheable, Completed};
use crate::flags::CommandFlags;
use crate::slot;

/// The moving parts shared by every builder state: the token buffer, the
/// flag word fixed at construction, and the slot word accumulated per key.
#[derive(Debug)]
pub(crate) struct CommandState {
    buf: buffer::TokenBuffer,
    flags: CommandFlags,
    ks: u16,
}

impl CommandState {
    pub(crate) fn new(ks: u16, flags: CommandFlags) -> CommandState {
        CommandState {
            buf: buffer::fetch(),
            flags,
            ks,
        }
    }

    /// Appends one literal token.
    #[inline]
    pub(crate) fn arg(mut self, token: impl Into<String>) -> CommandState {
        self.buf.push(token.into());
        self
    }

    /// Appends an integer token in canonical base-10 form.
    #[inline]
    pub(crate) fn int(mut self, v: i64) -> CommandState {
        self.buf.push(itoa::Buffer::new().format(v).to_string());
        self
    }

    /// Appends a float token in shortest round-trip form.
    #[inline]
    pub(crate) fn float(mut self, v: f64) -> CommandState {
        self.buf.push(ryu::Buffer::new().format(v).to_string());
        self
    }

    /// Folds extra classification bits in.  Used by options that change how
    /// the command behaves on the wire, such as `XREAD BLOCK`.
    #[inline]
    pub(crate) fn flag(mut self, flags: CommandFlags) -> CommandState {
        self.flags = self.flags | flags;
        self
    }

    /// Appends a key token, folding its slot into the carrier.
    #[inline]
    pub(crate) fn key(mut self, key: impl Into<String>) -> CommandState {
        let key = key.into();
        self.ks = slot::accumulate(self.ks, &key);
        self.buf.push(key);
        self
    }

    /// Appends several key tokens.
    pub(crate) fn keys<I, K>(mut self, keys: I) -> CommandState
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        for key in keys {
            self = self.key(key);
        }
        self
    }

    /// Appends several literal tokens.
    pub(crate) fn args<I, T>(mut self, tokens: I) -> CommandState
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for token in tokens {
            self = self.arg(token);
        }
        self
    }

    /// In-place variants used by the slot-grouped assemblers, which hold
    /// several states at once and cannot thread ownership through a chain.
    pub(crate) fn push_arg(&mut self, token: String) {
        self.buf.push(token);
    }

    pub(crate) fn push_key(&mut self, key: String) {
        self.ks = slot::accumulate(self.ks, &key);
        self.buf.push(key);
    }

    pub(crate) fn into_completed(mut self) -> Completed {
        self.buf.seal();
        Completed::new(self.buf, self.flags, self.ks)
    }

    pub(crate) fn into_cacheable(mut self) -> Cacheable {
        self.buf.seal();
        Cacheable(Completed::new(self.buf, self.flags, self.ks))
    }
}

//! Completed and cacheable command values, the shapes a transport consumes.

use std::sync::Arc;

use crate::buffer::{self, TokenBuffer};
use crate::flags::CommandFlags;
use crate::slot::{self, NO_SLOT};

/// A fully built command: an immutable token sequence plus its flag word and
/// cluster slot word.
///
/// Cloning is cheap; clones share the underlying token buffer.  The value is
/// a read-only snapshot and may cross task boundaries freely.
#[derive(Debug, Clone, Default)]
pub struct Completed {
    pub(crate) buf: Arc<TokenBuffer>,
    pub(crate) flags: CommandFlags,
    pub(crate) slot: u16,
}

impl Completed {
    pub(crate) fn new(buf: TokenBuffer, flags: CommandFlags, slot: u16) -> Completed {
        Completed {
            buf: Arc::new(buf),
            flags,
            slot,
        }
    }

    /// The serialized argument vector, starting with the command name.
    #[inline]
    pub fn tokens(&self) -> &[String] {
        self.buf.tokens()
    }

    /// The effective routing slot.  [`INIT_SLOT`](crate::slot::INIT_SLOT)
    /// means any node, [`NO_SLOT`](crate::slot::NO_SLOT) means the command
    /// carries no key.
    #[inline]
    pub fn slot(&self) -> u16 {
        self.slot
    }

    /// The classification word.
    #[inline]
    pub fn flags(&self) -> CommandFlags {
        self.flags
    }

    /// Whether this value was never produced by a builder.  This is the sole
    /// legal predicate on a possibly-default `Completed`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Permits auto-pipelining of this command.  Idempotent.
    #[inline]
    pub fn to_pipe(mut self) -> Completed {
        self.flags = self.flags | CommandFlags::PIPE;
        self
    }

    /// Marks the command as blocking its connection.  Idempotent.
    #[inline]
    pub fn to_block(mut self) -> Completed {
        self.flags = self.flags | CommandFlags::BLOCK;
        self
    }

    /// Rebinds the routing slot to `key`'s slot.
    ///
    /// A `NO_SLOT` carrier keeps its marker and gains the slot as a routing
    /// hint only.
    #[inline]
    pub fn with_slot(mut self, key: &str) -> Completed {
        if self.slot & NO_SLOT == NO_SLOT {
            self.slot = NO_SLOT | slot::slot(key);
        } else {
            self.slot = slot::slot(key);
        }
        self
    }

    /// Retains the token buffer forever, so the value can outlive arbitrarily
    /// many request cycles (predefined constants, cached commands).
    #[inline]
    pub fn pin(self) -> Completed {
        self.buf.pin();
        self
    }
}

/// A completed, read-only command that can participate in server-assisted
/// client-side caching.
///
/// Only read-only builder terminals produce this type.
#[derive(Debug, Clone)]
pub struct Cacheable(pub(crate) Completed);

impl Cacheable {
    /// The serialized argument vector.
    #[inline]
    pub fn tokens(&self) -> &[String] {
        self.0.tokens()
    }

    /// The effective routing slot.
    #[inline]
    pub fn slot(&self) -> u16 {
        self.0.slot()
    }

    /// The classification word.
    #[inline]
    pub fn flags(&self) -> CommandFlags {
        self.0.flags()
    }

    /// Borrows the underlying completed command for framing.
    #[inline]
    pub fn as_completed(&self) -> &Completed {
        &self.0
    }

    /// Converts into the plain completed shape, dropping cacheability.
    #[inline]
    pub fn into_completed(self) -> Completed {
        self.0
    }

    /// See [`Completed::pin`].
    #[inline]
    pub fn pin(self) -> Cacheable {
        Cacheable(self.0.pin())
    }

    /// Derives the cache scope of this command: the key that server-assisted
    /// invalidation tracks, and a fingerprint of every remaining token.
    ///
    /// Two-token commands short-circuit to `(KEY, CMD)`.  Read-only script
    /// invocations key at token index 3 and require a literal numkeys of 1.
    pub fn cache_key(&self) -> (&str, String) {
        let tokens = self.tokens();
        if tokens.len() == 2 {
            return (&tokens[1], tokens[0].clone());
        }
        let key_pos = if self.flags().is_script_ro() {
            if tokens[2] != "1" {
                panic!("client side caching for scripting only supports numkeys=1");
            }
            3
        } else {
            1
        };
        let len = tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != key_pos)
            .map(|(_, t)| t.len())
            .sum();
        let mut cmd = String::with_capacity(len);
        for (i, token) in tokens.iter().enumerate() {
            if i != key_pos {
                cmd.push_str(token);
            }
        }
        (&tokens[key_pos], cmd)
    }

    /// The per-key sub-command fingerprint of an MGET-family command.
    ///
    /// JSON.MGET concatenates "JSON.GET" with the trailing path, without a
    /// separator; downstream cache indexing relies on that exact string.
    pub fn mget_cache_cmd(&self) -> String {
        let tokens = self.tokens();
        if tokens[0].starts_with('J') {
            let mut cmd = String::from("JSON.GET");
            cmd.push_str(&tokens[tokens.len() - 1]);
            cmd
        } else {
            String::from("GET")
        }
    }

    /// The `i`-th key of an MGET-family command.
    #[inline]
    pub fn mget_cache_key(&self, i: usize) -> &str {
        &self.tokens()[i + 1]
    }
}

/// Returns a command's token buffer to the process-wide pool.
///
/// The transport is the sole authority to call this, once it has finished
/// serializing the tokens.  Nothing happens while other handles to the same
/// buffer are alive, or when the buffer was pinned.
pub fn release(cmd: Completed) {
    if let Ok(buf) = Arc::try_unwrap(cmd.buf) {
        buffer::recycle(buf);
    }
}

/// [`release`] for cacheable commands.
pub fn release_cacheable(cmd: Cacheable) {
    release(cmd.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::INIT_SLOT;

    fn completed(tokens: &[&str], flags: CommandFlags, slot: u16) -> Completed {
        let mut buf = TokenBuffer::default();
        for t in tokens {
            buf.push((*t).to_string());
        }
        buf.seal();
        Completed::new(buf, flags, slot)
    }

    #[test]
    fn default_is_empty() {
        assert!(Completed::default().is_empty());
        assert!(!completed(&["PING"], CommandFlags::NONE, NO_SLOT).is_empty());
    }

    #[test]
    fn pipe_and_block_are_idempotent_and_commute() {
        let c = completed(&["GET", "k"], CommandFlags::READONLY, INIT_SLOT);
        let a = c.clone().to_pipe().to_block();
        let b = c.clone().to_block().to_pipe();
        assert_eq!(a.flags(), b.flags());
        assert_eq!(a.flags(), a.clone().to_pipe().flags());
        assert!(a.flags().is_pipe());
        assert!(a.flags().is_block());
    }

    #[test]
    fn with_slot_replaces_real_slot() {
        let c = completed(&["GET", "k"], CommandFlags::READONLY, crate::slot::slot("k"));
        let c = c.with_slot("foo");
        assert_eq!(c.slot(), crate::slot::slot("foo"));
        // Idempotent.
        assert_eq!(c.clone().with_slot("foo").slot(), c.slot());
    }

    #[test]
    fn with_slot_preserves_no_slot_marker() {
        let c = completed(&["WAIT", "0", "0"], CommandFlags::NONE, NO_SLOT);
        let c = c.with_slot("foo");
        assert_eq!(c.slot(), NO_SLOT | crate::slot::slot("foo"));
    }

    #[test]
    fn cache_key_two_token_fast_path() {
        let c = Cacheable(completed(&["GET", "k"], CommandFlags::READONLY, INIT_SLOT));
        let (key, cmd) = c.cache_key();
        assert_eq!(key, "k");
        assert_eq!(cmd, "GET");
    }

    #[test]
    fn cache_key_skips_key_token() {
        let c = Cacheable(completed(
            &["GETRANGE", "k", "0", "3"],
            CommandFlags::READONLY,
            INIT_SLOT,
        ));
        let (key, cmd) = c.cache_key();
        assert_eq!(key, "k");
        assert_eq!(cmd, "GETRANGE03");
    }

    #[test]
    fn cache_key_scripting_keys_at_index_three() {
        let c = Cacheable(completed(
            &["EVAL_RO", "script", "1", "k", "a"],
            CommandFlags::SCRIPT_RO,
            INIT_SLOT,
        ));
        let (key, cmd) = c.cache_key();
        assert_eq!(key, "k");
        assert_eq!(cmd, "EVAL_ROscript1a");
    }

    #[test]
    #[should_panic(expected = "client side caching for scripting only supports numkeys=1")]
    fn cache_key_scripting_rejects_numkeys_not_one() {
        let c = Cacheable(completed(
            &["EVAL_RO", "script", "2", "k1", "k2"],
            CommandFlags::SCRIPT_RO,
            INIT_SLOT,
        ));
        c.cache_key();
    }

    #[test]
    fn mget_cache_helpers() {
        let c = Cacheable(completed(
            &["MGET", "a", "b"],
            CommandFlags::MT_GET,
            INIT_SLOT,
        ));
        assert_eq!(c.mget_cache_cmd(), "GET");
        assert_eq!(c.mget_cache_key(0), "a");
        assert_eq!(c.mget_cache_key(1), "b");

        let j = Cacheable(completed(
            &["JSON.MGET", "a", "b", "$.path"],
            CommandFlags::MT_GET,
            INIT_SLOT,
        ));
        // No separator between the verb and the path.
        assert_eq!(j.mget_cache_cmd(), "JSON.GET$.path");
        assert_eq!(j.mget_cache_key(0), "a");
    }

    #[test]
    fn release_is_a_noop_while_shared() {
        let c = completed(&["GET", "k"], CommandFlags::READONLY, INIT_SLOT);
        let held = c.clone();
        release(c);
        // The shared handle still sees the tokens.
        assert_eq!(held.tokens(), &["GET", "k"]);
    }
}

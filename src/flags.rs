//! The packed 16-bit classification word attached to every command.
//!
//! Several masks deliberately overlap so that compound predicates test with a
//! single equality mask: every subscribe-family command is also read-only and
//! pipelineable, every unsubscribe is also a subscribe-family command, and so
//! on.  Predicates therefore use `word & mask == mask`, never a plain bit
//! test.

use std::ops::BitOr;

/// Classification flags of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandFlags(u16);

impl CommandFlags {
    /// No classification; the command is a plain write.
    pub const NONE: CommandFlags = CommandFlags(0);

    /// The command is the client-side-caching opt-in hint.
    pub const OPT_IN: CommandFlags = CommandFlags(1 << 15);

    /// The command blocks the connection until the server answers.
    pub const BLOCK: CommandFlags = CommandFlags(1 << 14);

    /// The command never writes.
    pub const READONLY: CommandFlags = CommandFlags(1 << 13);

    /// Auto-pipelining is allowed despite an otherwise blocking shape.
    pub const PIPE: CommandFlags = CommandFlags(1 << 8);

    /// Subscribe-family: produces no paired reply, read-only, pipelineable.
    pub const NO_REPLY: CommandFlags =
        CommandFlags(1 << 12 | Self::READONLY.0 | Self::PIPE.0);

    /// The MGET family, cacheable as several single-key GETs.
    pub const MT_GET: CommandFlags = CommandFlags(1 << 11 | Self::READONLY.0);

    /// Read-only scripting with single-key cacheability.
    pub const SCRIPT_RO: CommandFlags = CommandFlags(1 << 10 | Self::READONLY.0);

    /// Strictly the unsubscribe family.
    pub const UNSUB: CommandFlags = CommandFlags(1 << 9 | Self::NO_REPLY.0);

    /// The raw flag word.
    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    fn contains(self, mask: CommandFlags) -> bool {
        self.0 & mask.0 == mask.0
    }

    /// The command participates in caching opt-in.
    #[inline]
    pub fn is_opt_in(self) -> bool {
        self.contains(Self::OPT_IN)
    }

    /// The command blocks its connection.
    #[inline]
    pub fn is_block(self) -> bool {
        self.contains(Self::BLOCK)
    }

    /// The command produces no paired reply.
    #[inline]
    pub fn is_no_reply(self) -> bool {
        self.contains(Self::NO_REPLY)
    }

    /// The command belongs to the unsubscribe family.
    #[inline]
    pub fn is_unsub(self) -> bool {
        self.contains(Self::UNSUB)
    }

    /// The command never writes.
    #[inline]
    pub fn is_read_only(self) -> bool {
        self.contains(Self::READONLY)
    }

    /// The command may write.
    #[inline]
    pub fn is_write(self) -> bool {
        !self.is_read_only()
    }

    /// The command may be auto-pipelined.
    #[inline]
    pub fn is_pipe(self) -> bool {
        self.contains(Self::PIPE)
    }

    /// The command is an MGET-family multi-key read.
    #[inline]
    pub fn is_mt_get(self) -> bool {
        self.contains(Self::MT_GET)
    }

    /// The command is a cacheable read-only script invocation.
    #[inline]
    pub fn is_script_ro(self) -> bool {
        self.contains(Self::SCRIPT_RO)
    }
}

impl BitOr for CommandFlags {
    type Output = CommandFlags;

    #[inline]
    fn bitor(self, rhs: CommandFlags) -> CommandFlags {
        CommandFlags(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_masks_imply_readonly() {
        assert!(CommandFlags::NO_REPLY.is_read_only());
        assert!(CommandFlags::MT_GET.is_read_only());
        assert!(CommandFlags::SCRIPT_RO.is_read_only());
        assert!(CommandFlags::UNSUB.is_read_only());
    }

    #[test]
    fn unsub_implies_no_reply_and_pipe() {
        assert!(CommandFlags::UNSUB.is_no_reply());
        assert!(CommandFlags::UNSUB.is_pipe());
        assert!(!CommandFlags::NO_REPLY.is_unsub());
    }

    #[test]
    fn readonly_is_an_equality_mask() {
        // BLOCK alone shares no bits with READONLY.
        assert!(CommandFlags::BLOCK.is_write());
        assert!(CommandFlags::NONE.is_write());
        assert!((CommandFlags::READONLY | CommandFlags::BLOCK).is_read_only());
    }

    #[test]
    fn pipe_alone_is_not_no_reply() {
        assert!(CommandFlags::PIPE.is_pipe());
        assert!(!CommandFlags::PIPE.is_no_reply());
        assert!(!CommandFlags::READONLY.is_no_reply());
    }
}

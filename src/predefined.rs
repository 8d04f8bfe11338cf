//! Fixed command constants.
//!
//! These never go through a builder: their token buffers are materialized
//! once, pinned so they are never recycled, and handed out as cheap clones.

use std::sync::LazyLock;

use crate::buffer::TokenBuffer;
use crate::cmd::{Cacheable, Completed};
use crate::flags::CommandFlags;
use crate::slot::NO_SLOT;

fn fixed(tokens: &[&str], flags: CommandFlags) -> Completed {
    let mut buf = TokenBuffer::default();
    for token in tokens {
        buf.push((*token).to_string());
    }
    buf.seal();
    Completed::new(buf, flags, NO_SLOT).pin()
}

/// `PING`
pub static PING: LazyLock<Completed> = LazyLock::new(|| fixed(&["PING"], CommandFlags::NONE));

/// `MULTI`
pub static MULTI: LazyLock<Completed> = LazyLock::new(|| fixed(&["MULTI"], CommandFlags::NONE));

/// `EXEC`
pub static EXEC: LazyLock<Completed> = LazyLock::new(|| fixed(&["EXEC"], CommandFlags::NONE));

/// `DISCARD`
pub static DISCARD: LazyLock<Completed> =
    LazyLock::new(|| fixed(&["DISCARD"], CommandFlags::NONE));

/// `ASKING`
pub static ASKING: LazyLock<Completed> = LazyLock::new(|| fixed(&["ASKING"], CommandFlags::NONE));

/// `ROLE`; safe to pipeline during topology probing.
pub static ROLE: LazyLock<Completed> = LazyLock::new(|| fixed(&["ROLE"], CommandFlags::PIPE));

/// `CLUSTER SLOTS`
pub static CLUSTER_SLOTS: LazyLock<Completed> =
    LazyLock::new(|| fixed(&["CLUSTER", "SLOTS"], CommandFlags::PIPE));

/// `CLUSTER SHARDS`
pub static CLUSTER_SHARDS: LazyLock<Completed> =
    LazyLock::new(|| fixed(&["CLUSTER", "SHARDS"], CommandFlags::PIPE));

/// `CLIENT CACHING YES`: the per-command caching opt-in prefix.
pub static OPT_IN: LazyLock<Cacheable> = LazyLock::new(|| {
    Cacheable(fixed(&["CLIENT", "CACHING", "YES"], CommandFlags::OPT_IN))
});

/// `ECHO ""`: substituted for the opt-in prefix on connections where the
/// caching mode makes the opt-in a no-op, keeping reply counts aligned.
pub static OPT_IN_NOP: LazyLock<Cacheable> =
    LazyLock::new(|| Cacheable(fixed(&["ECHO", ""], CommandFlags::OPT_IN)));

/// `UNSUBSCRIBE` (all channels)
pub static UNSUBSCRIBE: LazyLock<Completed> =
    LazyLock::new(|| fixed(&["UNSUBSCRIBE"], CommandFlags::UNSUB));

/// `PUNSUBSCRIBE` (all patterns)
pub static PUNSUBSCRIBE: LazyLock<Completed> =
    LazyLock::new(|| fixed(&["PUNSUBSCRIBE"], CommandFlags::UNSUB));

/// `SUNSUBSCRIBE` (all shard channels)
pub static SUNSUBSCRIBE: LazyLock<Completed> =
    LazyLock::new(|| fixed(&["SUNSUBSCRIBE"], CommandFlags::UNSUB));

const SENTINEL_CHANNELS: &[&str] = &[
    "+sentinel",
    "+slave",
    "-sdown",
    "+sdown",
    "+switch-master",
    "+reboot",
];

/// The sentinel event subscription issued on every sentinel connection.
pub static SENTINEL_SUBSCRIBE: LazyLock<Completed> = LazyLock::new(|| {
    let mut tokens = vec!["SUBSCRIBE"];
    tokens.extend_from_slice(SENTINEL_CHANNELS);
    fixed(&tokens, CommandFlags::NO_REPLY)
});

/// Tears down the sentinel event subscription.
pub static SENTINEL_UNSUBSCRIBE: LazyLock<Completed> = LazyLock::new(|| {
    let mut tokens = vec!["UNSUBSCRIBE"];
    tokens.extend_from_slice(SENTINEL_CHANNELS);
    fixed(&tokens, CommandFlags::UNSUB)
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::release;

    #[test]
    fn fixed_commands_have_expected_shape() {
        assert_eq!(PING.tokens(), &["PING"]);
        assert_eq!(CLUSTER_SLOTS.tokens(), &["CLUSTER", "SLOTS"]);
        assert_eq!(CLUSTER_SHARDS.tokens(), &["CLUSTER", "SHARDS"]);
        assert_eq!(ROLE.tokens(), &["ROLE"]);
        assert!(ROLE.flags().is_pipe());
        assert_eq!(PING.slot(), NO_SLOT);
    }

    #[test]
    fn opt_in_flags() {
        assert_eq!(OPT_IN.tokens(), &["CLIENT", "CACHING", "YES"]);
        assert!(OPT_IN.flags().is_opt_in());
        assert_eq!(OPT_IN_NOP.tokens(), &["ECHO", ""]);
        assert!(OPT_IN_NOP.flags().is_opt_in());
    }

    #[test]
    fn unsubscribe_family_classification() {
        for cmd in [&UNSUBSCRIBE, &PUNSUBSCRIBE, &SUNSUBSCRIBE] {
            assert!(cmd.flags().is_unsub());
            assert!(cmd.flags().is_no_reply());
            assert!(cmd.flags().is_read_only());
        }
        assert!(SENTINEL_SUBSCRIBE.flags().is_no_reply());
        assert!(!SENTINEL_SUBSCRIBE.flags().is_unsub());
        assert!(SENTINEL_UNSUBSCRIBE.flags().is_unsub());
    }

    #[test]
    fn releasing_a_constant_never_recycles_it() {
        let ping = PING.clone();
        release(ping);
        // The static still holds its tokens after a release cycle.
        assert_eq!(PING.tokens(), &["PING"]);
    }
}

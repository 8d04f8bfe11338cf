//! Cluster key slot derivation.
//!
//! A key hashes to one of 16384 slots via CRC16-CCITT (XMODEM).  When the key
//! contains a non-empty `{tag}` section, only the tag participates in the
//! hash, which is how callers force several keys onto one shard.

pub(crate) const SLOT_SIZE: u16 = 16384;

/// Slot-word sentinel: no key has been seen yet, any slot is acceptable.
pub const INIT_SLOT: u16 = 1 << 14;

/// Slot-word sentinel: the command carries no key and may be routed freely.
/// A key slot OR-ed into this word acts as a routing hint, not a requirement.
pub const NO_SLOT: u16 = 1 << 15;

/// Computes the cluster slot of a key.
pub fn slot(key: &str) -> u16 {
    let key = key.as_bytes();
    let hashed = hashtag(key).unwrap_or(key);
    crc16::State::<crc16::XMODEM>::calculate(hashed) % SLOT_SIZE
}

fn hashtag(key: &[u8]) -> Option<&[u8]> {
    let open = key.iter().position(|b| *b == b'{')?;
    let close = key[open..].iter().position(|b| *b == b'}')?;
    let tag = &key[open + 1..open + close];
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

/// Merges the slot of a newly appended key into the slot accumulated so far.
///
/// Divergent slots within one command are a bug in the calling code: the
/// command could never be dispatched to a single node.
pub(crate) fn check(prev: u16, next: u16) -> u16 {
    if prev == INIT_SLOT || prev == next {
        next
    } else {
        panic!("multi key command with different key slots are not allowed")
    }
}

/// Folds one key into a builder's slot carrier.
///
/// Carriers created with the no-slot hint collect the key slot as a routing
/// hint only; everything else goes through the merge check.
pub(crate) fn accumulate(carrier: u16, key: &str) -> u16 {
    if carrier & NO_SLOT == NO_SLOT {
        NO_SLOT | slot(key)
    } else {
        check(carrier, slot(key))
    }
}

//! String commands.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    Append,
    AppendKey,
    AppendValue,
    Decr,
    DecrKey,
    Decrby,
    DecrbyKey,
    DecrbyDecrement,
    Get,
    GetKey,
    Getdel,
    GetdelKey,
    Getrange,
    GetrangeKey,
    GetrangeStart,
    GetrangeEnd,
    Incr,
    IncrKey,
    Incrby,
    IncrbyKey,
    IncrbyIncrement,
    Incrbyfloat,
    IncrbyfloatKey,
    IncrbyfloatIncrement,
    Mget,
    MgetKey,
    Mset,
    MsetKeyValue,
    Msetnx,
    MsetnxKeyValue,
    Set,
    SetKey,
    SetValue,
    SetExpiration,
    SetCondition,
    SetGet,
    Setrange,
    SetrangeKey,
    SetrangeOffset,
    SetrangeValue,
    Strlen,
    StrlenKey,
}

impl Builder {
    /// `APPEND key value`
    pub fn append(self) -> Append {
        Append(self.cmd(CommandFlags::NONE, &["APPEND"]))
    }

    /// `DECR key`
    pub fn decr(self) -> Decr {
        Decr(self.cmd(CommandFlags::NONE, &["DECR"]))
    }

    /// `DECRBY key decrement`
    pub fn decrby(self) -> Decrby {
        Decrby(self.cmd(CommandFlags::NONE, &["DECRBY"]))
    }

    /// `GET key`
    pub fn get(self) -> Get {
        Get(self.cmd(CommandFlags::READONLY, &["GET"]))
    }

    /// `GETDEL key`
    pub fn getdel(self) -> Getdel {
        Getdel(self.cmd(CommandFlags::NONE, &["GETDEL"]))
    }

    /// `GETRANGE key start end`
    pub fn getrange(self) -> Getrange {
        Getrange(self.cmd(CommandFlags::READONLY, &["GETRANGE"]))
    }

    /// `INCR key`
    pub fn incr(self) -> Incr {
        Incr(self.cmd(CommandFlags::NONE, &["INCR"]))
    }

    /// `INCRBY key increment`
    pub fn incrby(self) -> Incrby {
        Incrby(self.cmd(CommandFlags::NONE, &["INCRBY"]))
    }

    /// `INCRBYFLOAT key increment`
    pub fn incrbyfloat(self) -> Incrbyfloat {
        Incrbyfloat(self.cmd(CommandFlags::NONE, &["INCRBYFLOAT"]))
    }

    /// `MGET key [key ...]`
    pub fn mget(self) -> Mget {
        Mget(self.cmd(CommandFlags::MT_GET, &["MGET"]))
    }

    /// `MSET key value [key value ...]`
    pub fn mset(self) -> Mset {
        Mset(self.cmd(CommandFlags::NONE, &["MSET"]))
    }

    /// `MSETNX key value [key value ...]`
    pub fn msetnx(self) -> Msetnx {
        Msetnx(self.cmd(CommandFlags::NONE, &["MSETNX"]))
    }

    /// `SET key value [NX|XX] [GET] [EX|PX|EXAT|KEEPTTL]`
    pub fn set(self) -> Set {
        Set(self.cmd(CommandFlags::NONE, &["SET"]))
    }

    /// `SETRANGE key offset value`
    pub fn setrange(self) -> Setrange {
        Setrange(self.cmd(CommandFlags::NONE, &["SETRANGE"]))
    }

    /// `STRLEN key`
    pub fn strlen(self) -> Strlen {
        Strlen(self.cmd(CommandFlags::READONLY, &["STRLEN"]))
    }
}

impl Append {
    pub fn key(self, key: impl Into<String>) -> AppendKey {
        AppendKey(self.0.key(key))
    }
}

impl AppendKey {
    pub fn value(self, value: impl Into<String>) -> AppendValue {
        AppendValue(self.0.arg(value))
    }
}

impl Decr {
    pub fn key(self, key: impl Into<String>) -> DecrKey {
        DecrKey(self.0.key(key))
    }
}

impl Decrby {
    pub fn key(self, key: impl Into<String>) -> DecrbyKey {
        DecrbyKey(self.0.key(key))
    }
}

impl DecrbyKey {
    pub fn decrement(self, decrement: i64) -> DecrbyDecrement {
        DecrbyDecrement(self.0.int(decrement))
    }
}

impl Get {
    pub fn key(self, key: impl Into<String>) -> GetKey {
        GetKey(self.0.key(key))
    }
}

impl Getdel {
    pub fn key(self, key: impl Into<String>) -> GetdelKey {
        GetdelKey(self.0.key(key))
    }
}

impl Getrange {
    pub fn key(self, key: impl Into<String>) -> GetrangeKey {
        GetrangeKey(self.0.key(key))
    }
}

impl GetrangeKey {
    pub fn start(self, start: i64) -> GetrangeStart {
        GetrangeStart(self.0.int(start))
    }
}

impl GetrangeStart {
    pub fn end(self, end: i64) -> GetrangeEnd {
        GetrangeEnd(self.0.int(end))
    }
}

impl Incr {
    pub fn key(self, key: impl Into<String>) -> IncrKey {
        IncrKey(self.0.key(key))
    }
}

impl Incrby {
    pub fn key(self, key: impl Into<String>) -> IncrbyKey {
        IncrbyKey(self.0.key(key))
    }
}

impl IncrbyKey {
    pub fn increment(self, increment: i64) -> IncrbyIncrement {
        IncrbyIncrement(self.0.int(increment))
    }
}

impl Incrbyfloat {
    pub fn key(self, key: impl Into<String>) -> IncrbyfloatKey {
        IncrbyfloatKey(self.0.key(key))
    }
}

impl IncrbyfloatKey {
    pub fn increment(self, increment: f64) -> IncrbyfloatIncrement {
        IncrbyfloatIncrement(self.0.float(increment))
    }
}

impl Mget {
    pub fn key<I, K>(self, keys: I) -> MgetKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        MgetKey(self.0.keys(keys))
    }
}

impl MgetKey {
    /// Appends further keys; the slot check folds over every one.
    pub fn key<I, K>(self, keys: I) -> MgetKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        MgetKey(self.0.keys(keys))
    }
}

impl Mset {
    pub fn key_value(self, key: impl Into<String>, value: impl Into<String>) -> MsetKeyValue {
        MsetKeyValue(self.0.key(key).arg(value))
    }
}

impl MsetKeyValue {
    pub fn key_value(self, key: impl Into<String>, value: impl Into<String>) -> MsetKeyValue {
        MsetKeyValue(self.0.key(key).arg(value))
    }
}

impl Msetnx {
    pub fn key_value(self, key: impl Into<String>, value: impl Into<String>) -> MsetnxKeyValue {
        MsetnxKeyValue(self.0.key(key).arg(value))
    }
}

impl MsetnxKeyValue {
    pub fn key_value(self, key: impl Into<String>, value: impl Into<String>) -> MsetnxKeyValue {
        MsetnxKeyValue(self.0.key(key).arg(value))
    }
}

impl Set {
    pub fn key(self, key: impl Into<String>) -> SetKey {
        SetKey(self.0.key(key))
    }
}

impl SetKey {
    pub fn value(self, value: impl Into<String>) -> SetValue {
        SetValue(self.0.arg(value))
    }
}

keyword! {
    SetValue => nx ["NX"] -> SetCondition;
    SetValue => xx ["XX"] -> SetCondition;
    SetValue => get ["GET"] -> SetGet;
    SetValue => keepttl ["KEEPTTL"] -> SetExpiration;
    SetCondition => get ["GET"] -> SetGet;
    SetCondition => keepttl ["KEEPTTL"] -> SetExpiration;
    SetGet => keepttl ["KEEPTTL"] -> SetExpiration;
}

macro_rules! set_expiration {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn ex_seconds(self, seconds: i64) -> SetExpiration {
                SetExpiration(self.0.arg("EX").int(seconds))
            }

            pub fn px_milliseconds(self, milliseconds: i64) -> SetExpiration {
                SetExpiration(self.0.arg("PX").int(milliseconds))
            }

            pub fn exat_timestamp(self, timestamp: i64) -> SetExpiration {
                SetExpiration(self.0.arg("EXAT").int(timestamp))
            }
        }
    )+};
}

set_expiration! { SetValue, SetCondition, SetGet }

impl Setrange {
    pub fn key(self, key: impl Into<String>) -> SetrangeKey {
        SetrangeKey(self.0.key(key))
    }
}

impl SetrangeKey {
    pub fn offset(self, offset: i64) -> SetrangeOffset {
        SetrangeOffset(self.0.int(offset))
    }
}

impl SetrangeOffset {
    pub fn value(self, value: impl Into<String>) -> SetrangeValue {
        SetrangeValue(self.0.arg(value))
    }
}

impl Strlen {
    pub fn key(self, key: impl Into<String>) -> StrlenKey {
        StrlenKey(self.0.key(key))
    }
}

build_terminal! {
    AppendValue,
    DecrKey,
    DecrbyDecrement,
    GetKey,
    GetdelKey,
    GetrangeEnd,
    IncrKey,
    IncrbyIncrement,
    IncrbyfloatIncrement,
    MgetKey,
    MsetKeyValue,
    MsetnxKeyValue,
    SetValue,
    SetExpiration,
    SetCondition,
    SetGet,
    SetrangeValue,
    StrlenKey,
}

cache_terminal! {
    GetKey,
    GetrangeEnd,
    MgetKey,
    StrlenKey,
}

#[cfg(test)]
mod tests {
    use crate::builder::{Builder, InitialSlot};
    use crate::slot;

    fn root() -> Builder {
        Builder::new(InitialSlot::InitSlot)
    }

    #[test]
    fn get_sets_readonly_and_slot() {
        let cmd = root().get().key("{user:1}:name").build();
        assert_eq!(cmd.tokens(), &["GET", "{user:1}:name"]);
        assert_eq!(cmd.slot(), slot::slot("user:1"));
        assert!(cmd.flags().is_read_only());
    }

    #[test]
    fn set_is_a_plain_write() {
        let cmd = root().set().key("k").value("v").build();
        assert_eq!(cmd.tokens(), &["SET", "k", "v"]);
        assert_eq!(cmd.flags().bits(), 0);
        assert_eq!(cmd.slot(), slot::slot("k"));
    }

    #[test]
    fn set_options_keep_redis_order() {
        // Condition, then GET, then expiration.
        let cmd = root()
            .set()
            .key("k")
            .value("v")
            .nx()
            .get()
            .ex_seconds(30)
            .build();
        assert_eq!(cmd.tokens(), &["SET", "k", "v", "NX", "GET", "EX", "30"]);
    }

    #[test]
    fn mget_is_cacheable_per_key() {
        let c = root().mget().key(["{t}a", "{t}b"]).key(["{t}c"]).cache();
        assert_eq!(c.tokens(), &["MGET", "{t}a", "{t}b", "{t}c"]);
        assert!(c.flags().is_mt_get());
        assert_eq!(c.mget_cache_cmd(), "GET");
        assert_eq!(c.mget_cache_key(2), "{t}c");
    }

    #[test]
    #[should_panic(expected = "multi key command with different key slots are not allowed")]
    fn mget_rejects_cross_slot_keys() {
        root().mget().key(["foo", "bar"]);
    }

    #[test]
    fn getrange_fingerprint_distinguishes_ranges() {
        let a = root().getrange().key("k").start(0).end(3).cache();
        let b = root().strlen().key("k").cache();
        assert_eq!(a.cache_key().1, "GETRANGE03");
        assert_eq!(b.cache_key().1, "STRLEN");
    }

    #[test]
    fn incrbyfloat_uses_shortest_float_form() {
        let cmd = root().incrbyfloat().key("k").increment(1.5).build();
        assert_eq!(cmd.tokens(), &["INCRBYFLOAT", "k", "1.5"]);
    }
}

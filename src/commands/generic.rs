//! Generic key-space commands.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    Del,
    DelKey,
    Exists,
    ExistsKey,
    Expire,
    ExpireKey,
    ExpireSeconds,
    ExpireCondition,
    Persist,
    PersistKey,
    Pttl,
    PttlKey,
    Touch,
    TouchKey,
    Ttl,
    TtlKey,
    Type,
    TypeKey,
    Unlink,
    UnlinkKey,
}

impl Builder {
    /// `DEL key [key ...]`
    pub fn del(self) -> Del {
        Del(self.cmd(CommandFlags::NONE, &["DEL"]))
    }

    /// `EXISTS key [key ...]`
    pub fn exists(self) -> Exists {
        Exists(self.cmd(CommandFlags::READONLY, &["EXISTS"]))
    }

    /// `EXPIRE key seconds [NX|XX|GT|LT]`
    pub fn expire(self) -> Expire {
        Expire(self.cmd(CommandFlags::NONE, &["EXPIRE"]))
    }

    /// `PERSIST key`
    pub fn persist(self) -> Persist {
        Persist(self.cmd(CommandFlags::NONE, &["PERSIST"]))
    }

    /// `PTTL key`
    pub fn pttl(self) -> Pttl {
        Pttl(self.cmd(CommandFlags::READONLY, &["PTTL"]))
    }

    /// `TOUCH key [key ...]`
    pub fn touch(self) -> Touch {
        Touch(self.cmd(CommandFlags::NONE, &["TOUCH"]))
    }

    /// `TTL key`
    pub fn ttl(self) -> Ttl {
        Ttl(self.cmd(CommandFlags::READONLY, &["TTL"]))
    }

    /// `TYPE key`
    pub fn r#type(self) -> Type {
        Type(self.cmd(CommandFlags::READONLY, &["TYPE"]))
    }

    /// `UNLINK key [key ...]`
    pub fn unlink(self) -> Unlink {
        Unlink(self.cmd(CommandFlags::NONE, &["UNLINK"]))
    }
}

impl Del {
    pub fn key<I, K>(self, keys: I) -> DelKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        DelKey(self.0.keys(keys))
    }
}

impl DelKey {
    pub fn key<I, K>(self, keys: I) -> DelKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        DelKey(self.0.keys(keys))
    }
}

impl Exists {
    pub fn key<I, K>(self, keys: I) -> ExistsKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        ExistsKey(self.0.keys(keys))
    }
}

impl ExistsKey {
    pub fn key<I, K>(self, keys: I) -> ExistsKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        ExistsKey(self.0.keys(keys))
    }
}

impl Expire {
    pub fn key(self, key: impl Into<String>) -> ExpireKey {
        ExpireKey(self.0.key(key))
    }
}

impl ExpireKey {
    pub fn seconds(self, seconds: i64) -> ExpireSeconds {
        ExpireSeconds(self.0.int(seconds))
    }
}

keyword! {
    ExpireSeconds => nx ["NX"] -> ExpireCondition;
    ExpireSeconds => xx ["XX"] -> ExpireCondition;
    ExpireSeconds => gt ["GT"] -> ExpireCondition;
    ExpireSeconds => lt ["LT"] -> ExpireCondition;
}

impl Persist {
    pub fn key(self, key: impl Into<String>) -> PersistKey {
        PersistKey(self.0.key(key))
    }
}

impl Pttl {
    pub fn key(self, key: impl Into<String>) -> PttlKey {
        PttlKey(self.0.key(key))
    }
}

impl Touch {
    pub fn key<I, K>(self, keys: I) -> TouchKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        TouchKey(self.0.keys(keys))
    }
}

impl Ttl {
    pub fn key(self, key: impl Into<String>) -> TtlKey {
        TtlKey(self.0.key(key))
    }
}

impl Type {
    pub fn key(self, key: impl Into<String>) -> TypeKey {
        TypeKey(self.0.key(key))
    }
}

impl Unlink {
    pub fn key<I, K>(self, keys: I) -> UnlinkKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        UnlinkKey(self.0.keys(keys))
    }
}

build_terminal! {
    DelKey,
    ExistsKey,
    ExpireSeconds,
    ExpireCondition,
    PersistKey,
    PttlKey,
    TouchKey,
    TtlKey,
    TypeKey,
    UnlinkKey,
}

cache_terminal! {
    TtlKey,
    TypeKey,
}

#[cfg(test)]
mod tests {
    use crate::builder::{Builder, InitialSlot};

    #[test]
    fn expire_condition_order() {
        let cmd = Builder::new(InitialSlot::InitSlot)
            .expire()
            .key("k")
            .seconds(10)
            .nx()
            .build();
        assert_eq!(cmd.tokens(), &["EXPIRE", "k", "10", "NX"]);
        assert!(cmd.flags().is_write());
    }

    #[test]
    fn del_accumulates_one_slot() {
        let cmd = Builder::new(InitialSlot::InitSlot)
            .del()
            .key(["{t}a", "{t}b"])
            .build();
        assert_eq!(cmd.tokens(), &["DEL", "{t}a", "{t}b"]);
        assert_eq!(cmd.slot(), crate::slot::slot("t"));
    }

    #[test]
    fn no_slot_root_treats_keys_as_hints() {
        let cmd = Builder::new(InitialSlot::NoSlot)
            .del()
            .key(["foo", "bar"])
            .build();
        assert_eq!(cmd.slot() & crate::slot::NO_SLOT, crate::slot::NO_SLOT);
    }
}

//! List commands, including the blocking pop family.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    Blpop,
    BlpopKey,
    BlpopTimeout,
    Brpop,
    BrpopKey,
    BrpopTimeout,
    Llen,
    LlenKey,
    Lpop,
    LpopKey,
    LpopCount,
    Lpush,
    LpushKey,
    LpushElement,
    Lrange,
    LrangeKey,
    LrangeStart,
    LrangeStop,
    Rpop,
    RpopKey,
    RpopCount,
    Rpush,
    RpushKey,
    RpushElement,
}

impl Builder {
    /// `BLPOP key [key ...] timeout`
    pub fn blpop(self) -> Blpop {
        Blpop(self.cmd(CommandFlags::BLOCK, &["BLPOP"]))
    }

    /// `BRPOP key [key ...] timeout`
    pub fn brpop(self) -> Brpop {
        Brpop(self.cmd(CommandFlags::BLOCK, &["BRPOP"]))
    }

    /// `LLEN key`
    pub fn llen(self) -> Llen {
        Llen(self.cmd(CommandFlags::READONLY, &["LLEN"]))
    }

    /// `LPOP key [count]`
    pub fn lpop(self) -> Lpop {
        Lpop(self.cmd(CommandFlags::NONE, &["LPOP"]))
    }

    /// `LPUSH key element [element ...]`
    pub fn lpush(self) -> Lpush {
        Lpush(self.cmd(CommandFlags::NONE, &["LPUSH"]))
    }

    /// `LRANGE key start stop`
    pub fn lrange(self) -> Lrange {
        Lrange(self.cmd(CommandFlags::READONLY, &["LRANGE"]))
    }

    /// `RPOP key [count]`
    pub fn rpop(self) -> Rpop {
        Rpop(self.cmd(CommandFlags::NONE, &["RPOP"]))
    }

    /// `RPUSH key element [element ...]`
    pub fn rpush(self) -> Rpush {
        Rpush(self.cmd(CommandFlags::NONE, &["RPUSH"]))
    }
}

impl Blpop {
    pub fn key<I, K>(self, keys: I) -> BlpopKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        BlpopKey(self.0.keys(keys))
    }
}

impl BlpopKey {
    pub fn key<I, K>(self, keys: I) -> BlpopKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        BlpopKey(self.0.keys(keys))
    }

    pub fn timeout(self, timeout: f64) -> BlpopTimeout {
        BlpopTimeout(self.0.float(timeout))
    }
}

impl Brpop {
    pub fn key<I, K>(self, keys: I) -> BrpopKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        BrpopKey(self.0.keys(keys))
    }
}

impl BrpopKey {
    pub fn key<I, K>(self, keys: I) -> BrpopKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        BrpopKey(self.0.keys(keys))
    }

    pub fn timeout(self, timeout: f64) -> BrpopTimeout {
        BrpopTimeout(self.0.float(timeout))
    }
}

impl Llen {
    pub fn key(self, key: impl Into<String>) -> LlenKey {
        LlenKey(self.0.key(key))
    }
}

impl Lpop {
    pub fn key(self, key: impl Into<String>) -> LpopKey {
        LpopKey(self.0.key(key))
    }
}

impl LpopKey {
    pub fn count(self, count: i64) -> LpopCount {
        LpopCount(self.0.int(count))
    }
}

impl Lpush {
    pub fn key(self, key: impl Into<String>) -> LpushKey {
        LpushKey(self.0.key(key))
    }
}

impl LpushKey {
    pub fn element<I, T>(self, elements: I) -> LpushElement
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        LpushElement(self.0.args(elements))
    }
}

impl LpushElement {
    pub fn element<I, T>(self, elements: I) -> LpushElement
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        LpushElement(self.0.args(elements))
    }
}

impl Lrange {
    pub fn key(self, key: impl Into<String>) -> LrangeKey {
        LrangeKey(self.0.key(key))
    }
}

impl LrangeKey {
    pub fn start(self, start: i64) -> LrangeStart {
        LrangeStart(self.0.int(start))
    }
}

impl LrangeStart {
    pub fn stop(self, stop: i64) -> LrangeStop {
        LrangeStop(self.0.int(stop))
    }
}

impl Rpop {
    pub fn key(self, key: impl Into<String>) -> RpopKey {
        RpopKey(self.0.key(key))
    }
}

impl RpopKey {
    pub fn count(self, count: i64) -> RpopCount {
        RpopCount(self.0.int(count))
    }
}

impl Rpush {
    pub fn key(self, key: impl Into<String>) -> RpushKey {
        RpushKey(self.0.key(key))
    }
}

impl RpushKey {
    pub fn element<I, T>(self, elements: I) -> RpushElement
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        RpushElement(self.0.args(elements))
    }
}

impl RpushElement {
    pub fn element<I, T>(self, elements: I) -> RpushElement
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        RpushElement(self.0.args(elements))
    }
}

build_terminal! {
    BlpopTimeout,
    BrpopTimeout,
    LlenKey,
    LpopKey,
    LpopCount,
    LpushElement,
    LrangeStop,
    RpopKey,
    RpopCount,
    RpushElement,
}

cache_terminal! {
    LlenKey,
    LrangeStop,
}

#[cfg(test)]
mod tests {
    use crate::builder::{Builder, InitialSlot};

    #[test]
    fn blpop_carries_block_flag() {
        let cmd = Builder::new(InitialSlot::InitSlot)
            .blpop()
            .key(["q"])
            .timeout(0.5)
            .build();
        assert_eq!(cmd.tokens(), &["BLPOP", "q", "0.5"]);
        assert!(cmd.flags().is_block());
        assert!(cmd.flags().is_write());
    }

    #[test]
    fn lrange_is_cacheable() {
        let c = Builder::new(InitialSlot::InitSlot)
            .lrange()
            .key("k")
            .start(0)
            .stop(-1)
            .cache();
        assert_eq!(c.tokens(), &["LRANGE", "k", "0", "-1"]);
        assert_eq!(c.cache_key(), ("k", "LRANGE0-1".to_string()));
    }
}

//! Sorted set commands.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    Bzpopmax,
    BzpopmaxKey,
    BzpopmaxTimeout,
    Bzpopmin,
    BzpopminKey,
    BzpopminTimeout,
    Zadd,
    ZaddKey,
    ZaddCondition,
    ZaddComparison,
    ZaddChange,
    ZaddIncrement,
    ZaddScoreMember,
    Zcard,
    ZcardKey,
    Zrange,
    ZrangeKey,
    ZrangeMin,
    ZrangeMax,
    ZrangeSortby,
    ZrangeRev,
    ZrangeLimit,
    ZrangeWithscores,
    Zscore,
    ZscoreKey,
    ZscoreMember,
}

impl Builder {
    /// `BZPOPMAX key [key ...] timeout`
    pub fn bzpopmax(self) -> Bzpopmax {
        Bzpopmax(self.cmd(CommandFlags::BLOCK, &["BZPOPMAX"]))
    }

    /// `BZPOPMIN key [key ...] timeout`
    pub fn bzpopmin(self) -> Bzpopmin {
        Bzpopmin(self.cmd(CommandFlags::BLOCK, &["BZPOPMIN"]))
    }

    /// `ZADD key [NX|XX] [GT|LT] [CH] [INCR] score member ...`
    pub fn zadd(self) -> Zadd {
        Zadd(self.cmd(CommandFlags::NONE, &["ZADD"]))
    }

    /// `ZCARD key`
    pub fn zcard(self) -> Zcard {
        Zcard(self.cmd(CommandFlags::READONLY, &["ZCARD"]))
    }

    /// `ZRANGE key min max [BYSCORE|BYLEX] [REV] [LIMIT offset count] [WITHSCORES]`
    pub fn zrange(self) -> Zrange {
        Zrange(self.cmd(CommandFlags::READONLY, &["ZRANGE"]))
    }

    /// `ZSCORE key member`
    pub fn zscore(self) -> Zscore {
        Zscore(self.cmd(CommandFlags::READONLY, &["ZSCORE"]))
    }
}

impl Bzpopmax {
    pub fn key<I, K>(self, keys: I) -> BzpopmaxKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        BzpopmaxKey(self.0.keys(keys))
    }
}

impl BzpopmaxKey {
    pub fn key<I, K>(self, keys: I) -> BzpopmaxKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        BzpopmaxKey(self.0.keys(keys))
    }

    pub fn timeout(self, timeout: f64) -> BzpopmaxTimeout {
        BzpopmaxTimeout(self.0.float(timeout))
    }
}

impl Bzpopmin {
    pub fn key<I, K>(self, keys: I) -> BzpopminKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        BzpopminKey(self.0.keys(keys))
    }
}

impl BzpopminKey {
    pub fn key<I, K>(self, keys: I) -> BzpopminKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        BzpopminKey(self.0.keys(keys))
    }

    pub fn timeout(self, timeout: f64) -> BzpopminTimeout {
        BzpopminTimeout(self.0.float(timeout))
    }
}

impl Zadd {
    pub fn key(self, key: impl Into<String>) -> ZaddKey {
        ZaddKey(self.0.key(key))
    }
}

keyword! {
    ZaddKey => nx ["NX"] -> ZaddCondition;
    ZaddKey => xx ["XX"] -> ZaddCondition;
    ZaddKey => gt ["GT"] -> ZaddComparison;
    ZaddKey => lt ["LT"] -> ZaddComparison;
    ZaddKey => ch ["CH"] -> ZaddChange;
    ZaddKey => incr ["INCR"] -> ZaddIncrement;
    ZaddCondition => gt ["GT"] -> ZaddComparison;
    ZaddCondition => lt ["LT"] -> ZaddComparison;
    ZaddCondition => ch ["CH"] -> ZaddChange;
    ZaddCondition => incr ["INCR"] -> ZaddIncrement;
    ZaddComparison => ch ["CH"] -> ZaddChange;
    ZaddComparison => incr ["INCR"] -> ZaddIncrement;
    ZaddChange => incr ["INCR"] -> ZaddIncrement;
}

macro_rules! zadd_score_member {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn score_member(self, score: f64, member: impl Into<String>) -> ZaddScoreMember {
                ZaddScoreMember(self.0.float(score).arg(member))
            }
        }
    )+};
}

zadd_score_member! {
    ZaddKey, ZaddCondition, ZaddComparison, ZaddChange, ZaddIncrement,
    ZaddScoreMember
}

impl Zcard {
    pub fn key(self, key: impl Into<String>) -> ZcardKey {
        ZcardKey(self.0.key(key))
    }
}

impl Zrange {
    pub fn key(self, key: impl Into<String>) -> ZrangeKey {
        ZrangeKey(self.0.key(key))
    }
}

impl ZrangeKey {
    pub fn min(self, min: impl Into<String>) -> ZrangeMin {
        ZrangeMin(self.0.arg(min))
    }
}

impl ZrangeMin {
    pub fn max(self, max: impl Into<String>) -> ZrangeMax {
        ZrangeMax(self.0.arg(max))
    }
}

keyword! {
    ZrangeMax => byscore ["BYSCORE"] -> ZrangeSortby;
    ZrangeMax => bylex ["BYLEX"] -> ZrangeSortby;
    ZrangeMax => rev ["REV"] -> ZrangeRev;
    ZrangeSortby => rev ["REV"] -> ZrangeRev;
    ZrangeMax => withscores ["WITHSCORES"] -> ZrangeWithscores;
    ZrangeSortby => withscores ["WITHSCORES"] -> ZrangeWithscores;
    ZrangeRev => withscores ["WITHSCORES"] -> ZrangeWithscores;
    ZrangeLimit => withscores ["WITHSCORES"] -> ZrangeWithscores;
}

macro_rules! zrange_limit {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn limit(self, offset: i64, count: i64) -> ZrangeLimit {
                ZrangeLimit(self.0.arg("LIMIT").int(offset).int(count))
            }
        }
    )+};
}

zrange_limit! { ZrangeMax, ZrangeSortby, ZrangeRev }

impl Zscore {
    pub fn key(self, key: impl Into<String>) -> ZscoreKey {
        ZscoreKey(self.0.key(key))
    }
}

impl ZscoreKey {
    pub fn member(self, member: impl Into<String>) -> ZscoreMember {
        ZscoreMember(self.0.arg(member))
    }
}

build_terminal! {
    BzpopmaxTimeout,
    BzpopminTimeout,
    ZaddScoreMember,
    ZcardKey,
    ZrangeMax,
    ZrangeSortby,
    ZrangeRev,
    ZrangeLimit,
    ZrangeWithscores,
    ZscoreMember,
}

cache_terminal! {
    ZcardKey,
    ZrangeMax,
    ZrangeSortby,
    ZrangeRev,
    ZrangeLimit,
    ZrangeWithscores,
    ZscoreMember,
}

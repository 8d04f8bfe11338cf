//! Stream commands.
//!
//! `XREAD` turns blocking only once `BLOCK` is taken, so the flag is folded
//! in by that transition rather than fixed at the root.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    Xadd,
    XaddKey,
    XaddNomkstream,
    XaddTrimMaxlen,
    XaddTrimMinid,
    XaddTrimOperator,
    XaddTrimThreshold,
    XaddTrimLimit,
    XaddId,
    XaddFieldValue,
    Xlen,
    XlenKey,
    Xrange,
    XrangeKey,
    XrangeStart,
    XrangeEnd,
    XrangeCount,
    Xread,
    XreadCount,
    XreadBlock,
    XreadStreams,
    XreadKey,
    XreadId,
}

impl Builder {
    /// `XADD key [NOMKSTREAM] [MAXLEN|MINID [=|~] threshold [LIMIT count]] id field value ...`
    pub fn xadd(self) -> Xadd {
        Xadd(self.cmd(CommandFlags::NONE, &["XADD"]))
    }

    /// `XLEN key`
    pub fn xlen(self) -> Xlen {
        Xlen(self.cmd(CommandFlags::READONLY, &["XLEN"]))
    }

    /// `XRANGE key start end [COUNT count]`
    pub fn xrange(self) -> Xrange {
        Xrange(self.cmd(CommandFlags::READONLY, &["XRANGE"]))
    }

    /// `XREAD [COUNT count] [BLOCK milliseconds] STREAMS key [key ...] id [id ...]`
    pub fn xread(self) -> Xread {
        Xread(self.cmd(CommandFlags::READONLY, &["XREAD"]))
    }
}

impl Xadd {
    pub fn key(self, key: impl Into<String>) -> XaddKey {
        XaddKey(self.0.key(key))
    }
}

keyword! {
    XaddKey => nomkstream ["NOMKSTREAM"] -> XaddNomkstream;
    XaddKey => maxlen ["MAXLEN"] -> XaddTrimMaxlen;
    XaddKey => minid ["MINID"] -> XaddTrimMinid;
    XaddNomkstream => maxlen ["MAXLEN"] -> XaddTrimMaxlen;
    XaddNomkstream => minid ["MINID"] -> XaddTrimMinid;
    XaddTrimMaxlen => exact ["="] -> XaddTrimOperator;
    XaddTrimMaxlen => almost ["~"] -> XaddTrimOperator;
    XaddTrimMinid => exact ["="] -> XaddTrimOperator;
    XaddTrimMinid => almost ["~"] -> XaddTrimOperator;
}

macro_rules! xadd_threshold {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn threshold(self, threshold: impl Into<String>) -> XaddTrimThreshold {
                XaddTrimThreshold(self.0.arg(threshold))
            }
        }
    )+};
}

xadd_threshold! { XaddTrimMaxlen, XaddTrimMinid, XaddTrimOperator }

impl XaddTrimThreshold {
    pub fn limit(self, count: i64) -> XaddTrimLimit {
        XaddTrimLimit(self.0.arg("LIMIT").int(count))
    }
}

macro_rules! xadd_id {
    ($($state:ident),+) => {$(
        impl $state {
            /// The entry id, or `*` to let the server assign one.
            pub fn id(self, id: impl Into<String>) -> XaddId {
                XaddId(self.0.arg(id))
            }
        }
    )+};
}

xadd_id! { XaddKey, XaddNomkstream, XaddTrimThreshold, XaddTrimLimit }

impl XaddId {
    pub fn field_value(
        self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> XaddFieldValue {
        XaddFieldValue(self.0.arg(field).arg(value))
    }
}

impl XaddFieldValue {
    pub fn field_value(
        self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> XaddFieldValue {
        XaddFieldValue(self.0.arg(field).arg(value))
    }
}

impl Xlen {
    pub fn key(self, key: impl Into<String>) -> XlenKey {
        XlenKey(self.0.key(key))
    }
}

impl Xrange {
    pub fn key(self, key: impl Into<String>) -> XrangeKey {
        XrangeKey(self.0.key(key))
    }
}

impl XrangeKey {
    pub fn start(self, start: impl Into<String>) -> XrangeStart {
        XrangeStart(self.0.arg(start))
    }
}

impl XrangeStart {
    pub fn end(self, end: impl Into<String>) -> XrangeEnd {
        XrangeEnd(self.0.arg(end))
    }
}

impl XrangeEnd {
    pub fn count(self, count: i64) -> XrangeCount {
        XrangeCount(self.0.arg("COUNT").int(count))
    }
}

impl Xread {
    pub fn count(self, count: i64) -> XreadCount {
        XreadCount(self.0.arg("COUNT").int(count))
    }

    pub fn block(self, milliseconds: i64) -> XreadBlock {
        XreadBlock(
            self.0
                .flag(CommandFlags::BLOCK)
                .arg("BLOCK")
                .int(milliseconds),
        )
    }

    pub fn streams(self) -> XreadStreams {
        XreadStreams(self.0.arg("STREAMS"))
    }
}

impl XreadCount {
    pub fn block(self, milliseconds: i64) -> XreadBlock {
        XreadBlock(
            self.0
                .flag(CommandFlags::BLOCK)
                .arg("BLOCK")
                .int(milliseconds),
        )
    }

    pub fn streams(self) -> XreadStreams {
        XreadStreams(self.0.arg("STREAMS"))
    }
}

impl XreadBlock {
    pub fn streams(self) -> XreadStreams {
        XreadStreams(self.0.arg("STREAMS"))
    }
}

impl XreadStreams {
    pub fn key<I, K>(self, keys: I) -> XreadKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        XreadKey(self.0.keys(keys))
    }
}

impl XreadKey {
    pub fn key<I, K>(self, keys: I) -> XreadKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        XreadKey(self.0.keys(keys))
    }

    pub fn id<I, T>(self, ids: I) -> XreadId
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        XreadId(self.0.args(ids))
    }
}

impl XreadId {
    pub fn id<I, T>(self, ids: I) -> XreadId
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        XreadId(self.0.args(ids))
    }
}

build_terminal! {
    XaddFieldValue,
    XlenKey,
    XrangeEnd,
    XrangeCount,
    XreadId,
}

#[cfg(test)]
mod tests {
    use crate::builder::{Builder, InitialSlot};
    use crate::slot;

    fn root() -> Builder {
        Builder::new(InitialSlot::InitSlot)
    }

    #[test]
    fn xadd_trim_and_fields() {
        let cmd = root()
            .xadd()
            .key("s")
            .maxlen()
            .almost()
            .threshold("1000")
            .id("*")
            .field_value("temp", "21")
            .field_value("hum", "40")
            .build();
        assert_eq!(
            cmd.tokens(),
            &["XADD", "s", "MAXLEN", "~", "1000", "*", "temp", "21", "hum", "40"]
        );
        assert!(cmd.flags().is_write());
        assert_eq!(cmd.slot(), slot::slot("s"));
    }

    #[test]
    fn xrange_with_count() {
        let cmd = root().xrange().key("s").start("-").end("+").count(10).build();
        assert_eq!(cmd.tokens(), &["XRANGE", "s", "-", "+", "COUNT", "10"]);
        assert!(cmd.flags().is_read_only());
    }

    #[test]
    fn xread_blocks_only_when_block_is_taken() {
        let plain = root().xread().streams().key(["s"]).id(["0"]).build();
        assert!(!plain.flags().is_block());

        let blocking = root()
            .xread()
            .count(5)
            .block(1000)
            .streams()
            .key(["{t}a", "{t}b"])
            .id(["0", "0"])
            .build();
        assert_eq!(
            blocking.tokens(),
            &["XREAD", "COUNT", "5", "BLOCK", "1000", "STREAMS", "{t}a", "{t}b", "0", "0"]
        );
        assert!(blocking.flags().is_block());
        assert!(blocking.flags().is_read_only());
        assert_eq!(blocking.slot(), slot::slot("t"));
    }

    #[test]
    fn xlen_is_readonly() {
        let cmd = root().xlen().key("s").build();
        assert_eq!(cmd.tokens(), &["XLEN", "s"]);
        assert!(cmd.flags().is_read_only());
    }
}

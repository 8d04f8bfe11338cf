//! HyperLogLog commands.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    Pfadd,
    PfaddKey,
    PfaddElement,
    Pfcount,
    PfcountKey,
    Pfmerge,
    PfmergeDestkey,
    PfmergeSourcekey,
}

impl Builder {
    /// `PFADD key [element ...]`
    pub fn pfadd(self) -> Pfadd {
        Pfadd(self.cmd(CommandFlags::NONE, &["PFADD"]))
    }

    /// `PFCOUNT key [key ...]`
    pub fn pfcount(self) -> Pfcount {
        Pfcount(self.cmd(CommandFlags::READONLY, &["PFCOUNT"]))
    }

    /// `PFMERGE destkey [sourcekey ...]`
    pub fn pfmerge(self) -> Pfmerge {
        Pfmerge(self.cmd(CommandFlags::NONE, &["PFMERGE"]))
    }
}

impl Pfadd {
    pub fn key(self, key: impl Into<String>) -> PfaddKey {
        PfaddKey(self.0.key(key))
    }
}

impl PfaddKey {
    pub fn element<I, T>(self, elements: I) -> PfaddElement
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        PfaddElement(self.0.args(elements))
    }
}

impl PfaddElement {
    pub fn element<I, T>(self, elements: I) -> PfaddElement
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        PfaddElement(self.0.args(elements))
    }
}

impl Pfcount {
    pub fn key<I, K>(self, keys: I) -> PfcountKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        PfcountKey(self.0.keys(keys))
    }
}

impl PfcountKey {
    pub fn key<I, K>(self, keys: I) -> PfcountKey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        PfcountKey(self.0.keys(keys))
    }
}

impl Pfmerge {
    pub fn destkey(self, destkey: impl Into<String>) -> PfmergeDestkey {
        PfmergeDestkey(self.0.key(destkey))
    }
}

impl PfmergeDestkey {
    pub fn sourcekey<I, K>(self, sourcekeys: I) -> PfmergeSourcekey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        PfmergeSourcekey(self.0.keys(sourcekeys))
    }
}

impl PfmergeSourcekey {
    pub fn sourcekey<I, K>(self, sourcekeys: I) -> PfmergeSourcekey
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        PfmergeSourcekey(self.0.keys(sourcekeys))
    }
}

build_terminal! {
    PfaddKey,
    PfaddElement,
    PfcountKey,
    PfmergeDestkey,
    PfmergeSourcekey,
}

#[cfg(test)]
mod tests {
    use crate::builder::{Builder, InitialSlot};

    #[test]
    fn pfcount_shares_one_slot() {
        let cmd = Builder::new(InitialSlot::InitSlot)
            .pfcount()
            .key(["{hll}a", "{hll}b"])
            .build();
        assert_eq!(cmd.tokens(), &["PFCOUNT", "{hll}a", "{hll}b"]);
        assert!(cmd.flags().is_read_only());
        assert_eq!(cmd.slot(), crate::slot::slot("hll"));
    }

    #[test]
    #[should_panic(expected = "multi key command with different key slots are not allowed")]
    fn pfcount_cross_slot_aborts() {
        Builder::new(InitialSlot::InitSlot).pfcount().key(["foo", "bar"]);
    }

    #[test]
    fn pfadd_sets_no_flags() {
        let cmd = Builder::new(InitialSlot::InitSlot)
            .pfadd()
            .key("hll")
            .element(["a", "b"])
            .build();
        assert_eq!(cmd.tokens(), &["PFADD", "hll", "a", "b"]);
        assert_eq!(cmd.flags().bits(), 0);
    }
}

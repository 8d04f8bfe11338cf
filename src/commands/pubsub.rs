//! Subscribe and unsubscribe commands.
//!
//! The subscribe family produces no paired reply; the server answers with
//! push messages instead.  Shard channels hash to cluster slots the same way
//! keys do.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    Subscribe,
    SubscribeChannel,
    Psubscribe,
    PsubscribePattern,
    Ssubscribe,
    SsubscribeChannel,
    Unsubscribe,
    UnsubscribeChannel,
    Punsubscribe,
    PunsubscribePattern,
    Sunsubscribe,
    SunsubscribeChannel,
}

impl Builder {
    /// `SUBSCRIBE channel [channel ...]`
    pub fn subscribe(self) -> Subscribe {
        Subscribe(self.cmd(CommandFlags::NO_REPLY, &["SUBSCRIBE"]))
    }

    /// `PSUBSCRIBE pattern [pattern ...]`
    pub fn psubscribe(self) -> Psubscribe {
        Psubscribe(self.cmd(CommandFlags::NO_REPLY, &["PSUBSCRIBE"]))
    }

    /// `SSUBSCRIBE shardchannel [shardchannel ...]`
    pub fn ssubscribe(self) -> Ssubscribe {
        Ssubscribe(self.cmd(CommandFlags::NO_REPLY, &["SSUBSCRIBE"]))
    }

    /// `UNSUBSCRIBE [channel ...]`
    pub fn unsubscribe(self) -> Unsubscribe {
        Unsubscribe(self.cmd(CommandFlags::UNSUB, &["UNSUBSCRIBE"]))
    }

    /// `PUNSUBSCRIBE [pattern ...]`
    pub fn punsubscribe(self) -> Punsubscribe {
        Punsubscribe(self.cmd(CommandFlags::UNSUB, &["PUNSUBSCRIBE"]))
    }

    /// `SUNSUBSCRIBE [shardchannel ...]`
    pub fn sunsubscribe(self) -> Sunsubscribe {
        Sunsubscribe(self.cmd(CommandFlags::UNSUB, &["SUNSUBSCRIBE"]))
    }
}

impl Subscribe {
    pub fn channel<I, T>(self, channels: I) -> SubscribeChannel
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        SubscribeChannel(self.0.args(channels))
    }
}

impl SubscribeChannel {
    pub fn channel<I, T>(self, channels: I) -> SubscribeChannel
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        SubscribeChannel(self.0.args(channels))
    }
}

impl Psubscribe {
    pub fn pattern<I, T>(self, patterns: I) -> PsubscribePattern
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        PsubscribePattern(self.0.args(patterns))
    }
}

impl PsubscribePattern {
    pub fn pattern<I, T>(self, patterns: I) -> PsubscribePattern
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        PsubscribePattern(self.0.args(patterns))
    }
}

impl Ssubscribe {
    /// Shard channels participate in slot accumulation.
    pub fn channel<I, T>(self, channels: I) -> SsubscribeChannel
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        SsubscribeChannel(self.0.keys(channels))
    }
}

impl SsubscribeChannel {
    pub fn channel<I, T>(self, channels: I) -> SsubscribeChannel
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        SsubscribeChannel(self.0.keys(channels))
    }
}

impl Unsubscribe {
    pub fn channel<I, T>(self, channels: I) -> UnsubscribeChannel
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        UnsubscribeChannel(self.0.args(channels))
    }
}

impl UnsubscribeChannel {
    pub fn channel<I, T>(self, channels: I) -> UnsubscribeChannel
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        UnsubscribeChannel(self.0.args(channels))
    }
}

impl Punsubscribe {
    pub fn pattern<I, T>(self, patterns: I) -> PunsubscribePattern
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        PunsubscribePattern(self.0.args(patterns))
    }
}

impl PunsubscribePattern {
    pub fn pattern<I, T>(self, patterns: I) -> PunsubscribePattern
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        PunsubscribePattern(self.0.args(patterns))
    }
}

impl Sunsubscribe {
    pub fn channel<I, T>(self, channels: I) -> SunsubscribeChannel
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        SunsubscribeChannel(self.0.keys(channels))
    }
}

impl SunsubscribeChannel {
    pub fn channel<I, T>(self, channels: I) -> SunsubscribeChannel
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        SunsubscribeChannel(self.0.keys(channels))
    }
}

build_terminal! {
    SubscribeChannel,
    PsubscribePattern,
    SsubscribeChannel,
    Unsubscribe,
    UnsubscribeChannel,
    Punsubscribe,
    PunsubscribePattern,
    Sunsubscribe,
    SunsubscribeChannel,
}

#[cfg(test)]
mod tests {
    use crate::builder::{Builder, InitialSlot};

    #[test]
    fn subscribe_is_no_reply_and_pipelineable() {
        let cmd = Builder::new(InitialSlot::InitSlot)
            .subscribe()
            .channel(["news", "sport"])
            .build();
        assert_eq!(cmd.tokens(), &["SUBSCRIBE", "news", "sport"]);
        assert!(cmd.flags().is_no_reply());
        assert!(cmd.flags().is_read_only());
        assert!(cmd.flags().is_pipe());
        assert!(!cmd.flags().is_unsub());
    }

    #[test]
    fn unsubscribe_without_channels_builds() {
        let cmd = Builder::new(InitialSlot::InitSlot).unsubscribe().build();
        assert_eq!(cmd.tokens(), &["UNSUBSCRIBE"]);
        assert!(cmd.flags().is_unsub());
        assert!(cmd.flags().is_no_reply());
    }

    #[test]
    fn shard_channels_hash_to_slots() {
        let cmd = Builder::new(InitialSlot::InitSlot)
            .ssubscribe()
            .channel(["foo"])
            .build();
        assert_eq!(cmd.slot(), crate::slot::slot("foo"));
    }
}

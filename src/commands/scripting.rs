//! Scripting and function commands.
//!
//! The read-only variants carry the script-caching flag: a cacheable script
//! invocation keys at token index 3, and cache-key derivation insists on a
//! literal numkeys of 1.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    Eval,
    EvalScript,
    EvalNumkeys,
    EvalKey,
    EvalArg,
    Evalsha,
    EvalshaSha1,
    EvalshaNumkeys,
    EvalshaKey,
    EvalshaArg,
    EvalRo,
    EvalRoScript,
    EvalRoNumkeys,
    EvalRoKey,
    EvalRoArg,
    EvalshaRo,
    EvalshaRoSha1,
    EvalshaRoNumkeys,
    EvalshaRoKey,
    EvalshaRoArg,
    Fcall,
    FcallFunction,
    FcallNumkeys,
    FcallKey,
    FcallArg,
    FcallRo,
    FcallRoFunction,
    FcallRoNumkeys,
    FcallRoKey,
    FcallRoArg,
}

impl Builder {
    /// `EVAL script numkeys [key ...] [arg ...]`
    pub fn eval(self) -> Eval {
        Eval(self.cmd(CommandFlags::NONE, &["EVAL"]))
    }

    /// `EVALSHA sha1 numkeys [key ...] [arg ...]`
    pub fn evalsha(self) -> Evalsha {
        Evalsha(self.cmd(CommandFlags::NONE, &["EVALSHA"]))
    }

    /// `EVAL_RO script numkeys [key ...] [arg ...]`
    pub fn eval_ro(self) -> EvalRo {
        EvalRo(self.cmd(CommandFlags::SCRIPT_RO, &["EVAL_RO"]))
    }

    /// `EVALSHA_RO sha1 numkeys [key ...] [arg ...]`
    pub fn evalsha_ro(self) -> EvalshaRo {
        EvalshaRo(self.cmd(CommandFlags::SCRIPT_RO, &["EVALSHA_RO"]))
    }

    /// `FCALL function numkeys [key ...] [arg ...]`
    pub fn fcall(self) -> Fcall {
        Fcall(self.cmd(CommandFlags::NONE, &["FCALL"]))
    }

    /// `FCALL_RO function numkeys [key ...] [arg ...]`
    pub fn fcall_ro(self) -> FcallRo {
        FcallRo(self.cmd(CommandFlags::SCRIPT_RO, &["FCALL_RO"]))
    }
}

// The six invocation shapes share one grammar; only the opening token and
// flag word differ.
macro_rules! invocation_chain {
    ($($entry:ident . $first:ident -> $opened:ident -> $numkeys:ident -> $key:ident -> $arg:ident;)+) => {$(
        impl $entry {
            pub fn $first(self, v: impl Into<String>) -> $opened {
                $opened(self.0.arg(v))
            }
        }

        impl $opened {
            pub fn numkeys(self, numkeys: i64) -> $numkeys {
                $numkeys(self.0.int(numkeys))
            }
        }

        impl $numkeys {
            pub fn key<I, K>(self, keys: I) -> $key
            where
                I: IntoIterator<Item = K>,
                K: Into<String>,
            {
                $key(self.0.keys(keys))
            }

            pub fn arg<I, T>(self, args: I) -> $arg
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                $arg(self.0.args(args))
            }
        }

        impl $key {
            pub fn key<I, K>(self, keys: I) -> $key
            where
                I: IntoIterator<Item = K>,
                K: Into<String>,
            {
                $key(self.0.keys(keys))
            }

            pub fn arg<I, T>(self, args: I) -> $arg
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                $arg(self.0.args(args))
            }
        }

        impl $arg {
            pub fn arg<I, T>(self, args: I) -> $arg
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                $arg(self.0.args(args))
            }
        }
    )+};
}

invocation_chain! {
    Eval.script -> EvalScript -> EvalNumkeys -> EvalKey -> EvalArg;
    Evalsha.sha1 -> EvalshaSha1 -> EvalshaNumkeys -> EvalshaKey -> EvalshaArg;
    EvalRo.script -> EvalRoScript -> EvalRoNumkeys -> EvalRoKey -> EvalRoArg;
    EvalshaRo.sha1 -> EvalshaRoSha1 -> EvalshaRoNumkeys -> EvalshaRoKey -> EvalshaRoArg;
    Fcall.function -> FcallFunction -> FcallNumkeys -> FcallKey -> FcallArg;
    FcallRo.function -> FcallRoFunction -> FcallRoNumkeys -> FcallRoKey -> FcallRoArg;
}

build_terminal! {
    EvalNumkeys,
    EvalKey,
    EvalArg,
    EvalshaNumkeys,
    EvalshaKey,
    EvalshaArg,
    EvalRoNumkeys,
    EvalRoKey,
    EvalRoArg,
    EvalshaRoNumkeys,
    EvalshaRoKey,
    EvalshaRoArg,
    FcallNumkeys,
    FcallKey,
    FcallArg,
    FcallRoNumkeys,
    FcallRoKey,
    FcallRoArg,
}

cache_terminal! {
    EvalRoKey,
    EvalRoArg,
    EvalshaRoKey,
    EvalshaRoArg,
    FcallRoKey,
    FcallRoArg,
}

#[cfg(test)]
mod tests {
    use crate::builder::{Builder, InitialSlot};

    #[test]
    fn eval_token_order() {
        let cmd = Builder::new(InitialSlot::InitSlot)
            .eval()
            .script("return 1")
            .numkeys(1)
            .key(["k"])
            .arg(["a", "b"])
            .build();
        assert_eq!(cmd.tokens(), &["EVAL", "return 1", "1", "k", "a", "b"]);
        assert!(cmd.flags().is_write());
    }

    #[test]
    fn eval_ro_single_key_cache_scope() {
        let c = Builder::new(InitialSlot::InitSlot)
            .eval_ro()
            .script("script")
            .numkeys(1)
            .key(["k"])
            .arg(["a"])
            .cache();
        assert!(c.flags().is_script_ro());
        assert!(c.flags().is_read_only());
        assert_eq!(c.cache_key(), ("k", "EVAL_ROscript1a".to_string()));
    }

    #[test]
    #[should_panic(expected = "client side caching for scripting only supports numkeys=1")]
    fn eval_ro_numkeys_two_fails_at_cache_key() {
        let c = Builder::new(InitialSlot::InitSlot)
            .eval_ro()
            .script("script")
            .numkeys(2)
            .key(["{t}a", "{t}b"])
            .cache();
        c.cache_key();
    }

    #[test]
    fn fcall_ro_is_cacheable() {
        let c = Builder::new(InitialSlot::InitSlot)
            .fcall_ro()
            .function("myfunc")
            .numkeys(1)
            .key(["k"])
            .cache();
        assert_eq!(c.tokens(), &["FCALL_RO", "myfunc", "1", "k"]);
        assert_eq!(c.cache_key().0, "k");
    }
}

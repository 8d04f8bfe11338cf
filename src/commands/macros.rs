// Shared generation macros for the per-command state machines.  Every state
// is a newtype over `CommandState`; transitions consume the state and return
// the next one, so an illegal token order does not type-check.

/// Declares builder states.
macro_rules! states {
    ($($(#[$attr:meta])* $state:ident),+ $(,)?) => {$(
        $(#[$attr])*
        #[must_use]
        pub struct $state(pub(crate) crate::commands::CommandState);
    )+};
}

/// Implements `build()` on terminal states.
macro_rules! build_terminal {
    ($($state:ident),+ $(,)?) => {$(
        impl $state {
            /// Seals the token buffer and yields the completed command.
            #[inline]
            pub fn build(self) -> crate::cmd::Completed {
                self.0.into_completed()
            }
        }
    )+};
}

/// Implements `cache()` on read-only terminal states.
macro_rules! cache_terminal {
    ($($state:ident),+ $(,)?) => {$(
        impl $state {
            /// Seals the token buffer and yields a cacheable command.
            #[inline]
            pub fn cache(self) -> crate::cmd::Cacheable {
                self.0.into_cacheable()
            }
        }
    )+};
}

/// Implements a keyword-only transition on one or more states.
macro_rules! keyword {
    ($($from:ident => $(#[$attr:meta])* $method:ident [$($token:literal),+] -> $to:ident;)+) => {$(
        impl $from {
            $(#[$attr])*
            #[inline]
            pub fn $method(self) -> $to {
                $to(self.0 $(.arg($token))+)
            }
        }
    )+};
}

//! redis-cmds is a compile-time-checked Redis command builder and
//! classifier.  It assembles the token sequence of each Redis command through
//! fluent type-state builders, attaches per-command metadata (read/write,
//! blocking, pipelineable, no-reply, client-side-cacheable, cluster key
//! slot), and hands the result to a transport layer for framing.
//!
//! # Building commands
//!
//! Every command is a chain of states where each state's methods are exactly
//! the tokens that may legally come next, so malformed commands do not
//! compile:
//!
//! ```rust
//! use redis_cmds::{Builder, InitialSlot};
//!
//! let cmd = Builder::new(InitialSlot::InitSlot)
//!     .set()
//!     .key("my_key")
//!     .value("42")
//!     .ex_seconds(30)
//!     .build();
//! assert_eq!(cmd.tokens(), &["SET", "my_key", "42", "EX", "30"]);
//! assert!(cmd.flags().is_write());
//! ```
//!
//! Read-only terminals additionally offer `cache()`, which yields a
//! [`Cacheable`] carrying enough context for server-assisted client-side
//! caching:
//!
//! ```rust
//! use redis_cmds::{Builder, InitialSlot};
//!
//! let cmd = Builder::new(InitialSlot::InitSlot)
//!     .get()
//!     .key("my_key")
//!     .cache();
//! assert_eq!(cmd.cache_key(), ("my_key", "GET".to_string()));
//! ```
//!
//! # Cluster slots
//!
//! Builders accumulate the cluster slot of every key they see; keys hashing
//! to different slots within one command are a bug in the calling code and
//! abort.  The [`fanout`] helpers split multi-key commands into one command
//! per slot instead.
//!
//! # Buffer recycling
//!
//! Token buffers come from a process-wide pool.  The transport returns them
//! by calling [`release`] once it has finished serializing; [`Completed::pin`]
//! exempts long-lived commands from recycling.

mod buffer;
mod builder;
mod cmd;
pub mod commands;
pub mod fanout;
mod flags;
pub mod predefined;
pub mod slot;

pub use builder::{Builder, InitialSlot};
pub use cmd::{release, release_cacheable, Cacheable, Completed};
pub use flags::CommandFlags;
pub use slot::{INIT_SLOT, NO_SLOT};

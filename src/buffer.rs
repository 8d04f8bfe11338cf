//! The token buffer backing every command, and the process-wide free pool
//! that recycles buffers between request cycles.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// An ordered sequence of RESP argument tokens.
///
/// A buffer is owned exclusively by one builder until `seal` is called, at
/// which point ownership moves into the completed command and the buffer
/// becomes read-only.  Appending to a sealed buffer is a bug in the calling
/// code and aborts.
#[derive(Debug, Default)]
pub struct TokenBuffer {
    tokens: Vec<String>,
    built: bool,
    pinned: AtomicBool,
}

impl TokenBuffer {
    /// Appends a single token.
    #[inline]
    pub(crate) fn push(&mut self, token: String) {
        assert!(!self.built, "append to a built command buffer");
        self.tokens.push(token);
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Read-only view of the tokens.
    #[inline]
    pub(crate) fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Latches the buffer; every later `push` aborts.
    #[inline]
    pub(crate) fn seal(&mut self) {
        self.built = true;
    }

    /// Marks the buffer as retained so it is never returned to the pool.
    ///
    /// Called through a shared handle once the buffer is latched, hence the
    /// atomic rather than a plain bool.
    #[inline]
    pub(crate) fn pin(&self) {
        self.pinned.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn is_pinned(&self) -> bool {
        self.pinned.load(Ordering::Relaxed)
    }
}

/// Process-wide free list.  Unbounded; lends cleared buffers whose capacity
/// grows opportunistically across cycles.
static POOL: Mutex<Vec<TokenBuffer>> = Mutex::new(Vec::new());

/// Takes a cleared buffer from the pool, or allocates a fresh one.
pub(crate) fn fetch() -> TokenBuffer {
    fetch_from(&POOL)
}

/// Returns a buffer to the pool once its sole owner has released it.
///
/// Pinned buffers are dropped from consideration entirely: predefined
/// constants and long-lived cached commands keep their storage for the
/// lifetime of the process.
pub(crate) fn recycle(buf: TokenBuffer) {
    recycle_into(&POOL, buf);
}

fn fetch_from(pool: &Mutex<Vec<TokenBuffer>>) -> TokenBuffer {
    pool.lock().unwrap().pop().unwrap_or_default()
}

fn recycle_into(pool: &Mutex<Vec<TokenBuffer>>, mut buf: TokenBuffer) {
    if buf.is_pinned() {
        return;
    }
    buf.tokens.clear();
    buf.built = false;
    let mut pool = pool.lock().unwrap();
    log::trace!("recycling token buffer, pool size {}", pool.len() + 1);
    pool.push(buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_latches_buffer() {
        let mut buf = TokenBuffer::default();
        buf.push("GET".into());
        buf.push("k".into());
        assert_eq!(buf.tokens(), &["GET", "k"]);
        buf.seal();
        assert_eq!(buf.tokens().len(), 2);
    }

    #[test]
    #[should_panic(expected = "append to a built command buffer")]
    fn append_after_seal_panics() {
        let mut buf = TokenBuffer::default();
        buf.push("GET".into());
        buf.seal();
        buf.push("k".into());
    }

    // The recycling tests run against a local pool so they cannot race the
    // process-wide one shared with every other test in the binary.

    #[test]
    fn recycle_clears_tokens_and_latch() {
        let pool = Mutex::new(Vec::new());
        let mut buf = TokenBuffer::default();
        buf.push("PING".into());
        buf.seal();
        recycle_into(&pool, buf);
        let reused = fetch_from(&pool);
        assert!(reused.is_empty());
        assert!(!reused.built);
        // The pool handed back the recycled buffer, not a fresh allocation.
        assert!(pool.lock().unwrap().is_empty());
    }

    #[test]
    fn pinned_buffer_is_never_pooled() {
        let pool = Mutex::new(Vec::new());
        let mut buf = TokenBuffer::default();
        buf.push("PING".into());
        buf.seal();
        buf.pin();
        recycle_into(&pool, buf);
        assert!(pool.lock().unwrap().is_empty());
    }
}

use super::backend::StorageBackend;
use crate::error::{CardfileError, Result};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Inner {
    text: Mutex<Option<String>>,
    simulate_write_error: AtomicBool,
    writes: AtomicUsize,
}

/// In-memory storage backend for testing.
///
/// Clones share the same storage, so a test can keep a handle while the
/// `RecordStore` owns another.
#[derive(Clone, Default)]
pub struct MemBackend {
    inner: Arc<Inner>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `text` already stored, as if a file existed.
    pub fn with_text(text: impl Into<String>) -> Self {
        let backend = Self::new();
        *backend.inner.text.lock() = Some(text.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.inner
            .simulate_write_error
            .store(simulate, Ordering::SeqCst);
    }

    /// The currently stored text, if any.
    pub fn text(&self) -> Option<String> {
        self.inner.text.lock().clone()
    }

    /// Replace the stored text behind the store's back (an external edit).
    pub fn set_text(&self, text: impl Into<String>) {
        *self.inner.text.lock() = Some(text.into());
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.inner.writes.load(Ordering::SeqCst)
    }
}

impl StorageBackend for MemBackend {
    fn read_text(&self) -> Result<Option<String>> {
        Ok(self.inner.text.lock().clone())
    }

    fn write_text(&self, text: &str) -> Result<()> {
        if self.inner.simulate_write_error.load(Ordering::SeqCst) {
            return Err(CardfileError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        *self.inner.text.lock() = Some(text.to_string());
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://contacts.vcf")
    }
}

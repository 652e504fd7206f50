use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while the gateway and `RecordStore` handle the "what" (format, invariants).
pub trait StorageBackend {
    /// Read the whole card text.
    /// Returns Ok(None) if nothing has been stored yet (first run).
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_text(&self) -> Result<Option<String>>;

    /// Replace the stored text.
    /// MUST be atomic (e.g. write to tmp then rename): readers see either the
    /// old text or the new text, never a mix.
    fn write_text(&self, text: &str) -> Result<()>;

    /// Where the text lives. For FsBackend, the real path; for MemBackend, a virtual one.
    fn location(&self) -> PathBuf;
}

use super::backend::StorageBackend;
use crate::error::{CardfileError, ParseError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::trace;
use uuid::Uuid;

/// Single-file storage: the whole contact book lives in one card file.
#[derive(Debug, Clone)]
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FsBackend {
    fn read_text(&self) -> Result<Option<String>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CardfileError::Io(e)),
        };
        String::from_utf8(bytes).map(Some).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
            CardfileError::Parse(ParseError::InvalidEncoding { line })
        })
    }

    fn write_text(&self, text: &str) -> Result<()> {
        write_atomic(&self.path, text)
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Write `text` to `target` so that `target` never holds a partial write:
/// the bytes go to a sibling temp file, are flushed to disk, and the temp file
/// is renamed over the target.
pub fn write_atomic(target: &Path, text: &str) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(CardfileError::Io)?;
    }

    let file_name = target
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("contacts");
    let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    let written = File::create(&tmp_path).and_then(|mut file| {
        file.write_all(text.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written.and_then(|_| fs::rename(&tmp_path, target)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CardfileError::Io(e));
    }

    trace!(path = %target.display(), bytes = text.len(), "replaced file atomically");
    Ok(())
}

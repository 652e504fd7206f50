use crate::config::CardfileConfig;
use crate::error::{CardfileError, Result};
use crate::store::fs_backend::FsBackend;
use crate::store::record_store::RecordStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A ready-to-use, file-backed contact book.
pub struct CardfileContext {
    pub store: RecordStore<FsBackend>,
    pub config: CardfileConfig,
    pub data_dir: PathBuf,
}

/// The per-user data directory (e.g. `~/.local/share/cardfile` on Linux).
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "cardfile", "cardfile")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CardfileError::Config("Could not determine data dir".to_string()))
}

/// Open the contact book in `data_dir`, or in [`default_data_dir`] when `None`.
///
/// Reads `config.json` if present. The card file itself is not touched until
/// the first operation; a missing one is an empty book.
pub fn initialize(data_dir: Option<&Path>) -> Result<CardfileContext> {
    let data_dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_data_dir()?,
    };
    let config = CardfileConfig::load(&data_dir)?;
    let path = config.contacts_path(&data_dir);
    debug!(path = %path.display(), strict = config.strict_validation, "opening contact book");

    let store =
        RecordStore::with_backend(FsBackend::new(path)).with_policy(config.validation_policy());

    Ok(CardfileContext {
        store,
        config,
        data_dir,
    })
}

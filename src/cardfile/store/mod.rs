//! # Storage Layer
//!
//! Contacts live in a single card file (see [`crate::codec`]). This module owns
//! every read and write of that file.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw text I/O. [`fs_backend::FsBackend`] for
//!   the real file, [`mem_backend::MemBackend`] for tests.
//! - [`gateway::Gateway`]: turns stored text into contacts and back, through the
//!   codec. Nothing else reads or writes the file.
//! - [`record_store::RecordStore`]: the operation set callers use (`list`,
//!   `find`, `add`, `update`, `delete`, `export_text`, ...). It owns the
//!   in-memory records and is the only authority on ordering and uniqueness.
//!
//! ## Write Strategy
//!
//! Saves never edit the file in place. The full card text is written to a
//! temp file next to the target, flushed, and renamed over it, so after a crash
//! the file holds either the previous contents or the new ones.
//!
//! ## Identity
//!
//! The card format has no id field. Ids are assigned when contacts are loaded
//! or added and live for the process; they are never derived from where a card
//! sits in the file.

pub mod backend;
pub mod fs_backend;
pub mod gateway;
pub mod mem_backend;
pub mod record_store;

//! # Cardfile Architecture
//!
//! Cardfile is a **UI-agnostic contact book library**. It keeps name, phone and
//! email entries in one plain-text card file, and nothing else: pages, login,
//! HTTP routing and download headers belong to whatever embeds it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  RecordStore (store/record_store.rs)                        │
//! │  - The operation set: list, find, search, add, update,      │
//! │    delete, export_text, export_to, reload                   │
//! │  - One lock around load → validate → mutate → save          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Pure logic over a sorted Vec<ContactRecord>              │
//! │  - Validation, uniqueness, sorted insertion                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Gateway + StorageBackend (store/)                          │
//! │  - Card text ⇄ contacts via codec.rs                        │
//! │  - FsBackend (atomic file replace), MemBackend (tests)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! After every successful operation:
//! 1. No two contacts share a name, compared case-insensitively ([`collate`]).
//! 2. Contacts are sorted by that same comparison.
//! 3. Every contact has a non-empty name and phone.
//! 4. Every id is unique and never handed out again in the same process.
//!
//! A rejected operation changes nothing, in memory or on disk.
//!
//! ## Errors
//!
//! Everything returns [`error::Result`]. The embedding layer decides how to
//! present [`error::CardfileError`] variants; `is_transient` tells it which
//! failures (I/O) are worth retrying.
//!
//! ## Logging
//!
//! Loads, saves and mutations emit `tracing` events at `debug`/`trace`.
//! The library never installs a subscriber.
//!
//! ## Module Overview
//!
//! - [`store`]: storage layers and the [`store::record_store::RecordStore`]
//! - [`commands`]: add, update, delete, search, export logic
//! - [`codec`]: the card text format
//! - [`model`]: `ContactId`, `Contact`, `ContactRecord`
//! - [`collate`]: accent- and case-folding name order, agreeing with uniqueness
//! - [`config`]: per-directory configuration
//! - [`init`]: opens a file-backed store from a data directory
//! - [`error`]: error types

pub mod codec;
pub mod collate;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;

pub use error::{CardfileError, ParseError, Result};
pub use model::{Contact, ContactId, ContactRecord};
pub use store::record_store::RecordStore;

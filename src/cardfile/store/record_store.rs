use super::backend::StorageBackend;
use super::fs_backend::write_atomic;
use super::gateway::Gateway;
use crate::collate;
use crate::commands::{self, ContactDraft, ValidationPolicy};
use crate::error::{CardfileError, Result};
use crate::model::{Contact, ContactId, ContactRecord};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The contact book: a sorted, uniquely-named list of contacts kept in sync
/// with one card file.
///
/// Every operation takes the same lock, so a mutation's whole
/// load, validate, mutate, save cycle is one critical section and callers on
/// different threads see mutations in lock order. The records are loaded on
/// first use and cached; a mutation edits a copy, and the copy replaces the
/// cache only once it has been saved.
pub struct RecordStore<B: StorageBackend> {
    state: Mutex<State<B>>,
    policy: ValidationPolicy,
}

struct State<B: StorageBackend> {
    gateway: Gateway<B>,
    records: Option<Vec<ContactRecord>>,
}

impl<B: StorageBackend> State<B> {
    fn records(&mut self) -> Result<&mut Vec<ContactRecord>> {
        let records = match self.records.take() {
            Some(records) => records,
            None => with_ids(self.gateway.load()?, &[])?,
        };
        Ok(self.records.insert(records))
    }

    fn mutate<T>(
        &mut self,
        apply: impl FnOnce(&mut Vec<ContactRecord>) -> Result<T>,
    ) -> Result<T> {
        let mut next = self.records()?.clone();
        let outcome = apply(&mut next)?;
        self.gateway.save(next.iter().map(|r| &r.contact))?;
        self.records = Some(next);
        Ok(outcome)
    }
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            state: Mutex::new(State {
                gateway: Gateway::new(backend),
                records: None,
            }),
            policy: ValidationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn location(&self) -> PathBuf {
        self.state.lock().gateway.backend().location()
    }

    /// All contacts, sorted by name.
    pub fn list(&self) -> Result<Vec<ContactRecord>> {
        let mut state = self.state.lock();
        Ok(state.records()?.clone())
    }

    pub fn len(&self) -> Result<usize> {
        let mut state = self.state.lock();
        Ok(state.records()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn find(&self, id: ContactId) -> Result<ContactRecord> {
        let mut state = self.state.lock();
        state
            .records()?
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(CardfileError::NotFound(id))
    }

    /// Contacts whose name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Result<Vec<ContactRecord>> {
        let mut state = self.state.lock();
        Ok(commands::search::run(state.records()?, query))
    }

    pub fn add(&self, name: &str, phone: &str, email: &str) -> Result<ContactId> {
        let draft = ContactDraft::new(name, phone, email);
        let policy = self.policy;
        let record = self
            .state
            .lock()
            .mutate(|records| commands::add::run(records, &draft, policy))?;
        debug!(id = %record.id, "contact added");
        Ok(record.id)
    }

    pub fn update(
        &self,
        id: ContactId,
        name: &str,
        phone: &str,
        email: &str,
    ) -> Result<ContactRecord> {
        let draft = ContactDraft::new(name, phone, email);
        let policy = self.policy;
        let record = self
            .state
            .lock()
            .mutate(|records| commands::update::run(records, id, &draft, policy))?;
        debug!(id = %id, "contact updated");
        Ok(record)
    }

    pub fn delete(&self, id: ContactId) -> Result<ContactRecord> {
        let removed = self
            .state
            .lock()
            .mutate(|records| commands::delete::run(records, id))?;
        debug!(id = %id, "contact deleted");
        Ok(removed)
    }

    /// The card text of every contact, as it would be written to disk.
    pub fn export_text(&self) -> Result<String> {
        let mut state = self.state.lock();
        Ok(commands::export::run(state.records()?))
    }

    /// Write [`Self::export_text`] to `path`, replacing it atomically.
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let mut state = self.state.lock();
        let records = state.records()?;
        write_atomic(path, &commands::export::run(records))?;
        debug!(path = %path.display(), count = records.len(), "contacts exported");
        Ok(records.len())
    }

    /// Re-read the backing file, picking up edits made outside this store.
    ///
    /// Contacts whose name is unchanged keep their id. On failure the
    /// previously loaded contacts stay in place.
    pub fn reload(&self) -> Result<usize> {
        let mut state = self.state.lock();
        let contacts = state.gateway.load()?;
        let previous = state.records.take().unwrap_or_default();
        let records = match with_ids(contacts, &previous) {
            Ok(records) => records,
            Err(e) => {
                state.records = Some(previous);
                return Err(e);
            }
        };
        let count = records.len();
        state.records = Some(records);
        debug!(count, "contacts reloaded");
        Ok(count)
    }
}

/// Attach ids to freshly decoded contacts and sort them.
///
/// A contact matching a `previous` record by name keeps that record's id.
/// Two contacts with the same name mean the file breaks the uniqueness rule,
/// which is reported rather than merged.
fn with_ids(contacts: Vec<Contact>, previous: &[ContactRecord]) -> Result<Vec<ContactRecord>> {
    let known: HashMap<String, ContactId> = previous
        .iter()
        .map(|r| (collate::identity(r.name()), r.id))
        .collect();
    let mut seen = HashSet::with_capacity(contacts.len());
    let mut records = Vec::with_capacity(contacts.len());

    for contact in contacts {
        let key = collate::identity(&contact.name);
        if !seen.insert(key.clone()) {
            return Err(CardfileError::DuplicateName(contact.name));
        }
        let id = known.get(&key).copied().unwrap_or_default();
        records.push(ContactRecord { id, contact });
    }

    commands::sort_records(&mut records);
    Ok(records)
}

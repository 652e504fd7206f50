//! # Commands
//!
//! Pure business logic over the in-memory, sorted record list. Nothing here
//! touches the disk or takes a lock; [`crate::store::record_store::RecordStore`]
//! does that around every call.
//!
//! Each mutating command either fully applies its change to the `Vec` it is
//! given or returns an error having left it untouched. Callers rely on this to
//! reject bad input before any write happens.

use crate::collate;
use crate::error::{CardfileError, Result};
use crate::model::{Contact, ContactId, ContactRecord};
use once_cell::sync::Lazy;
use regex::Regex;

pub mod add;
pub mod delete;
pub mod export;
pub mod search;
pub mod update;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("valid phone regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// How strictly incoming fields are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Require E.164 phones (spaces are stripped first) and well-formed emails.
    pub strict: bool,
}

impl ValidationPolicy {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Caller-supplied fields for `add`/`update`, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Normalize and check the draft, producing a contact that can be written
    /// to a card and read back unchanged.
    pub fn validate(&self, policy: ValidationPolicy) -> Result<Contact> {
        let name = self.name.trim();
        let mut phone = self.phone.trim().to_string();
        let email = self.email.trim();

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if phone.is_empty() {
            return Err(invalid("phone cannot be empty"));
        }
        for (label, value) in [("name", name), ("phone", phone.as_str()), ("email", email)] {
            if value.contains(['\n', '\r']) {
                return Err(invalid(format!("{} cannot span multiple lines", label)));
            }
        }

        if policy.strict {
            phone.retain(|c| c != ' ');
            if !PHONE_RE.is_match(&phone) {
                return Err(invalid("invalid phone number format"));
            }
            if !email.is_empty() && !EMAIL_RE.is_match(email) {
                return Err(invalid("invalid email address"));
            }
        }

        Ok(Contact::new(name, phone, email))
    }
}

fn invalid(reason: impl Into<String>) -> CardfileError {
    CardfileError::Validation(reason.into())
}

pub(crate) fn position_of(records: &[ContactRecord], id: ContactId) -> Result<usize> {
    records
        .iter()
        .position(|r| r.id == id)
        .ok_or(CardfileError::NotFound(id))
}

/// Fails if `name` collides with any record other than `except`.
pub(crate) fn ensure_unique(
    records: &[ContactRecord],
    name: &str,
    except: Option<ContactId>,
) -> Result<()> {
    let clash = records
        .iter()
        .filter(|r| Some(r.id) != except)
        .find(|r| collate::same_name(r.name(), name));
    match clash {
        Some(existing) => Err(CardfileError::DuplicateName(existing.name().to_string())),
        None => Ok(()),
    }
}

/// Insert keeping the list sorted. Lands after any equal keys, so ties keep
/// their earlier relative order.
pub(crate) fn insert_sorted(records: &mut Vec<ContactRecord>, record: ContactRecord) -> usize {
    let key = collate::key(record.name());
    let at = records.partition_point(|r| collate::key(r.name()) <= key);
    records.insert(at, record);
    at
}

pub(crate) fn sort_records(records: &mut [ContactRecord]) {
    records.sort_by(|a, b| collate::compare(a.name(), b.name()));
}

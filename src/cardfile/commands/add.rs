use crate::error::Result;
use crate::model::ContactRecord;

use super::{ensure_unique, insert_sorted, ContactDraft, ValidationPolicy};

/// Validate the draft and insert it at its sorted position under a fresh id.
pub fn run(
    records: &mut Vec<ContactRecord>,
    draft: &ContactDraft,
    policy: ValidationPolicy,
) -> Result<ContactRecord> {
    let contact = draft.validate(policy)?;
    ensure_unique(records, &contact.name, None)?;

    let record = ContactRecord::new(contact);
    insert_sorted(records, record.clone());
    Ok(record)
}

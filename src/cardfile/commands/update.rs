use crate::collate;
use crate::error::Result;
use crate::model::{ContactId, ContactRecord};

use super::{ensure_unique, insert_sorted, position_of, ContactDraft, ValidationPolicy};

/// Replace the fields of the record `id`, keeping its id.
///
/// The record moves only when its name changes by more than case; other records keep
/// their order.
pub fn run(
    records: &mut Vec<ContactRecord>,
    id: ContactId,
    draft: &ContactDraft,
    policy: ValidationPolicy,
) -> Result<ContactRecord> {
    let at = position_of(records, id)?;
    let contact = draft.validate(policy)?;
    ensure_unique(records, &contact.name, Some(id))?;

    let reposition = !collate::same_name(&records[at].contact.name, &contact.name);
    records[at].contact = contact;

    let at = if reposition {
        let record = records.remove(at);
        insert_sorted(records, record)
    } else {
        at
    };
    Ok(records[at].clone())
}

use crate::error::Result;
use crate::model::{ContactId, ContactRecord};

use super::position_of;

/// Remove exactly the record `id`, returning it.
pub fn run(records: &mut Vec<ContactRecord>, id: ContactId) -> Result<ContactRecord> {
    let at = position_of(records, id)?;
    Ok(records.remove(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, ContactDraft, ValidationPolicy};
    use crate::error::CardfileError;

    #[test]
    fn removes_only_the_target() {
        let mut records = Vec::new();
        for name in ["Ann", "Bob", "Eve", "Zed"] {
            add::run(
                &mut records,
                &ContactDraft::new(name, "1", ""),
                ValidationPolicy::default(),
            )
            .unwrap();
        }
        let eve = records[2].id;
        let mut expected = records.clone();
        expected.remove(2);

        let removed = run(&mut records, eve).unwrap();

        assert_eq!(removed.name(), "Eve");
        assert_eq!(records, expected);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut records = Vec::new();
        assert!(matches!(
            run(&mut records, ContactId::new()),
            Err(CardfileError::NotFound(_))
        ));
    }
}

use crate::model::ContactRecord;

/// Records whose name contains `query`, ignoring case, in list order.
pub fn run(records: &[ContactRecord], query: &str) -> Vec<ContactRecord> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|r| r.name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

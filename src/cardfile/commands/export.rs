use crate::codec;
use crate::model::ContactRecord;

/// The card text for the records, in the order given.
pub fn run(records: &[ContactRecord]) -> String {
    codec::encode(records.iter().map(|r| &r.contact))
}

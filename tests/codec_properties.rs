use cardfile::codec::{decode, encode};
use cardfile::model::Contact;
use proptest::prelude::*;

// Values a card can carry unchanged: no line breaks and nothing that trimming
// the line would strip.
fn field() -> impl Strategy<Value = String> {
    proptest::string::string_regex(
        "[A-Za-z0-9@.+()_-]([A-Za-z0-9 @.:;+()_-]{0,20}[A-Za-z0-9@.+()_-])?",
    )
    .unwrap()
}

fn contact() -> impl Strategy<Value = Contact> {
    (field(), field(), prop_oneof![Just(String::new()), field()])
        .prop_map(|(name, phone, email)| Contact::new(name, phone, email))
}

proptest! {
    #[test]
    fn decode_inverts_encode(contacts in proptest::collection::vec(contact(), 0..12)) {
        let text = encode(&contacts);
        prop_assert_eq!(decode(&text).unwrap(), contacts);
    }

    #[test]
    fn every_card_ends_with_newline(contacts in proptest::collection::vec(contact(), 1..6)) {
        let text = encode(&contacts);
        prop_assert!(text.ends_with("END:VCARD\n"));
        prop_assert_eq!(text.matches("BEGIN:VCARD\n").count(), contacts.len());
    }
}

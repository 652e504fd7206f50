//! # Card Format
//!
//! Contacts are persisted as a sequence of cards:
//!
//! ```text
//! BEGIN:VCARD
//! FN:<name>
//! TEL:<phone>
//! EMAIL:<email>        (omitted when empty)
//! END:VCARD
//! ```
//!
//! [`encode`] writes exactly that shape, one card per contact. [`decode`] is more
//! forgiving about what it reads, since files get edited by hand and by other tools:
//!
//! - A leading byte order mark is skipped.
//! - Lines are trimmed at both ends, so indented cards parse.
//! - Markers and tags match case-insensitively, and tag parameters are dropped
//!   (`TEL;TYPE=CELL:+1555` is a phone).
//! - Tags it does not know (`VERSION`, `N`, `ORG`, ...) are skipped.
//!
//! Anything it cannot place is an error rather than silently lost: an unclosed
//! card, a stray line between cards, a repeated field, or a card without a name
//! or phone.
//!
//! For any contacts whose fields hold no line breaks and no surrounding
//! whitespace, `decode(&encode(x)) == x`.

use crate::error::{ParseError, Unbalanced};
use crate::model::{Contact, Field};

const BEGIN_MARKER: &str = "BEGIN:VCARD";
const END_MARKER: &str = "END:VCARD";

/// Fields gathered for the card currently being read.
struct OpenCard {
    begin_line: usize,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

impl OpenCard {
    fn new(begin_line: usize) -> Self {
        Self {
            begin_line,
            name: None,
            phone: None,
            email: None,
        }
    }

    fn set(&mut self, field: Field, value: &str, line: usize) -> Result<(), ParseError> {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
        };
        if slot.is_some() {
            return Err(ParseError::DuplicateField { field, line });
        }
        *slot = Some(value.to_string());
        Ok(())
    }

    fn finish(self) -> Result<Contact, ParseError> {
        let missing = |field| ParseError::MissingField {
            field,
            line: self.begin_line,
        };
        let name = self
            .name
            .filter(|v| !v.is_empty())
            .ok_or_else(|| missing(Field::Name))?;
        let phone = self
            .phone
            .filter(|v| !v.is_empty())
            .ok_or_else(|| missing(Field::Phone))?;
        Ok(Contact {
            name,
            phone,
            email: self.email.unwrap_or_default(),
        })
    }
}

/// Parse card text into contacts, in file order.
pub fn decode(text: &str) -> Result<Vec<Contact>, ParseError> {
    let mut contacts = Vec::new();
    let mut open: Option<OpenCard> = None;
    let mut last_line = 0;
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case(BEGIN_MARKER) {
            if open.is_some() {
                return Err(ParseError::UnbalancedBlock {
                    kind: Unbalanced::NestedBegin,
                    line: line_no,
                });
            }
            open = Some(OpenCard::new(line_no));
            continue;
        }

        if line.eq_ignore_ascii_case(END_MARKER) {
            let card = open.take().ok_or(ParseError::UnbalancedBlock {
                kind: Unbalanced::EndWithoutBegin,
                line: line_no,
            })?;
            contacts.push(card.finish()?);
            continue;
        }

        let Some(card) = open.as_mut() else {
            return Err(ParseError::UnexpectedLine { line: line_no });
        };

        let Some((tag, value)) = line.split_once(':') else {
            return Err(ParseError::UnexpectedLine { line: line_no });
        };

        // `TEL;TYPE=CELL` -> `TEL`
        let tag = tag.split(';').next().unwrap_or(tag);
        if let Some(field) = Field::from_tag(tag) {
            card.set(field, value, line_no)?;
        }
    }

    if open.is_some() {
        return Err(ParseError::UnbalancedBlock {
            kind: Unbalanced::Unterminated,
            line: last_line,
        });
    }

    Ok(contacts)
}

/// Render contacts as card text, one card per contact, in the given order.
pub fn encode<'a, I>(contacts: I) -> String
where
    I: IntoIterator<Item = &'a Contact>,
{
    let mut out = String::new();
    for contact in contacts {
        push_card(&mut out, contact);
    }
    out
}

fn push_card(out: &mut String, contact: &Contact) {
    out.push_str(BEGIN_MARKER);
    out.push('\n');
    push_field(out, Field::Name, &contact.name);
    push_field(out, Field::Phone, &contact.phone);
    if contact.has_email() {
        push_field(out, Field::Email, &contact.email);
    }
    out.push_str(END_MARKER);
    out.push('\n');
}

fn push_field(out: &mut String, field: Field, value: &str) {
    out.push_str(field.tag());
    out.push(':');
    out.push_str(value);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_single_card_exactly() {
        let text = encode(&[Contact::new("Alice", "555-0100", "a@x.com")]);
        assert_eq!(
            text,
            "BEGIN:VCARD\nFN:Alice\nTEL:555-0100\nEMAIL:a@x.com\nEND:VCARD\n"
        );
    }

    #[test]
    fn omits_empty_email() {
        let text = encode(&[Contact::new("Bob", "1", "")]);
        assert_eq!(text, "BEGIN:VCARD\nFN:Bob\nTEL:1\nEND:VCARD\n");
    }

    #[test]
    fn encodes_nothing_for_no_contacts() {
        assert_eq!(encode(&Vec::<Contact>::new()), "");
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn decodes_mixed_cards_with_blank_lines() {
        let text = "BEGIN:VCARD\nFN:Bob\nTEL:1\nEND:VCARD\n\n\nBEGIN:VCARD\nFN:Dan\nTEL:2\nEMAIL:d@x.com\nEND:VCARD\n";
        let contacts = decode(text).unwrap();
        assert_eq!(
            contacts,
            vec![
                Contact::new("Bob", "1", ""),
                Contact::new("Dan", "2", "d@x.com"),
            ]
        );
    }

    #[test]
    fn decodes_indented_cards() {
        // Shape written by the old web form, which indented every field line.
        let text = "BEGIN:VCARD\n  FN:Ann\n  TEL:+4412\n  EMAIL:\n  END:VCARD\n";
        let contacts = decode(text).unwrap();
        assert_eq!(contacts, vec![Contact::new("Ann", "+4412", "")]);
    }

    #[test]
    fn keeps_value_interior_untouched() {
        let text = "BEGIN:VCARD\nFN:Mary  Ann: Jr.\nTEL:+1 (555) 0100\nEND:VCARD\n";
        let contacts = decode(text).unwrap();
        assert_eq!(contacts[0].name, "Mary  Ann: Jr.");
        assert_eq!(contacts[0].phone, "+1 (555) 0100");
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let text = "BEGIN:VCARD\r\nFN:Eve\r\nTEL:7\r\nEND:VCARD\r\n";
        assert_eq!(decode(text).unwrap(), vec![Contact::new("Eve", "7", "")]);
    }

    #[test]
    fn skips_leading_byte_order_mark() {
        let text = "\u{FEFF}BEGIN:VCARD\nFN:Eve\nTEL:7\nEND:VCARD\n";
        assert_eq!(decode(text).unwrap(), vec![Contact::new("Eve", "7", "")]);
    }

    #[test]
    fn byte_order_mark_mid_file_is_not_skipped() {
        let text = "BEGIN:VCARD\nFN:Eve\nTEL:7\nEND:VCARD\n\u{FEFF}BEGIN:VCARD\n";
        assert_eq!(decode(text), Err(ParseError::UnexpectedLine { line: 5 }));
    }

    #[test]
    fn skips_unknown_tags_and_parameters() {
        let text = "begin:vcard\nVERSION:3.0\nFN:Zoe\nTEL;TYPE=CELL:+1555\nORG:Acme\nend:vcard\n";
        assert_eq!(
            decode(text).unwrap(),
            vec![Contact::new("Zoe", "+1555", "")]
        );
    }

    #[test]
    fn missing_phone_is_reported() {
        let text = "BEGIN:VCARD\nFN:Eve\nEND:VCARD\n";
        assert_eq!(
            decode(text),
            Err(ParseError::MissingField {
                field: Field::Phone,
                line: 1
            })
        );
    }

    #[test]
    fn empty_name_counts_as_missing() {
        let text = "\nBEGIN:VCARD\nFN:\nTEL:1\nEND:VCARD\n";
        assert_eq!(
            decode(text),
            Err(ParseError::MissingField {
                field: Field::Name,
                line: 2
            })
        );
    }

    #[test]
    fn end_without_begin_is_unbalanced() {
        let text = "BEGIN:VCARD\nFN:A\nTEL:1\nEND:VCARD\nEND:VCARD\n";
        assert_eq!(
            decode(text),
            Err(ParseError::UnbalancedBlock {
                kind: Unbalanced::EndWithoutBegin,
                line: 5
            })
        );
    }

    #[test]
    fn nested_begin_is_unbalanced() {
        let text = "BEGIN:VCARD\nFN:A\nBEGIN:VCARD\n";
        assert!(matches!(
            decode(text),
            Err(ParseError::UnbalancedBlock {
                kind: Unbalanced::NestedBegin,
                line: 3
            })
        ));
    }

    #[test]
    fn unterminated_card_is_unbalanced() {
        let text = "BEGIN:VCARD\nFN:A\nTEL:1\n";
        assert!(matches!(
            decode(text),
            Err(ParseError::UnbalancedBlock {
                kind: Unbalanced::Unterminated,
                ..
            })
        ));
    }

    #[test]
    fn repeated_field_is_rejected() {
        let text = "BEGIN:VCARD\nFN:A\nTEL:1\nTEL:2\nEND:VCARD\n";
        assert_eq!(
            decode(text),
            Err(ParseError::DuplicateField {
                field: Field::Phone,
                line: 4
            })
        );
    }

    #[test]
    fn stray_text_between_cards_is_rejected() {
        let text = "BEGIN:VCARD\nFN:A\nTEL:1\nEND:VCARD\nhello\n";
        assert_eq!(decode(text), Err(ParseError::UnexpectedLine { line: 5 }));
    }

    #[test]
    fn untagged_line_inside_card_is_rejected() {
        let text = "BEGIN:VCARD\nFN:A\njust text\nTEL:1\nEND:VCARD\n";
        assert_eq!(decode(text), Err(ParseError::UnexpectedLine { line: 3 }));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a contact. Assigned once, never derived from the
/// contact's position in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ContactId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl From<Uuid> for ContactId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// The fields a card can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    /// The tag used for this field in the card format.
    pub fn tag(self) -> &'static str {
        match self {
            Field::Name => "FN",
            Field::Phone => "TEL",
            Field::Email => "EMAIL",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        [Field::Name, Field::Phone, Field::Email]
            .into_iter()
            .find(|field| field.tag().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The persisted part of a contact: what one card holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    /// Empty when the contact has no email.
    #[serde(default)]
    pub email: String,
}

impl Contact {
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

    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }
}

/// A contact as held by the store: the card plus its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: ContactId,
    #[serde(flatten)]
    pub contact: Contact,
}

impl ContactRecord {
    pub fn new(contact: Contact) -> Self {
        Self {
            id: ContactId::new(),
            contact,
        }
    }

    pub fn name(&self) -> &str {
        &self.contact.name
    }

    pub fn phone(&self) -> &str {
        &self.contact.phone
    }

    pub fn email(&self) -> &str {
        &self.contact.email
    }
}

//! # Name Collation
//!
//! Names sort the way a person scanning an address book expects: case is
//! ignored and accented letters sit with their base letter, so `"émile"` comes
//! before `"Zoe"` and `"Ölaf"` between them.
//!
//! The sort key has two parts. The primary part lowercases, decomposes to NFD
//! and drops combining marks. Ties on it are broken by the plain lowercased
//! name, the [`identity`] of a contact. Two names compare equal only when their
//! identities match, so sorting and duplicate detection always agree:
//! `"Émile"` and `"émile"` are the same name, `"Emile"` and `"Émile"` are not.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The sort key for a contact name.
pub fn key(name: &str) -> (String, String) {
    let identity = identity(name);
    let folded = identity
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    (folded, identity)
}

/// Case-folded name; two contacts with the same identity are duplicates.
pub fn identity(name: &str) -> String {
    name.to_lowercase()
}

pub fn compare(a: &str, b: &str) -> Ordering {
    key(a).cmp(&key(b))
}

pub fn same_name(a: &str, b: &str) -> bool {
    identity(a) == identity(b)
}

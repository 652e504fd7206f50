use crate::model::{ContactId, Field};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardfileError {
    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    #[error("Invalid contact: {0}")]
    Validation(String),

    #[error("A contact named \"{0}\" already exists")]
    DuplicateName(String),

    #[error("Malformed contacts file: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl CardfileError {
    /// Whether retrying the same call could succeed without changing the input.
    pub fn is_transient(&self) -> bool {
        matches!(self, CardfileError::Io(_))
    }
}

/// Why a `BEGIN`/`END` pair did not line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unbalanced {
    EndWithoutBegin,
    NestedBegin,
    Unterminated,
}

impl std::fmt::Display for Unbalanced {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Unbalanced::EndWithoutBegin => "END without a matching BEGIN",
            Unbalanced::NestedBegin => "BEGIN inside an open card",
            Unbalanced::Unterminated => "card is never closed with END",
        };
        f.write_str(text)
    }
}

/// Errors produced while decoding card text. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: card is missing its {field} field")]
    MissingField { field: Field, line: usize },

    #[error("line {line}: {kind}")]
    UnbalancedBlock { kind: Unbalanced, line: usize },

    #[error("line {line}: {field} appears more than once in the same card")]
    DuplicateField { field: Field, line: usize },

    #[error("line {line}: unexpected content outside a card")]
    UnexpectedLine { line: usize },

    #[error("line {line}: file is not valid UTF-8")]
    InvalidEncoding { line: usize },
}

pub type Result<T> = std::result::Result<T, CardfileError>;

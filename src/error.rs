// Error taxonomy shared by every pattern example.
//
// Most examples cannot fail at all. The variants below cover the few misuse
// cases the examples do define, plus configuration loading.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

#[derive(Error, Debug)]
pub enum PatternError {
    /// A participant was asked to perform a role that belongs to someone else.
    #[error("method {method}() not implemented for {role}")]
    NotImplemented {
        role: &'static str,
        method: &'static str,
    },

    #[error("no example named '{0}' in the catalog")]
    UnknownExample(String),

    #[error("snapshot {index} does not exist (caretaker holds {len})")]
    SnapshotOutOfRange { index: usize, len: usize },

    #[error("invalid expression: {0}")]
    Expression(String),

    #[error("unknown clone mode '{0}' (expected shallow, referential or deep)")]
    UnknownCloneMode(String),

    #[error("invalid attachment: {0}")]
    InvalidAttachment(String),

    #[error("argument {0} overflows i64")]
    Overflow(i64),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

impl PatternError {
    pub fn not_implemented(role: &'static str, method: &'static str) -> Self {
        Self::NotImplemented { role, method }
    }

    pub fn expression(message: impl Into<String>) -> Self {
        Self::Expression(message.into())
    }

    pub fn invalid_attachment(message: impl Into<String>) -> Self {
        Self::InvalidAttachment(message.into())
    }
}

//! Dump errors.
//!
//! A dump either produces the whole string or fails as a whole; there is no
//! partial output. Unbalanced `Indent`/`Dedent` markers are not errors.

use crate::String;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DumpError {
    /// No handler is registered for the node's kind or any of its ancestors,
    /// and there is no fallback.
    #[error("no dump handler for node kind `{kind}`")]
    NoHandler { kind: &'static str },

    /// A handler rejected the node it was given.
    #[error("dump handler for `{kind}` failed: {message}")]
    Handler { kind: &'static str, message: String },
}

impl DumpError {
    pub fn handler(kind: &'static str, message: impl Into<String>) -> Self {
        DumpError::Handler {
            kind,
            message: message.into(),
        }
    }

    /// The node kind the error was raised for.
    pub fn kind(&self) -> &'static str {
        match self {
            DumpError::NoHandler { kind } | DumpError::Handler { kind, .. } => kind,
        }
    }
}

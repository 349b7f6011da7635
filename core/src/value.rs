//! Intermediate dump values.
//!
//! Handlers describe a node by returning a [`DumpValue`]: literal text,
//! parenthesized groups, and three control markers that drive line breaks
//! and indentation. The formatter in [`crate::format`] turns the value into
//! text.

use crate::options::DumpOptions;
use crate::{String, ToString, Vec};
use core::fmt;

/// Structural description of a node, produced by a handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DumpValue {
    /// Text emitted verbatim.
    Literal(String),

    /// A parenthesized sequence. Groups nest without limit.
    Group(Vec<DumpValue>),

    /// Newline followed by the current indentation.
    Break,

    /// Increase the indentation depth by one level. Emits nothing.
    Indent,

    /// Decrease the indentation depth by one level. Emits nothing.
    Dedent,
}

impl DumpValue {
    /// A literal from anything string-like.
    pub fn literal(text: impl Into<String>) -> Self {
        DumpValue::Literal(text.into())
    }

    /// A literal from the textual form of any displayable value.
    ///
    /// ```
    /// use treedump_core::DumpValue;
    ///
    /// assert_eq!(DumpValue::text(42), DumpValue::literal("42"));
    /// ```
    pub fn text(value: impl fmt::Display) -> Self {
        DumpValue::Literal(value.to_string())
    }

    pub fn group(items: impl IntoIterator<Item = DumpValue>) -> Self {
        DumpValue::Group(items.into_iter().collect())
    }

    /// The empty group, rendered as `()`.
    pub fn empty() -> Self {
        DumpValue::Group(Vec::new())
    }

    /// Returns true for `Break`, `Indent` and `Dedent`.
    pub fn is_marker(&self) -> bool {
        matches!(self, DumpValue::Break | DumpValue::Indent | DumpValue::Dedent)
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            DumpValue::Literal(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for DumpValue {
    fn from(text: &str) -> Self {
        DumpValue::Literal(String::from(text))
    }
}

impl From<String> for DumpValue {
    fn from(text: String) -> Self {
        DumpValue::Literal(text)
    }
}

impl From<Vec<DumpValue>> for DumpValue {
    fn from(items: Vec<DumpValue>) -> Self {
        DumpValue::Group(items)
    }
}

impl FromIterator<DumpValue> for DumpValue {
    fn from_iter<I: IntoIterator<Item = DumpValue>>(iter: I) -> Self {
        DumpValue::group(iter)
    }
}

/// Renders with default options starting from depth 0.
impl fmt::Display for DumpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0;
        let text = crate::format::format(self, &mut depth, &DumpOptions::default());
        f.write_str(&text)
    }
}

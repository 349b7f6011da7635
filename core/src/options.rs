//! Configuration options for dumping.

use crate::String;

/// Configuration options for a [`Dumper`](crate::Dumper).
///
/// # Example
///
/// ```
/// use treedump_core::DumpOptions;
///
/// let options = DumpOptions::default().with_initial_indentation(2);
/// assert_eq!(options.indent_string(2), "    ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// Text emitted once per indentation level after a line break.
    ///
    /// Default: two spaces
    pub indent_unit: String,

    /// Indentation depth a new dumper starts from.
    ///
    /// Default: 0
    pub initial_indentation: isize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent_unit: String::from("  "),
            initial_indentation: 0,
        }
    }
}

impl DumpOptions {
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    pub fn with_initial_indentation(mut self, depth: isize) -> Self {
        self.initial_indentation = depth;
        self
    }

    /// Indentation text for `depth`. Zero or negative depths yield no text.
    pub fn indent_string(&self, depth: isize) -> String {
        let count = usize::try_from(depth).unwrap_or(0);
        self.indent_unit.repeat(count)
    }
}

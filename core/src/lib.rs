//! Tree dumper for language-implementation pipelines.
//!
//! Renders any node of a host tree into a parenthesized, indentation-aware
//! string for logs, test assertions, and debugging.
//!
//! Handlers, selected by node kind, describe each node as a [`DumpValue`]:
//! literal text, nested groups, and `Break`/`Indent`/`Dedent` markers. The
//! [`Dumper`] then flattens that value into tokens and joins them with
//! single spaces where the adjacency rule allows.
//!
//! # Example
//!
//! ```
//! use treedump_core::{Dispatcher, DumpNode, DumpValue, Dumper};
//!
//! struct Ident(&'static str);
//!
//! impl DumpNode for Ident {
//!     fn kind(&self) -> &'static str {
//!         "Ident"
//!     }
//! }
//!
//! let dispatcher = Dispatcher::<Ident>::new().with_handler("Ident", |_, node| {
//!     Ok(DumpValue::group(["ident".into(), DumpValue::literal(node.0)]))
//! });
//!
//! let mut dumper = Dumper::new(dispatcher);
//! assert_eq!(dumper.dump(&Ident("x")).unwrap(), "(ident x)");
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{
    borrow::Cow, boxed::Box, format, string::String, string::ToString, vec, vec::Vec,
};

pub mod dumper;
pub mod error;
pub mod format;
pub mod node;
pub mod options;
pub mod value;
pub mod visitor;

pub use dumper::Dumper;
pub use error::DumpError;
pub use node::{DumpNode, is_no_op};
pub use options::DumpOptions;
pub use value::DumpValue;
pub use visitor::{Dispatcher, DumpVisitor, Handler};

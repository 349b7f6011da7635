//! The dump entry point.

use crate::error::DumpError;
use crate::format;
use crate::node::{self, DumpNode};
use crate::options::DumpOptions;
use crate::value::DumpValue;
use crate::visitor::DumpVisitor;
use crate::String;

/// Turns tree nodes into text.
///
/// A dumper owns a visitor, its options, and an indentation counter. The
/// counter is seeded from [`DumpOptions::initial_indentation`] and is not
/// reset between calls: unbalanced `Indent`/`Dedent` markers in one dump
/// carry over into the next. Use one dumper per thread of work.
///
/// # Example
///
/// ```
/// use treedump_core::{Dispatcher, DumpNode, DumpValue, Dumper};
///
/// enum Node {
///     Leaf(&'static str),
///     Pair(Box<Node>, Box<Node>),
/// }
///
/// impl DumpNode for Node {
///     fn kind(&self) -> &'static str {
///         match self {
///             Node::Leaf(_) => "Leaf",
///             Node::Pair(..) => "Pair",
///         }
///     }
/// }
///
/// let dispatcher = Dispatcher::<Node>::new()
///     .with_handler("Leaf", |_, node| match node {
///         Node::Leaf(name) => Ok(DumpValue::literal(*name)),
///         _ => unreachable!(),
///     })
///     .with_handler("Pair", |d, node| match node {
///         Node::Pair(a, b) => Ok(DumpValue::group(["pair".into(), d.visit(a)?, d.visit(b)?])),
///         _ => unreachable!(),
///     });
///
/// let tree = Node::Pair(Box::new(Node::Leaf("a")), Box::new(Node::Leaf("b")));
/// let mut dumper = Dumper::new(dispatcher);
/// assert_eq!(dumper.dump(&tree).unwrap(), "(pair a b)");
/// ```
#[derive(Debug)]
pub struct Dumper<V> {
    visitor: V,
    options: DumpOptions,
    indent_count: isize,
}

impl<V> Dumper<V> {
    pub fn new(visitor: V) -> Self {
        Self::with_options(visitor, DumpOptions::default())
    }

    pub fn with_options(visitor: V, options: DumpOptions) -> Self {
        let indent_count = options.initial_indentation;
        Self {
            visitor,
            options,
            indent_count,
        }
    }

    /// Dump `node` to text.
    ///
    /// Fails if the visitor cannot describe `node` or any of its
    /// descendants. On failure no text is produced and the indentation
    /// counter is left untouched.
    pub fn dump<N>(&mut self, node: &N) -> Result<String, DumpError>
    where
        N: DumpNode + ?Sized,
        V: DumpVisitor<N>,
    {
        let value = self.do_dump(node)?;
        Ok(self.format(&value))
    }

    /// Run the visitor on `node` without formatting the result.
    pub fn do_dump<N>(&self, node: &N) -> Result<DumpValue, DumpError>
    where
        N: DumpNode + ?Sized,
        V: DumpVisitor<N>,
    {
        tracing::trace!(kind = node.kind(), "Dumping node");
        self.visitor.visit(node)
    }

    /// Format a dump value, starting from and updating the current
    /// indentation counter.
    pub fn format(&mut self, value: &DumpValue) -> String {
        format::format(value, &mut self.indent_count, &self.options)
    }

    /// Indentation text for the current depth.
    pub fn indent(&self) -> String {
        self.options.indent_string(self.indent_count)
    }

    pub fn indent_count(&self) -> isize {
        self.indent_count
    }

    pub fn set_indent_count(&mut self, count: isize) {
        self.indent_count = count;
    }

    pub fn options(&self) -> &DumpOptions {
        &self.options
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    /// See [`node::is_no_op`].
    pub fn is_no_op<N: DumpNode + ?Sized>(&self, node: Option<&N>) -> bool {
        node::is_no_op(node)
    }
}

//! The contract host trees implement to be dumped.

use core::iter;

/// A node of a host tree.
///
/// The dumper never looks inside a node. It only needs the node's kind, to
/// pick a handler, and whether the node is the no-op marker.
pub trait DumpNode {
    /// Name of the node's concrete kind.
    fn kind(&self) -> &'static str;

    /// More general kinds this node also belongs to, most specific first.
    ///
    /// A handler registered for the concrete kind wins over one registered
    /// for an ancestor.
    fn ancestors(&self) -> &'static [&'static str] {
        &[]
    }

    /// Whether this node is the no-op marker ("nothing here").
    fn is_no_op(&self) -> bool {
        false
    }
}

/// The concrete kind of `node` followed by its ancestors.
pub fn lineage<N: DumpNode + ?Sized>(node: &N) -> impl Iterator<Item = &'static str> + use<N> {
    iter::once(node.kind()).chain(node.ancestors().iter().copied())
}

impl<N: DumpNode + ?Sized> DumpNode for &N {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn ancestors(&self) -> &'static [&'static str] {
        (**self).ancestors()
    }

    fn is_no_op(&self) -> bool {
        (**self).is_no_op()
    }
}

impl<N: DumpNode + ?Sized> DumpNode for crate::Box<N> {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn ancestors(&self) -> &'static [&'static str] {
        (**self).ancestors()
    }

    fn is_no_op(&self) -> bool {
        (**self).is_no_op()
    }
}

/// Returns true if `node` is absent or is the no-op marker.
///
/// Never dispatches.
pub fn is_no_op<N: DumpNode + ?Sized>(node: Option<&N>) -> bool {
    node.is_none_or(|node| node.is_no_op())
}

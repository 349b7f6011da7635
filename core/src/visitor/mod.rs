//! Dispatch from tree nodes to dump handlers.
//!
//! A [`DumpVisitor`] turns one node into a [`DumpValue`], recursing into
//! children as it sees fit. Hosts with a closed set of node types can
//! implement the trait directly with an exhaustive `match`. Hosts with an
//! open set use a [`Dispatcher`], a registry from node kind to handler.

use crate::error::DumpError;
use crate::node::{self, DumpNode};
use crate::value::DumpValue;
use crate::{Box, Vec};
use core::fmt;
use hashbrown::HashMap;

/// Produces the dump value for a node.
pub trait DumpVisitor<N: ?Sized> {
    /// Dump `node`.
    ///
    /// Fails if the node's kind cannot be described. Implementations must
    /// not swallow such failures into empty output.
    fn visit(&self, node: &N) -> Result<DumpValue, DumpError>;

    /// Dump each node in order, stopping at the first failure.
    fn visit_all<'n, I>(&self, nodes: I) -> Result<Vec<DumpValue>, DumpError>
    where
        Self: Sized,
        I: IntoIterator<Item = &'n N>,
        N: 'n,
    {
        nodes.into_iter().map(|node| self.visit(node)).collect()
    }
}

/// A handler registered with a [`Dispatcher`].
///
/// Handlers get the dispatcher back so they can dump child nodes.
pub type Handler<N> = Box<dyn Fn(&Dispatcher<N>, &N) -> Result<DumpValue, DumpError>>;

/// Registry mapping node kinds to handlers.
///
/// Lookup walks the node's lineage (its concrete kind, then its ancestors)
/// and uses the first kind with a handler, so the most specific handler wins
/// regardless of registration order. If nothing matches, the fallback runs;
/// without a fallback the lookup fails with [`DumpError::NoHandler`].
///
/// # Example
///
/// ```
/// use treedump_core::{Dispatcher, DumpNode, DumpValue};
///
/// struct Name(&'static str);
///
/// impl DumpNode for Name {
///     fn kind(&self) -> &'static str {
///         "Name"
///     }
/// }
///
/// let dispatcher = Dispatcher::<Name>::new()
///     .with_handler("Name", |_, node: &Name| Ok(DumpValue::literal(node.0)));
///
/// assert_eq!(dispatcher.visit(&Name("x")).unwrap(), DumpValue::literal("x"));
/// ```
pub struct Dispatcher<N: ?Sized> {
    handlers: HashMap<&'static str, Handler<N>>,
    fallback: Option<Handler<N>>,
}

impl<N: DumpNode + ?Sized> Dispatcher<N> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: None,
        }
    }

    /// Register `handler` for `kind`, replacing any previous handler for it.
    pub fn register<F>(&mut self, kind: &'static str, handler: F)
    where
        F: Fn(&Dispatcher<N>, &N) -> Result<DumpValue, DumpError> + 'static,
    {
        if self.handlers.insert(kind, Box::new(handler)).is_some() {
            tracing::debug!(kind, "Replaced dump handler");
        }
    }

    pub fn with_handler<F>(mut self, kind: &'static str, handler: F) -> Self
    where
        F: Fn(&Dispatcher<N>, &N) -> Result<DumpValue, DumpError> + 'static,
    {
        self.register(kind, handler);
        self
    }

    /// Handler used when no kind in a node's lineage is registered.
    pub fn set_fallback<F>(&mut self, handler: F)
    where
        F: Fn(&Dispatcher<N>, &N) -> Result<DumpValue, DumpError> + 'static,
    {
        self.fallback = Some(Box::new(handler));
    }

    pub fn with_fallback<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Dispatcher<N>, &N) -> Result<DumpValue, DumpError> + 'static,
    {
        self.set_fallback(handler);
        self
    }

    pub fn has_handler(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// The handler `visit` would run for `node`, if any.
    pub fn handler_for(&self, node: &N) -> Option<&Handler<N>> {
        node::lineage(node)
            .find_map(|kind| self.handlers.get(kind))
            .or(self.fallback.as_ref())
    }

    /// Dump `node` with the most specific handler for its lineage.
    pub fn visit(&self, node: &N) -> Result<DumpValue, DumpError> {
        let kind = node.kind();
        let matched = node::lineage(node)
            .find_map(|candidate| self.handlers.get(candidate).map(|h| (candidate, h)));

        let handler = match (matched, &self.fallback) {
            (Some((matched, handler)), _) => {
                tracing::trace!(kind, matched, "Dispatching dump handler");
                handler
            }
            (None, Some(fallback)) => {
                tracing::debug!(kind, "No dump handler registered, using fallback");
                fallback
            }
            (None, None) => {
                tracing::debug!(kind, "No dump handler registered");
                return Err(DumpError::NoHandler { kind });
            }
        };

        handler(self, node)
    }

    /// See [`node::is_no_op`].
    pub fn is_no_op(&self, node: Option<&N>) -> bool {
        node::is_no_op(node)
    }
}

impl<N: DumpNode + ?Sized> DumpVisitor<N> for Dispatcher<N> {
    fn visit(&self, node: &N) -> Result<DumpValue, DumpError> {
        Dispatcher::visit(self, node)
    }
}

impl<N: DumpNode + ?Sized> Default for Dispatcher<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ?Sized> fmt::Debug for Dispatcher<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.handlers.keys().copied().collect();
        kinds.sort_unstable();
        f.debug_struct("Dispatcher")
            .field("kinds", &kinds)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;

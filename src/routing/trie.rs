//! Pattern trie node.
//!
//! # Responsibilities
//! - Hold one path segment per node
//! - Keep literal children apart from the single wildcard child
//! - Record the endpoint of a route terminating at this node
//!
//! # Design Decisions
//! - The wildcard child lives in its own slot, so "at most one wildcard
//!   child" holds by construction
//! - Mutation is crate-private and only reachable through `RouterBuilder`

use std::collections::HashMap;

use crate::routing::segment::{is_wildcard, WILDCARD};

/// One segment of the pattern trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    segment: String,
    children: HashMap<String, Node>,
    wildcard: Option<Box<Node>>,
    endpoint: Option<String>,
}

impl Node {
    pub(crate) fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            children: HashMap::new(),
            wildcard: None,
            endpoint: None,
        }
    }

    /// The root node, representing `/`.
    pub(crate) fn root() -> Self {
        Self::new("/")
    }

    /// Segment label (literal text or the wildcard token).
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Endpoint of the route terminating here, if any.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Literal child keyed by `segment`.
    ///
    /// Never returns the wildcard child, even for a query segment equal to
    /// the wildcard token.
    pub fn literal_child(&self, segment: &str) -> Option<&Node> {
        self.children.get(segment)
    }

    pub fn wildcard_child(&self) -> Option<&Node> {
        self.wildcard.as_deref()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(Node::node_count).sum::<usize>()
            + self.wildcard.as_ref().map_or(0, |w| w.node_count())
    }

    /// Number of endpoints in this subtree.
    pub fn route_count(&self) -> usize {
        usize::from(self.endpoint.is_some())
            + self.children.values().map(Node::route_count).sum::<usize>()
            + self.wildcard.as_ref().map_or(0, |w| w.route_count())
    }

    /// Descend into the child for `segment`, creating it if absent.
    pub(crate) fn child_or_insert(&mut self, segment: &str) -> &mut Node {
        if is_wildcard(segment) {
            &mut **self
                .wildcard
                .get_or_insert_with(|| Box::new(Node::new(WILDCARD)))
        } else {
            self.children
                .entry(segment.to_string())
                .or_insert_with(|| Node::new(segment))
        }
    }

    /// Set the endpoint, returning the one it replaced.
    pub(crate) fn set_endpoint(&mut self, endpoint: impl Into<String>) -> Option<String> {
        self.endpoint.replace(endpoint.into())
    }
}

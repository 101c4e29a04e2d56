//! Route lookup.
//!
//! # Responsibilities
//! - Hold the frozen static index and pattern trie
//! - Resolve a request path to an endpoint or an explicit `NotFound`
//!
//! # Design Decisions
//! - Immutable after construction (`Send + Sync`, shareable via `Arc`)
//! - O(1) static lookup on the unmodified path, checked before the trie
//! - Explicit NotFound rather than silent default

use std::collections::HashMap;
use std::fmt;

use crate::routing::matcher;
use crate::routing::segment;
use crate::routing::trie::Node;

/// Body printed for an unresolved path.
pub const NOT_FOUND: &str = "404";

/// Outcome of resolving one request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    /// Exact hit in the static index.
    Static(&'a str),
    /// Resolved through the pattern trie.
    Wildcard(&'a str),
    NotFound,
}

impl<'a> RouteMatch<'a> {
    pub fn endpoint(&self) -> Option<&'a str> {
        match *self {
            RouteMatch::Static(endpoint) | RouteMatch::Wildcard(endpoint) => Some(endpoint),
            RouteMatch::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, RouteMatch::NotFound)
    }
}

impl fmt::Display for RouteMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint().unwrap_or(NOT_FOUND))
    }
}

/// Frozen route set. Built by `RouterBuilder::build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    static_index: HashMap<String, String>,
    root: Node,
    pattern_count: usize,
}

impl Router {
    pub(crate) fn new(static_index: HashMap<String, String>, root: Node) -> Self {
        let pattern_count = root.route_count();
        Self {
            static_index,
            root,
            pattern_count,
        }
    }

    /// Resolve a request path.
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        if let Some(endpoint) = self.static_index.get(path) {
            return RouteMatch::Static(endpoint);
        }

        match matcher::walk(&self.root, &segment::split_request(path)) {
            Some(endpoint) => RouteMatch::Wildcard(endpoint),
            None => RouteMatch::NotFound,
        }
    }

    /// Number of wildcard-free routes.
    pub fn static_count(&self) -> usize {
        self.static_index.len()
    }

    /// Number of routes held in the pattern trie.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_empty(&self) -> bool {
        self.static_index.is_empty() && self.pattern_count == 0
    }

    /// Root of the pattern trie.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouterBuilder;

    fn router(routes: &[(&str, &str)]) -> Router {
        let mut builder = RouterBuilder::new();
        for (pattern, endpoint) in routes {
            builder.insert(pattern, endpoint);
        }
        builder.build()
    }

    #[test]
    fn test_static_beats_wildcard() {
        let router = router(&[("/a/b/c", "E1"), ("/a/X/c", "E2")]);
        assert_eq!(router.resolve("/a/b/c"), RouteMatch::Static("E1"));
        assert_eq!(router.resolve("/a/z/c"), RouteMatch::Wildcard("E2"));
    }

    #[test]
    fn test_static_lookup_uses_unmodified_path() {
        let router = router(&[("/a/b", "slash"), ("a/c", "bare")]);
        assert_eq!(router.resolve("/a/b"), RouteMatch::Static("slash"));
        assert_eq!(router.resolve("a/b"), RouteMatch::NotFound);
        assert_eq!(router.resolve("//a/b"), RouteMatch::NotFound);
        assert_eq!(router.resolve("a/c"), RouteMatch::Static("bare"));
    }

    #[test]
    fn test_wildcard_pattern_ignores_leading_slashes() {
        let router = router(&[("//a/X", "one")]);
        assert_eq!(router.resolve("/a/1"), RouteMatch::Wildcard("one"));
        assert_eq!(router.resolve("a/1"), RouteMatch::Wildcard("one"));
    }

    #[test]
    fn test_root_path() {
        let router = router(&[("/", "rootEndpoint"), ("/X", "any")]);
        assert_eq!(router.resolve("/"), RouteMatch::Static("rootEndpoint"));
        assert_eq!(router.resolve("/foo"), RouteMatch::Wildcard("any"));
        // Not in the static index: the root segment goes through the trie.
        assert_eq!(router.resolve("//"), RouteMatch::Wildcard("any"));
    }

    #[test]
    fn test_root_segment_taken_by_wildcard() {
        let wild = router(&[("/X", "any")]);
        let nested = router(&[("/a/X", "one")]);

        assert_eq!(wild.resolve("/"), RouteMatch::Wildcard("any"));
        assert_eq!(wild.resolve("//"), RouteMatch::Wildcard("any"));
        assert_eq!(wild.resolve(""), RouteMatch::Wildcard("any"));
        assert_eq!(nested.resolve("/"), RouteMatch::NotFound);
    }

    #[test]
    fn test_display() {
        let router = router(&[("/a", "ep")]);
        assert_eq!(router.resolve("/a").to_string(), "ep");
        assert_eq!(router.resolve("/b").to_string(), NOT_FOUND);
        assert!(!router.resolve("/b").is_found());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let router = router(&[("/a/b/e/X", "A"), ("/a/X/c", "B"), ("/s", "S")]);
        let snapshot = router.clone();

        for _ in 0..3 {
            assert_eq!(router.resolve("/a/b/c"), RouteMatch::Wildcard("B"));
            assert_eq!(router.resolve("/s"), RouteMatch::Static("S"));
            assert_eq!(router.resolve("/nope"), RouteMatch::NotFound);
        }
        assert_eq!(router, snapshot);
    }

    #[test]
    fn test_empty_router() {
        let router = RouterBuilder::new().build();
        assert!(router.is_empty());
        assert_eq!(router.resolve("/"), RouteMatch::NotFound);
        assert_eq!(router.resolve(""), RouteMatch::NotFound);
    }

    #[test]
    fn test_router_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Router>();
    }
}

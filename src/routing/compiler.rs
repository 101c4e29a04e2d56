//! Pattern compilation (build phase).
//!
//! # Responsibilities
//! - Parse `<pattern> <endpoint>` configuration lines
//! - Send wildcard-free patterns to the static index
//! - Insert wildcard patterns into the pattern trie
//! - Freeze both structures into an immutable `Router`
//!
//! # Design Decisions
//! - A pattern lives in exactly one of {static index, trie}
//! - Re-inserting a pattern overwrites its endpoint
//! - `build()` consumes the builder; there is no way back to mutation

use std::collections::HashMap;

use crate::routing::error::ConfigParseError;
use crate::routing::router::Router;
use crate::routing::segment;
use crate::routing::trie::Node;

/// A parsed configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLine<'a> {
    pub pattern: &'a str,
    pub endpoint: &'a str,
}

impl<'a> RouteLine<'a> {
    /// Parse `<pattern> <endpoint>`, whitespace separated.
    pub fn parse(line: &'a str) -> Result<Self, ConfigParseError> {
        let mut fields = line.split_whitespace();
        let pattern = fields.next().ok_or(ConfigParseError::EmptyPattern)?;
        let endpoint = fields
            .next()
            .ok_or_else(|| ConfigParseError::MissingEndpoint {
                pattern: pattern.to_string(),
            })?;
        if let Some(extra) = fields.next() {
            return Err(ConfigParseError::UnexpectedField {
                field: extra.to_string(),
            });
        }
        Ok(Self { pattern, endpoint })
    }
}

/// Where a route ended up after insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Static,
    Pattern,
}

/// Mutable route set, used only during the build phase.
#[derive(Debug, Clone)]
pub struct RouterBuilder {
    static_index: HashMap<String, String>,
    root: Node,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self {
            static_index: HashMap::new(),
            root: Node::root(),
        }
    }

    /// Insert one route.
    pub fn insert(&mut self, pattern: &str, endpoint: &str) -> RouteKind {
        if !segment::has_wildcard(pattern) {
            if let Some(previous) = self
                .static_index
                .insert(pattern.to_string(), endpoint.to_string())
            {
                tracing::debug!(pattern, previous = %previous, endpoint, "Static route overwritten");
            } else {
                tracing::debug!(pattern, endpoint, "Static route added");
            }
            return RouteKind::Static;
        }

        let mut node = &mut self.root;
        for seg in segment::split(pattern) {
            node = node.child_or_insert(seg);
        }
        if let Some(previous) = node.set_endpoint(endpoint) {
            tracing::debug!(pattern, previous = %previous, endpoint, "Wildcard route overwritten");
        } else {
            tracing::debug!(pattern, endpoint, "Wildcard route added");
        }
        RouteKind::Pattern
    }

    /// Parse and insert one configuration line.
    pub fn insert_line(&mut self, line: &str) -> Result<RouteKind, ConfigParseError> {
        let route = RouteLine::parse(line)?;
        Ok(self.insert(route.pattern, route.endpoint))
    }

    /// Freeze the route set.
    pub fn build(self) -> Router {
        let router = Router::new(self.static_index, self.root);
        tracing::info!(
            static_routes = router.static_count(),
            wildcard_routes = router.pattern_count(),
            "Router built"
        );
        router
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

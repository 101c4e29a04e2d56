//! Wildcard Path Router Library
//!
//! Resolves request paths to endpoint identifiers. Wildcard-free patterns go
//! to an exact-match index; patterns with `X` segments go to a prefix trie
//! walked with literal-first preference and FIFO backtracking.

pub mod batch;
pub mod config;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use routing::{RouteMatch, Router, RouterBuilder};

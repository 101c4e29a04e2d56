//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (build phase):
//!     "<pattern> <endpoint>" lines
//!     → compiler.rs (parse, classify)
//!     → wildcard-free → static index (exact map)
//!     → wildcard      → trie.rs (pattern trie)
//!     → Freeze as immutable Router
//!
//! Request Path (query phase):
//!     → router.rs (static index probe)
//!     → matcher.rs (trie walk with backtracking)
//!     → Return: RouteMatch or NotFound
//! ```
//!
//! # Design Decisions
//! - Routes compiled once, immutable afterwards
//! - Static routes always win over wildcard routes
//! - Literal children preferred over the wildcard child, with FIFO
//!   backtracking to recorded branch points
//! - Deterministic: same input always matches same route

pub mod compiler;
pub mod error;
mod matcher;
pub mod router;
pub mod segment;
pub mod trie;

pub use compiler::{RouteKind, RouteLine, RouterBuilder};
pub use error::ConfigParseError;
pub use router::{RouteMatch, Router, NOT_FOUND};

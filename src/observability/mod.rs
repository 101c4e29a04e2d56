//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!
//! Consumers:
//!     → stderr (stdout is reserved for batch results)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (pattern, endpoint, line number)
//! - Quiet by default (`warn`): a batch run prints only its results

pub mod logging;

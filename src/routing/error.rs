//! Route configuration errors.

use thiserror::Error;

/// A configuration line that cannot be turned into a route.
///
/// Scoped to one line: the line is rejected, the route set is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigParseError {
    /// Blank line, or whitespace only.
    #[error("empty pattern")]
    EmptyPattern,

    /// Pattern given without an endpoint field.
    #[error("pattern `{pattern}` has no endpoint")]
    MissingEndpoint { pattern: String },

    /// More than `<pattern> <endpoint>` on the line.
    #[error("unexpected field `{field}` after endpoint")]
    UnexpectedField { field: String },
}

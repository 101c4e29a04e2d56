//! Path segment helpers.
//!
//! # Design Decisions
//! - `X` is reserved: a pattern segment equal to it is always a wildcard
//! - Detection is per whole segment, so `/Xavier` is a literal pattern
//! - Only leading slashes are stripped; empty segments are literal data

/// Reserved token marking a wildcard segment in a pattern.
pub const WILDCARD: &str = "X";

/// Segment standing for a request path that is empty after stripping.
pub const ROOT: &str = "/";

/// Returns true if this pattern segment is the wildcard token.
pub fn is_wildcard(segment: &str) -> bool {
    segment == WILDCARD
}

/// Returns true if any segment of the pattern is the wildcard token.
pub fn has_wildcard(pattern: &str) -> bool {
    split(pattern).iter().any(|s| is_wildcard(s))
}

/// Strip leading slashes and split on `/`.
///
/// An empty remainder yields no segments: it addresses the root.
pub fn split(path: &str) -> Vec<&str> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').collect()
}

/// Split a request path for the trie walk.
///
/// Unlike patterns, a request addressing the root is one segment, `ROOT`,
/// so it can be taken by a wildcard child of the root.
pub fn split_request(path: &str) -> Vec<&str> {
    let segments = split(path);
    if segments.is_empty() {
        vec![ROOT]
    } else {
        segments
    }
}

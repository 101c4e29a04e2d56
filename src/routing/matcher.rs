//! Backtracking trie walk (query phase).
//!
//! # Responsibilities
//! - Walk the pattern trie one request segment at a time
//! - Prefer a literal child over the wildcard child
//! - Retry recorded wildcard branch points when the literal branch fails
//!
//! # Design Decisions
//! - Branch points are retried in discovery order (FIFO): the shallowest
//!   divergence is the first fallback
//! - Replays run the same step, so branch points met during a replay are
//!   queued too and every matching trie path is eventually reached
//! - Once a segment fails on a branch, the branch stays unresolved until the
//!   terminal check; later segments cannot skip over the failure
//! - The queue lives on the stack of one call and borrows the trie read-only

use std::collections::VecDeque;

use crate::routing::trie::Node;

/// A recorded choice of a literal child over an available wildcard child.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    /// Node holding both children.
    node: &'a Node,
    /// Index of the segment the wildcard child consumes on replay.
    resume: usize,
}

/// Resolve `segments` against the trie rooted at `root`.
///
/// Returns the endpoint of the first branch that consumes every segment and
/// ends on a node carrying an endpoint.
pub(crate) fn walk<'a>(root: &'a Node, segments: &[&str]) -> Option<&'a str> {
    let mut pending: VecDeque<Candidate<'a>> = VecDeque::new();
    let mut node = root;
    let mut next = 0;
    let mut resolved = true;

    loop {
        while resolved && next < segments.len() {
            let seg = segments[next];
            if let Some(literal) = node.literal_child(seg) {
                if node.wildcard_child().is_some() {
                    pending.push_back(Candidate { node, resume: next });
                }
                node = literal;
            } else if let Some(wildcard) = node.wildcard_child() {
                node = wildcard;
            } else {
                resolved = false;
            }
            next += 1;
        }

        if resolved {
            if let Some(endpoint) = node.endpoint() {
                return Some(endpoint);
            }
        }

        let candidate = pending.pop_front()?;
        tracing::trace!(
            at = candidate.node.segment(),
            resume = candidate.resume,
            remaining = pending.len(),
            "Backtracking to wildcard branch"
        );
        // Only pushed when a wildcard child exists.
        node = candidate.node.wildcard_child()?;
        next = candidate.resume + 1;
        resolved = true;
    }
}

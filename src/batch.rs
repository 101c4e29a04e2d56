//! Line-oriented batch transform.
//!
//! # Responsibilities
//! - Feed configuration lines to a `RouterBuilder` until the `#` marker
//! - Freeze the router, then answer one output line per query line
//! - Report malformed configuration lines without stopping the batch
//!
//! # Design Decisions
//! - Generic over `BufRead`/`Write` so tests run on in-memory buffers
//! - Query lines are never errors: unresolved paths print `404`
//! - `#` lines after the marker are comments and produce no output

use std::borrow::Cow;
use std::io::{BufRead, Write};

use thiserror::Error;

use crate::routing::{ConfigParseError, Router, RouterBuilder};

/// First character of the line separating configuration from queries.
pub const PHASE_MARKER: char = '#';

/// Fatal batch failures.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration line, raised only in strict mode.
    #[error("line {line}: {source}")]
    Config {
        line: usize,
        #[source]
        source: ConfigParseError,
    },
}

/// Batch behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Abort on the first malformed configuration line.
    pub strict: bool,
}

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Configuration lines accepted.
    pub routes: usize,
    /// Configuration lines rejected.
    pub rejected: usize,
    pub queries: usize,
    pub resolved: usize,
    pub not_found: usize,
}

/// Run the full batch: build from the configuration phase, then resolve
/// every query line into `output`.
///
/// `builder` may already hold routes (e.g. from a route file); input lines
/// for the same pattern overwrite them.
pub fn run<R, W>(
    mut input: R,
    mut output: W,
    mut builder: RouterBuilder,
    options: BatchOptions,
) -> Result<BatchSummary, BatchError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    while let Some(line) = next_line(&mut input, &mut buf, line_no + 1)? {
        line_no += 1;
        if line.starts_with(PHASE_MARKER) {
            break;
        }

        match builder.insert_line(&line) {
            Ok(_) => summary.routes += 1,
            Err(source) if options.strict => {
                return Err(BatchError::Config {
                    line: line_no,
                    source,
                })
            }
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "Configuration line rejected");
                summary.rejected += 1;
            }
        }
    }

    let router = builder.build();

    while let Some(line) = next_line(&mut input, &mut buf, line_no + 1)? {
        line_no += 1;
        if line.starts_with(PHASE_MARKER) {
            continue;
        }
        resolve_line(&router, &line, &mut output, &mut summary)?;
    }
    output.flush()?;

    tracing::info!(
        routes = summary.routes,
        rejected = summary.rejected,
        queries = summary.queries,
        resolved = summary.resolved,
        not_found = summary.not_found,
        "Batch complete"
    );
    Ok(summary)
}

/// Read one line without its `\n` / `\r\n` terminator.
///
/// Invalid UTF-8 is replaced rather than rejected, so a garbled line still
/// yields exactly one route attempt or one query result.
fn next_line<R: BufRead>(
    input: &mut R,
    buf: &mut Vec<u8>,
    line_no: usize,
) -> std::io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }

    let line = String::from_utf8_lossy(&buf[..]);
    if let Cow::Owned(_) = line {
        tracing::warn!(line = line_no, "Line is not valid UTF-8, decoded lossily");
    }
    Ok(Some(line.into_owned()))
}

fn resolve_line<W: Write>(
    router: &Router,
    path: &str,
    output: &mut W,
    summary: &mut BatchSummary,
) -> std::io::Result<()> {
    let result = router.resolve(path);
    summary.queries += 1;
    if result.is_found() {
        summary.resolved += 1;
    } else {
        summary.not_found += 1;
    }
    tracing::debug!(path, result = %result, "Query resolved");
    writeln!(output, "{}", result)
}

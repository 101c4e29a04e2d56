//! Shared fixtures for integration tests.

use wildcard_router::batch::{self, BatchOptions, BatchSummary};
use wildcard_router::{Router, RouterBuilder};

/// Build a router from `(pattern, endpoint)` pairs.
pub fn router(routes: &[(&str, &str)]) -> Router {
    let mut builder = RouterBuilder::new();
    for (pattern, endpoint) in routes {
        builder.insert(pattern, endpoint);
    }
    builder.build()
}

/// Run a full batch over `input`, returning stdout as a string.
#[allow(dead_code)]
pub fn run_batch(input: &str, builder: RouterBuilder) -> (String, BatchSummary) {
    let mut out = Vec::new();
    let summary = batch::run(input.as_bytes(), &mut out, builder, BatchOptions::default())
        .expect("batch run");
    (String::from_utf8(out).expect("utf-8 output"), summary)
}

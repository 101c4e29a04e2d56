//! Batch transform tests: configuration phase, marker, query phase.

use std::io::Write;

use wildcard_router::config::load_config;
use wildcard_router::RouterBuilder;

mod common;

const SAMPLE: &str = "\
/ rootEndpoint
/user/X/friends userFriendsEndpoint
/a/b/c E1
/a/X/c E2
/a/b/e/X endPointA
#####
/
/user/123/friends
/user/123/friends/zzz
/a/b/c
/a/q/c
/a/b/e/zz
/nothing/here
";

#[test]
fn test_sample_batch() {
    let (out, summary) = common::run_batch(SAMPLE, RouterBuilder::new());
    assert_eq!(
        out,
        "rootEndpoint\nuserFriendsEndpoint\n404\nE1\nE2\nendPointA\n404\n"
    );
    assert_eq!(summary.routes, 5);
    assert_eq!(summary.queries, 7);
    assert_eq!(summary.resolved, 5);
    assert_eq!(summary.not_found, 2);
}

#[test]
fn test_output_order_matches_input() {
    let (out, _) = common::run_batch("/X a\n#\n/1\n/1/2\n/2\n", RouterBuilder::new());
    assert_eq!(out.lines().collect::<Vec<_>>(), vec!["a", "404", "a"]);
}

#[test]
fn test_route_file_then_input_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [[routes]]
        pattern = "/user/X/friends"
        endpoint = "fromFile"

        [[routes]]
        pattern = "/health"
        endpoint = "health"
        "#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    let mut builder = RouterBuilder::new();
    config.apply(&mut builder);

    let (out, summary) = common::run_batch(
        "/user/X/friends fromInput\n#\n/user/1/friends\n/health\n",
        builder,
    );
    assert_eq!(out, "fromInput\nhealth\n");
    assert_eq!(summary.routes, 1);
}

#[test]
fn test_malformed_config_lines_do_not_shift_output() {
    let (out, summary) = common::run_batch(
        "\n/a/X\n/a/X ep extra\n/a/X ep\n#\n/a/1\n/b\n",
        RouterBuilder::new(),
    );
    assert_eq!(out, "ep\n404\n");
    assert_eq!(summary.rejected, 3);
}

#[test]
fn test_invalid_utf8_query_keeps_one_line_per_query() {
    let mut out = Vec::new();
    let summary = wildcard_router::batch::run(
        &b"/a ep\n/X any\n#\n/a\n/\xff\xfe\n/\n/a/\xc3\n"[..],
        &mut out,
        RouterBuilder::new(),
        wildcard_router::batch::BatchOptions::default(),
    )
    .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "ep\nany\nany\n404\n");
    assert_eq!(summary.queries, 4);
}

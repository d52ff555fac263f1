//! Open command tests (error paths only: a successful open would
//! launch the external note application)

use recall::cli::commands::open::{execute, OpenArgs};
use recall::cli::commands::search;
use recall::cli::OutputFormat;

use crate::common::fixtures::TestProject;

fn run_search(tp: &TestProject, query: &str) {
    let args = search::SearchArgs {
        query: vec![query.to_string()],
        limit: 5,
        no_score: false,
        snippet: false,
    };
    search::execute(args, &tp.project, OutputFormat::Human).unwrap();
}

#[test]
fn test_open_without_prior_search() {
    let tp = TestProject::english(&[("apple_1", "One", "rust")]);

    let result = execute(OpenArgs { rank: 1 }, &tp.project, OutputFormat::Human);

    let err = result.unwrap_err().to_string();
    assert!(err.contains("recall search"), "unexpected error: {err}");
}

#[test]
fn test_open_rank_zero_rejected() {
    let tp = TestProject::english(&[("apple_1", "One", "rust")]);
    run_search(&tp, "rust");

    let result = execute(OpenArgs { rank: 0 }, &tp.project, OutputFormat::Human);

    let err = result.unwrap_err().to_string();
    assert!(err.contains("invalid rank"), "unexpected error: {err}");
}

#[test]
fn test_open_rank_out_of_range_rejected() {
    let tp = TestProject::english(&[("apple_1", "One", "rust")]);
    run_search(&tp, "rust");

    let result = execute(OpenArgs { rank: 99 }, &tp.project, OutputFormat::Human);

    let err = result.unwrap_err().to_string();
    assert!(err.contains("1 results"), "unexpected error: {err}");
}

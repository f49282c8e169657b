use std::path::Path;

use super::error::error_context;
use super::{json_requested, CliError, Opts, Output, OutputKind};
use crate::input::IStr;

#[test]
fn test_parse_opts() {
    let opts = Opts::parse_from(["target/release/d01", "--json", "-v", "input.txt"]).unwrap();
    assert_eq!(opts.program, "d01");
    assert_eq!(opts.path(), Path::new("input.txt"));
    assert!(opts.is_verbose());
    assert_eq!(opts.output_kind(), OutputKind::Json);

    let opts = Opts::parse_from(["d02", "--", "--json"]).unwrap();
    assert_eq!(opts.path(), Path::new("--json"));
    assert_eq!(opts.output_kind(), OutputKind::Normal);
}

#[test]
fn test_parse_opts_usage() {
    let error = Opts::parse_from(["/bin/d01"]).unwrap_err();
    assert!(matches!(error, CliError::Usage { .. }));
    assert_eq!(
        error.to_string(),
        "Usage: d01 [--json] [--verbose] <input>"
    );

    let error = Opts::parse_from(["d01", "--bench", "input.txt"]).unwrap_err();
    assert!(matches!(error, CliError::Unsupported { ref arg, .. } if arg == "--bench"));

    let error = Opts::parse_from(["d01", "a.txt", "b.txt"]).unwrap_err();
    assert!(matches!(error, CliError::Unsupported { ref arg, .. } if arg == "b.txt"));
}

#[test]
fn test_json_requested() {
    assert!(json_requested(["d01", "--bogus", "--json"]));
    assert!(json_requested(["d01", "--json"]));
    assert!(!json_requested(["d01", "input.txt"]));
    assert!(!json_requested(["d01", "--", "--json"]));
    assert!(!json_requested(["--json"]));
}

#[test]
fn test_error_context() {
    let input = IStr::new(b"1 2\n3 x\n");

    let mut cursor = input;
    let error = cursor
        .lines::<(i64, i64)>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap_err();

    let error = error_context(Path::new("inputs/d01.txt"), input, error);

    assert_eq!(
        format!("{error:#}"),
        "inputs/d01.txt:2:3: not an integer or integer overflow `x`"
    );
}

#[test]
fn test_error_context_without_position() {
    let input = IStr::new(b"");
    let error = error_context(Path::new("inputs/d01.txt"), input, anyhow::anyhow!("no answer"));
    assert_eq!(format!("{error:#}"), "inputs/d01.txt: no answer");
}

#[test]
fn test_output() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let mut o = Output::new(&mut out, &mut err, OutputKind::Normal);
    o.answer(&11u64, &31i64).unwrap();
    o.error("bad input").unwrap();

    assert_eq!(out, b"Part 1: 11\nPart 2: 31\n");
    assert_eq!(err, b"error: bad input\n");
}

#[test]
fn test_output_json() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let mut o = Output::new(&mut out, &mut err, OutputKind::Json);
    o.answer(&2usize, &4usize).unwrap();
    o.error("bad input").unwrap();

    assert_eq!(
        std::str::from_utf8(&out).unwrap(),
        concat!(
            "{\"type\":\"answer\",\"data\":{\"part1\":2,\"part2\":4}}\n",
            "{\"type\":\"message\",\"data\":{\"kind\":\"error\",\"output\":\"bad input\"}}\n",
        )
    );
    assert!(err.is_empty());
}

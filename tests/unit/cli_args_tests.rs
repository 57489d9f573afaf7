//! Unit tests for CLI argument parsing

use bfr::cli::args::{Command, parse_args};

fn argv(args: &[&str]) -> Vec<String> {
    std::iter::once("bfr".to_string())
        .chain(args.iter().map(|s| (*s).to_string()))
        .collect()
}

#[test]
fn test_parse_rename_defaults() {
    let parsed = parse_args(&argv(&["rename", "/some/path"])).unwrap();
    match parsed.command {
        Command::Rename(args) => {
            assert_eq!(args.path, "/some/path");
            assert_eq!(args.start, 1);
            assert_eq!(args.digits, 3);
            assert_eq!(args.separator, "_");
            assert!(args.types.is_empty());
            assert!(!args.dry_run);
            assert!(!args.json);
        }
        _ => panic!("expected rename command"),
    }
}

#[test]
fn test_parse_rename_options() {
    let parsed = parse_args(&argv(&[
        "rename",
        "/p",
        "--start",
        "10",
        "--digits",
        "4",
        "--separator",
        "-",
        "--types",
        ".JPG,png",
        "--dry-run",
        "--json",
    ]))
    .unwrap();

    match parsed.command {
        Command::Rename(args) => {
            assert_eq!(args.start, 10);
            assert_eq!(args.digits, 4);
            assert_eq!(args.separator, "-");
            // Extensions are lower-cased and get a leading dot
            assert!(args.types.contains(".jpg"));
            assert!(args.types.contains(".png"));
            assert_eq!(args.types.len(), 2);
            assert!(args.dry_run);
            assert!(args.json);
        }
        _ => panic!("expected rename command"),
    }
}

#[test]
fn test_parse_analyze() {
    let parsed = parse_args(&argv(&["analyze", "/p", "--json"])).unwrap();
    match parsed.command {
        Command::Analyze(args) => {
            assert_eq!(args.path, "/p");
            assert!(args.json);
        }
        _ => panic!("expected analyze command"),
    }
}

#[test]
fn test_parse_preview_uses_rename_options() {
    let parsed = parse_args(&argv(&["preview", "/p", "--digits", "2"])).unwrap();
    match parsed.command {
        Command::Preview(args) => assert_eq!(args.digits, 2),
        _ => panic!("expected preview command"),
    }
}

#[test]
fn test_parse_errors() {
    assert!(parse_args(&argv(&[])).is_err());
    assert!(parse_args(&argv(&["frobnicate", "/p"])).is_err());
    assert!(parse_args(&argv(&["rename"])).is_err());
    assert!(parse_args(&argv(&["rename", "/p", "--digits"])).is_err());
    assert!(parse_args(&argv(&["rename", "/p", "--digits", "0"])).is_err());
    assert!(parse_args(&argv(&["rename", "/p", "--start", "abc"])).is_err());
    assert!(parse_args(&argv(&["rename", "/p", "extra"])).is_err());
    assert!(parse_args(&argv(&["analyze", "/p", "--digits", "3"])).is_err());
}

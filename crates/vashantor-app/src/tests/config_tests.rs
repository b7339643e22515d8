use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::{Args, build_config};

#[test]
fn test_file_config_with_cli_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"source": {{"base": "/srv/vashantor"}}, "ui": {{"default_split": 3}}}}"#
    )
    .unwrap();
    let config_path = file.path().to_str().unwrap().to_string();

    let args = Args::try_parse_from(["vashantor", "--config", &config_path]).unwrap();
    let config = build_config(&args).unwrap();
    assert_eq!(config.source.base, "/srv/vashantor");
    assert_eq!(config.ui.default_split, 3);

    let args = Args::try_parse_from([
        "vashantor",
        "--config",
        &config_path,
        "--base",
        "http://localhost:8000/Test",
        "--html-out",
        "out.html",
    ])
    .unwrap();
    let config = build_config(&args).unwrap();
    assert_eq!(config.source.base, "http://localhost:8000/Test");
    assert_eq!(config.ui.html_out, Some(PathBuf::from("out.html")));
    assert_eq!(config.ui.default_split, 3);
}

#[test]
fn test_unreadable_config_is_an_error() {
    let args = Args::try_parse_from(["vashantor", "--config", "/nonexistent/vashantor.json"])
        .unwrap();
    let err = build_config(&args).unwrap_err();
    assert!(err.to_string().contains("Failed to open config file"));
}

#[test]
fn test_split_zero_rejected_on_command_line() {
    assert!(Args::try_parse_from(["vashantor", "--split", "0"]).is_err());
}

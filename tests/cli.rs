// tests/cli.rs
use std::io::Write;
use std::process::{Command, Output};

const USAGE_PREFIX: &str = "rover-fleet requires a single argument";

fn rover_fleet(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rover-fleet"))
        .args(args)
        .env_remove("ROVER_FORMAT")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn fleet_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_sample_file_prints_report() {
    let file = fleet_file("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n");
    let out = rover_fleet(&[file.path().to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "1 3 N\n5 1 E\n");
}

#[test]
fn test_json_format() {
    let file = fleet_file("5 5\n1 2 N\nLMLMLMLMM\n");
    let out = rover_fleet(&["--format", "json", file.path().to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["rovers"][0]["y"], 3);
    assert_eq!(json["rovers"][0]["heading"], "North");
}

#[test]
fn test_missing_argument_prints_usage() {
    let out = rover_fleet(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stdout).unwrap().starts_with(USAGE_PREFIX));
}

#[test]
fn test_missing_file_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("fleet.txt");
    let out = rover_fleet(&[missing.to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stdout).unwrap().starts_with(USAGE_PREFIX));
}

#[test]
fn test_extra_arguments_print_usage() {
    let file = fleet_file("5 5\n1 2 N\nM\n");
    let path = file.path().to_str().unwrap();
    let out = rover_fleet(&[path, path]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stdout).unwrap().starts_with(USAGE_PREFIX));
}

#[test]
fn test_bad_fleet_fails_without_report() {
    let file = fleet_file("5 5\n1 2 N\nMX\n");
    let out = rover_fleet(&[file.path().to_str().unwrap()]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8(out.stderr).unwrap().contains("'X'"));
}

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bin2verilog"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run bin2verilog")
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn workspace_with(bytes: &[u8]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("a.out"), bytes).expect("Failed to write a.out");
    dir
}

#[test]
fn reads_a_out_by_default() {
    let dir = workspace_with(&[0, 0, 0, 0, 0x01, 0x02, 0x03, 0x04]);
    let out = run_in(dir.path(), &[]);
    assert!(out.status.success());
    assert_eq!(
        stdout_lines(&out),
        vec![
            "00:   data = 00000000000000000000000000000000;",
            "01:   data = 00000100000000110000001000000001;",
        ]
    );
}

#[test]
fn empty_file_succeeds_silently() {
    let dir = workspace_with(&[]);
    let out = run_in(dir.path(), &[]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn short_trailing_record_is_dropped() {
    let dir = workspace_with(&[0xff, 0xff, 0xff, 0xff, 0x12, 0x34]);
    let out = run_in(dir.path(), &[]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        stdout_lines(&out),
        vec!["00:   data = 11111111111111111111111111111111;"]
    );
}

#[test]
fn debug_flag_logs_through_the_logger() {
    let dir = workspace_with(&[0u8; 6]);
    let out = run_in(dir.path(), &["--debug"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out).len(), 1);
    let stderr = String::from_utf8_lossy(&out.stderr);
    for line in stderr.lines().filter(|l| l.contains("Reading") || l.contains("trailing")) {
        assert!(line.starts_with("DEBUG"), "stderr line: {}", line);
    }
    assert!(stderr.contains("Reading"), "stderr: {}", stderr);
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("a.out"), "stderr: {}", stderr);
}

#[test]
fn explicit_input_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prog.bin");
    fs::write(&path, [0x80, 0, 0, 0]).unwrap();
    let out = run_in(dir.path(), &[path.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(
        stdout_lines(&out),
        vec!["00:   data = 00000000000000000000000010000000;"]
    );
}

#[test]
fn full_rom_ends_at_ff() {
    let dir = workspace_with(&[0u8; 1024]);
    let out = run_in(dir.path(), &[]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 256);
    assert!(lines[255].starts_with("ff:   data = "));
}

#[test]
fn overflowing_label_is_reported() {
    let dir = workspace_with(&[0u8; 1032]);
    let out = run_in(dir.path(), &[]);
    assert!(!out.status.success());
    assert_eq!(stdout_lines(&out).len(), 256);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("record 256"), "stderr: {}", stderr);

    let out = run_in(dir.path(), &["--label-digits", "3"]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 258);
    assert!(lines[257].starts_with("101:"));
}

#[test]
fn sized_literals() {
    let dir = workspace_with(&[0x01, 0x02, 0x03, 0x04]);
    let out = run_in(dir.path(), &["--sized-literals"]);
    assert!(out.status.success());
    assert_eq!(
        stdout_lines(&out),
        vec!["8'h00:   data = 32'b00000100000000110000001000000001;"]
    );
}

#[test]
fn label_digits_out_of_range_is_rejected() {
    let dir = workspace_with(&[0u8; 4]);
    let out = run_in(dir.path(), &["--label-digits", "9"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn output_is_deterministic() {
    let bytes: Vec<u8> = (0..200u8).collect();
    let dir = workspace_with(&bytes);
    let first = run_in(dir.path(), &[]);
    let second = run_in(dir.path(), &[]);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(stdout_lines(&first).len(), 50);
}

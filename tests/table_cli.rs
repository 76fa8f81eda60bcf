use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn prints_embedded_table() {
    let exe = env!("CARGO_BIN_EXE_fse_table_fmt");
    let output = Command::new(exe).output().expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 32);
    assert_eq!(lines[0], "0x00,s0,0x00,5");
    assert_eq!(lines[24], "0x18,s6,0x10,4");
}

#[test]
fn header_flag() {
    let exe = env!("CARGO_BIN_EXE_fse_table_fmt");
    let output = Command::new(exe).arg("--header").output().expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("State,Sym,BL,NB"));
    assert_eq!(stdout.lines().count(), 33);
}

#[test]
fn reads_table_from_file() {
    let exe = env!("CARGO_BIN_EXE_fse_table_fmt");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("table.txt");
    fs::write(&input, "0 \t4 \t4 \t0\n1 \t4 \t4 \t16\n").unwrap();

    let output = Command::new(exe)
        .args(["--input", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "0x00,s4,0x00,4\n0x01,s4,0x10,4\n"
    );
}

#[test]
fn reads_table_from_stdin() {
    let exe = env!("CARGO_BIN_EXE_fse_table_fmt");
    let mut child = Command::new(exe)
        .args(["--input", "-", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn failed");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"15 7 4 16\n")
        .unwrap();
    let output = child.wait_with_output().expect("run failed");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["baseline"], 16);
}

#[test]
fn malformed_row_fails_without_output() {
    let exe = env!("CARGO_BIN_EXE_fse_table_fmt");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("table.txt");
    fs::write(&input, "0 0 5 0\n1 2 3\n").unwrap();

    let output = Command::new(exe)
        .args(["--input", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"));
}

#[test]
fn strict_rejects_wide_values() {
    let exe = env!("CARGO_BIN_EXE_fse_table_fmt");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("table.txt");
    fs::write(&input, "300 0 5 0\n").unwrap();

    let output = Command::new(exe)
        .args(["--input", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0x12c,s0,0x00,5\n");

    let output = Command::new(exe)
        .args(["--input", input.to_str().unwrap(), "--strict"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
}

#[test]
fn missing_input_file_reports_path() {
    let exe = env!("CARGO_BIN_EXE_fse_table_fmt");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.txt");
    let output = Command::new(exe)
        .args(["--input", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.txt"));
    assert!(stderr.contains("Check that the file exists"));
}

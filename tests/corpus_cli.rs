use std::fs;
use std::process::Command;

#[test]
fn lists_given_directory() {
    let exe = env!("CARGO_BIN_EXE_corpus_list");
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b"), b"1").unwrap();
    fs::write(dir.path().join("a"), b"2").unwrap();

    let output = Command::new(exe)
        .env_remove("CORPUS_DIR")
        .args([dir.path().to_str().unwrap(), "--sorted"])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let want = format!(
        "{},{}\n",
        dir.path().join("a").display(),
        dir.path().join("b").display()
    );
    assert_eq!(stdout, want);
}

#[test]
fn defaults_to_tests_corpus() {
    let exe = env!("CARGO_BIN_EXE_corpus_list");
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("tests").join("corpus");
    fs::create_dir_all(&corpus).unwrap();
    fs::write(corpus.join("seed"), b"").unwrap();

    let output = Command::new(exe)
        .env_remove("CORPUS_DIR")
        .current_dir(dir.path())
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "./tests/corpus/seed\n");
}

#[test]
fn directory_from_environment() {
    let exe = env!("CARGO_BIN_EXE_corpus_list");
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("seed"), b"").unwrap();

    let output = Command::new(exe)
        .env("CORPUS_DIR", dir.path())
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let want = format!("{}\n", dir.path().join("seed").display());
    assert_eq!(String::from_utf8_lossy(&output.stdout), want);
}

#[test]
fn empty_directory_prints_empty_line() {
    let exe = env!("CARGO_BIN_EXE_corpus_list");
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(exe)
        .env_remove("CORPUS_DIR")
        .arg(dir.path())
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\n");
}

#[test]
fn missing_directory_fails() {
    let exe = env!("CARGO_BIN_EXE_corpus_list");
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(exe)
        .env_remove("CORPUS_DIR")
        .arg(dir.path().join("missing"))
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
    assert!(stderr.contains("CORPUS_DIR"));
}

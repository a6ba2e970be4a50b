use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ziggurat-gen-{}-{}", std::process::id(), name));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ziggurat-gen"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn writes_default_file_silently() {
    let dir = scratch_dir("default");
    let out = run_in(&dir, &[]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty());

    let generated = fs::read_to_string(dir.join("ziggurat_tables.rs")).unwrap();
    assert_eq!(generated, ziggurat_tables::generate().unwrap());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn output_is_byte_identical_across_runs() {
    let dir = scratch_dir("idempotent");
    assert!(run_in(&dir, &["-o", "a.rs"]).status.success());
    assert!(run_in(&dir, &["--output", "b.rs"]).status.success());
    let a = fs::read(dir.join("a.rs")).unwrap();
    let b = fs::read(dir.join("b.rs")).unwrap();
    assert_eq!(a, b);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn check_detects_stale_and_missing_files() {
    let dir = scratch_dir("check");
    assert!(!run_in(&dir, &["--check"]).status.success());

    assert!(run_in(&dir, &[]).status.success());
    assert!(run_in(&dir, &["--check"]).status.success());

    fs::write(dir.join("ziggurat_tables.rs"), "// stale\n").unwrap();
    let out = run_in(&dir, &["--check"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("out of date"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unwritable_output_fails() {
    let dir = scratch_dir("unwritable");
    let out = run_in(&dir, &["-o", "missing/dir/tables.rs"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to write"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn verbose_logs_to_stderr() {
    let dir = scratch_dir("verbose");
    let out = run_in(&dir, &["-v"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("tables written to"));
    fs::remove_dir_all(&dir).unwrap();
}

//! End-to-end smoke tests for the `designrep` binary.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "designrep-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_designrep<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_designrep");
    Command::new(bin)
        .args(args)
        .output()
        .expect("designrep command should execute")
}

const DS_CATALOG: &str = r#"{
    "DS(7,3,1,[7])": {"status": "All", "sets": [[1,2,4], [1,2,4,4]]}
}"#;

const CW_CATALOG: &str = r#"{
    "CW(4,2)": {"status": "All", "sets": [[[0],[1,2,3]]]}
}"#;

const BLOCK_STORE: &str = r#"{
    "C(7,3,2)": [[1,2,3],[1,4,5],[1,6,7],[2,4,6],[2,5,7],[3,4,7],[3,5,6]],
    "C(4,3,2)": [[1,2,3]]
}"#;

#[test]
fn verify_ds_accepts_fano() {
    let dir = TempDirGuard::new("ds");
    let catalog = dir.path().join("ds.json");
    fs::write(&catalog, DS_CATALOG).unwrap();

    let output = run_designrep([
        "verify-ds",
        "DS(7,3,1,[7])",
        "--catalog",
        catalog.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("verified"), "stdout: {stdout}");
}

#[test]
fn verify_ds_rejects_duplicated_element() {
    let dir = TempDirGuard::new("ds-dup");
    let catalog = dir.path().join("ds.json");
    fs::write(&catalog, DS_CATALOG).unwrap();

    // Realization 1 repeats the element 4.
    let output = run_designrep([
        "verify-ds",
        "DS(7,3,1,[7])",
        "--catalog",
        catalog.to_str().unwrap(),
        "--index",
        "1",
    ]);
    assert_eq!(output.status.code(), Some(1), "{output:?}");
}

#[test]
fn verify_ds_missing_entry_is_exit_two() {
    let dir = TempDirGuard::new("ds-missing");
    let catalog = dir.path().join("ds.json");
    fs::write(&catalog, DS_CATALOG).unwrap();

    let output = run_designrep([
        "verify-ds",
        "DS(11,5,2,[11])",
        "--catalog",
        catalog.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not in database"), "stderr: {stderr}");
}

#[test]
fn verify_cw_json_output() {
    let dir = TempDirGuard::new("cw");
    let catalog = dir.path().join("cwm.json");
    fs::write(&catalog, CW_CATALOG).unwrap();

    let output = run_designrep([
        "verify-cw",
        "CW(4,2)",
        "--catalog",
        catalog.to_str().unwrap(),
        "--json",
    ]);
    assert!(output.status.success(), "{output:?}");
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(payload["name"], "CW(4,2)");
    assert_eq!(payload["verified"], true);
}

#[test]
fn check_cover_reports_the_failing_entry() {
    let dir = TempDirGuard::new("cover");
    let blocks = dir.path().join("blocks.json");
    fs::write(&blocks, BLOCK_STORE).unwrap();

    let output = run_designrep([
        "check-cover",
        "--blocks",
        blocks.to_str().unwrap(),
        "--json",
    ]);
    // C(4,3,2) with a single block leaves pairs uncovered.
    assert_eq!(output.status.code(), Some(1), "{output:?}");
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(payload["checked"], 2);
    assert_eq!(payload["passed"], 1);
    assert_eq!(payload["failures"][0], "C(4,3,2)");
}

#[test]
fn check_sweeps_every_realization() {
    let dir = TempDirGuard::new("check");
    let catalog = dir.path().join("ds.json");
    fs::write(&catalog, DS_CATALOG).unwrap();

    let output = run_designrep(["check", "ds", "--catalog", catalog.to_str().unwrap(), "--json"]);
    // The duplicated-element realization fails the sweep.
    assert_eq!(output.status.code(), Some(1), "{output:?}");
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(payload["checked"], 2);
    assert_eq!(payload["passed"], 1);
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const REPORT: &str = "       entry file 1        : ./src/index.js

       unresolved imports  : 0
       unused dependencies : 1
       unimported files    : 0


─────┬──────────────────────────────────
     │ 1 unused dependencies
─────┼──────────────────────────────────
   1 │ lodash
─────┴──────────────────────────────────
";

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("unimported-report").unwrap();
    for var in [
        "INPUT_PROJECTS",
        "INPUT_TOKEN",
        "GITHUB_REPOSITORY",
        "GITHUB_EVENT_PATH",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Workspace with a `clean` and a `flagged` project and a config whose
/// analyzer prints `report.txt` and fails when the file exists
fn workspace(root: &Path) {
    fs::create_dir_all(root.join("clean")).unwrap();
    fs::create_dir_all(root.join("flagged")).unwrap();
    fs::write(root.join("flagged/report.txt"), REPORT).unwrap();
    fs::write(
        root.join("unimported.yaml"),
        r#"projects: [clean, flagged]
analyzer:
  binary: sh
  args: ["-c", "if [ -f report.txt ]; then cat report.txt; exit 1; fi"]
"#,
    )
    .unwrap();
}

#[test]
fn schema_prints_config_schema() {
    bin()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"projects\""))
        .stdout(predicate::str::contains("\"analyzer\""));
}

#[test]
fn schema_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("unimported.schema.json");

    bin()
        .arg("schema")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let schema: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert!(schema["properties"]["marker"].is_object());
}

#[test]
fn run_without_pull_request_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let event = dir.path().join("event.json");
    fs::write(&event, r#"{"ref": "refs/heads/main"}"#).unwrap();

    bin()
        .arg("run")
        .env("GITHUB_EVENT_PATH", &event)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn run_on_pull_request_requires_token() {
    bin()
        .args(["run", "--pr", "12", "--repo", "owner/repo"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("::error::"))
        .stdout(predicate::str::contains("token"));
}

#[cfg(unix)]
#[test]
fn report_renders_findings_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    workspace(dir.path());
    let config = dir.path().join("unimported.yaml");

    bin()
        .arg("report")
        .arg("--config")
        .arg(&config)
        .arg("--working-dir")
        .arg(dir.path())
        .arg("--fail-on-findings")
        .assert()
        .failure()
        .stdout(predicate::str::contains("| clean | ✅ | - | - | - |"))
        .stdout(predicate::str::contains("| flagged | ❌ | 1 | 0 | 0 |"))
        .stdout(predicate::str::contains("<li>lodash</li>"))
        .stdout(predicate::str::contains("::error::1 out of 2 had errors."));
}

#[cfg(unix)]
#[test]
fn report_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    workspace(dir.path());
    let config = dir.path().join("unimported.yaml");
    let out = dir.path().join("out");

    bin()
        .arg("report")
        .arg("--config")
        .arg(&config)
        .arg("--working-dir")
        .arg(dir.path())
        .arg("--projects")
        .arg("clean")
        .arg("--report-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("| clean | ✅ | - | - | - |"))
        .stdout(predicate::str::contains("flagged").not());

    let json = fs::read_to_string(out.join("unimported-report.json")).unwrap();
    assert!(json.contains("\"error_count\": 0"));
    assert!(out.join("unimported-report.md").exists());
}

#[cfg(unix)]
#[test]
fn dry_run_prints_marked_comment() {
    let dir = tempfile::tempdir().unwrap();
    workspace(dir.path());
    let config = dir.path().join("unimported.yaml");

    bin()
        .arg("run")
        .arg("--dry-run")
        .arg("--config")
        .arg(&config)
        .arg("--working-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::starts_with(
            "[unimported]:report-comment\n## Unimported Action report",
        ))
        .stdout(predicate::str::contains("### Error Details"));
}

#[test]
fn missing_analyzer_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("unimported.yaml"),
        "analyzer:\n  binary: definitely-not-a-real-binary-4821\n  args: []\n",
    )
    .unwrap();

    bin()
        .arg("report")
        .arg("--config")
        .arg(dir.path().join("unimported.yaml"))
        .arg("--working-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("::error::"))
        .stdout(predicate::str::contains("definitely-not-a-real-binary-4821"));
}

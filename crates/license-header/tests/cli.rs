use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use time::OffsetDateTime;

const HOLDER: &str = "Khulnasoft Limited All rights reserved.";

fn current_year() -> String {
    OffsetDateTime::now_utc().year().to_string()
}

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("license-header").expect("binary exists");
    cmd.current_dir(dir);
    cmd
}

fn write_file(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn help_displays_usage() {
    Command::cargo_bin("license-header")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn validate_flags_stale_files_with_exit_code_2() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_file(temp.path(), "internal/api/server.go", "package api\n");

    cmd(temp.path())
        .arg("--validate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "internal/api/server.go: missing or not updated license found!",
        ));

    // Validate never writes.
    let contents = fs::read_to_string(temp.path().join("internal/api/server.go")).unwrap();
    assert_eq!(contents, "package api\n");
}

#[test]
fn validate_is_silent_on_a_clean_tree() {
    let temp = tempfile::tempdir().expect("tempdir");
    let year = current_year();
    write_file(
        temp.path(),
        "pkg/deploy.yaml",
        &format!("# © {year} {HOLDER}\nname: deploy\n"),
    );

    cmd(temp.path())
        .arg("--validate")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn fix_then_validate_round_trip() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_file(temp.path(), "internal/api/server.go", "package api\n");
    write_file(temp.path(), "pkg/policy/allow.rego", "package policy\n");

    cmd(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("internal/api/server.go: updated"))
        .stderr(predicate::str::contains("pkg/policy/allow.rego: updated"));

    cmd(temp.path())
        .arg("--validate")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    // Second fix run changes nothing further.
    cmd(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "internal/api/server.go: up to date, skipping",
        ));
}

#[test]
fn fix_updates_the_end_year_in_place() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_file(
        temp.path(),
        "internal/api/server.go",
        &format!("// © 2019 {HOLDER}\npackage api\n"),
    );

    cmd(temp.path()).assert().success();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        format!("// © 2019-{} {HOLDER}\npackage api\n", current_year())
    );
}

#[test]
fn fix_inserts_owner_line_above_existing_holder() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_file(
        temp.path(),
        "internal/api/server.go",
        "// © 2020-2021 Example Corp Inc.\npackage api\n",
    );

    cmd(temp.path()).assert().success();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        format!(
            "// © {} {HOLDER}\n// © 2020-2021 Example Corp Inc.\npackage api\n",
            current_year()
        )
    );
}

#[test]
fn fix_prepends_license_notice_for_bare_files() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_file(temp.path(), "pkg/modules/main.tf", "variable \"name\" {}\n");

    cmd(temp.path()).assert().success();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with(&format!("# © {} {HOLDER}\n#\n# Licensed under", current_year())));
    assert!(contents.contains("#     http://www.apache.org/licenses/LICENSE-2.0\n"));
    assert!(contents.ends_with("# limitations under the License.\n\nvariable \"name\" {}\n"));
}

#[test]
fn unrelated_extensions_are_untouched() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_file(temp.path(), "internal/README.md", "# internal\n");

    cmd(temp.path()).assert().success();
    assert_eq!(fs::read_to_string(&path).unwrap(), "# internal\n");
}

#[test]
fn config_file_controls_roots_and_ignores() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_file(
        temp.path(),
        "license-header.toml",
        r#"
roots = ["services"]
ignore = ["services/generated"]
"#,
    );
    let generated = write_file(
        temp.path(),
        "services/generated/mocks.go",
        "package mocks\n",
    );
    let handled = write_file(temp.path(), "services/api.go", "package services\n");
    let outside = write_file(temp.path(), "internal/api.go", "package internal\n");

    cmd(temp.path())
        .args(["--config", "license-header.toml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("services/api.go: updated"));

    assert_eq!(
        fs::read_to_string(&generated).unwrap(),
        "package mocks\n",
        "ignored prefix must not be processed"
    );
    assert!(fs::read_to_string(&handled).unwrap().starts_with("// ©"));
    assert_eq!(
        fs::read_to_string(&outside).unwrap(),
        "package internal\n",
        "roots outside the configured set must not be scanned"
    );
}

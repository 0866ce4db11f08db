//! Integration tests for the qauto CLI binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use qauto_test_utils::{TestProject, quasar_conf};

/// Get a Command for the qauto binary
fn qauto_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("qauto"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn app() -> TestProject {
    TestProject::new()
        .with_component("QBtn")
        .with_component("QCard")
        .with_directive("ClosePopup")
        .with_plugin("Notify", "$q.notify")
        .with_config(&quasar_conf(&["QBtn"], &[], &[]))
        .with_source(
            "src/pages/Index.vue",
            "<template>\n  <q-card>\n    <q-btn v-close-popup label=\"Close\" />\n  </q-card>\n</template>\n",
        )
        .with_source("src/boot/notify.js", "export default ({ app }) => { app.$q.notify('ready') }\n")
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    qauto_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version_flag() {
    qauto_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("qauto"));
}

#[test]
fn test_no_command_shows_hint() {
    qauto_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("qauto --help"));
}

// ============================================================================
// Run Tests
// ============================================================================

#[test]
fn test_run_automatic_adds_missing_items() {
    let project = app();

    qauto_cmd()
        .current_dir(project.path())
        .args(["run", "--mode", "automatic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Automatically added the following:"))
        .stdout(predicate::str::contains("    QCard"));

    project.assert_file_contains(
        "quasar.conf.js",
        "components: [\n        'QBtn',\n        'QCard'\n      ]",
    );
    project.assert_file_contains("quasar.conf.js", "directives: [\n        'ClosePopup'\n      ]");
    project.assert_file_contains("quasar.conf.js", "plugins: [\n        'Notify'\n      ]");
}

#[test]
fn test_run_warn_mode_leaves_file_alone() {
    let project = app();
    let before = project.read_config();

    qauto_cmd()
        .current_dir(project.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found missing items"));

    assert_eq!(project.read_config(), before);
}

#[test]
fn test_run_reads_mode_from_settings_file() {
    let project = app().with_project_config("[session]\nfix_mode = \"automatic\"\nsort = false\n");

    qauto_cmd()
        .current_dir(project.path())
        .arg("run")
        .assert()
        .success();

    project.assert_file_contains("quasar.conf.js", "'QCard'");
}

#[test]
fn test_run_from_subdirectory_finds_root() {
    let project = app();

    qauto_cmd()
        .current_dir(project.path().join("src").join("pages"))
        .args(["run", "--mode", "auto"])
        .assert()
        .success();

    project.assert_file_contains("quasar.conf.js", "'Notify'");
}

#[test]
fn test_run_with_root_flag() {
    let project = app();

    qauto_cmd()
        .args(["-C"])
        .arg(project.path())
        .args(["run", "--mode", "automatic", "src/pages"])
        .assert()
        .success();

    project.assert_file_contains("quasar.conf.js", "'QCard'");
    project.assert_file_not_contains("quasar.conf.js", "'Notify'");
}

#[test]
fn test_run_json_report() {
    let project = app();

    let output = qauto_cmd()
        .current_dir(project.path())
        .args(["run", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["mode"], "warn");
    assert_eq!(report["scanned"], 2);
    assert_eq!(report["written"], false);
    assert_eq!(report["missing"]["components"][0], "QCard");
    assert_eq!(report["missing"]["plugins"][0], "Notify");
}

#[test]
fn test_run_twice_is_stable() {
    let project = app();

    qauto_cmd()
        .current_dir(project.path())
        .args(["run", "--mode", "automatic"])
        .assert()
        .success();
    let first = project.read_config();

    qauto_cmd()
        .current_dir(project.path())
        .args(["run", "--mode", "automatic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));

    assert_eq!(project.read_config(), first);
}

#[test]
fn test_run_without_config_file_fails() {
    let project = TestProject::new()
        .with_component("QBtn")
        .with_source("src/App.vue", "<q-btn />");

    qauto_cmd()
        .current_dir(project.path())
        .arg("run")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_run_invalid_mode_is_rejected() {
    let project = app();

    qauto_cmd()
        .current_dir(project.path())
        .args(["run", "--mode", "sometimes"])
        .assert()
        .failure();
}

// ============================================================================
// Check Tests
// ============================================================================

#[test]
fn test_check_exits_two_when_missing() {
    let project = app();

    qauto_cmd()
        .current_dir(project.path())
        .arg("check")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("QCard"));
}

#[test]
fn test_check_never_rewrites_unsorted_config() {
    let config = quasar_conf(&["QCard", "QBtn"], &["ClosePopup"], &["Notify"]);
    let project = app().with_config(&config);

    qauto_cmd()
        .current_dir(project.path())
        .arg("check")
        .assert()
        .success();

    assert_eq!(project.read_config(), config);
}

#[test]
fn test_run_reports_sort_rewrite_in_json() {
    let project = app().with_config(&quasar_conf(&["QCard", "QBtn"], &["ClosePopup"], &["Notify"]));

    qauto_cmd()
        .current_dir(project.path())
        .args(["run", "--mode", "warn", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"written\": true"));

    project.assert_file_contains("quasar.conf.js", "        'QBtn',\n        'QCard'\n");
}

#[test]
fn test_check_succeeds_after_run() {
    let project = app();

    qauto_cmd()
        .current_dir(project.path())
        .args(["run", "--mode", "automatic"])
        .assert()
        .success();

    qauto_cmd()
        .current_dir(project.path())
        .arg("check")
        .assert()
        .success();
}

// ============================================================================
// Init and List Tests
// ============================================================================

#[test]
fn test_init_writes_settings() {
    let project = app();

    qauto_cmd()
        .current_dir(project.path())
        .args(["init", "--mode", "manual", "--no-sort"])
        .assert()
        .success();

    project.assert_file_contains("qauto.toml", "fix_mode = \"manual\"");
    project.assert_file_contains("qauto.toml", "sort = false");
}

#[test]
fn test_init_twice_fails_without_force() {
    let project = app();

    qauto_cmd()
        .current_dir(project.path())
        .arg("init")
        .assert()
        .success();

    qauto_cmd()
        .current_dir(project.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_list_shows_groups() {
    let project = app();

    qauto_cmd()
        .current_dir(project.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("components"))
        .stdout(predicate::str::contains("QCard"))
        .stdout(predicate::str::contains("$q.notify"));
}

#[test]
fn test_list_single_group() {
    let project = app();

    qauto_cmd()
        .current_dir(project.path())
        .args(["list", "--group", "plugins"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notify"))
        .stdout(predicate::str::contains("QBtn").not());
}

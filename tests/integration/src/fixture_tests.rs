//! Golden-file tests using test-fixtures/
//!
//! The `quasar-app` fixture is copied into a temporary directory, its
//! `qauto.toml` is loaded, and a full pass runs over its sources. The
//! rewritten configuration file is compared with test-fixtures/expected/.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use qauto_core::{ApproveAll, FixedSelection, PassReport, SelectionPrompt, Session};
use qauto_fs::{ConfigStore, NormalizedPath};
use qauto_meta::{FixMode, ProjectConfig, SessionSettings};
use tempfile::TempDir;

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures")
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Every file below `dir` with one of `extensions`, sorted.
fn sources(dir: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            found.extend(sources(&path, extensions));
        } else if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.iter().any(|x| x == e))
        {
            found.push(path);
        }
    }
    found.sort();
    found
}

struct FixtureApp {
    temp: TempDir,
    config: ProjectConfig,
}

impl FixtureApp {
    fn copy() -> Self {
        let temp = TempDir::new().unwrap();
        copy_dir(&fixtures_dir().join("apps/quasar-app"), temp.path());
        let config = ConfigStore::new()
            .load(&NormalizedPath::new(temp.path().join("qauto.toml")))
            .unwrap();
        Self { temp, config }
    }

    fn root(&self) -> NormalizedPath {
        NormalizedPath::new(self.temp.path())
    }

    fn config_text(&self) -> String {
        fs::read_to_string(self.temp.path().join(&self.config.paths.config_file)).unwrap()
    }

    async fn pass(&self, settings: SessionSettings, prompt: &dyn SelectionPrompt) -> (PassReport, Vec<String>) {
        let root = self.root();
        let mut session = Session::open(
            &root.join(&self.config.paths.catalogue),
            &root.join(&self.config.paths.config_file),
            settings,
        )
        .unwrap();

        for file in sources(&self.temp.path().join("src"), &self.config.scan.extensions) {
            session.analyse(&fs::read_to_string(file).unwrap());
        }

        let mut lines = Vec::new();
        let report = session.complete_pass(prompt, &mut lines).await;
        session.reset();
        (report, lines)
    }
}

fn expected(name: &str) -> String {
    let path = fixtures_dir().join("expected").join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read expected output at {}: {}", path.display(), e))
}

#[test]
fn test_fixture_settings_load() {
    let app = FixtureApp::copy();

    assert_eq!(app.config.session.fix_mode, FixMode::Automatic);
    assert!(app.config.session.sort);
    assert_eq!(app.config.paths.catalogue, "api");
}

#[tokio::test]
async fn test_fixture_automatic_matches_golden_file() {
    let app = FixtureApp::copy();

    let (report, _) = app.pass(app.config.session.clone(), &ApproveAll).await;

    assert!(report.is_success(), "errors: {:?}", report.errors);
    assert_eq!(report.scanned, 3);
    assert_eq!(report.updated, vec!["plugins", "components"]);
    assert_eq!(app.config_text(), expected("quasar.conf.automatic.js"));
}

#[tokio::test]
async fn test_fixture_warn_lists_missing_items() {
    let app = FixtureApp::copy();
    let original = app.config_text();
    let settings = SessionSettings {
        fix_mode: FixMode::Warn,
        sort: false,
    };

    let (report, lines) = app.pass(settings, &ApproveAll).await;

    assert!(!report.written);
    assert_eq!(app.config_text(), original);
    assert_eq!(
        lines,
        vec![
            "App Extension (qauto) Info: Found missing items",
            "",
            "  components",
            "    QDrawer",
            "    QItem",
            "    QItemLabel",
            "    QItemSection",
            "    QList",
            "    QToolbarTitle",
            "",
            "  plugins",
            "    Dialog",
            "",
        ]
    );
}

#[tokio::test]
async fn test_fixture_manual_selection() {
    let app = FixtureApp::copy();
    let settings = SessionSettings {
        fix_mode: FixMode::Manual,
        sort: true,
    };

    let prompt = FixedSelection::new(["QDrawer", "Dialog"]);
    let (report, _) = app.pass(settings.clone(), &prompt).await;

    assert!(report.written);
    let text = app.config_text();
    assert!(text.contains("'QDrawer'"));
    assert!(text.contains("'Dialog',\n        'Notify'"));
    assert!(!text.contains("'QList'"));

    // A fresh pass still reports the items that were declined
    let (second, _) = app.pass(settings, &FixedSelection::default()).await;
    assert_eq!(
        second.missing.get("components"),
        Some(&vec![
            "QItem".to_string(),
            "QItemLabel".to_string(),
            "QItemSection".to_string(),
            "QList".to_string(),
            "QToolbarTitle".to_string(),
        ])
    );
    assert!(second.missing.get("plugins").is_none());
}

#[tokio::test]
async fn test_fixture_second_automatic_pass_is_stable() {
    let app = FixtureApp::copy();

    app.pass(app.config.session.clone(), &ApproveAll).await;
    let (report, lines) = app.pass(app.config.session.clone(), &ApproveAll).await;

    assert!(!report.written);
    assert!(lines.is_empty());
    assert_eq!(app.config_text(), expected("quasar.conf.automatic.js"));
}

#[tokio::test]
async fn test_fixture_styles_are_not_scanned() {
    let app = FixtureApp::copy();
    let settings = SessionSettings {
        fix_mode: FixMode::Warn,
        sort: true,
    };

    let (report, _) = app.pass(settings, &ApproveAll).await;

    let plugins = report.missing.get("plugins").cloned().unwrap_or_default();
    assert!(!plugins.contains(&"Loading".to_string()));
}

#[tokio::test]
async fn test_fixture_warn_with_sort_only_reorders_declared_items() {
    let app = FixtureApp::copy();
    let settings = SessionSettings {
        fix_mode: FixMode::Warn,
        sort: true,
    };

    let (report, _) = app.pass(settings, &ApproveAll).await;

    assert!(!report.written);
    let text = app.config_text();
    assert!(text.contains(
        "components: [\n        'QBtn',\n        'QHeader',\n        'QLayout',\n        'QPage',\n        'QPageContainer',\n        'QToolbar'\n      ]"
    ));
    assert!(!text.contains("'QDrawer'"));
    assert!(!text.contains("'Dialog'"));
}

//! [`TestProject`] builder for qauto test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Catalogue location relative to the project root.
pub const CATALOGUE_DIR: &str = "node_modules/quasar/dist/api";

/// Configuration file name relative to the project root.
pub const CONFIG_FILE: &str = "quasar.conf.js";

/// A temporary app directory with a catalogue, a configuration file and
/// source files.
///
/// # Example
///
/// ```rust,no_run
/// use qauto_test_utils::{TestProject, quasar_conf};
///
/// let project = TestProject::new()
///     .with_component("QBtn")
///     .with_plugin("Notify", "$q.notify")
///     .with_config(&quasar_conf(&[], &[], &[]))
///     .with_source("src/App.vue", "<q-btn label=\"Go\" />");
/// project.assert_file_contains("quasar.conf.js", "components: []");
/// ```
///
/// # Panics
///
/// Every builder method panics if the filesystem operation fails.
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory with an empty catalogue.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap_or_else(|e| panic!("TestProject: tempdir: {e}"));
        let catalogue = temp_dir.path().join(CATALOGUE_DIR);
        fs::create_dir_all(&catalogue)
            .unwrap_or_else(|e| panic!("TestProject: failed to create catalogue: {e}"));
        Self { temp_dir }
    }

    /// Project root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn catalogue_dir(&self) -> PathBuf {
        self.path().join(CATALOGUE_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join(CONFIG_FILE)
    }

    /// Add a descriptor record `<name>.json` of the given type.
    pub fn with_descriptor(self, name: &str, kind: &str, injection: Option<&str>) -> Self {
        let mut record = serde_json::json!({ "type": kind, "props": {} });
        if let Some(injection) = injection {
            record["injection"] = serde_json::Value::from(injection);
        }
        let content = serde_json::to_string_pretty(&record)
            .unwrap_or_else(|e| panic!("TestProject: serialize descriptor: {e}"));
        self.with_catalogue_file(&format!("{name}.json"), &content)
    }

    pub fn with_component(self, name: &str) -> Self {
        self.with_descriptor(name, "component", None)
    }

    pub fn with_directive(self, name: &str) -> Self {
        self.with_descriptor(name, "directive", None)
    }

    pub fn with_plugin(self, name: &str, injection: &str) -> Self {
        self.with_descriptor(name, "plugin", Some(injection))
    }

    /// Write an arbitrary file into the catalogue directory.
    pub fn with_catalogue_file(self, file: &str, content: &str) -> Self {
        self.write(&format!("{CATALOGUE_DIR}/{file}"), content);
        self
    }

    /// Write the configuration file.
    pub fn with_config(self, content: &str) -> Self {
        self.write(CONFIG_FILE, content);
        self
    }

    /// Write a source file at a path relative to the root.
    pub fn with_source(self, rel: &str, content: &str) -> Self {
        self.write(rel, content);
        self
    }

    /// Write `qauto.toml`.
    pub fn with_project_config(self, content: &str) -> Self {
        self.write("qauto.toml", content);
        self
    }

    /// Write a file relative to the root, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestProject: failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestProject: failed to write {}: {e}", path.display()));
    }

    /// Read a file relative to the root.
    pub fn read(&self, rel: &str) -> String {
        let path = self.path().join(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("TestProject: failed to read {}: {e}", path.display()))
    }

    pub fn read_config(&self) -> String {
        self.read(CONFIG_FILE)
    }

    /// Assert a file contains the given text.
    pub fn assert_file_contains(&self, rel: &str, needle: &str) {
        let content = self.read(rel);
        assert!(
            content.contains(needle),
            "expected {rel} to contain {needle:?}, got:\n{content}"
        );
    }

    /// Assert a file does not contain the given text.
    pub fn assert_file_not_contains(&self, rel: &str, needle: &str) {
        let content = self.read(rel);
        assert!(
            !content.contains(needle),
            "expected {rel} not to contain {needle:?}, got:\n{content}"
        );
    }
}

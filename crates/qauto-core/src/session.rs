//! Session controller
//!
//! A [`Session`] owns everything one build run needs: the whitelist, the
//! configuration text, the pass state and the message buffer. The build
//! host holds it and calls it from its hooks:
//!
//! ```text
//! IDLE --analyse--> SCANNING --complete_pass--> DECIDING --> FLUSHING --> IDLE
//!                     ^   |
//!                     +---+ analyse (once per file)
//! ```

use std::fmt;

use qauto_fs::NormalizedPath;
use qauto_meta::{CatalogueLoader, FixMode, SessionSettings, Whitelist};
use serde::Serialize;

use crate::analysis::{AnalysisState, GroupItems, extend_unique};
use crate::document::ConfigDocument;
use crate::log::{LogBuffer, LogSink};
use crate::patcher::{self, ApplyReport, Selection};
use crate::prompt::SelectionPrompt;
use crate::scanner::UsageScanner;
use crate::{Error, Result};

/// Prefix of summary headings in the message buffer.
pub const SUMMARY_LABEL: &str = "App Extension (qauto) Info:";

/// Where a session is within a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Scanning,
    Deciding,
    Flushing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Scanning => write!(f, "scanning"),
            Phase::Deciding => write!(f, "deciding"),
            Phase::Flushing => write!(f, "flushing"),
        }
    }
}

/// Outcome of one completed pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub mode: FixMode,
    /// Number of sources analysed during the pass
    pub scanned: usize,
    /// Missing items at decision time
    pub missing: GroupItems,
    /// Items approved by the prompt (manual mode)
    pub approved: Vec<String>,
    /// Whether the configuration file was written
    pub written: bool,
    pub updated: Vec<String>,
    pub skipped: Vec<String>,
    pub errors: Vec<String>,
}

impl PassReport {
    fn new(mode: FixMode, scanned: usize, missing: GroupItems) -> Self {
        Self {
            mode,
            scanned,
            missing,
            approved: Vec::new(),
            written: false,
            updated: Vec::new(),
            skipped: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn missing_count(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Fold the outcome of an apply into this report.
    pub fn merge_apply(&mut self, applied: ApplyReport) {
        self.written |= applied.written;
        extend_unique(&mut self.updated, applied.updated.iter());
        extend_unique(&mut self.skipped, applied.skipped.iter());
    }
}

/// Keeps one configuration file in sync with framework usage.
pub struct Session {
    whitelist: Whitelist,
    scanner: UsageScanner,
    settings: SessionSettings,
    document: ConfigDocument,
    state: AnalysisState,
    log: LogBuffer,
    phase: Phase,
    forced_apply: bool,
    scans: usize,
}

impl Session {
    pub fn new(whitelist: Whitelist, document: ConfigDocument, settings: SessionSettings) -> Self {
        let scanner = UsageScanner::new(&whitelist);
        Self {
            whitelist,
            scanner,
            settings,
            document,
            state: AnalysisState::new(),
            log: LogBuffer::new(),
            phase: Phase::Idle,
            forced_apply: false,
            scans: 0,
        }
    }

    /// Load the catalogue and the configuration file, then build a session.
    ///
    /// # Errors
    ///
    /// Fails if the catalogue cannot be read or holds a malformed record, or
    /// if the configuration file does not exist.
    pub fn open(
        catalogue: &NormalizedPath,
        config_file: &NormalizedPath,
        settings: SessionSettings,
    ) -> Result<Self> {
        let whitelist = CatalogueLoader::new().load(catalogue)?;
        let document = ConfigDocument::load(config_file)?;
        tracing::info!(
            items = whitelist.len(),
            mode = %settings.fix_mode,
            sort = settings.sort,
            "session opened for {}",
            config_file
        );
        Ok(Self::new(whitelist, document, settings))
    }

    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn log(&self) -> &LogBuffer {
        &self.log
    }

    /// Missing items accumulated so far in this pass.
    pub fn missing_items(&self) -> &GroupItems {
        self.state.missing()
    }

    /// Whether the next reset will first rewrite the file for sort order.
    pub fn sort_rewrite_pending(&self) -> bool {
        self.forced_apply
    }

    /// Start a new pass.
    pub fn begin_pass(&mut self) {
        self.reset();
        self.phase = Phase::Scanning;
    }

    /// Drop a pending sort-order rewrite without touching the file.
    pub fn discard_pending_sort(&mut self) {
        self.forced_apply = false;
    }

    /// Apply a pending sort-order rewrite now.
    ///
    /// Returns `None` when nothing was pending. The rewrite only reorders
    /// declared items and never adds unapproved ones.
    pub fn apply_pending_sort(&mut self) -> Result<Option<ApplyReport>> {
        if !self.forced_apply {
            return Ok(None);
        }
        self.forced_apply = false;
        self.apply_changes(Selection::Only(Vec::new())).map(Some)
    }

    /// Clear pass state and the message buffer.
    ///
    /// A pending sort-order rewrite is applied first. If it fails, the error
    /// is left in the cleared buffer for the next flush.
    pub fn reset(&mut self) {
        let pending = self.apply_pending_sort();
        self.state.clear();
        self.log.clear();
        self.scans = 0;

        match pending {
            Ok(Some(applied)) if applied.written => {
                tracing::info!(groups = %applied.updated.join(", "), "sort-order rewrite applied");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!("sort-order rewrite failed: {}", e);
                self.log
                    .push(format!("{SUMMARY_LABEL} Error: sort-order rewrite failed: {e}"));
            }
        }
    }

    /// Scan one source and fold the result into the pass state.
    ///
    /// Begins a pass when the session is idle.
    pub fn analyse(&mut self, source: &str) {
        if self.phase == Phase::Idle {
            self.begin_pass();
        }
        self.scans += 1;

        for group in self.scanner.groups() {
            let declared = self.document.declared(group);
            let scanned = self.scanner.scan(group, source);
            let added = self.state.record(group, &declared, &scanned);
            if !added.is_empty() {
                tracing::debug!(group, "missing: {}", added.join(", "));
            }
            if self.settings.sort && !declared.is_sorted() {
                self.forced_apply = true;
            }
        }
    }

    /// Append a message to the pass buffer.
    pub fn add_log(&mut self, line: impl Into<String>) {
        self.log.push(line);
    }

    /// Rewrite the configuration text from the pass state and persist it.
    ///
    /// Clears a pending sort-order rewrite on success.
    pub fn apply_changes(&mut self, selection: Selection) -> Result<ApplyReport> {
        let report =
            patcher::apply_changes(&mut self.document, &self.state, &selection, self.settings.sort)?;
        self.forced_apply = false;
        Ok(report)
    }

    /// Decide the pass, flush the buffer to `sink`, and return to idle.
    ///
    /// Failures are recorded in the report and the buffer rather than
    /// returned, so the host can carry on with its next pass.
    pub async fn complete_pass(
        &mut self,
        prompt: &dyn SelectionPrompt,
        sink: &mut dyn LogSink,
    ) -> PassReport {
        if self.phase == Phase::Idle {
            self.begin_pass();
        }
        self.phase = Phase::Deciding;

        let mode = self.settings.fix_mode;
        let mut report = PassReport::new(mode, self.scans, self.state.missing().clone());

        match mode {
            FixMode::Automatic => {
                self.write_summary("Automatically added the following:", self.state.missing().clone());
                self.record_apply(Selection::All, &mut report);
            }
            FixMode::Warn => {
                self.write_summary("Found missing items", self.state.missing().clone());
            }
            FixMode::Manual if self.state.has_missing() => {
                let answer = prompt.select(self.state.missing()).await;
                match answer {
                    Ok(approved) => {
                        let added = self.approved_by_group(&approved);
                        self.write_summary("Added the selected items:", added);
                        report.approved.clone_from(&approved);
                        self.record_apply(Selection::approved(approved), &mut report);
                    }
                    Err(e) => self.record_error(e, &mut report),
                }
            }
            FixMode::Manual => {}
        }

        self.phase = Phase::Flushing;
        self.log.flush(sink);
        self.phase = Phase::Idle;
        tracing::debug!(
            mode = %mode,
            scanned = report.scanned,
            missing = report.missing_count(),
            written = report.written,
            "pass complete"
        );
        report
    }

    fn record_apply(&mut self, selection: Selection, report: &mut PassReport) {
        match self.apply_changes(selection) {
            Ok(applied) => report.merge_apply(applied),
            Err(e) => self.record_error(e, report),
        }
    }

    fn record_error(&mut self, error: Error, report: &mut PassReport) {
        tracing::error!("{}", error);
        self.log.push(format!("{SUMMARY_LABEL} Error: {error}"));
        report.errors.push(error.to_string());
    }

    fn approved_by_group(&self, approved: &[String]) -> GroupItems {
        self.state
            .missing()
            .iter()
            .map(|(group, items)| {
                let kept: Vec<String> = items.iter().filter(|i| approved.contains(i)).cloned().collect();
                (group.clone(), kept)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    fn write_summary(&mut self, heading: &str, items: GroupItems) {
        if items.values().all(Vec::is_empty) {
            return;
        }
        self.log.push(format!("{SUMMARY_LABEL} {heading}"));
        for (group, names) in items {
            self.log.push("");
            self.log.push(format!("  {group}"));
            for name in names {
                self.log.push(format!("    {name}"));
            }
        }
        self.log.push("");
    }
}

//! Usage scanning and configuration synchronization for qauto
//!
//! This crate implements the engine a build host drives once per build:
//!
//! - **Scanner**: detect whitelisted framework items in raw source text
//! - **Analysis**: accumulate existing, missing and merged items per group
//! - **Patcher**: rewrite group literals in the configuration text and
//!   persist only when the text changed
//! - **Session**: run a pass and decide it in automatic, manual or warn mode
//!
//! # Architecture
//!
//! ```text
//!                  qauto-cli (host)
//!                        |
//!                    qauto-core
//!                        |
//!        +---------------+---------------+
//!        |               |               |
//!    qauto-fs        qauto-meta     qauto-blocks
//! ```
//!
//! # Example
//!
//! ```ignore
//! use qauto_core::{ApproveAll, Session};
//!
//! async fn one_pass(session: &mut Session, sources: &[String]) {
//!     for source in sources {
//!         session.analyse(source);
//!     }
//!     let mut lines = Vec::new();
//!     let report = session.complete_pass(&ApproveAll, &mut lines).await;
//!     println!("{} missing", report.missing_count());
//! }
//! ```

pub mod analysis;
pub mod document;
pub mod error;
pub mod log;
pub mod patcher;
pub mod prompt;
pub mod scanner;
pub mod session;

pub use analysis::{AnalysisState, GroupItems};
pub use document::ConfigDocument;
pub use error::{Error, Result};
pub use log::{LogBuffer, LogSink};
pub use patcher::{ApplyReport, Selection, apply_changes, planned_items};
pub use prompt::{ApproveAll, FixedSelection, SelectionPrompt};
pub use scanner::{SERVICE_PREFIX, UsageScanner, param_case};
pub use session::{PassReport, Phase, SUMMARY_LABEL, Session};

//! Filesystem helpers for qauto
//!
//! Provides slash-normalized paths, locked atomic writes and a
//! format-detecting loader for serde-backed records.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;

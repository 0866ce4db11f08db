//! Catalogue and project configuration for qauto.
//!
//! This crate turns a directory of item-descriptor records into a
//! [`Whitelist`] of recognizable framework items, and defines the
//! configuration types a host uses to drive a session.

pub mod catalogue;
pub mod config;
pub mod error;

pub use catalogue::{CatalogueLoader, DescriptorRecord, ItemDescriptor, Whitelist};
pub use config::{
    FixMode, PROJECT_CONFIG_FILE, PathSettings, ProjectConfig, ScanSettings, SessionSettings,
};
pub use error::{Error, Result};

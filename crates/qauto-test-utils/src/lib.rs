//! Shared test utilities for the qauto workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each hand-roll catalogue directories and configuration files. It is a
//! dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`] : [`TestProject`] builder for a scannable app layout
//! - [`conf`] : renderers for configuration file text

pub mod conf;
pub mod project;

pub use conf::quasar_conf;
pub use project::TestProject;

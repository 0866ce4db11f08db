//! Command implementations for qauto-cli

pub mod init;
pub mod list;
pub mod run;

pub use init::run_init;
pub use list::run_list;
pub use run::{run_check, run_run};

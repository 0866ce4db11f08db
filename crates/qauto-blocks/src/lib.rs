//! Group literal parsing and writing for qauto.
//!
//! A configuration file declares each managed group as an array literal of
//! single-quoted names:
//!
//! ```text
//! components: [ 'QBtn', 'QCard' ],
//! ```
//!
//! This crate finds those fragments with a tolerant pattern, reads the
//! names back out, and substitutes a freshly rendered list while leaving
//! every other byte of the file alone. The file's language is never parsed.

pub mod error;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use parser::{GroupLiteral, find_group, find_groups, group_pattern, has_group, parse_items};
pub use writer::{render_group, replace_group};

//! # shelve - Sort a directory tree into extension-named folders
//!
//! Walks a source tree, copies every readable regular file into
//! `<destination>/<extension>/`, suffixes `(N)` on name collisions, and keeps
//! going past unreadable entries. A startup guard refuses destinations nested
//! inside the source, which would otherwise copy without bound.

// Module declarations
pub mod commands;
pub mod config;
pub mod executor;
pub mod guard;
pub mod scanner;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use types::{EntryKind, OrganizeEvent, OrganizeStats, ShelveError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

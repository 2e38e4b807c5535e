//! Core type definitions for shelve

mod entry;
mod error;
mod event;

pub use entry::EntryKind;
pub use error::ShelveError;
pub use event::{OrganizeCallback, OrganizeEvent, OrganizeStats};

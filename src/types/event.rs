//! Events and statistics emitted while organizing a tree

use super::{EntryKind, ShelveError};
use std::path::PathBuf;

/// Aggregate statistics for one organize run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizeStats {
    /// Number of files successfully copied.
    pub files_copied: usize,
    /// Aggregate copied bytes.
    pub bytes_copied: u64,
    /// Entries (files or whole subtrees) skipped because they were unreadable.
    pub entries_skipped: usize,
    /// Files skipped because their copy failed.
    pub copy_failures: usize,
    /// Files skipped because their bucket directory could not be created.
    pub bucket_failures: usize,
}

impl OrganizeStats {
    /// True when every reachable file made it into the destination.
    pub fn is_clean(&self) -> bool {
        self.entries_skipped == 0 && self.copy_failures == 0 && self.bucket_failures == 0
    }
}

/// Events emitted while walking the source tree.
///
/// The three failure variants plus the fatal guard error (returned, not
/// emitted) are the complete set of outcomes a caller can observe;
/// `FileCopied` exists to drive progress display.
#[derive(Debug)]
pub enum OrganizeEvent {
    /// A file landed in its bucket.
    FileCopied {
        source: PathBuf,
        dest: PathBuf,
        bytes: u64,
    },
    /// An entry (file or directory subtree) could not be read and was skipped.
    EntryUnreadable {
        path: PathBuf,
        kind: EntryKind,
        error: std::io::Error,
    },
    /// A bucket directory could not be created; the file was skipped.
    BucketFailed { error: ShelveError },
    /// A single file copy failed; the file was skipped.
    CopyFailed { error: ShelveError },
}

/// Optional callback used to receive organize events.
///
/// The walk is single-threaded, so the callback is invoked from exactly one
/// thread and needs no synchronization.
pub type OrganizeCallback<'a> = dyn Fn(&OrganizeEvent) + 'a;

//! Depth-first walk copying every readable file into its extension bucket

use super::classify::classify;
use crate::executor::{copy_file, unique_destination};
use crate::types::{EntryKind, OrganizeCallback, OrganizeEvent, OrganizeStats, ShelveError};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Walk the source tree and copy every readable regular file into
/// `<destination_root>/<bucket>/<file_name>`, suffixing `(N)` on collisions.
///
/// The walk is depth-first over an explicit stack of pending directories, so
/// tree depth costs heap entries instead of call frames. Per-entry failures
/// are reported through `on_event` and never stop the walk: an unreadable
/// directory skips exactly that subtree, an unreadable or uncopyable file
/// skips exactly that file. Entries that are neither files nor directories
/// (after following symlinks) are ignored without notice.
///
/// The caller is responsible for having validated the two roots; in
/// particular `destination_root` must not live inside `source_root`.
pub fn organize_tree(
    source_root: &Path,
    destination_root: &Path,
    on_event: Option<&OrganizeCallback>,
) -> OrganizeStats {
    let mut stats = OrganizeStats::default();
    // Labels whose bucket directory already exists; avoids re-creating the
    // bucket for every file sharing an extension.
    let mut ensured_buckets: HashSet<String> = HashSet::new();
    let mut pending: Vec<PathBuf> = vec![source_root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(error) => {
                stats.entries_skipped += 1;
                emit(
                    on_event,
                    OrganizeEvent::EntryUnreadable {
                        path: dir,
                        kind: EntryKind::Directory,
                        error,
                    },
                );
                continue;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    // The listing itself broke mid-iteration; skip the
                    // unreadable slot, keep the remaining siblings.
                    stats.entries_skipped += 1;
                    emit(
                        on_event,
                        OrganizeEvent::EntryUnreadable {
                            path: dir.clone(),
                            kind: EntryKind::Directory,
                            error,
                        },
                    );
                    continue;
                }
            };

            let path = entry.path();

            // Followed metadata: symlinks classify as their targets. Broken
            // links and stat failures surface here.
            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(error) => {
                    stats.entries_skipped += 1;
                    emit(
                        on_event,
                        OrganizeEvent::EntryUnreadable {
                            path,
                            kind: EntryKind::Other,
                            error,
                        },
                    );
                    continue;
                }
            };

            match EntryKind::from_metadata(&metadata) {
                EntryKind::Directory => pending.push(path),
                EntryKind::File => {
                    process_file(
                        &path,
                        entry.file_name().as_os_str(),
                        destination_root,
                        &mut ensured_buckets,
                        &mut stats,
                        on_event,
                    );
                }
                EntryKind::Other => {} // sockets, fifos, devices: ignored
            }
        }
    }

    stats
}

/// Classify, ensure the bucket, resolve collisions, copy. Each failure mode
/// skips just this file and reports once.
fn process_file(
    path: &Path,
    file_name: &OsStr,
    destination_root: &Path,
    ensured_buckets: &mut HashSet<String>,
    stats: &mut OrganizeStats,
    on_event: Option<&OrganizeCallback>,
) {
    // Readability probe; the same TOCTOU window the copy itself has.
    if let Err(error) = fs::File::open(path) {
        stats.entries_skipped += 1;
        emit(
            on_event,
            OrganizeEvent::EntryUnreadable {
                path: path.to_path_buf(),
                kind: EntryKind::File,
                error,
            },
        );
        return;
    }

    let label = classify(&file_name.to_string_lossy()).to_owned();
    let bucket_dir = destination_root.join(&label);

    if !ensured_buckets.contains(&label) {
        if let Err(cause) = fs::create_dir_all(&bucket_dir) {
            stats.bucket_failures += 1;
            emit(
                on_event,
                OrganizeEvent::BucketFailed {
                    error: ShelveError::Bucket {
                        path: bucket_dir,
                        cause,
                    },
                },
            );
            return;
        }
        ensured_buckets.insert(label);
    }

    let desired = bucket_dir.join(file_name);
    let dest = unique_destination(&desired);

    match copy_file(path, &dest) {
        Ok(bytes) => {
            stats.files_copied += 1;
            stats.bytes_copied += bytes;
            emit(
                on_event,
                OrganizeEvent::FileCopied {
                    source: path.to_path_buf(),
                    dest,
                    bytes,
                },
            );
        }
        Err(error) => {
            stats.copy_failures += 1;
            emit(on_event, OrganizeEvent::CopyFailed { error });
        }
    }
}

fn emit(on_event: Option<&OrganizeCallback>, event: OrganizeEvent) {
    if let Some(callback) = on_event {
        callback(&event);
    }
}

//! Startup validation of the source and destination roots
//!
//! Every check here is fatal: the run aborts before a single file is copied.
//! The containment check in particular prevents the destination from being
//! created inside the source tree, which would make the walk copy its own
//! output without bound.

use crate::types::ShelveError;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Canonical absolute roots established before any copy occurs.
///
/// The walk operates on these resolved paths only, so later changes to the
/// current working directory or to symlinks along the original arguments
/// cannot widen the traversal scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPaths {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Validate the source/destination pair and create the destination root.
///
/// Checks run in order and short-circuit on the first failure:
/// 1. source exists, is a directory, and is readable;
/// 2. destination (or, if absent, its nearest existing ancestor) is a
///    writable directory;
/// 3. the resolved destination is not equal to or inside the resolved source.
///
/// Only after all checks pass is the destination directory created (missing
/// parents included). On failure nothing has been mutated.
pub fn validate(source: &Path, destination: &Path) -> Result<ValidatedPaths, ShelveError> {
    let source_meta = fs::metadata(source).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ShelveError::Config(format!("source path '{}' does not exist", source.display()))
        } else {
            ShelveError::Config(format!(
                "cannot access source path '{}': {}",
                source.display(),
                e
            ))
        }
    })?;

    if !source_meta.is_dir() {
        return Err(ShelveError::Config(format!(
            "source path '{}' is not a directory",
            source.display()
        )));
    }

    // Readability probe: listing is exactly the operation the walk will do.
    fs::read_dir(source).map(drop).map_err(|e| {
        ShelveError::Config(format!(
            "no read permission for source directory '{}': {}",
            source.display(),
            e
        ))
    })?;

    check_destination(destination)?;

    let source_resolved = fs::canonicalize(source).map_err(|e| {
        ShelveError::Config(format!(
            "cannot resolve source path '{}': {}",
            source.display(),
            e
        ))
    })?;
    let dest_resolved = resolve_absolute(destination)?;

    if dest_resolved.starts_with(&source_resolved) {
        return Err(ShelveError::Validation(
            "destination directory cannot be inside the source directory".to_string(),
        ));
    }

    fs::create_dir_all(destination).map_err(|e| {
        ShelveError::Config(format!(
            "cannot create destination directory '{}': {}",
            destination.display(),
            e
        ))
    })?;

    // The destination exists now, so it canonicalizes for real.
    let destination = fs::canonicalize(destination).map_err(|e| {
        ShelveError::Config(format!(
            "cannot resolve destination path '{}': {}",
            destination.display(),
            e
        ))
    })?;

    Ok(ValidatedPaths {
        source: source_resolved,
        destination,
    })
}

/// Destination preconditions: an existing destination must be a writable
/// directory; a missing one must have a writable existing ancestor so the
/// chain of parents can be created.
fn check_destination(destination: &Path) -> Result<(), ShelveError> {
    match fs::metadata(destination) {
        Ok(meta) if meta.is_dir() => probe_writable(destination).map_err(|_| {
            ShelveError::Config(format!(
                "destination directory '{}' is not writable",
                destination.display()
            ))
        }),
        Ok(_) => Err(ShelveError::Config(format!(
            "destination '{}' is a file, not a directory",
            destination.display()
        ))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let absolute = absolutize(destination)?;
            let ancestor = absolute
                .ancestors()
                .find(|a| !a.as_os_str().is_empty() && a.exists())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("/"));

            if !ancestor.is_dir() {
                return Err(ShelveError::Config(format!(
                    "cannot create directory '{}': '{}' is not a directory",
                    destination.display(),
                    ancestor.display()
                )));
            }

            probe_writable(&ancestor).map_err(|_| {
                ShelveError::Config(format!(
                    "cannot create directory '{}': '{}' is not writable",
                    destination.display(),
                    ancestor.display()
                ))
            })
        }
        Err(e) => Err(ShelveError::Config(format!(
            "cannot access destination path '{}': {}",
            destination.display(),
            e
        ))),
    }
}

/// Writability probe: create an anonymous temp file in the directory. The
/// file is unlinked immediately, so a successful probe leaves no trace.
fn probe_writable(dir: &Path) -> io::Result<()> {
    tempfile::tempfile_in(dir).map(|_| ())
}

/// Resolve a path that may not exist yet to absolute canonical form.
///
/// An existing path canonicalizes directly. Otherwise the deepest existing
/// ancestor is canonicalized (following symlinks) and the non-existing
/// remainder is appended after lexical normalization.
pub fn resolve_absolute(path: &Path) -> Result<PathBuf, ShelveError> {
    if let Ok(resolved) = fs::canonicalize(path) {
        return Ok(resolved);
    }

    let absolute = normalize_lexically(&absolutize(path)?);

    for ancestor in absolute.ancestors().skip(1) {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        if let Ok(resolved) = fs::canonicalize(ancestor) {
            if let Ok(remainder) = absolute.strip_prefix(ancestor) {
                return Ok(resolved.join(remainder));
            }
        }
    }

    Ok(absolute)
}

fn absolutize(path: &Path) -> Result<PathBuf, ShelveError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().map_err(ShelveError::Io)?;
        Ok(cwd.join(path))
    }
}

/// Drop `.` components and resolve `..` lexically (without touching the
/// filesystem). Good enough for the containment check on not-yet-existing
/// destination paths.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

//! Atomic single-file copy using the write-then-rename strategy

use crate::types::ShelveError;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Copy one file atomically.
///
/// Content is streamed into a temporary file in the destination's directory,
/// synced, stamped with the source's permissions and mtime, and only then
/// renamed onto `dest`. A failure at any step leaves no partial file at
/// `dest`; the temp file is cleaned up when dropped.
///
/// Every I/O failure is converted into [`ShelveError::Copy`] carrying both
/// endpoints and the underlying cause. The caller decides whether to continue;
/// this function never panics or aborts past its own boundary.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(ShelveError)` - The copy failed and `dest` was not created
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64, ShelveError> {
    let fail = |cause: std::io::Error| ShelveError::Copy {
        source_path: src.to_path_buf(),
        dest_path: dest.to_path_buf(),
        cause,
    };

    // The temp file must live on the same filesystem as dest for the final
    // rename to be atomic, so it goes into the bucket directory itself.
    let dest_dir = dest.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dest_dir).map_err(fail)?;

    let mut src_file = File::open(src).map_err(fail)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer).map_err(fail)?;

        if bytes_read == 0 {
            break; // EOF
        }

        temp.as_file_mut()
            .write_all(&buffer[0..bytes_read])
            .map_err(fail)?;
        total_bytes += bytes_read as u64;
    }

    // Force data to disk before the rename makes the copy visible.
    temp.as_file().sync_all().map_err(fail)?;

    // Mirror permissions and mtime from the source.
    let src_metadata = fs::metadata(src).map_err(fail)?;
    fs::set_permissions(temp.path(), src_metadata.permissions()).map_err(fail)?;

    let mtime = src_metadata.modified().map_err(fail)?;
    let filetime_mtime = filetime::FileTime::from_system_time(mtime);
    filetime::set_file_mtime(temp.path(), filetime_mtime).map_err(fail)?;

    // Atomic on POSIX systems (single rename syscall).
    temp.persist(dest).map_err(|e| fail(e.error))?;

    Ok(total_bytes)
}

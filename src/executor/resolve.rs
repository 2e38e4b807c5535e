//! Collision resolution - picks a destination path that does not exist yet

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Resolve a collision-free destination path.
///
/// If `desired` does not exist it is returned unchanged. Otherwise `(N)` is
/// inserted immediately before the extension (`report.txt` becomes
/// `report(1).txt`, then `report(2).txt`, ...) until an unused path is found.
/// Names without a usable extension get the suffix appended (`README` becomes
/// `README(1)`). There is no upper bound on N.
///
/// Suffixing works on the raw name bytes, so a file name that is not valid
/// UTF-8 keeps its exact bytes in the suffixed candidate too.
///
/// The existence check and the later write are two separate steps. That is
/// safe only because the walk is single-threaded; any parallel caller would
/// need create-exclusive semantics per candidate path instead.
pub fn unique_destination(desired: &Path) -> PathBuf {
    if !desired.exists() {
        return desired.to_path_buf();
    }

    let parent = desired.parent().unwrap_or_else(|| Path::new(""));
    let name = desired.file_name().unwrap_or_else(|| OsStr::new(""));
    let (stem, ext) = split_at_last_dot(name);

    let mut counter: u64 = 1;
    loop {
        let mut candidate_name = stem.clone();
        candidate_name.push(format!("({})", counter));
        if let Some(ext) = &ext {
            candidate_name.push(".");
            candidate_name.push(ext);
        }
        let candidate = parent.join(&candidate_name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Split a file name at the last '.', but only when both halves are
/// non-empty: a trailing dot or a bare dotfile name counts as extensionless,
/// matching the classifier's rules.
#[cfg(unix)]
fn split_at_last_dot(name: &OsStr) -> (OsString, Option<OsString>) {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = name.as_bytes();
    if let Some(pos) = bytes.iter().rposition(|b| *b == b'.') {
        if pos > 0 && pos + 1 < bytes.len() {
            return (
                OsString::from_vec(bytes[..pos].to_vec()),
                Some(OsString::from_vec(bytes[pos + 1..].to_vec())),
            );
        }
    }
    (name.to_os_string(), None)
}

#[cfg(not(unix))]
fn split_at_last_dot(name: &OsStr) -> (OsString, Option<OsString>) {
    match name.to_str() {
        Some(s) => match s.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
                (OsString::from(stem), Some(OsString::from(ext)))
            }
            _ => (name.to_os_string(), None),
        },
        // No byte view of OsStr off Unix; appending the suffix at the end
        // still preserves the original name exactly.
        None => (name.to_os_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_nonexistent_path_is_returned_unchanged() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let desired = temp_dir.path().join("report.txt");

        assert_eq!(unique_destination(&desired), desired);
    }

    #[test]
    fn test_first_collision_gets_suffix_one() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let desired = temp_dir.path().join("report.txt");
        fs::write(&desired, b"occupied").expect("Failed to write file");

        let resolved = unique_destination(&desired);
        assert_eq!(resolved, temp_dir.path().join("report(1).txt"));
    }

    #[test]
    fn test_counter_skips_occupied_candidates() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let desired = temp_dir.path().join("report.txt");
        fs::write(&desired, b"0").expect("Failed to write file");
        fs::write(temp_dir.path().join("report(1).txt"), b"1").expect("Failed to write file");
        fs::write(temp_dir.path().join("report(2).txt"), b"2").expect("Failed to write file");

        let resolved = unique_destination(&desired);
        assert_eq!(resolved, temp_dir.path().join("report(3).txt"));
    }

    #[test]
    fn test_extensionless_name_gets_trailing_suffix() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let desired = temp_dir.path().join("README");
        fs::write(&desired, b"occupied").expect("Failed to write file");

        let resolved = unique_destination(&desired);
        assert_eq!(resolved, temp_dir.path().join("README(1)"));
    }

    #[test]
    fn test_suffix_sits_before_last_extension_only() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let desired = temp_dir.path().join("archive.tar.gz");
        fs::write(&desired, b"occupied").expect("Failed to write file");

        let resolved = unique_destination(&desired);
        assert_eq!(resolved, temp_dir.path().join("archive.tar(1).gz"));
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_name_keeps_its_bytes_on_collision() {
        use std::os::unix::ffi::OsStringExt;

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let name = std::ffi::OsString::from_vec(vec![b'r', 0x80, 0xfe, b'.', b't', b'x', b't']);
        let desired = temp_dir.path().join(&name);
        fs::write(&desired, b"occupied").expect("Failed to write file");

        let resolved = unique_destination(&desired);

        let expected = std::ffi::OsString::from_vec(vec![
            b'r', 0x80, 0xfe, b'(', b'1', b')', b'.', b't', b'x', b't',
        ]);
        assert_eq!(
            resolved.file_name().expect("candidate has a file name"),
            expected.as_os_str(),
            "suffixing must not mangle non-UTF-8 name bytes"
        );
    }

    #[test]
    fn test_dotfile_is_treated_as_extensionless() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let desired = temp_dir.path().join(".bashrc");
        fs::write(&desired, b"occupied").expect("Failed to write file");

        let resolved = unique_destination(&desired);
        assert_eq!(resolved, temp_dir.path().join(".bashrc(1)"));
    }
}

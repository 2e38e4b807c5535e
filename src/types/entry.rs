//! EntryKind - Classification of a visited filesystem entry

use std::fs::Metadata;

/// What a source-tree entry is, after following symlinks.
///
/// Symlinks take the kind of their target, so a link to a regular file is
/// copied like a file and a link to a directory is descended into. Entries
/// whose target metadata cannot be read at all (broken links, permission
/// failures) never get a kind; the walker reports them as unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Anything else (socket, fifo, device)
    Other,
}

impl EntryKind {
    /// Derive the kind from followed (stat) metadata
    pub fn from_metadata(metadata: &Metadata) -> Self {
        if metadata.is_file() {
            EntryKind::File
        } else if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }

    /// Short label used in status messages
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
            EntryKind::Other => "special entry",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_kind_of_regular_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("plain.txt");
        fs::write(&file_path, b"data").expect("Failed to write file");

        let metadata = fs::metadata(&file_path).expect("Failed to stat file");
        assert_eq!(EntryKind::from_metadata(&metadata), EntryKind::File);
        assert_eq!(EntryKind::File.label(), "file");
    }

    #[test]
    fn test_kind_of_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dir_path = temp_dir.path().join("sub");
        fs::create_dir(&dir_path).expect("Failed to create dir");

        let metadata = fs::metadata(&dir_path).expect("Failed to stat dir");
        assert_eq!(EntryKind::from_metadata(&metadata), EntryKind::Directory);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_takes_target_kind() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let target = temp_dir.path().join("target.txt");
        fs::write(&target, b"content").expect("Failed to write target");

        let link = temp_dir.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link).expect("Failed to create symlink");

        // fs::metadata follows the link
        let metadata = fs::metadata(&link).expect("Failed to stat through symlink");
        assert_eq!(EntryKind::from_metadata(&metadata), EntryKind::File);
    }
}

//! Extension classification - maps a file name to its bucket label

/// Bucket label for files without a usable extension.
pub const UNKNOWN_BUCKET: &str = "unknown";

/// Classify a file name into a bucket label.
///
/// The label is the substring after the last '.' in the name. Names with no
/// dot ("README"), a trailing dot ("archive."), or only a leading dot
/// (".bashrc") have no usable extension and fall into [`UNKNOWN_BUCKET`].
///
/// Case is preserved as-is, so "IMG" and "img" form distinct buckets. This
/// mirrors the behavior of case-sensitive filesystems; normalizing here would
/// silently merge buckets that the source tree keeps apart.
pub fn classify(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext,
        _ => UNKNOWN_BUCKET,
    }
}

//! Core data models for the tree scanner

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Classification of a filesystem entry encountered during traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Symlink, socket, device or other special entry
    Other,
}

/// A filesystem path discovered during traversal
///
/// Carries the full discovered path for I/O and display, and the
/// root-relative path whose ancestor components feed exclusion testing.
#[derive(Debug, Clone)]
pub struct ScanPath {
    /// Full path as discovered under the scan root
    pub path: PathBuf,
    /// Path relative to the scan root
    pub relative: PathBuf,
    /// What kind of entry this is
    pub kind: EntryKind,
}

impl ScanPath {
    /// Create a new scan path
    pub fn new(path: PathBuf, relative: PathBuf, kind: EntryKind) -> Self {
        Self {
            path,
            relative,
            kind,
        }
    }

    /// Whether this entry is a regular file
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Whether this entry is a directory
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Root-relative path for exclusion testing
    pub fn relative(&self) -> &Path {
        &self.relative
    }
}

/// Counters for one scan run
///
/// Created fresh per invocation; counters only ever increase during a run.
/// `processed_files + skipped_files` equals the number of regular files
/// visited; directories are never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Files whose content was written to the output
    pub processed_files: u64,
    /// Files skipped by the exclusion policy
    pub skipped_files: u64,
    /// Recoverable errors (unreadable subtrees, undecodable files)
    pub errors: u64,
}

impl ScanStats {
    /// Create a zeroed stats record
    pub fn new() -> Self {
        Self::default()
    }

    /// Total regular files visited
    pub fn total_files(&self) -> u64 {
        self.processed_files + self.skipped_files
    }

    /// Whether the run completed without any recoverable errors
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_path_kind() {
        let file = ScanPath::new(
            PathBuf::from("/root/a/b.txt"),
            PathBuf::from("a/b.txt"),
            EntryKind::File,
        );
        assert!(file.is_file());
        assert!(!file.is_dir());
        assert_eq!(file.relative(), Path::new("a/b.txt"));

        let dir = ScanPath::new(PathBuf::from("/root/a"), PathBuf::from("a"), EntryKind::Directory);
        assert!(dir.is_dir());
        assert!(!dir.is_file());
    }

    #[test]
    fn test_stats_default_and_totals() {
        let mut stats = ScanStats::new();
        assert_eq!(stats.total_files(), 0);
        assert!(stats.is_clean());

        stats.processed_files += 3;
        stats.skipped_files += 2;
        stats.errors += 1;
        assert_eq!(stats.total_files(), 5);
        assert!(!stats.is_clean());
    }
}

//! Tree scanner - lazy recursive traversal of a scan root
//!
//! Traversal does no filtering of its own; exclusion is the caller's concern.
//! Unreadable subtrees surface as error items in the stream instead of
//! aborting the walk.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{ScanError, ScanErrorKind};
use crate::models::{EntryKind, ScanPath};

/// Walks a root directory and streams every entry beneath it
#[derive(Debug, Clone)]
pub struct TreeScanner {
    root: PathBuf,
}

impl TreeScanner {
    /// Create a scanner for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The scan root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a fresh traversal of the root.
    ///
    /// Fails with `NotFound` if the root does not exist or is not a
    /// directory. The returned iterator yields every entry under the root
    /// (the root itself is not yielded) in a deterministic name-sorted,
    /// depth-first order. Directories that cannot be listed mid-walk yield
    /// an `Err` item and the walk continues past them.
    pub fn scan(&self) -> Result<ScanIter, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::not_found(self.root.clone()));
        }

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Ok(ScanIter {
            root: self.root.clone(),
            walker,
        })
    }
}

/// Lazy stream of `ScanPath` items produced by [`TreeScanner::scan`]
pub struct ScanIter {
    root: PathBuf,
    walker: walkdir::IntoIter,
}

impl Iterator for ScanIter {
    type Item = Result<ScanPath, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.walker.next()?;
        match entry {
            Ok(entry) => {
                let path = entry.path().to_path_buf();
                let relative = path
                    .strip_prefix(&self.root)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| path.clone());

                let file_type = entry.file_type();
                let kind = if file_type.is_file() {
                    EntryKind::File
                } else if file_type.is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::Other
                };

                Some(Ok(ScanPath::new(path, relative, kind)))
            }
            Err(e) => {
                let path = e.path().map(|p| p.to_path_buf());
                let kind = if e.io_error().map(|e| e.kind())
                    == Some(std::io::ErrorKind::PermissionDenied)
                {
                    ScanErrorKind::PermissionDenied
                } else {
                    ScanErrorKind::IoError
                };
                Some(Err(ScanError::new(kind, path, e.to_string())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_missing_root_is_not_found() {
        let scanner = TreeScanner::new("/definitely/not/a/real/path");
        let err = scanner.scan().err().unwrap();
        assert_eq!(err.kind, ScanErrorKind::NotFound);
    }

    #[test]
    fn test_file_root_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        touch(&file);

        let scanner = TreeScanner::new(&file);
        let err = scanner.scan().err().unwrap();
        assert_eq!(err.kind, ScanErrorKind::NotFound);
    }

    #[test]
    fn test_yields_all_entries_without_filtering() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("a.txt"));
        touch(&dir.path().join("sub").join("b.txt"));

        let scanner = TreeScanner::new(dir.path());
        let entries: Vec<ScanPath> = scanner.scan().unwrap().map(|e| e.unwrap()).collect();

        // Root itself not yielded; sub/ and both files are
        assert_eq!(entries.len(), 3);
        let relatives: Vec<String> = entries
            .iter()
            .map(|e| e.relative().to_string_lossy().to_string())
            .collect();
        assert!(relatives.contains(&"a.txt".to_string()));
        assert!(relatives.contains(&"sub".to_string()));
        assert!(relatives.contains(&format!("sub{}b.txt", std::path::MAIN_SEPARATOR)));
    }

    #[test]
    fn test_traversal_order_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("c.txt"));
        touch(&dir.path().join("a.txt"));
        touch(&dir.path().join("b.txt"));

        let scanner = TreeScanner::new(dir.path());
        let first: Vec<PathBuf> = scanner
            .scan()
            .unwrap()
            .map(|e| e.unwrap().path)
            .collect();
        let second: Vec<PathBuf> = scanner
            .scan()
            .unwrap()
            .map(|e| e.unwrap().path)
            .collect();

        assert_eq!(first, second);
        assert_eq!(first[0].file_name().unwrap(), "a.txt");
        assert_eq!(first[2].file_name().unwrap(), "c.txt");
    }

    #[test]
    fn test_kind_classification() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("d")).unwrap();
        touch(&dir.path().join("f.txt"));

        let scanner = TreeScanner::new(dir.path());
        for entry in scanner.scan().unwrap() {
            let entry = entry.unwrap();
            match entry.relative().to_string_lossy().as_ref() {
                "d" => assert_eq!(entry.kind, EntryKind::Directory),
                "f.txt" => assert_eq!(entry.kind, EntryKind::File),
                other => panic!("unexpected entry {other}"),
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_other() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("link")).unwrap();

        let scanner = TreeScanner::new(dir.path());
        let entries: Vec<ScanPath> = scanner.scan().unwrap().map(|e| e.unwrap()).collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Other);
    }
}

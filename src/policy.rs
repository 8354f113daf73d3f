//! Exclusion policy for the tree scanner
//!
//! Decides which filesystem entries are omitted from processing, based on
//! ancestor directory names and file extensions. The policy is built once per
//! run and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Immutable exclusion rule set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionPolicy {
    /// Directory names to exclude (exact, case-sensitive match)
    folders: HashSet<String>,

    /// File extensions to exclude (lowercase, with leading dot)
    extensions: HashSet<String>,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self {
            folders: Self::default_excluded_folders(),
            extensions: Self::default_excluded_extensions(),
        }
    }
}

impl ExclusionPolicy {
    /// Create a policy builder seeded with the defaults
    pub fn builder() -> ExclusionPolicyBuilder {
        ExclusionPolicyBuilder::new()
    }

    /// Get the default directory names to exclude
    ///
    /// Covers VCS metadata, dependency caches, virtual environments,
    /// build output and coverage reports.
    pub fn default_excluded_folders() -> HashSet<String> {
        [
            "node_modules",
            "__pycache__",
            ".git",
            "venv",
            ".env",
            "dist",
            "build",
            "coverage",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Get the default file extensions to exclude
    ///
    /// Covers compiled binaries and shared libraries, common binary
    /// image/document/archive formats, and bytecode artifacts.
    pub fn default_excluded_extensions() -> HashSet<String> {
        [
            ".exe", ".dll", ".so", ".dylib", // binaries
            ".png", ".jpg", ".jpeg", ".gif", // images
            ".pdf", ".doc", ".docx", // documents
            ".zip", ".tar", ".gz", ".7z", ".rar", // archives
            ".pyc", ".pyo", // Python bytecode
            ".class", // Java bytecode
            ".o", ".obj", // object files
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Check whether a root-relative path should be excluded.
    ///
    /// A path is excluded iff any ancestor component (every component except
    /// the final one) exactly matches an excluded folder name, or it denotes
    /// a regular file whose extension is in the excluded set. Extension
    /// matching is case-insensitive; folder matching is not.
    pub fn is_excluded(&self, rel_path: &Path, is_file: bool) -> bool {
        let components: Vec<&str> = rel_path
            .iter()
            .filter_map(|c| c.to_str())
            .collect();

        if let Some((_, ancestors)) = components.split_last() {
            if ancestors.iter().any(|c| self.folders.contains(*c)) {
                return true;
            }
        }

        if is_file {
            if let Some(ext) = normalized_extension(rel_path) {
                return self.extensions.contains(&ext);
            }
        }

        false
    }

    /// Excluded folder names, sorted (for preamble output)
    pub fn sorted_folders(&self) -> Vec<&str> {
        let mut folders: Vec<&str> = self.folders.iter().map(String::as_str).collect();
        folders.sort_unstable();
        folders
    }

    /// Excluded extensions, sorted (for preamble output)
    pub fn sorted_extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }
}

/// Extension of the final path component, lowercased with leading dot
fn normalized_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
}

/// Normalize a caller-supplied extension: lowercase, leading dot added
/// if missing, so `LOG`, `log` and `.log` all become `.log`.
fn normalize_extension_input(ext: &str) -> String {
    let ext = ext.to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

/// Builder for ExclusionPolicy
///
/// Additions are unioned into the defaults; the defaults are always present.
#[derive(Debug, Default)]
pub struct ExclusionPolicyBuilder {
    policy: ExclusionPolicy,
}

impl ExclusionPolicyBuilder {
    /// Create a new builder seeded with the default rule sets
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a folder name to exclude
    pub fn add_folder(mut self, name: impl Into<String>) -> Self {
        self.policy.folders.insert(name.into());
        self
    }

    /// Add several folder names to exclude
    pub fn folders<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.folders.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a file extension to exclude (leading dot optional, case ignored)
    pub fn add_extension(mut self, ext: &str) -> Self {
        self.policy.extensions.insert(normalize_extension_input(ext));
        self
    }

    /// Add several file extensions to exclude
    pub fn extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.policy.extensions.extend(
            exts.into_iter()
                .map(|e| normalize_extension_input(e.as_ref())),
        );
        self
    }

    /// Build the policy
    pub fn build(self) -> ExclusionPolicy {
        self.policy
    }
}

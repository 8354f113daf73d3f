//! Directory tree scanner and filtered concatenation engine
//!
//! This library walks a directory tree, filters entries through an exclusion
//! policy (folder names and file extensions), and concatenates the textual
//! content of every accepted file into a single annotated output with a
//! preamble, one delimited section per file, and a trailing summary.

pub mod error;
pub mod models;
pub mod policy;
pub mod scanner;
pub mod writer;

pub use error::{ScanError, ScanErrorKind};
pub use models::{EntryKind, ScanPath, ScanStats};
pub use policy::{ExclusionPolicy, ExclusionPolicyBuilder};
pub use scanner::{ScanIter, TreeScanner};
pub use writer::{ConcatenationWriter, SEPARATOR_WIDTH};

//! Concatenation writer - streams accepted file contents into one output
//!
//! Drives the scanner, applies the exclusion policy, and appends a delimited
//! section per accepted file to a single sink, tracking counters. Per-file
//! failures are recovered inline; only sink failures abort the run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ScanError;
use crate::models::{ScanPath, ScanStats};
use crate::policy::ExclusionPolicy;
use crate::scanner::TreeScanner;

/// Width of the separator rule lines in the output
pub const SEPARATOR_WIDTH: usize = 80;

/// Outcome of writing one file section
#[derive(Debug)]
enum SectionOutcome {
    /// Content written in full
    Written,
    /// Content could not be read; an inline error note was written instead
    Recovered(ScanError),
}

/// Writes the concatenated output for one scan run
#[derive(Debug, Clone)]
pub struct ConcatenationWriter {
    policy: ExclusionPolicy,
}

impl ConcatenationWriter {
    /// Create a writer with the given exclusion policy
    pub fn new(policy: ExclusionPolicy) -> Self {
        Self { policy }
    }

    /// The policy in effect for this writer
    pub fn policy(&self) -> &ExclusionPolicy {
        &self.policy
    }

    /// Scan `root` and write the concatenated output to `output_path`.
    ///
    /// The root is validated before the output file is created, so a missing
    /// root leaves no output behind. The output file is truncated if it
    /// already exists and stays open for the whole run.
    pub fn run(&self, root: &Path, output_path: &Path) -> Result<ScanStats, ScanError> {
        let scanner = TreeScanner::new(root);
        let entries = scanner.scan()?;

        let file = File::create(output_path)
            .map_err(|e| ScanError::write_error(Some(output_path.to_path_buf()), e.to_string()))?;
        let mut sink = BufWriter::new(file);

        let stats = self.drain(scanner.root(), entries, &mut sink)?;
        sink.flush().map_err(sink_error)?;
        Ok(stats)
    }

    /// Scan `root` and write the concatenated output into an arbitrary sink
    pub fn run_with_sink<W: Write>(
        &self,
        root: &Path,
        sink: &mut W,
    ) -> Result<ScanStats, ScanError> {
        let scanner = TreeScanner::new(root);
        let entries = scanner.scan()?;
        self.drain(scanner.root(), entries, sink)
    }

    fn drain<W: Write>(
        &self,
        root: &Path,
        entries: impl Iterator<Item = Result<ScanPath, ScanError>>,
        out: &mut W,
    ) -> Result<ScanStats, ScanError> {
        let mut stats = ScanStats::new();

        self.write_preamble(out, root)?;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("traversal error: {e}");
                    stats.errors += 1;
                    continue;
                }
            };

            // Directories and special entries are never counted; files under
            // an excluded folder each count as one skip when reached here.
            if !entry.is_file() {
                continue;
            }

            if self.policy.is_excluded(entry.relative(), true) {
                log::debug!("skipping {}", entry.path.display());
                stats.skipped_files += 1;
                continue;
            }

            match self.write_section(out, &entry)? {
                SectionOutcome::Written => {
                    log::debug!("processed {}", entry.path.display());
                    stats.processed_files += 1;
                }
                SectionOutcome::Recovered(err) => {
                    log::warn!("unreadable file: {err}");
                    stats.errors += 1;
                }
            }
        }

        self.write_summary(out, &stats)?;
        Ok(stats)
    }

    fn write_preamble<W: Write>(&self, out: &mut W, root: &Path) -> Result<(), ScanError> {
        let rule = rule();
        writeln!(out, "Directory Scan Results").map_err(sink_error)?;
        writeln!(out, "{rule}").map_err(sink_error)?;
        writeln!(out, "Source Directory: {}", root.display()).map_err(sink_error)?;
        writeln!(out, "Excluded Folders: {:?}", self.policy.sorted_folders())
            .map_err(sink_error)?;
        writeln!(
            out,
            "Excluded Extensions: {:?}",
            self.policy.sorted_extensions()
        )
        .map_err(sink_error)?;
        writeln!(out).map_err(sink_error)?;
        Ok(())
    }

    /// Write one file section: header, content, trailing newline.
    ///
    /// Read failures leave the already-written header in place, followed by
    /// an inline error note, and are reported as recovered rather than
    /// aborting the run.
    fn write_section<W: Write>(
        &self,
        out: &mut W,
        entry: &ScanPath,
    ) -> Result<SectionOutcome, ScanError> {
        let rule = rule();
        writeln!(out, "\n{rule}").map_err(sink_error)?;
        writeln!(out, "File: {}", entry.path.display()).map_err(sink_error)?;
        writeln!(out, "{rule}\n").map_err(sink_error)?;

        match std::fs::read_to_string(&entry.path) {
            Ok(content) => {
                out.write_all(content.as_bytes()).map_err(sink_error)?;
                writeln!(out).map_err(sink_error)?;
                Ok(SectionOutcome::Written)
            }
            Err(e) => {
                writeln!(out, "Error reading file {}: {e}", entry.path.display())
                    .map_err(sink_error)?;
                Ok(SectionOutcome::Recovered(ScanError::from_file_read(
                    entry.path.clone(),
                    &e,
                )))
            }
        }
    }

    fn write_summary<W: Write>(&self, out: &mut W, stats: &ScanStats) -> Result<(), ScanError> {
        let rule = rule();
        writeln!(out, "\n{rule}").map_err(sink_error)?;
        writeln!(out, "Scan Summary").map_err(sink_error)?;
        writeln!(out, "{rule}").map_err(sink_error)?;
        writeln!(out, "Files Processed: {}", stats.processed_files).map_err(sink_error)?;
        writeln!(out, "Files Skipped: {}", stats.skipped_files).map_err(sink_error)?;
        writeln!(out, "Errors Encountered: {}", stats.errors).map_err(sink_error)?;
        Ok(())
    }
}

fn rule() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

fn sink_error(e: std::io::Error) -> ScanError {
    ScanError::write_error(None, e.to_string())
}

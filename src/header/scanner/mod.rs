mod export_parser;
mod file_collector;
mod progress;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::header::types::{ExportRules, ExtractedHeader};

// Re-export from submodules
pub use export_parser::ExportParser;
pub use file_collector::FileCollector;
pub use progress::ProgressTracker;

/// Header scanner responsible for finding headers and extracting type names
#[derive(Debug)]
pub struct HeaderScanner {
    /// File collector for finding header files
    file_collector: FileCollector,

    /// Parser applying the export and template rules
    parser: ExportParser,

    /// Progress tracker for batch extraction
    progress_tracker: ProgressTracker,
}

impl Default for HeaderScanner {
    fn default() -> Self {
        Self::new(ExportRules::default())
    }
}

impl HeaderScanner {
    /// Create a new header scanner with the given rules
    pub fn new(rules: ExportRules) -> Self {
        Self {
            file_collector: FileCollector::new(),
            parser: ExportParser::new(rules),
            progress_tracker: ProgressTracker::new(),
        }
    }

    /// Collect all header files below `root`
    pub fn collect_headers(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        self.file_collector.collect_files(root)
    }

    /// Extract names from a single header.
    ///
    /// A read failure yields no names and keeps the error message for the
    /// caller to report.
    pub fn extract(&self, header: &Path) -> ExtractedHeader {
        match self.parser.parse_file(header) {
            Ok(names) => ExtractedHeader {
                path: header.to_path_buf(),
                names,
                read_error: None,
            },
            Err(e) => ExtractedHeader {
                path: header.to_path_buf(),
                names: Vec::new(),
                read_error: Some(e.to_string()),
            },
        }
    }

    /// Extract names from every header in parallel, keeping input order
    pub fn extract_all(&self, headers: &[PathBuf]) -> Vec<ExtractedHeader> {
        self.progress_tracker
            .track_path_progress(headers, |header| self.extract(header))
    }

    /// Parser used for extraction
    pub fn parser(&self) -> &ExportParser {
        &self.parser
    }
}

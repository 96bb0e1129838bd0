pub mod error;
pub mod header;
pub mod utils;

// Re-export main types and functions for easier access
pub use error::{GenerateError, Result};
pub use header::processor::{ClassIncludeProcessor, EmitOutcome, GenerationStats, IncludeWriter};
pub use header::scanner::{ExportParser, FileCollector, HeaderScanner};
pub use header::types::{ExportRules, ExtractedHeader, GenerateOptions, FIXED_INCLUDES};

// Re-export utility functions
pub use utils::file_utils;

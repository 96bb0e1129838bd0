pub mod types;
pub mod scanner;
pub mod processor;

// Re-export the main API for easier access
pub use types::{ExportRules, ExtractedHeader, GenerateOptions, FIXED_INCLUDES};
pub use scanner::HeaderScanner;
pub use processor::{ClassIncludeProcessor, GenerationStats};

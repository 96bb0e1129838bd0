mod class_include_processor;
mod include_writer;
mod stats;

// Re-export from submodules
pub use class_include_processor::ClassIncludeProcessor;
pub use include_writer::{include_directive, EmitOutcome, IncludeWriter};
pub use stats::GenerationStats;

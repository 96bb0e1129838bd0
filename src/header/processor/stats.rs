use std::fmt;
use std::path::PathBuf;

/// Counters accumulated over one generation run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    /// Header files found by the scan
    pub headers_found: usize,

    /// Header files run through extraction
    pub headers_processed: usize,

    /// Headers that yielded at least one name
    pub headers_with_exports: usize,

    /// Headers that could not be read
    pub read_errors: usize,

    /// Include files written from the fixed table
    pub fixed_generated: usize,

    /// Include files written in total, fixed ones included
    pub generated: usize,

    /// Names that failed to resolve or write
    pub write_errors: usize,

    /// Names overwritten by a later header
    pub collisions: usize,

    /// Directory the include files went to
    pub output_dir: PathBuf,
}

impl GenerationStats {
    /// Create empty stats for the given output directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Include files written from discovered names
    pub fn discovered_generated(&self) -> usize {
        self.generated - self.fixed_generated
    }

    /// Whether any per-file or per-name error was recorded
    pub fn has_errors(&self) -> bool {
        self.read_errors > 0 || self.write_errors > 0
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processing complete!")?;
        writeln!(f, "Headers scanned: {}", self.headers_processed)?;
        writeln!(f, "Include files generated: {}", self.generated)?;
        write!(f, "Output directory: {}", self.output_dir.display())?;
        if self.has_errors() {
            write!(
                f,
                "\nErrors: {} unreadable headers, {} failed include files",
                self.read_errors, self.write_errors
            )?;
        }
        if self.collisions > 0 {
            write!(f, "\nName collisions: {}", self.collisions)?;
        }
        Ok(())
    }
}

use log::{error, info};

use crate::error::Result;
use crate::header::processor::include_writer::{EmitOutcome, IncludeWriter};
use crate::header::processor::stats::GenerationStats;
use crate::header::scanner::HeaderScanner;
use crate::header::types::{ExtractedHeader, GenerateOptions};
use crate::utils::file_utils;

/// Runs a full generation pass: fixed includes, scan, extraction, emission
#[derive(Debug)]
pub struct ClassIncludeProcessor {
    options: GenerateOptions,
    scanner: HeaderScanner,
}

impl ClassIncludeProcessor {
    /// Create a processor for the given options
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            scanner: HeaderScanner::new(options.rules.clone()),
            options,
        }
    }

    /// Options this processor runs with
    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate every include file.
    ///
    /// Only failing to create the output directory is returned as an error.
    /// A missing scan directory or an empty scan ends the run early with
    /// whatever the fixed table produced.
    pub fn run(&self) -> Result<GenerationStats> {
        let GenerateOptions {
            scan_dir,
            output_dir,
            ..
        } = &self.options;

        file_utils::ensure_dir_exists(output_dir)?;

        let mut stats = GenerationStats::new(output_dir);
        let mut writer = IncludeWriter::new(scan_dir, output_dir);

        info!("Generating fixed includes...");
        stats.fixed_generated = writer.emit_fixed();
        stats.generated = stats.fixed_generated;

        let headers = match self.scanner.collect_headers(scan_dir) {
            Ok(headers) => headers,
            Err(e) => {
                error!("{}", e);
                return Ok(stats);
            }
        };
        stats.headers_found = headers.len();

        if headers.is_empty() {
            info!("No header files found, nothing to do");
            return Ok(stats);
        }

        for extracted in self.scanner.extract_all(&headers) {
            self.process_header(&extracted, &mut writer, &mut stats);
        }
        stats.collisions = writer.collisions();

        Ok(stats)
    }

    fn process_header(
        &self,
        extracted: &ExtractedHeader,
        writer: &mut IncludeWriter,
        stats: &mut GenerationStats,
    ) {
        info!("Processing file: {}", extracted.path.display());
        stats.headers_processed += 1;

        if let Some(reason) = &extracted.read_error {
            error!("{}", reason);
            stats.read_errors += 1;
            return;
        }
        if extracted.names.is_empty() {
            return;
        }

        stats.headers_with_exports += 1;
        info!("  Found exported types: {}", extracted.names.join(", "));

        for name in &extracted.names {
            match writer.emit_discovered(name, &extracted.path) {
                Ok(EmitOutcome::Written) => stats.generated += 1,
                Ok(EmitOutcome::SkippedFixed) => {}
                Err(e) => {
                    error!("{}", e);
                    stats.write_errors += 1;
                }
            }
        }
    }
}

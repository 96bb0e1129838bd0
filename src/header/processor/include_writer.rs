use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::error::Result;
use crate::header::types::{fixed_header_for, FIXED_INCLUDES};
use crate::utils::file_utils;

/// Outcome of emitting a discovered name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    /// An include file was written
    Written,
    /// The name belongs to the fixed table and was left alone
    SkippedFixed,
}

/// Body of a forwarding include file
pub fn include_directive(target: &str) -> String {
    format!("#include \"{target}\"\n")
}

/// Writes forwarding include files into the output directory
#[derive(Debug)]
pub struct IncludeWriter {
    scan_dir: PathBuf,
    output_dir: PathBuf,

    /// Header each discovered name was last written from during this run
    origins: HashMap<String, PathBuf>,

    /// Names rewritten from a different header than the previous write
    collisions: usize,
}

impl IncludeWriter {
    /// Create a writer resolving headers against `scan_dir`
    pub fn new(scan_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            scan_dir: scan_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            origins: HashMap::new(),
            collisions: 0,
        }
    }

    /// Write include files for the fixed table.
    ///
    /// An entry whose header is missing from the scan root is skipped with a
    /// warning. Returns the number of files written.
    pub fn emit_fixed(&mut self) -> usize {
        let mut generated = 0;

        for (name, header) in FIXED_INCLUDES {
            if !self.scan_dir.join(header).exists() {
                warn!("Header required by fixed include is missing: {}", header);
                continue;
            }

            match file_utils::write_named_file(&self.output_dir, name, &include_directive(header)) {
                Ok(()) => {
                    info!("Generated fixed include: {} -> {}", name, header);
                    generated += 1;
                }
                Err(e) => error!("{}", e),
            }
        }

        generated
    }

    /// Write the include file for a name discovered in `header`.
    ///
    /// Names covered by the fixed table are skipped. If the same name was
    /// already written from another header, the new file replaces it and a
    /// warning is logged.
    pub fn emit_discovered(&mut self, name: &str, header: &Path) -> Result<EmitOutcome> {
        if fixed_header_for(name).is_some() {
            return Ok(EmitOutcome::SkippedFixed);
        }

        let relative = file_utils::relative_include_path(header, &self.scan_dir)?;
        file_utils::write_named_file(&self.output_dir, name, &include_directive(&relative))?;

        if let Some(previous) = self.origins.insert(name.to_string(), header.to_path_buf()) {
            if previous != header {
                warn!(
                    "{} is declared in both {} and {}; keeping {}",
                    name,
                    previous.display(),
                    header.display(),
                    relative
                );
                self.collisions += 1;
            }
        }

        info!("    Generated: {}", name);
        Ok(EmitOutcome::Written)
    }

    /// Number of names overwritten from a different header so far
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Directory include files are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_include_directive() {
        assert_eq!(include_directive("qwt_math.h"), "#include \"qwt_math.h\"\n");
    }

    #[test]
    fn test_emit_fixed_skips_missing_headers() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let scan = temp_dir.path().join("src");
        let out = temp_dir.path().join("out");
        fs::create_dir_all(&scan)?;
        fs::create_dir_all(&out)?;
        fs::write(scan.join("qwt_math.h"), "")?;

        let mut writer = IncludeWriter::new(&scan, &out);
        assert_eq!(writer.emit_fixed(), 1);

        assert_eq!(fs::read_to_string(out.join("QwtMath"))?, "#include \"qwt_math.h\"\n");
        assert!(!out.join("QwtGlobal").exists());
        Ok(())
    }

    #[test]
    fn test_emit_fixed_requires_header_at_root() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let scan = temp_dir.path().join("src");
        let out = temp_dir.path().join("out");
        fs::create_dir_all(scan.join("nested"))?;
        fs::create_dir_all(&out)?;
        fs::write(scan.join("nested").join("qwt_global.h"), "")?;

        let mut writer = IncludeWriter::new(&scan, &out);
        assert_eq!(writer.emit_fixed(), 0);
        Ok(())
    }

    #[test]
    fn test_emit_discovered_writes_relative_path() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let scan = temp_dir.path().join("src");
        let out = temp_dir.path().join("out");
        fs::create_dir_all(scan.join("plot"))?;
        fs::create_dir_all(&out)?;
        let header = scan.join("plot").join("qwt_plot.h");
        fs::write(&header, "")?;

        let mut writer = IncludeWriter::new(&scan, &out);
        assert_eq!(writer.emit_discovered("QwtPlot", &header)?, EmitOutcome::Written);
        assert_eq!(fs::read_to_string(out.join("QwtPlot"))?, "#include \"plot/qwt_plot.h\"\n");
        Ok(())
    }

    #[test]
    fn test_emit_discovered_skips_fixed_names() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let scan = temp_dir.path().join("src");
        let out = temp_dir.path().join("out");
        fs::create_dir_all(&scan)?;
        fs::create_dir_all(&out)?;
        let header = scan.join("other.h");

        let mut writer = IncludeWriter::new(&scan, &out);
        assert_eq!(writer.emit_discovered("QwtMath", &header)?, EmitOutcome::SkippedFixed);
        assert!(!out.join("QwtMath").exists());
        Ok(())
    }

    #[test]
    fn test_emit_discovered_outside_root() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let out = temp_dir.path().join("out");
        fs::create_dir_all(&out)?;

        let mut writer = IncludeWriter::new(temp_dir.path().join("src"), &out);
        let err = writer
            .emit_discovered("Stray", &temp_dir.path().join("elsewhere").join("stray.h"))
            .unwrap_err();
        assert!(matches!(err, GenerateError::PathResolution { .. }));
        assert!(!out.join("Stray").exists());
        Ok(())
    }

    #[test]
    fn test_emit_discovered_write_failure() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let scan = temp_dir.path().join("src");
        fs::create_dir_all(&scan)?;

        // Output directory never created
        let mut writer = IncludeWriter::new(&scan, temp_dir.path().join("missing_out"));
        let err = writer.emit_discovered("Foo", &scan.join("foo.h")).unwrap_err();
        assert!(matches!(err, GenerateError::FileWrite { ref name, .. } if name == "Foo"));
        Ok(())
    }

    #[test]
    fn test_collision_last_write_wins() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let scan = temp_dir.path().join("src");
        let out = temp_dir.path().join("out");
        fs::create_dir_all(&scan)?;
        fs::create_dir_all(&out)?;

        let mut writer = IncludeWriter::new(&scan, &out);
        writer.emit_discovered("QwtText", &scan.join("a.h"))?;
        writer.emit_discovered("QwtText", &scan.join("a.h"))?;
        assert_eq!(writer.collisions(), 0);

        writer.emit_discovered("QwtText", &scan.join("b.h"))?;
        assert_eq!(writer.collisions(), 1);
        assert_eq!(fs::read_to_string(out.join("QwtText"))?, "#include \"b.h\"\n");
        Ok(())
    }
}

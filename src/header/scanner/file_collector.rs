use std::path::{Path, PathBuf};

use log::{debug, info, trace};
use walkdir::WalkDir;

use crate::error::{GenerateError, Result};
use crate::header::types::HEADER_EXTENSION;
use crate::utils::file_utils;

/// File collector for finding header files
#[derive(Debug)]
pub struct FileCollector {
    /// Extension a file must carry to be collected
    extension: String,
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCollector {
    /// Create a collector for `.h` files
    pub fn new() -> Self {
        Self::with_extension(HEADER_EXTENSION)
    }

    /// Create a collector for a custom extension
    pub fn with_extension(extension: &str) -> Self {
        Self {
            extension: extension.to_string(),
        }
    }

    /// Collect every matching file below `root`, recursively.
    ///
    /// Entries are visited in file-name order within each directory.
    pub fn collect_files(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(GenerateError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }
        debug!("Collecting files from directory: {}", root.display());

        let mut files = Vec::new();
        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
        {
            if file_utils::has_extension(entry.path(), &self.extension) {
                trace!("Found file: {}", entry.path().display());
                files.push(entry.into_path());
            }
        }

        info!("Found {} header files", files.len());
        Ok(files)
    }

    /// Extension this collector matches
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collects_nested_headers_only() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::create_dir_all(root.join("plot").join("items"))?;
        fs::write(root.join("qwt_global.h"), "")?;
        fs::write(root.join("qwt_global.cpp"), "")?;
        fs::write(root.join("qwt_grid_data.hpp"), "")?;
        fs::write(root.join("plot").join("qwt_plot.h"), "")?;
        fs::write(root.join("plot").join("items").join("qwt_plot_curve.h"), "")?;

        let files = FileCollector::new().collect_files(root)?;
        let mut names: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                Path::new("plot").join("items").join("qwt_plot_curve.h"),
                Path::new("plot").join("qwt_plot.h"),
                Path::new("qwt_global.h").to_path_buf(),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_directory_named_like_header_is_skipped() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        fs::create_dir_all(temp_dir.path().join("odd.h"))?;

        let files = FileCollector::new().collect_files(temp_dir.path())?;
        assert!(files.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_root() {
        let err = FileCollector::new()
            .collect_files("/definitely/not/a/real/scan/root")
            .unwrap_err();
        assert!(matches!(err, GenerateError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_traversal_order_is_sorted() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        for name in ["c.h", "a.h", "b.h"] {
            fs::write(temp_dir.path().join(name), "")?;
        }

        let files = FileCollector::new().collect_files(temp_dir.path())?;
        let names: Vec<_> = files
            .iter()
            .filter_map(|f| f.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.h", "b.h", "c.h"]);
        Ok(())
    }
}

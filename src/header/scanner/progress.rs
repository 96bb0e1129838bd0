use std::path::PathBuf;

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Below this many items no progress bar is drawn
const PROGRESS_BAR_THRESHOLD: usize = 10;

/// Progress tracker for parallel per-file work
#[derive(Debug, Default)]
pub struct ProgressTracker {}

impl ProgressTracker {
    /// Create a new progress tracker
    pub fn new() -> Self {
        Self {}
    }

    /// Run `operation` over every path in parallel.
    ///
    /// The result holds one entry per input, in input order.
    pub fn track_path_progress<F, R>(&self, paths: &[PathBuf], operation: F) -> Vec<R>
    where
        F: Fn(&PathBuf) -> R + Sync + Send,
        R: Send,
    {
        let progress_bar = Self::progress_bar(paths.len());

        let results: Vec<R> = paths
            .par_iter()
            .progress_with(progress_bar.clone())
            .map(|path| operation(path))
            .collect();

        progress_bar.finish_and_clear();
        results
    }

    fn progress_bar(len: usize) -> ProgressBar {
        if len <= PROGRESS_BAR_THRESHOLD {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} headers ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}

use std::io;
use std::path::PathBuf;

/// Errors raised while generating class include files.
///
/// Only [`GenerateError::DirectoryCreate`] aborts a run; every other variant
/// is logged where it happens and the run carries on.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("scan directory does not exist: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read header {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write include file {name} to {}: {source}", .path.display())]
    FileWrite {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("header {} is not under scan directory {}", .header.display(), .root.display())]
    PathResolution { header: PathBuf, root: PathBuf },

    #[error("failed to create output directory {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;

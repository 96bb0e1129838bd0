use std::fs;
use std::path::{Component, Path};

use log::{debug, trace};

use crate::error::{GenerateError, Result};

/// Create a directory (and any missing parents) if it doesn't exist
pub fn ensure_dir_exists(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir).map_err(|source| GenerateError::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Check if a file has exactly the given extension.
///
/// The comparison is case-sensitive, so `foo.H` is not a `h` file.
pub fn has_extension(path: impl AsRef<Path>, extension: &str) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == extension)
}

/// Read a file as text, replacing invalid UTF-8 sequences instead of failing
pub fn read_file_lossy(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| GenerateError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    trace!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write `content` to `dir/name`, reporting failures against `name`
pub fn write_named_file(dir: impl AsRef<Path>, name: &str, content: &str) -> Result<()> {
    let path = dir.as_ref().join(name);
    fs::write(&path, content).map_err(|source| GenerateError::FileWrite {
        name: name.to_string(),
        path,
        source,
    })
}

/// Path of `file` relative to `root`, joined with `/` on every platform.
pub fn relative_include_path(file: impl AsRef<Path>, root: impl AsRef<Path>) -> Result<String> {
    let (file, root) = (file.as_ref(), root.as_ref());
    let relative = file
        .strip_prefix(root)
        .map_err(|_| GenerateError::PathResolution {
            header: file.to_path_buf(),
            root: root.to_path_buf(),
        })?;

    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        return Err(GenerateError::PathResolution {
            header: file.to_path_buf(),
            root: root.to_path_buf(),
        });
    }
    Ok(parts.join("/"))
}

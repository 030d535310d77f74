//! Blocking file helpers used by the codecs and the importers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Create or overwrite `folder/filename` with `data`, creating `folder` if needed.
pub fn override_file<P: AsRef<Path>>(folder: P, filename: &str, data: &[u8]) -> Result<PathBuf> {
    let folder = folder.as_ref();
    fs::create_dir_all(folder)?;

    let path = folder.join(filename);
    fs::write(&path, data)?;
    Ok(path)
}

/// List regular files directly inside `folder` whose extension equals `extension`.
///
/// Paths are sorted so callers see a stable order across platforms.
pub fn files_with_extension<P: AsRef<Path>>(folder: P, extension: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

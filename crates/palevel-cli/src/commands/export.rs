//! Write a .pcm document back out as a level folder.

use std::path::Path;

use anyhow::{Context, Result};
use palevel::{FolderCodec, JsonCodec, LevelFolder};

pub fn run(file: &Path, folder: &Path, themes: Option<&Path>) -> Result<()> {
    let level_folder = LevelFolder::read_json_file(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    level_folder.write_folder(folder, themes)?;

    eprintln!(
        "Exported {} to {}",
        level_folder.version.description(),
        folder.display()
    );
    if let Some(themes) = themes {
        eprintln!(
            "Wrote {} themes to {}",
            level_folder.themes.len(),
            themes.display()
        );
    }

    Ok(())
}

use std::path::Path;

use tracing::{debug, info};

use crate::config::files;
use crate::error::{Error, Result};
use crate::level::{Audio, LevelFolder, Metadata, read_folder_file, read_level};
use crate::version::VersionStrategy;

/// Import pipeline shared by versions that use the `.lsb` folder layout.
///
/// Reads metadata, level and (optionally) audio, checks the embedded version
/// against `version`, then resolves the level's custom themes.
pub(crate) fn import_lsb_folder(
    version: &'static dyn VersionStrategy,
    folder: &Path,
    themes_folder: &Path,
    load_audio: bool,
) -> Result<LevelFolder> {
    if !folder.is_dir() {
        return Err(Error::FolderNotFound(folder.to_path_buf()));
    }

    debug!("Importing {} as {}", folder.display(), version.description());

    let metadata: Metadata = read_folder_file(folder, files::METADATA)?;
    let level = read_level(folder)?;
    let audio = if load_audio {
        Some(read_folder_file::<Audio>(folder, files::AUDIO)?)
    } else {
        None
    };

    if !version.is_compatible(&level) {
        return Err(Error::IncompatibleVersion {
            detected: version
                .get_version_number(&level)
                .unwrap_or_else(|| "cannot detect".to_string()),
            expected: version.version_number().to_string(),
        });
    }

    let themes = version.resolve_themes(&level, themes_folder)?;

    info!(
        "Imported {} ({} custom themes, audio: {})",
        folder.display(),
        themes.len(),
        audio.is_some()
    );

    Ok(LevelFolder {
        version,
        level,
        metadata,
        audio,
        themes,
    })
}

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::codec::{self, FolderCodec, JsonCodec, RawFileCodec};
use crate::combine::CombineSettings;
use crate::config::files;
use crate::error::{Error, Result};
use crate::level::{Audio, Level, Metadata, Theme};
use crate::version::{VersionStrategy, registry};

/// A complete level bundle: version, level, metadata, optional audio and
/// the custom themes the level references.
#[derive(Debug, Clone)]
pub struct LevelFolder {
    pub version: &'static dyn VersionStrategy,
    pub level: Level,
    pub metadata: Metadata,
    pub audio: Option<Audio>,
    pub themes: Vec<Theme>,
}

impl PartialEq for LevelFolder {
    fn eq(&self, other: &Self) -> bool {
        self.version.version_number() == other.version.version_number()
            && self.level == other.level
            && self.metadata == other.metadata
            && self.audio == other.audio
            && self.themes == other.themes
    }
}

impl LevelFolder {
    /// Import a folder with whichever registered version its level declares.
    pub fn import_detected(folder: &Path, themes_folder: &Path, load_audio: bool) -> Result<Self> {
        if !folder.is_dir() {
            return Err(Error::FolderNotFound(folder.to_path_buf()));
        }

        let level = read_level(folder)?;
        let Some(version) = registry().detect(&level) else {
            let detected = registry()
                .list_all()
                .iter()
                .find_map(|version| version.get_version_number(&level))
                .unwrap_or_else(|| "cannot detect".to_string());
            return Err(Error::VersionNotFound(detected));
        };

        debug!("Detected {} for {}", version.description(), folder.display());
        version.import_folder(folder, themes_folder, load_audio)
    }

    /// Combine several folders into one.
    ///
    /// The source folder (the primary if given, else the first) provides the
    /// version, metadata and audio, and is folded into the level as primary.
    /// Themes are the union of all folders' themes.
    pub fn combine_folders(
        folders: &[LevelFolder],
        primary: Option<&LevelFolder>,
        settings: &CombineSettings,
    ) -> Result<Self> {
        let source = primary.or(folders.first()).ok_or(Error::EmptyCombine)?;

        let levels: Vec<Level> = folders.iter().map(|folder| folder.level.clone()).collect();
        let level = source
            .version
            .combine_levels(&levels, Some(&source.level), settings)?;

        let mut themes: Vec<Theme> = Vec::new();
        for folder in folders {
            for theme in &folder.themes {
                if !themes.contains(theme) {
                    themes.push(theme.clone());
                }
            }
        }

        Ok(Self {
            version: source.version,
            level,
            metadata: source.metadata.clone(),
            audio: source.audio.clone(),
            themes,
        })
    }
}

/// Read `level.lsb` from `folder`, reporting a missing file by name.
pub(crate) fn read_level(folder: &Path) -> Result<Level> {
    read_folder_file(folder, files::LEVEL)
}

/// Read one raw file from a level folder, mapping "not found" to
/// [`Error::LevelFileNotFound`].
pub(crate) fn read_folder_file<T: RawFileCodec>(folder: &Path, filename: &str) -> Result<T> {
    T::read_raw_file(folder.join(filename)).map_err(|e| match e {
        Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound => Error::LevelFileNotFound {
            folder: folder.to_path_buf(),
            file: filename.to_string(),
        },
        other => other,
    })
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct VersionDescriptor {
    version_number: String,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LevelFolderDocument {
    version: VersionDescriptor,
    level: Level,
    metadata: Metadata,
    // Required even though nullable.
    #[serde(deserialize_with = "Option::deserialize")]
    audio: Option<Audio>,
    themes: Vec<Theme>,
}

impl JsonCodec for LevelFolder {
    fn to_json(&self) -> Result<JsonValue> {
        codec::encode(&LevelFolderDocument {
            version: VersionDescriptor {
                version_number: self.version.version_number().to_string(),
            },
            level: self.level.clone(),
            metadata: self.metadata.clone(),
            audio: self.audio.clone(),
            themes: self.themes.clone(),
        })
    }

    fn from_json(value: JsonValue) -> Result<Self> {
        let document: LevelFolderDocument = codec::decode(value, "level folder")?;
        let version = registry().find_by_number(&document.version.version_number)?;

        Ok(Self {
            version,
            level: document.level,
            metadata: document.metadata,
            audio: document.audio,
            themes: document.themes,
        })
    }
}

impl FolderCodec for LevelFolder {
    fn write_folder(&self, folder: &Path, themes_folder: Option<&Path>) -> Result<()> {
        self.version.export_folder(self, folder, themes_folder)
    }
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),

    #[error("Missing level file in {}: {file}", folder.display())]
    LevelFileNotFound { folder: PathBuf, file: String },

    #[error("Level with version {detected} is incompatible with version {expected}")]
    IncompatibleVersion { detected: String, expected: String },

    #[error("Version {0} not found or not supported")]
    VersionNotFound(String),

    #[error("Theme with ID {0} not found in themes folder")]
    ThemeNotFound(i64),

    #[error("Missing themes not found in themes folder. Missing theme IDs: {}", join_ids(.0))]
    MissingThemes(Vec<i64>),

    #[error("No valid themes in themes folder: {}", .0.display())]
    NoThemesInFolder(PathBuf),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid level: {0}")]
    InvalidLevel(String),

    #[error("Cannot combine an empty list of levels")]
    EmptyCombine,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

//! File names and thresholds shared by the import and export paths.

/// Names of the files that make up a level folder.
pub mod files {
    /// Level document.
    pub const LEVEL: &str = "level.lsb";

    /// Level metadata document.
    pub const METADATA: &str = "metadata.lsb";

    /// Level audio (raw Ogg bytes).
    pub const AUDIO: &str = "level.ogg";

    /// Extension of theme files in a themes folder.
    pub const THEME_EXTENSION: &str = "lst";

    /// Extension of the single-document folder format.
    pub const FOLDER_DOCUMENT_EXTENSION: &str = "pcm";
}

/// Theme numbering.
pub mod themes {
    /// Highest built-in theme index. Custom themes start above this.
    pub const BUILTIN_MAX_ID: i64 = 8;

    /// Name of the event timeline that references themes.
    pub const TIMELINE: &str = "theme";
}

//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::Result;
use palevel::{CombineSettings, LevelFolder, registry};

use crate::cli::SettingsArgs;

/// Import a level folder as `version`, or as whichever version it declares.
pub fn import_folder(
    folder: &Path,
    themes: &Path,
    version: Option<&str>,
    load_audio: bool,
) -> Result<LevelFolder> {
    let imported = match version {
        Some(number) => registry()
            .find_by_number(number)?
            .import_folder(folder, themes, load_audio)?,
        None => LevelFolder::import_detected(folder, themes, load_audio)?,
    };
    Ok(imported)
}

/// Build combine settings from an optional settings file plus flag overrides.
pub fn combine_settings(args: &SettingsArgs) -> Result<CombineSettings> {
    let mut settings = match &args.settings {
        Some(path) => CombineSettings::load(path)?,
        None => CombineSettings::default(),
    };

    if args.no_beatmap_objects {
        settings.include_beatmap_objects = false;
    }
    if args.no_prefabs {
        settings.include_prefabs = false;
    }
    if args.no_markers {
        settings.include_markers = false;
    }
    if args.no_checkpoints {
        settings.include_checkpoints = false;
    }
    if args.no_event_keyframes {
        settings.include_event_keyframes = false;
    }
    if args.no_bg_objects {
        settings.include_bg_objects = false;
    }
    if args.keep_first_checkpoint {
        settings.delete_first_checkpoint = false;
    }
    if args.keep_first_event_keyframes {
        settings.delete_first_event_keyframes = false;
    }

    Ok(settings)
}

//! Combine several level folders into one.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::{DateTime, Local};
use palevel::{FolderCodec, LevelFolder};
use tracing::info;

use crate::cli::SettingsArgs;
use crate::cli_utils;

pub fn run(
    folders: &[PathBuf],
    themes: &Path,
    primary: Option<&Path>,
    load_audio: bool,
    output: Option<&Path>,
    settings: &SettingsArgs,
) -> Result<()> {
    let settings = cli_utils::combine_settings(settings)?;

    let mut imported = Vec::with_capacity(folders.len());
    for folder in folders {
        let level_folder = cli_utils::import_folder(folder, themes, None, load_audio)?;
        eprintln!(
            "Imported {} ({})",
            folder.display(),
            level_folder.version.description()
        );
        imported.push(level_folder);
    }

    let primary = primary
        .map(|folder| cli_utils::import_folder(folder, themes, None, load_audio))
        .transpose()?;

    let Some(first) = primary.as_ref().or(imported.first()) else {
        bail!("No level folders to combine");
    };
    let expected = first.version.version_number();
    for level_folder in imported.iter().chain(primary.iter()) {
        let number = level_folder.version.version_number();
        if number != expected {
            bail!("Cannot combine v{} with v{}", number, expected);
        }
    }

    info!("Combining with settings: {:?}", settings);
    let combined = LevelFolder::combine_folders(&imported, primary.as_ref(), &settings)?;

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output(Local::now()),
    };
    combined.write_folder(&output, None)?;

    eprintln!(
        "Combined {} levels into {}",
        imported.len(),
        output.display()
    );

    Ok(())
}

/// `combined_YYYY_MM_DD_HH_MM_SS` in the working directory.
fn default_output(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("combined_{}", now.format("%Y_%m_%d_%H_%M_%S")))
}

//! Import a level folder into a single .pcm document.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use palevel::config::files;
use palevel::{JsonCodec, disk};

use crate::cli_utils;

pub fn run(
    folder: &Path,
    themes: &Path,
    version: Option<&str>,
    load_audio: bool,
    output: Option<&Path>,
) -> Result<()> {
    let imported = cli_utils::import_folder(folder, themes, version, load_audio)?;

    eprintln!(
        "Imported {} ({}, {} custom themes)",
        folder.display(),
        imported.version.description(),
        imported.themes.len()
    );

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output(folder)?,
    };

    let (parent, name) = output_location(&output)?;
    let written = disk::override_file(parent, name, imported.to_json_string()?.as_bytes())?;
    eprintln!("Written to: {}", written.display());

    Ok(())
}

/// Split an output path into its folder and file name. The file name is
/// used as given, extension included.
fn output_location(output: &Path) -> Result<(&Path, &str)> {
    let name = output
        .file_name()
        .and_then(|name| name.to_str())
        .context("Output path has no file name")?;
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((parent, name))
}

/// `<folder>.pcm` next to the level folder.
fn default_output(folder: &Path) -> Result<PathBuf> {
    let name = folder
        .file_name()
        .and_then(|name| name.to_str())
        .context("Level folder has no name")?;
    Ok(folder.with_file_name(format!("{}.{}", name, files::FOLDER_DOCUMENT_EXTENSION)))
}

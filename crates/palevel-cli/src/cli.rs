//! CLI argument definitions for palevel.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palevel")]
#[command(about = "Level folder import and combine tool", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List supported format versions
    Versions,
    /// Detect the format version of a level folder
    Detect {
        /// Level folder
        folder: PathBuf,
    },
    /// Import a level folder into a single .pcm document
    Import {
        /// Level folder
        folder: PathBuf,
        /// Folder containing custom .lst themes
        #[arg(long, env = "PALEVEL_THEMES")]
        themes: PathBuf,
        /// Version number to import as (auto-detected if omitted)
        #[arg(long)]
        version: Option<String>,
        /// Skip level.ogg
        #[arg(long)]
        no_audio: bool,
        /// Output file path, written as given (defaults to <folder name>.pcm next to the folder)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a .pcm document back out as a level folder
    Export {
        /// Input .pcm document
        file: PathBuf,
        /// Destination level folder
        folder: PathBuf,
        /// Also write the bundled themes into this folder
        #[arg(long)]
        themes: Option<PathBuf>,
    },
    /// Combine several level folders into one
    Combine {
        /// Level folders to combine, in order
        #[arg(required = true)]
        folders: Vec<PathBuf>,
        /// Folder containing custom .lst themes
        #[arg(long, env = "PALEVEL_THEMES")]
        themes: PathBuf,
        /// Level folder whose own values take precedence
        #[arg(long)]
        primary: Option<PathBuf>,
        /// Skip level.ogg
        #[arg(long)]
        no_audio: bool,
        /// Output folder (defaults to combined_<timestamp>)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// Print a theme from a themes folder
    Theme {
        /// Theme ID
        id: i64,
        /// Folder containing custom .lst themes
        #[arg(long, env = "PALEVEL_THEMES")]
        themes: PathBuf,
    },
}

/// Combine settings overrides.
#[derive(ClapArgs, Default)]
pub struct SettingsArgs {
    /// JSON file with combine settings (absent fields default to true)
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,
    #[arg(long)]
    pub no_beatmap_objects: bool,
    #[arg(long)]
    pub no_prefabs: bool,
    #[arg(long)]
    pub no_markers: bool,
    #[arg(long)]
    pub no_checkpoints: bool,
    #[arg(long)]
    pub no_event_keyframes: bool,
    #[arg(long)]
    pub no_bg_objects: bool,
    /// Keep the first checkpoint of every input
    #[arg(long)]
    pub keep_first_checkpoint: bool,
    /// Keep the first keyframe of every timeline of every input
    #[arg(long)]
    pub keep_first_event_keyframes: bool,
}

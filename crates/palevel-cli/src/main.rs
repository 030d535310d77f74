mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the default level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("palevel_cli=warn,palevel=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Versions => commands::versions::run(),
        Command::Detect { folder } => commands::detect::run(&folder),
        Command::Import {
            folder,
            themes,
            version,
            no_audio,
            output,
        } => commands::import::run(
            &folder,
            &themes,
            version.as_deref(),
            !no_audio,
            output.as_deref(),
        ),
        Command::Export {
            file,
            folder,
            themes,
        } => commands::export::run(&file, &folder, themes.as_deref()),
        Command::Combine {
            folders,
            themes,
            primary,
            no_audio,
            output,
            settings,
        } => commands::combine::run(
            &folders,
            &themes,
            primary.as_deref(),
            !no_audio,
            output.as_deref(),
            &settings,
        ),
        Command::Theme { id, themes } => commands::theme::run(id, &themes),
    }
}

//! # palevel
//!
//! Import, theme resolution and combination of versioned level folders.
//!
//! This crate provides:
//! - The level data model (`Level`, `Metadata`, `Audio`, `Theme`, `LevelFolder`)
//! - Version detection and a registry of supported format versions
//! - Resolution of the custom themes a level references
//! - Merging of several levels into one under `CombineSettings`

pub mod codec;
pub mod combine;
pub mod config;
pub mod disk;
pub mod error;
pub mod level;
pub mod theme;
pub mod version;

#[cfg(test)]
mod test_support;

// Re-export from codec module
pub use codec::{FolderCodec, JsonCodec, RawFileCodec};

// Re-export from combine module
pub use combine::{CombineSettings, LevelCombiner, LevelLayout};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from level module
pub use level::{Audio, Document, Level, LevelFolder, Metadata, Theme};

// Re-export from theme module
pub use theme::ThemeResolver;

// Re-export from version module
pub use version::{Branch, Registry, V20_4_4, VersionStrategy, registry};

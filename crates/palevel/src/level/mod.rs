//! Level data model.
//!
//! - `Level`, `Metadata`, `Theme` - JSON object documents
//! - `Audio` - raw audio bytes
//! - `LevelFolder` - the assembled, version-tagged bundle

mod data;
mod folder;

pub use data::*;
pub use folder::LevelFolder;
pub(crate) use folder::{read_folder_file, read_level};

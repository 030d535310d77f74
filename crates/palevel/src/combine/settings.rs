use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which sections take part in a combine, and whether the first element of
/// the order-sensitive sections is dropped from each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombineSettings {
    pub include_beatmap_objects: bool,
    /// Imported prefab definitions and their placements.
    pub include_prefabs: bool,
    pub include_markers: bool,
    pub include_checkpoints: bool,
    pub include_event_keyframes: bool,
    pub include_bg_objects: bool,

    pub delete_first_checkpoint: bool,
    pub delete_first_event_keyframes: bool,
}

impl Default for CombineSettings {
    fn default() -> Self {
        Self {
            include_beatmap_objects: true,
            include_prefabs: true,
            include_markers: true,
            include_checkpoints: true,
            include_event_keyframes: true,
            include_bg_objects: true,
            delete_first_checkpoint: true,
            delete_first_event_keyframes: true,
        }
    }
}

impl CombineSettings {
    /// Load settings from a JSON file. Absent fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Decode(format!("combine settings: {}", e)))
    }
}

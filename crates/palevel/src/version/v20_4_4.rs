use std::path::Path;

use serde_json::{Value as JsonValue, json};

use crate::combine::LevelLayout;
use crate::error::Result;
use crate::level::{Level, LevelFolder};
use crate::version::{Branch, VersionStrategy, import};

/// Location of the version tag inside a 20.4.4 level document.
const VERSION_PATH: &[&str] = &["level_data", "level_version"];

/// The 20.4.4 level format (legacy branch).
#[derive(Debug, Clone, Copy, Default)]
pub struct V20_4_4;

impl VersionStrategy for V20_4_4 {
    fn version_number(&self) -> &'static str {
        "20.4.4"
    }

    fn branch(&self) -> Branch {
        Branch::Legacy
    }

    fn get_version_number(&self, level: &Level) -> Option<String> {
        level
            .lookup(VERSION_PATH)
            .and_then(JsonValue::as_str)
            .map(str::to_string)
    }

    fn layout(&self) -> LevelLayout {
        LevelLayout {
            default_checkpoint: json!({
                "active": "False",
                "name": "Base Checkpoint",
                "t": "0",
                "pos": {"x": "0", "y": "0"}
            }),
            default_timelines: vec![
                ("pos", json!([{"t": "0", "x": "0", "y": "0"}])),
                ("zoom", json!([{"t": "0", "x": "20"}])),
                ("rot", json!([{"t": "0", "x": "0"}])),
                ("shake", json!([{"t": "0", "x": "0", "y": "0"}])),
                ("theme", json!([{"t": "0", "x": "0"}])),
                ("chroma", json!([{"t": "0", "x": "0"}])),
                ("bloom", json!([{"t": "0", "x": "0"}])),
                (
                    "vignette",
                    json!([{
                        "t": "0", "x": "0", "y": "0", "z": "0",
                        "x2": "0", "y2": "0", "z2": "0"
                    }]),
                ),
                ("lens", json!([{"t": "0", "x": "0"}])),
                ("grain", json!([{"t": "0", "x": "0", "y": "0", "z": "0"}])),
            ],
        }
    }

    fn import_folder(
        &'static self,
        folder: &Path,
        themes_folder: &Path,
        load_audio: bool,
    ) -> Result<LevelFolder> {
        import::import_lsb_folder(self, folder, themes_folder, load_audio)
    }
}

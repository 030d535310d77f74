use serde_json::Value as JsonValue;

/// Keys of the mergeable sections in a level document.
pub mod sections {
    pub const BEATMAP_OBJECTS: &[&str] = &["beatmap_objects"];
    pub const PREFABS: &[&str] = &["prefabs"];
    pub const PREFAB_OBJECTS: &[&str] = &["prefab_objects"];
    pub const MARKERS: &[&str] = &["ed", "markers"];
    pub const CHECKPOINTS: &[&str] = &["checkpoints"];
    pub const BG_OBJECTS: &[&str] = &["bg_objects"];
    pub const EVENTS: &str = "events";
}

/// Version-defined shape of a level: the event timelines it carries and the
/// values sections collapse to when they are left out of a combine.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub default_checkpoint: JsonValue,
    /// Timeline name and its default keyframe list, in document order.
    pub default_timelines: Vec<(&'static str, JsonValue)>,
}

impl LevelLayout {
    pub fn timeline_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.default_timelines.iter().map(|(name, _)| *name)
    }

    pub fn default_timeline(&self, name: &str) -> Option<&JsonValue> {
        self.default_timelines
            .iter()
            .find(|(timeline, _)| *timeline == name)
            .map(|(_, keyframes)| keyframes)
    }
}

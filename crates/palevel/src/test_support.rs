//! Level documents shared by the unit tests.

use serde_json::{Value as JsonValue, json};

use crate::level::{Document, Level, Theme};

pub const TIMELINES: [&str; 10] = [
    "pos", "zoom", "rot", "shake", "theme", "chroma", "bloom", "vignette", "lens", "grain",
];

pub fn object(value: JsonValue) -> Document {
    match value {
        JsonValue::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

/// A 20.4.4 level whose every element is tagged with `name`.
pub fn level(name: &str, checkpoints: &[&str]) -> Level {
    let mut events = Document::new();
    for timeline in TIMELINES {
        events.insert(
            timeline.to_string(),
            json!([
                {"t": "0", "x": format!("{name}-{timeline}-0")},
                {"t": "1", "x": format!("{name}-{timeline}-1")}
            ]),
        );
    }

    let checkpoints: Vec<JsonValue> = checkpoints.iter().map(|c| json!({"name": c})).collect();

    Level::new(object(json!({
        "level_data": {"level_version": "20.4.4", "name": name},
        "beatmap_objects": [{"id": format!("{name}-obj")}],
        "prefabs": [{"id": format!("{name}-prefab")}],
        "prefab_objects": [{"pid": format!("{name}-prefab")}],
        "ed": {"markers": [{"name": format!("{name}-marker")}]},
        "checkpoints": checkpoints,
        "events": events,
        "bg_objects": [{"name": format!("{name}-bg")}]
    })))
}

/// Replace the theme timeline of `level` with keyframes using `ids`.
pub fn with_theme_ids(mut level: Level, ids: &[JsonValue]) -> Level {
    let keyframes: Vec<JsonValue> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| json!({"t": i.to_string(), "x": id, "ct": "Linear"}))
        .collect();
    level.data["events"]["theme"] = JsonValue::Array(keyframes);
    level
}

pub fn theme(id: i64, name: &str) -> Theme {
    Theme::new(object(json!({"id": id.to_string(), "name": name})))
}

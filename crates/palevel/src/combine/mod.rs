//! Merging several levels of one version into a single level.
//!
//! List sections (beatmap objects, prefabs, markers, background objects) are
//! concatenated in input order. Checkpoints and event timelines are
//! order-sensitive: each input may lose its first element, and the source
//! level's own first element is put back at the front.

mod layout;
mod settings;

pub use layout::{LevelLayout, sections};
pub use settings::CombineSettings;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{Error, Result};
use crate::level::{Document, Level};

/// What a disabled list section becomes in a merge pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disabled {
    /// Keep the source level's value.
    CarrySource,
    /// Empty it; the primary pass supplies the value.
    Collapse,
}

#[derive(Debug, Clone)]
pub struct LevelCombiner {
    layout: LevelLayout,
}

impl LevelCombiner {
    pub fn new(layout: LevelLayout) -> Self {
        Self { layout }
    }

    /// Combine `levels` into one level.
    ///
    /// Without a primary the first level is the source of every field that is
    /// not merged. With a primary, the inputs are merged against it and the
    /// result is merged once more as `[primary, result]` with default
    /// settings, so the primary's own values win.
    pub fn combine(
        &self,
        levels: &[Level],
        primary: Option<&Level>,
        settings: &CombineSettings,
    ) -> Result<Level> {
        let first = levels.first().ok_or(Error::EmptyCombine)?;

        let Some(primary) = primary else {
            debug!("Combining {} levels", levels.len());
            return self.merge(levels, first, settings, Disabled::CarrySource);
        };

        debug!("Combining {} levels against a primary level", levels.len());
        let combined = self.merge(levels, primary, settings, Disabled::Collapse)?;

        let primary_pass = [primary.clone(), combined];
        self.merge(
            &primary_pass,
            primary,
            &CombineSettings::default(),
            Disabled::CarrySource,
        )
    }

    fn merge(
        &self,
        levels: &[Level],
        source: &Level,
        settings: &CombineSettings,
        disabled: Disabled,
    ) -> Result<Level> {
        let mut data = source.data.clone();

        let lists = [
            (settings.include_beatmap_objects, sections::BEATMAP_OBJECTS),
            (settings.include_prefabs, sections::PREFABS),
            (settings.include_prefabs, sections::PREFAB_OBJECTS),
            (settings.include_markers, sections::MARKERS),
            (settings.include_bg_objects, sections::BG_OBJECTS),
        ];
        for (enabled, path) in lists {
            if enabled {
                let merged = concat(levels, path, false)?;
                set_path(&mut data, path, JsonValue::Array(merged))?;
            } else if disabled == Disabled::Collapse {
                set_path(&mut data, path, JsonValue::Array(Vec::new()))?;
            }
        }

        let checkpoints = if settings.include_checkpoints {
            merge_ordered(
                levels,
                source,
                sections::CHECKPOINTS,
                settings.delete_first_checkpoint,
            )?
        } else {
            vec![self.layout.default_checkpoint.clone()]
        };
        set_path(&mut data, sections::CHECKPOINTS, JsonValue::Array(checkpoints))?;

        for (name, default) in &self.layout.default_timelines {
            let path = [sections::EVENTS, *name];
            let keyframes = if settings.include_event_keyframes {
                JsonValue::Array(merge_ordered(
                    levels,
                    source,
                    &path,
                    settings.delete_first_event_keyframes,
                )?)
            } else {
                default.clone()
            };
            set_path(&mut data, &path, keyframes)?;
        }

        Ok(Level::new(data))
    }
}

/// Concatenate the list at `path` of every level, optionally dropping each
/// list's first element.
fn concat(levels: &[Level], path: &[&str], delete_first: bool) -> Result<Vec<JsonValue>> {
    let skip = usize::from(delete_first);
    let mut merged = Vec::new();
    for level in levels {
        merged.extend(section(level, path)?.iter().skip(skip).cloned());
    }
    Ok(merged)
}

/// [`concat`], then put the source's first element back at the front if
/// first elements were dropped.
fn merge_ordered(
    levels: &[Level],
    source: &Level,
    path: &[&str],
    delete_first: bool,
) -> Result<Vec<JsonValue>> {
    let mut merged = concat(levels, path, delete_first)?;
    if delete_first && let Some(first) = section(source, path)?.first() {
        merged.insert(0, first.clone());
    }
    Ok(merged)
}

fn section<'a>(level: &'a Level, path: &[&str]) -> Result<&'a Vec<JsonValue>> {
    level
        .lookup(path)
        .and_then(JsonValue::as_array)
        .ok_or_else(|| Error::InvalidLevel(format!("missing section `{}`", path.join("."))))
}

fn set_path(data: &mut Document, path: &[&str], value: JsonValue) -> Result<()> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };

    let mut current = data;
    for key in parents {
        current = current
            .get_mut(*key)
            .and_then(JsonValue::as_object_mut)
            .ok_or_else(|| Error::InvalidLevel(format!("missing section `{}`", key)))?;
    }
    current.insert((*last).to_string(), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TIMELINES, level};
    use crate::version::{V20_4_4, VersionStrategy};
    use serde_json::json;

    fn combiner() -> LevelCombiner {
        LevelCombiner::new(V20_4_4.layout())
    }

    fn names(level: &Level, path: &[&str]) -> Vec<String> {
        section(level, path)
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap().to_string())
            .collect()
    }

    fn xs(level: &Level, timeline: &str) -> Vec<String> {
        section(level, &["events", timeline])
            .unwrap()
            .iter()
            .map(|kf| kf["x"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_checkpoint_reinsertion() {
        let a = level("a", &["A", "B"]);
        let b = level("b", &["C", "D"]);

        let combined = combiner()
            .combine(&[a, b], None, &CombineSettings::default())
            .unwrap();

        assert_eq!(names(&combined, sections::CHECKPOINTS), ["A", "B", "D"]);
    }

    #[test]
    fn test_checkpoints_kept_when_not_deleting_first() {
        let settings = CombineSettings {
            delete_first_checkpoint: false,
            ..Default::default()
        };
        let combined = combiner()
            .combine(&[level("a", &["A", "B"]), level("b", &["C", "D"])], None, &settings)
            .unwrap();

        assert_eq!(names(&combined, sections::CHECKPOINTS), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_source_without_checkpoints_gets_nothing_reinserted() {
        let combined = combiner()
            .combine(
                &[level("a", &[]), level("b", &["C", "D"])],
                None,
                &CombineSettings::default(),
            )
            .unwrap();

        assert_eq!(names(&combined, sections::CHECKPOINTS), ["D"]);
    }

    #[test]
    fn test_event_timelines_merge_per_name() {
        let combined = combiner()
            .combine(
                &[level("a", &["A"]), level("b", &["B"])],
                None,
                &CombineSettings::default(),
            )
            .unwrap();

        for timeline in TIMELINES {
            assert_eq!(
                xs(&combined, timeline),
                [
                    format!("a-{timeline}-0"),
                    format!("a-{timeline}-1"),
                    format!("b-{timeline}-1"),
                ]
            );
        }
    }

    #[test]
    fn test_disabled_events_collapse_to_defaults() {
        let settings = CombineSettings {
            include_event_keyframes: false,
            ..Default::default()
        };
        let combined = combiner()
            .combine(&[level("a", &["A"]), level("b", &["B"])], None, &settings)
            .unwrap();

        let layout = V20_4_4.layout();
        for timeline in TIMELINES {
            assert_eq!(
                combined.lookup(&["events", timeline]),
                layout.default_timeline(timeline)
            );
        }
    }

    #[test]
    fn test_disabled_checkpoints_collapse_to_default() {
        let settings = CombineSettings {
            include_checkpoints: false,
            ..Default::default()
        };
        let combined = combiner()
            .combine(&[level("a", &["A", "B"])], None, &settings)
            .unwrap();

        assert_eq!(
            combined.lookup(sections::CHECKPOINTS),
            Some(&json!([V20_4_4.layout().default_checkpoint]))
        );
    }

    #[test]
    fn test_list_sections_concatenate_in_input_order() {
        let combined = combiner()
            .combine(
                &[level("a", &["A"]), level("b", &["B"]), level("c", &["C"])],
                None,
                &CombineSettings::default(),
            )
            .unwrap();

        assert_eq!(names(&combined, sections::MARKERS), ["a-marker", "b-marker", "c-marker"]);
        assert_eq!(names(&combined, sections::BG_OBJECTS), ["a-bg", "b-bg", "c-bg"]);
        assert_eq!(
            combined.lookup(sections::PREFAB_OBJECTS),
            Some(&json!([{"pid": "a-prefab"}, {"pid": "b-prefab"}, {"pid": "c-prefab"}]))
        );
        assert_eq!(
            combined.lookup(sections::BEATMAP_OBJECTS),
            Some(&json!([{"id": "a-obj"}, {"id": "b-obj"}, {"id": "c-obj"}]))
        );
    }

    #[test]
    fn test_disabled_list_section_carries_source() {
        let settings = CombineSettings {
            include_markers: false,
            include_prefabs: false,
            ..Default::default()
        };
        let combined = combiner()
            .combine(&[level("a", &["A"]), level("b", &["B"])], None, &settings)
            .unwrap();

        assert_eq!(names(&combined, sections::MARKERS), ["a-marker"]);
        assert_eq!(combined.lookup(sections::PREFABS), Some(&json!([{"id": "a-prefab"}])));
        assert_eq!(names(&combined, sections::BG_OBJECTS), ["a-bg", "b-bg"]);
    }

    #[test]
    fn test_disabled_objects_carry_source() {
        let settings = CombineSettings {
            include_beatmap_objects: false,
            include_bg_objects: false,
            ..Default::default()
        };
        let combined = combiner()
            .combine(&[level("a", &["A"]), level("b", &["B"])], None, &settings)
            .unwrap();

        assert_eq!(
            combined.lookup(sections::BEATMAP_OBJECTS),
            Some(&json!([{"id": "a-obj"}]))
        );
        assert_eq!(names(&combined, sections::BG_OBJECTS), ["a-bg"]);
        assert_eq!(names(&combined, sections::MARKERS), ["a-marker", "b-marker"]);
    }

    #[test]
    fn test_event_keyframes_kept_when_not_deleting_first() {
        let settings = CombineSettings {
            delete_first_event_keyframes: false,
            ..Default::default()
        };
        let combined = combiner()
            .combine(
                &[level("a", &["A", "B"]), level("b", &["C", "D"])],
                None,
                &settings,
            )
            .unwrap();

        for timeline in TIMELINES {
            assert_eq!(
                xs(&combined, timeline),
                [
                    format!("a-{timeline}-0"),
                    format!("a-{timeline}-1"),
                    format!("b-{timeline}-0"),
                    format!("b-{timeline}-1"),
                ]
            );
        }
        // Checkpoints still follow their own flag.
        assert_eq!(names(&combined, sections::CHECKPOINTS), ["A", "B", "D"]);
    }

    #[test]
    fn test_single_level_is_unchanged() {
        let a = level("a", &["A", "B"]);
        let combined = combiner()
            .combine(std::slice::from_ref(&a), None, &CombineSettings::default())
            .unwrap();
        assert_eq!(combined, a);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = combiner()
            .combine(&[], None, &CombineSettings::default())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyCombine));
    }

    #[test]
    fn test_inputs_are_not_modified() {
        let a = level("a", &["A", "B"]);
        let b = level("b", &["C", "D"]);
        let inputs = [a.clone(), b.clone()];

        combiner()
            .combine(&inputs, Some(&b), &CombineSettings::default())
            .unwrap();

        assert_eq!(inputs, [a, b]);
    }

    #[test]
    fn test_primary_keeps_its_markers() {
        let l1 = level("l1", &["A"]);
        let l2 = level("l2", &["B"]);
        let settings = CombineSettings {
            include_markers: false,
            ..Default::default()
        };

        let combined = combiner()
            .combine(&[l1.clone(), l2], Some(&l1), &settings)
            .unwrap();

        assert_eq!(combined.lookup(sections::MARKERS), l1.lookup(sections::MARKERS));
    }

    #[test]
    fn test_primary_keeps_its_beatmap_objects() {
        let primary = level("p", &["P0"]);
        let settings = CombineSettings {
            include_beatmap_objects: false,
            ..Default::default()
        };

        let combined = combiner()
            .combine(&[level("o1", &["A"]), level("o2", &["B"])], Some(&primary), &settings)
            .unwrap();

        assert_eq!(
            combined.lookup(sections::BEATMAP_OBJECTS),
            primary.lookup(sections::BEATMAP_OBJECTS)
        );
        assert_eq!(names(&combined, sections::BG_OBJECTS), ["p-bg", "o1-bg", "o2-bg"]);
    }

    #[test]
    fn test_primary_keeps_its_checkpoints_and_events_when_disabled() {
        let primary = level("p", &["P0", "P1"]);
        let other = level("o", &["O0", "O1"]);
        let settings = CombineSettings {
            include_checkpoints: false,
            include_event_keyframes: false,
            ..Default::default()
        };

        let combined = combiner()
            .combine(&[other], Some(&primary), &settings)
            .unwrap();

        assert_eq!(names(&combined, sections::CHECKPOINTS), ["P0", "P1"]);
        assert_eq!(xs(&combined, "zoom"), ["p-zoom-0", "p-zoom-1"]);
    }

    #[test]
    fn test_primary_supplies_top_level_fields() {
        let primary = level("p", &["P0"]);
        let other = level("o", &["O0"]);

        let combined = combiner()
            .combine(&[other], Some(&primary), &CombineSettings::default())
            .unwrap();

        assert_eq!(
            combined.lookup(&["level_data", "name"]),
            Some(&json!("p"))
        );
        assert_eq!(names(&combined, sections::MARKERS), ["p-marker", "o-marker"]);
        assert_eq!(names(&combined, sections::CHECKPOINTS), ["P0"]);
    }

    #[test]
    fn test_unknown_event_keys_are_kept() {
        let mut a = level("a", &["A"]);
        a.data["events"]["custom"] = json!([{"t": "0"}]);

        let combined = combiner()
            .combine(&[a, level("b", &["B"])], None, &CombineSettings::default())
            .unwrap();

        assert_eq!(combined.lookup(&["events", "custom"]), Some(&json!([{"t": "0"}])));
    }

    #[test]
    fn test_missing_section_is_reported() {
        let mut broken = level("b", &["B"]);
        broken.data.remove("bg_objects");

        let err = combiner()
            .combine(&[level("a", &["A"]), broken], None, &CombineSettings::default())
            .unwrap_err();

        match err {
            Error::InvalidLevel(message) => assert!(message.contains("bg_objects")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

//! Theme resolution.
//!
//! A level references themes through the `x` field of its theme timeline
//! keyframes. Indices up to [`BUILTIN_MAX_ID`](crate::config::themes::BUILTIN_MAX_ID)
//! are built into the game; anything above must be found in a themes folder.

use std::path::Path;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::codec::RawFileCodec;
use crate::combine::sections;
use crate::config::{files, themes};
use crate::disk;
use crate::error::{Error, Result};
use crate::level::{Level, Theme, coerce_int};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeResolver {
    /// Event timeline holding theme keyframes.
    pub timeline: &'static str,
    pub builtin_max_id: i64,
    pub extension: &'static str,
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self {
            timeline: themes::TIMELINE,
            builtin_max_id: themes::BUILTIN_MAX_ID,
            extension: files::THEME_EXTENSION,
        }
    }
}

impl ThemeResolver {
    /// Custom theme IDs referenced by the level, in keyframe order.
    ///
    /// Built-in IDs are dropped; duplicates are kept.
    pub fn extract_theme_ids(&self, level: &Level) -> Result<Vec<i64>> {
        let keyframes = level
            .lookup(&[sections::EVENTS, self.timeline])
            .and_then(JsonValue::as_array)
            .ok_or_else(|| {
                Error::InvalidLevel(format!("missing section `events.{}`", self.timeline))
            })?;

        let mut ids = Vec::new();
        for (index, keyframe) in keyframes.iter().enumerate() {
            let id = keyframe.get("x").and_then(coerce_int).ok_or_else(|| {
                Error::InvalidLevel(format!(
                    "theme keyframe {} has no integer `x` value",
                    index
                ))
            })?;
            if id > self.builtin_max_id {
                ids.push(id);
            }
        }

        Ok(ids)
    }

    /// Every valid theme file in `folder`, in path order.
    ///
    /// Files that do not decode to an object with an integer `id` are skipped.
    pub fn load_all_themes(&self, folder: &Path) -> Result<Vec<Theme>> {
        if !folder.is_dir() {
            return Err(Error::FolderNotFound(folder.to_path_buf()));
        }

        let mut found = Vec::new();
        for path in disk::files_with_extension(folder, self.extension)? {
            match Theme::read_raw_file(&path) {
                Ok(theme) if theme.id().is_some() => found.push(theme),
                Ok(_) => debug!("Skipping theme without an id: {}", path.display()),
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                Err(e) => debug!("Skipping unreadable theme {}: {}", path.display(), e),
            }
        }

        if found.is_empty() {
            return Err(Error::NoThemesInFolder(folder.to_path_buf()));
        }

        Ok(found)
    }

    /// The themes `level` references, one per referenced ID.
    ///
    /// Fails with [`Error::MissingThemes`] listing every ID that no theme in
    /// `folder` provides.
    pub fn resolve(&self, level: &Level, folder: &Path) -> Result<Vec<Theme>> {
        let referenced = self.extract_theme_ids(level)?;
        let candidates = self.load_all_themes(folder)?;

        let mut unmatched: Vec<i64> = Vec::with_capacity(referenced.len());
        for id in referenced {
            if !unmatched.contains(&id) {
                unmatched.push(id);
            }
        }

        let mut resolved = Vec::new();
        for theme in candidates {
            let Some(id) = theme.id() else { continue };
            if let Some(pos) = unmatched.iter().position(|&wanted| wanted == id) {
                unmatched.remove(pos);
                resolved.push(theme);
            }
        }

        if !unmatched.is_empty() {
            return Err(Error::MissingThemes(unmatched));
        }

        debug!("Resolved {} custom themes", resolved.len());
        Ok(resolved)
    }

    pub fn find_by_id(&self, folder: &Path, id: i64) -> Result<Theme> {
        self.load_all_themes(folder)?
            .into_iter()
            .find(|theme| theme.id() == Some(id))
            .ok_or(Error::ThemeNotFound(id))
    }
}

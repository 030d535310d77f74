//! Format versions.
//!
//! Each supported version implements [`VersionStrategy`]; the process-wide
//! [`Registry`] lists them in declaration order.

mod import;
mod registry;
mod v20_4_4;

pub use registry::{Registry, registry};
pub use v20_4_4::V20_4_4;

use std::fmt;
use std::path::Path;

use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::info;

use crate::codec::RawFileCodec;
use crate::combine::{CombineSettings, LevelCombiner, LevelLayout};
use crate::config::files;
use crate::error::Result;
use crate::level::{Level, LevelFolder, Theme};
use crate::theme::ThemeResolver;

/// Lineage a version belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Branch {
    Legacy,
}

impl Branch {
    /// Capitalized name, e.g. "Legacy".
    pub fn title(&self) -> String {
        let name = self.as_ref();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

pub trait VersionStrategy: fmt::Debug + Send + Sync {
    fn version_number(&self) -> &'static str;

    fn branch(&self) -> Branch;

    /// Human-readable name, e.g. "v20.4.4 (Legacy branch)".
    fn description(&self) -> String {
        format!("v{} ({} branch)", self.version_number(), self.branch().title())
    }

    /// Version tag embedded in the level document, if any.
    fn get_version_number(&self, level: &Level) -> Option<String>;

    fn is_compatible(&self, level: &Level) -> bool {
        self.get_version_number(level).as_deref() == Some(self.version_number())
    }

    /// Section defaults and timeline names of this version's level documents.
    fn layout(&self) -> LevelLayout;

    fn theme_resolver(&self) -> ThemeResolver {
        ThemeResolver::default()
    }

    /// Import a level folder written in this version.
    fn import_folder(
        &'static self,
        folder: &Path,
        themes_folder: &Path,
        load_audio: bool,
    ) -> Result<LevelFolder>;

    /// Write `folder` as a level folder at `path`.
    ///
    /// Themes are written as `<id>.lst` into `themes_path` when one is given.
    fn export_folder(
        &self,
        folder: &LevelFolder,
        path: &Path,
        themes_path: Option<&Path>,
    ) -> Result<()> {
        folder.level.write_raw_file(path, files::LEVEL)?;
        folder.metadata.write_raw_file(path, files::METADATA)?;
        if let Some(audio) = &folder.audio {
            audio.write_raw_file(path, files::AUDIO)?;
        }

        if let Some(themes_path) = themes_path {
            for theme in &folder.themes {
                let Some(id) = theme.id() else { continue };
                theme.write_raw_file(
                    themes_path,
                    &format!("{}.{}", id, self.theme_resolver().extension),
                )?;
            }
        }

        info!("Exported level folder to {}", path.display());
        Ok(())
    }

    fn theme_ids(&self, level: &Level) -> Result<Vec<i64>> {
        self.theme_resolver().extract_theme_ids(level)
    }

    fn resolve_themes(&self, level: &Level, themes_folder: &Path) -> Result<Vec<Theme>> {
        self.theme_resolver().resolve(level, themes_folder)
    }

    fn theme_by_id(&self, themes_folder: &Path, id: i64) -> Result<Theme> {
        self.theme_resolver().find_by_id(themes_folder, id)
    }

    fn all_themes(&self, themes_folder: &Path) -> Result<Vec<Theme>> {
        self.theme_resolver().load_all_themes(themes_folder)
    }

    /// Combine levels of this version. See [`LevelCombiner::combine`].
    fn combine_levels(
        &self,
        levels: &[Level],
        primary: Option<&Level>,
        settings: &CombineSettings,
    ) -> Result<Level> {
        LevelCombiner::new(self.layout()).combine(levels, primary, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_branch_names() {
        assert_eq!(Branch::Legacy.to_string(), "legacy");
        assert_eq!(Branch::Legacy.title(), "Legacy");
        assert_eq!(Branch::from_str("legacy").unwrap(), Branch::Legacy);
    }

    #[test]
    fn test_description() {
        assert_eq!(V20_4_4.description(), "v20.4.4 (Legacy branch)");
    }
}

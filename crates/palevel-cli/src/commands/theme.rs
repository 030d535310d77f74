//! Print a theme from a themes folder.

use std::path::Path;

use anyhow::Result;
use palevel::ThemeResolver;

pub fn run(id: i64, themes: &Path) -> Result<()> {
    let theme = ThemeResolver::default().find_by_id(themes, id)?;
    println!("{}", serde_json::to_string_pretty(&theme.data)?);
    Ok(())
}

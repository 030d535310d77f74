//! Detect the format version of a level folder.

use std::path::Path;

use anyhow::{Context, Result};
use palevel::config::files;
use palevel::{Level, RawFileCodec, registry};

pub fn run(folder: &Path) -> Result<()> {
    let path = folder.join(files::LEVEL);
    let level = Level::read_raw_file(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match registry().detect(&level) {
        Some(version) => println!("{}", version.description()),
        None => {
            let declared = registry()
                .list_all()
                .iter()
                .find_map(|version| version.get_version_number(&level));
            match declared {
                Some(number) => println!("unknown (level declares v{})", number),
                None => println!("unknown"),
            }
        }
    }

    Ok(())
}

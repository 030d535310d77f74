//! List the supported format versions.

use anyhow::Result;
use palevel::registry;

pub fn run() -> Result<()> {
    for version in registry().list_all() {
        println!("{}", version.description());
    }
    Ok(())
}

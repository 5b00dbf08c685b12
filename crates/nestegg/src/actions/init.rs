//! `nestegg init` - write a starter scenario file.

use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::bail;
use tracing::info;

use crate::scenario::{self, Scenario};

pub fn run(path: &Path, scenario: &Scenario) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    scenario::save(path, scenario)?;
    info!("wrote scenario to {}", path.display());
    println!("Wrote {}", path.display());
    Ok(())
}

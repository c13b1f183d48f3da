//! Clean the compiled output

use anyhow::Result;
use std::fs;

use crate::Newsbox;

/// Delete the compiled news document if present
pub fn run(app: &Newsbox) -> Result<()> {
    if app.output_path.exists() {
        fs::remove_file(&app.output_path)?;
        tracing::info!("Deleted: {:?}", app.output_path);
    }

    Ok(())
}

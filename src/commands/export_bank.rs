use crate::bank::QuestionBank;
use crate::io;
use crate::scoring::BandSet;
use anyhow::{Context, Result};
use std::path::Path;

/// Write the embedded questions and the active bands for external editing
pub fn export_bank(path: &Path, bands: &BandSet) -> Result<()> {
    let bank = QuestionBank::default();
    io::write_bank_document(path, &bank, bands)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Saved: {}", path.display());
    Ok(())
}

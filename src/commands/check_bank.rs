use crate::bank::{self, LoadOptions, LoadedBank, QuestionBank};
use crate::io;
use anyhow::{Context, Result};
use colored::*;
use std::io::Write;
use std::path::Path;

/// Load a bank file and report what a questionnaire run would get from it
pub fn check_bank(path: &Path, options: &LoadOptions, out: &mut impl Write) -> Result<LoadedBank> {
    let path = io::clean_user_path(&path.to_string_lossy());
    let value = io::read_bank_file(&path)
        .with_context(|| format!("Cannot read bank {}", path.display()))?;
    let loaded = QuestionBank::load_with_options(&value, options)
        .with_context(|| format!("Bank {} is not usable", path.display()))?;

    for warning in &loaded.warnings {
        writeln!(out, "{} {}", "warning:".yellow(), warning)?;
    }

    debug_assert!(bank::validate(&loaded.bank));

    writeln!(
        out,
        "{} {} usable questions",
        "ok:".green(),
        loaded.bank.len()
    )?;
    match &loaded.bands {
        Some(bands) => writeln!(out, "{} {} custom bands", "ok:".green(), bands.len())?,
        None => writeln!(out, "bands: defaults")?,
    }
    Ok(loaded)
}

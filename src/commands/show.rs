use crate::io;
use anyhow::{bail, Result};
use std::io::Write;
use std::path::Path;

/// Print a previously saved result file verbatim
pub fn show_result(path: &Path, out: &mut impl Write) -> Result<()> {
    let path = io::clean_user_path(&path.to_string_lossy());
    if !io::file_exists(&path) {
        bail!("File not found: {}", path.display());
    }
    let contents = io::read_file(&path)?;
    out.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

pub mod bank_export;
pub mod output;
pub mod writers;

pub use bank_export::{write_bank_document, BankDocument, DEFAULT_BANK_FILE};
pub use output::{create_writer, result_filename, save_result, OutputFormat, ResultWriter};

use crate::errors::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Clean up a user-typed path: surrounding whitespace and quotes go
pub fn clean_user_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim().trim_matches(|c| c == '"' || c == '\''))
}

/// Read and decode a bank file. Only `.json` files are accepted.
pub fn read_bank_file(path: &Path) -> Result<Value> {
    if !file_exists(path) {
        return Err(Error::file_system("File not found. Check the path.", path));
    }

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(Error::file_system("Works with .json files", path));
    }

    let contents = read_file(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_user_path_strips_quotes() {
        assert_eq!(
            clean_user_path("  \"/tmp/my bank.json\" "),
            PathBuf::from("/tmp/my bank.json")
        );
        assert_eq!(clean_user_path("'bank.json'"), PathBuf::from("bank.json"));
    }

    #[test]
    fn test_read_bank_file_requires_json_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.txt");
        fs::write(&path, "[]").unwrap();
        assert!(matches!(
            read_bank_file(&path),
            Err(Error::FileSystem { .. })
        ));
    }

    #[test]
    fn test_read_bank_file_accepts_uppercase_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.JSON");
        fs::write(&path, "[1, 2]").unwrap();
        assert_eq!(read_bank_file(&path).unwrap(), serde_json::json!([1, 2]));
    }

    #[test]
    fn test_read_bank_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(read_bank_file(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn test_read_bank_file_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bank.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(read_bank_file(&path), Err(Error::Json(_))));
    }
}

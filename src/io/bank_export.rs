//! The editable bank document: questions plus band definitions.
//!
//! Written as indented JSON and read back by [`crate::bank::QuestionBank::load_from`].
use crate::bank::QuestionBank;
use crate::core::Question;
use crate::errors::Result;
use crate::scoring::{Band, BandSet};
use serde::Serialize;
use std::path::Path;

pub const DEFAULT_BANK_FILE: &str = "survey_questions_and_states.json";

#[derive(Debug, Clone, Serialize)]
pub struct BankDocument<'a> {
    pub questions: &'a [Question],
    pub psychological_states: &'a [Band],
}

impl<'a> BankDocument<'a> {
    pub fn new(bank: &'a QuestionBank, bands: &'a BandSet) -> Self {
        Self {
            questions: bank.questions(),
            psychological_states: bands.bands(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn write_bank_document(path: &Path, bank: &QuestionBank, bands: &BandSet) -> Result<()> {
    let json = BankDocument::new(bank, bands).to_json()?;
    crate::io::write_file(path, &json)?;
    log::info!("Saved bank document to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_round_trips_through_loader() {
        let bank = QuestionBank::default();
        let bands = BandSet::default();
        let json = BankDocument::new(&bank, &bands).to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let loaded = QuestionBank::load_from(&value).unwrap();
        assert_eq!(loaded.bank, bank);
        assert_eq!(loaded.bands, Some(bands));
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_document_shape() {
        let bank = QuestionBank::default();
        let bands = BandSet::default();
        let value = serde_json::to_value(BankDocument::new(&bank, &bands)).unwrap();
        assert_eq!(value["questions"][0]["opts"][4], serde_json::json!(["Always", 4]));
        assert_eq!(value["psychological_states"][1][1], serde_json::json!([33, 45]));
    }
}

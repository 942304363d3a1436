use crate::core::ResultRecord;
use crate::errors::Result;
use crate::io::writers::{CsvWriter, JsonWriter, TextWriter};
use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Txt,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Txt => "txt",
        }
    }

    /// Parse a typed answer; blank or unrecognized input means JSON
    pub fn from_answer(answer: &str) -> Self {
        answer.parse().unwrap_or_default()
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "txt" => Ok(OutputFormat::Txt),
            other => Err(format!("unknown result format '{}'", other)),
        }
    }
}

pub trait ResultWriter {
    fn write_record(&mut self, record: &ResultRecord) -> Result<()>;
}

pub fn create_writer<'w, W: Write + 'w>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn ResultWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Csv => Box::new(CsvWriter::new(writer)),
        OutputFormat::Txt => Box::new(TextWriter::new(writer)),
    }
}

/// `result_<student_id>_<YYYYMMDD_HHMMSS>.<ext>`
pub fn result_filename(student_id: &str, at: NaiveDateTime, format: OutputFormat) -> String {
    format!(
        "result_{}_{}.{}",
        student_id,
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Write a record into `directory` under its conventional file name
pub fn save_result(
    record: &ResultRecord,
    format: OutputFormat,
    directory: &Path,
    at: NaiveDateTime,
) -> Result<PathBuf> {
    crate::io::ensure_dir(directory)?;
    let path = directory.join(result_filename(&record.student_id, at, format));
    let file = BufWriter::new(File::create(&path)?);

    let mut writer = create_writer(format, file);
    writer.write_record(record)?;

    log::info!("Saved result to {}", path.display());
    Ok(path)
}

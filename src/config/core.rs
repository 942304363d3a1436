use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bank::{LoadOptions, DEFAULT_MIN_QUESTIONS};
use crate::io::OutputFormat;
use crate::scoring::{Band, BandSet};

/// Root configuration structure, read from `.apathymeter.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApathymeterConfig {
    /// Result output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// External question bank configuration
    #[serde(default)]
    pub bank: Option<BankConfig>,

    /// Severity band override; must partition 0..=100
    #[serde(default)]
    pub bands: Option<Vec<BandConfig>>,
}

impl ApathymeterConfig {
    /// Format configured under `[output]`; `run` asks when this is unset
    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.default_format)
    }

    pub fn output_directory(&self) -> PathBuf {
        self.output
            .as_ref()
            .and_then(|o| o.directory.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn bank_path(&self) -> Option<PathBuf> {
        self.bank.as_ref().and_then(|b| b.path.clone())
    }

    pub fn load_options(&self) -> LoadOptions {
        self.bank
            .as_ref()
            .map(|b| LoadOptions {
                min_questions: b.min_questions,
                enforce_minimum_after_drop: b.enforce_minimum_after_drop,
            })
            .unwrap_or_default()
    }

    /// Band override as a validated set, if one is configured
    pub fn band_override(&self) -> Result<Option<BandSet>, String> {
        match &self.bands {
            None => Ok(None),
            Some(bands) => {
                BandSet::new(bands.iter().cloned().map(Band::from).collect()).map(Some)
            }
        }
    }

    /// Configured bands, or the defaults when none are configured
    pub fn effective_bands(&self) -> BandSet {
        match self.band_override() {
            Ok(Some(set)) => set,
            Ok(None) => BandSet::default(),
            Err(e) => {
                log::warn!("Invalid band configuration: {}. Using defaults.", e);
                BandSet::default()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Format used when none is given on the command line
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Directory result files are written to (default: current directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankConfig {
    /// Bank file used by `run` when `--questions` is not given
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_min_questions")]
    pub min_questions: usize,

    /// Fail a load whose dropped questions leave it under `min_questions`
    #[serde(default)]
    pub enforce_minimum_after_drop: bool,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            path: None,
            min_questions: default_min_questions(),
            enforce_minimum_after_drop: false,
        }
    }
}

fn default_min_questions() -> usize {
    DEFAULT_MIN_QUESTIONS
}

/// A band as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandConfig {
    pub name: String,
    pub low: i64,
    pub high: i64,
}

impl From<BandConfig> for Band {
    fn from(config: BandConfig) -> Self {
        Band::new(config.name, config.low, config.high)
    }
}

//! Severity band classification.
//!
//! A band is a named, inclusive integer range of total scores. The default
//! six bands partition the 0..=100 scale; custom band sets must pass
//! [`BandSet::validate_partition`] before they replace the defaults.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest total covered by the band scale
pub const SCALE_MIN: i64 = 0;

/// Highest total covered by the band scale
pub const SCALE_MAX: i64 = 100;

/// Display text for a total that matches no band
pub const UNKNOWN_BAND: &str = "Unknown";

/// A named severity band, inclusive at both ends.
///
/// Serialized as `[name, [low, high]]` in exported bank documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BandEntry", into = "BandEntry")]
pub struct Band {
    pub name: String,
    pub low: i64,
    pub high: i64,
}

/// Wire shape of a band in bank documents
pub type BandEntry = (String, (i64, i64));

impl From<BandEntry> for Band {
    fn from((name, (low, high)): BandEntry) -> Self {
        Self { name, low, high }
    }
}

impl From<Band> for BandEntry {
    fn from(band: Band) -> Self {
        (band.name, (band.low, band.high))
    }
}

impl Band {
    pub fn new(name: impl Into<String>, low: i64, high: i64) -> Self {
        Self {
            name: name.into(),
            low,
            high,
        }
    }

    pub fn contains(&self, total: i64) -> bool {
        self.low <= total && total <= self.high
    }
}

/// Outcome of classifying a total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    Band(&'a Band),
    Unknown,
}

impl<'a> Classification<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Classification::Band(band) => &band.name,
            Classification::Unknown => UNKNOWN_BAND,
        }
    }

    pub fn band(&self) -> Option<&'a Band> {
        match *self {
            Classification::Band(band) => Some(band),
            Classification::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Classification::Unknown)
    }
}

impl fmt::Display for Classification<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a total against bands in declaration order.
///
/// The first band containing `total` wins, so overlapping definitions
/// resolve to the earliest one.
pub fn classify(total: i64, bands: &[Band]) -> Classification<'_> {
    bands
        .iter()
        .find(|band| band.contains(total))
        .map_or(Classification::Unknown, Classification::Band)
}

/// Ordered collection of bands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandSet {
    bands: Vec<Band>,
}

impl Default for BandSet {
    fn default() -> Self {
        Self {
            bands: default_bands(),
        }
    }
}

impl BandSet {
    /// Build a band set, rejecting anything that does not partition the
    /// 0..=100 scale.
    pub fn new(bands: Vec<Band>) -> Result<Self, String> {
        let set = Self { bands };
        set.validate_partition(SCALE_MIN, SCALE_MAX)?;
        Ok(set)
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn classify(&self, total: i64) -> Classification<'_> {
        classify(total, &self.bands)
    }

    /// Check that the bands cover every integer in `low..=high` exactly once.
    ///
    /// Declaration order does not matter here; classification order does.
    pub fn validate_partition(&self, low: i64, high: i64) -> Result<(), String> {
        if self.bands.is_empty() {
            return Err("band set is empty".to_string());
        }

        for band in &self.bands {
            validate_band(band)?;
            if band.low < low || band.high > high {
                return Err(format!(
                    "band '{}' ({}..={}) extends outside {}..={}",
                    band.name, band.low, band.high, low, high
                ));
            }
        }

        let mut sorted: Vec<&Band> = self.bands.iter().collect();
        sorted.sort_by_key(|band| band.low);

        let mut expected = low;
        for band in sorted {
            if band.low > expected {
                return Err(format!(
                    "gap in band ranges: {}..={} is not covered",
                    expected,
                    band.low - 1
                ));
            }
            if band.low < expected {
                return Err(format!(
                    "band '{}' ({}..={}) overlaps a previous band",
                    band.name, band.low, band.high
                ));
            }
            expected = match band.high.checked_add(1) {
                Some(next) => next,
                None => return Err(format!("band ranges extend past {}", high)),
            };
        }

        if expected <= high {
            return Err(format!(
                "gap in band ranges: {}..={} is not covered",
                expected, high
            ));
        }
        Ok(())
    }
}

// Pure function: a single band must be named and non-inverted
fn validate_band(band: &Band) -> Result<(), String> {
    if band.name.trim().is_empty() {
        return Err(format!("band {}..={} has no name", band.low, band.high));
    }
    if band.low > band.high {
        return Err(format!(
            "band '{}' has inverted range {}..={}",
            band.name, band.low, band.high
        ));
    }
    Ok(())
}

/// The six default severity bands
pub fn default_bands() -> Vec<Band> {
    vec![
        Band::new("Missing/Very weak connection, High activity & motivation", 0, 32),
        Band::new("Weak connection – does not interfere with real life", 33, 45),
        Band::new("Moderate connection – symptoms noticeable but not dominant", 46, 58),
        Band::new("Pronounced connection – intensive SM use + clear apathy", 59, 71),
        Band::new("Strong connection – excessive use, high passivity", 72, 85),
        Band::new(
            "Critically strong dependence – serious loss of life interest, seek medical help",
            86,
            100,
        ),
    ]
}

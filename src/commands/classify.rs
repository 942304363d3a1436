use crate::scoring::{BandSet, Classification};
use anyhow::Result;
use colored::*;
use std::io::Write;

/// Print the band a total falls into, or `Unknown`
pub fn classify_total(total: i64, bands: &BandSet, out: &mut impl Write) -> Result<()> {
    match bands.classify(total) {
        Classification::Band(band) => writeln!(
            out,
            "{}: {} ({}-{})",
            total,
            band.name.bold(),
            band.low,
            band.high
        )?,
        Classification::Unknown => writeln!(out, "{}: {}", total, "Unknown".red())?,
    }
    Ok(())
}

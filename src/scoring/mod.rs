//! Score aggregation and severity band classification

pub mod aggregate;
pub mod bands;

pub use aggregate::total;
pub use bands::{
    classify, default_bands, Band, BandEntry, BandSet, Classification, SCALE_MAX, SCALE_MIN,
    UNKNOWN_BAND,
};

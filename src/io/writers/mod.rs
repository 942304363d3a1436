pub mod csv;
pub mod json;
pub mod text;

pub use self::csv::CsvWriter;
pub use json::JsonWriter;
pub use text::TextWriter;

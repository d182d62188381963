pub mod csv;

pub use csv::{to_csv, CsvRecord};

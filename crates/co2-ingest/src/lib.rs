pub mod csv_dataset;
pub mod error;
pub mod numbers;

pub use csv_dataset::{LoadReport, LoadedDataset, read_dataset, read_dataset_from_reader};
pub use error::{IngestError, Result};
pub use numbers::{parse_f64, parse_year};

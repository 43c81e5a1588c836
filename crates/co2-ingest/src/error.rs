use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read csv {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },
    #[error("open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{source_name}: missing required column `{column}`")]
    MissingColumn {
        source_name: String,
        column: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

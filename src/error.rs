use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be read.
    #[error("error reading file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input file was read but is not a valid item collection.
    #[error("error parsing YAML data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("error marshalling YAML data: {0}")]
    Encode(#[from] serde_yaml::Error),

    #[error("error writing file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Items that cannot be sampled from (empty list, zero weight).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

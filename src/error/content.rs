use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the prompt content file.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The file could not be opened or read.
    #[error("Failed to read prompt file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not the expected JSON shape.
    #[error("Failed to parse prompt file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

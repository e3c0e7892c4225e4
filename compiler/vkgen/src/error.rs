//! Driver errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use vkgen_registry::SchemaError;

/// Anything that stops a `vkgen` run.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

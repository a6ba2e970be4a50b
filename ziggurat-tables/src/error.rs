use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that abort table generation.
#[derive(Debug, Error)]
pub enum TableError {
    /// The recurrence left the density's domain and produced a value that
    /// cannot be a partition boundary or density.
    #[error("{distribution} table entry {index} is out of domain: {value}")]
    Domain {
        distribution: &'static str,
        index: usize,
        value: f64,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TableError>;

use std::path::PathBuf;

use thiserror::Error;

/// Fatal I/O-level failures. Everything else the converter meets is a
/// [`Diagnostic`](crate::convert::Diagnostic), never an error.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to read event stream: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write chart: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed event stream: {0}")]
    Malformed(#[from] serde_json::Error),
}

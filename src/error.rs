use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading reviews. Both are fatal for a run.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read failed in {} at line {line}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

use std::{io, path::PathBuf};
use tally_domain::GroupBuildError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed export data")]
    Json(#[from] serde_json::Error),
    #[error("Invalid group '{id}'")]
    Group {
        id: String,
        #[source]
        source: GroupBuildError,
    },
}

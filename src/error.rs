use std::path::PathBuf;

/// Errors that abort a conversion run
///
/// Malformed lines and ineligible records are not errors; they are logged and
/// skipped.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("no valid vocabulary data found in {}", .0.display())]
    NoValidData(PathBuf),
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write output")]
    Write(#[source] std::io::Error),
    #[error("failed to serialize word content")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    #[error("invalid window frame: {0}")]
    InvalidFrame(String),

    #[error("screen geometry unavailable: {0}")]
    Screen(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("state parse error: {0}")]
    ParseError(String),

    #[error("state write error: {0}")]
    WriteError(String),

    #[error("no state directory could be resolved")]
    NoStateDir,
}

#[derive(Debug, thiserror::Error)]
pub enum SashError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read ignore rules from {path}")]
    IgnoreRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to inspect context root {path}")]
    TreeRoot {
        path: PathBuf,
        source: std::io::Error,
    },
}

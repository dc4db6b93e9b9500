use std::path::Path;

use arcwise_solver::kenken::KenKenError;
use thiserror::Error;

pub(crate) type ArcwiseResult<T> = Result<T, ArcwiseError>;

#[derive(Error, Debug)]
pub(crate) enum ArcwiseError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Failed to read puzzle {path}: {source}")]
    InvalidPuzzle { path: String, source: KenKenError },
    #[error("Failed to build the model, more details: {0}")]
    Model(#[from] KenKenError),
}

impl ArcwiseError {
    pub(crate) fn invalid_puzzle(path: &Path, source: KenKenError) -> Self {
        Self::InvalidPuzzle {
            path: path.display().to_string(),
            source,
        }
    }
}

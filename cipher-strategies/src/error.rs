//! Error types for cipher configuration and selection

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid mode {0:?} (use \"encrypt\" | \"decrypt\")")]
    InvalidMode(String),

    #[error("unknown algorithm {0:?} (use \"shift\" | \"unicode\")")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;

//! Error types for hexatube-fitness.

use thiserror::Error;

/// Result type for fitness operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running an evaluator.
#[derive(Debug, Error)]
pub enum Error {
    /// Lattice construction or evaluation failed.
    #[error("lattice error: {0}")]
    Lattice(#[from] hexatube_lattice::Error),

    /// A genotype does not cover the lattice.
    #[error("genotype has {actual} genes, lattice has {expected} sites")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A genotype token is not a binary gene.
    #[error("invalid gene {token:?} at position {position}")]
    InvalidToken { position: usize, token: String },

    /// A configuration value could not be parsed.
    #[error("invalid config value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The evaluation worker pool could not be started.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

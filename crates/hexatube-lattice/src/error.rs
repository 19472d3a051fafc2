//! Error types for hexatube-lattice.

use thiserror::Error;

/// Result type for lattice operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building a lattice or evaluating a configuration.
///
/// Out-of-range site indices and occupancy vectors of the wrong length are
/// caller defects and panic instead of producing one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A lattice dimension was zero.
    #[error("invalid lattice dimensions: n_phi = {n_phi}, n_z = {n_z} (both must be positive)")]
    InvalidDimensions { n_phi: usize, n_z: usize },

    /// The site count `2 * n_phi * n_z` does not fit in `usize`.
    #[error("lattice too large: 2 * {n_phi} * {n_z} overflows")]
    TooLarge { n_phi: usize, n_z: usize },

    /// Energy is undefined for a configuration without atoms.
    #[error("configuration has no atoms")]
    EmptyConfiguration,
}

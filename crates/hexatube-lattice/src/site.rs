//! Lattice dimensions and site coordinates.
//!
//! The unit cell is a `2 * n_phi` by `n_z` grid of a triangular lattice:
//! rows run around the circumference, columns along the tube axis. Every
//! odd row is shifted by half a spacing along the axis, so a circumferential
//! unit cell holds two rows. Sites are numbered row-major:
//!
//! ```text
//! index = row * n_z + col
//! ```
//!
//! With this numbering the indices `[2k * n_z, (2k + 2) * n_z)` form the
//! `k`-th circumferential cell and the last `n_z` indices form the last row.

use crate::{Error, Result};

/// Size of a rolled unit cell.
///
/// Only constructible through [`LatticeDims::new`] (deserialization goes
/// through it too), so both dimensions are positive and the site count fits
/// in `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDims"))]
pub struct LatticeDims {
    n_phi: usize,
    n_z: usize,
}

/// Unchecked wire form of [`LatticeDims`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDims {
    n_phi: usize,
    n_z: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDims> for LatticeDims {
    type Error = Error;

    fn try_from(raw: RawDims) -> Result<Self> {
        Self::new(raw.n_phi, raw.n_z)
    }
}

impl LatticeDims {
    /// Validate and create dimensions.
    pub const fn new(n_phi: usize, n_z: usize) -> Result<Self> {
        if n_phi == 0 || n_z == 0 {
            return Err(Error::InvalidDimensions { n_phi, n_z });
        }
        match n_phi.checked_mul(n_z) {
            Some(cells) if cells.checked_mul(2).is_some() => Ok(Self { n_phi, n_z }),
            _ => Err(Error::TooLarge { n_phi, n_z }),
        }
    }

    /// Unit cells around the circumference.
    #[inline]
    pub const fn n_phi(&self) -> usize {
        self.n_phi
    }

    /// Sites along the tube axis.
    #[inline]
    pub const fn n_z(&self) -> usize {
        self.n_z
    }

    /// Number of rows around the circumference (`2 * n_phi`).
    #[inline]
    pub const fn rows(&self) -> usize {
        2 * self.n_phi
    }

    /// Number of sites in the unit cell (`2 * n_phi * n_z`).
    #[inline]
    pub const fn site_count(&self) -> usize {
        2 * self.n_phi * self.n_z
    }

    /// Whether `index` names a site of this cell.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        index < self.site_count()
    }

    /// Coordinates of a site index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn site(&self, index: usize) -> Site {
        assert!(
            self.contains(index),
            "site index {} out of range for {} sites",
            index,
            self.site_count()
        );
        Site {
            row: index / self.n_z,
            col: index % self.n_z,
        }
    }

    /// Linear index of a site.
    ///
    /// # Panics
    ///
    /// Panics if the site lies outside the cell.
    #[inline]
    pub fn index(&self, site: Site) -> usize {
        assert!(
            site.row < self.rows() && site.col < self.n_z,
            "site {} outside {}x{} cell",
            site,
            self.rows(),
            self.n_z
        );
        site.row * self.n_z + site.col
    }
}

impl std::fmt::Display for LatticeDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n_phi={}, n_z={}", self.n_phi, self.n_z)
    }
}

/// A position in the unit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    /// Row around the circumference, `0..2 * n_phi`.
    pub row: usize,
    /// Column along the axis, `0..n_z`.
    pub col: usize,
}

impl Site {
    /// Create a new site coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Odd rows sit half a spacing further along the axis.
    #[inline]
    pub const fn is_shifted(&self) -> bool {
        self.row % 2 == 1
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

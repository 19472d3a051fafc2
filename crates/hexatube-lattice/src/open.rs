//! Neighbors without periodic boundary conditions.
//!
//! Same bond geometry as [`PeriodicLattice`](crate::PeriodicLattice), but a
//! bond that would cross the edge of the cell does not exist. Used wherever
//! wraparound would invent a bond across a cut unit cell, i.e. connectivity.

use crate::neighbors::{Direction, Topology};
use crate::LatticeDims;

/// Hexagonal lattice patch with hard edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenLattice {
    dims: LatticeDims,
}

impl OpenLattice {
    /// Create the open topology for `dims`.
    pub const fn new(dims: LatticeDims) -> Self {
        Self { dims }
    }

    #[inline]
    fn split(&self, i: usize) -> (usize, usize) {
        assert!(
            self.dims.contains(i),
            "site index {} out of range for {} sites",
            i,
            self.dims.site_count()
        );
        (i / self.dims.n_z(), i % self.dims.n_z())
    }

    #[inline]
    fn join(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.dims.rows() && col < self.dims.n_z()).then(|| row * self.dims.n_z() + col)
    }

    /// Columns hit by the right and left diagonal bonds from `(row, col)`.
    #[inline]
    fn diagonal_cols(row: usize, col: usize) -> (Option<usize>, Option<usize>) {
        if row % 2 == 0 {
            (Some(col), col.checked_sub(1))
        } else {
            (Some(col + 1), Some(col))
        }
    }

    /// Next site along the axis, `None` on the last column.
    pub fn right(&self, i: usize) -> Option<usize> {
        let (row, col) = self.split(i);
        self.join(row, col + 1)
    }

    /// Previous site along the axis, `None` on the first column.
    pub fn left(&self, i: usize) -> Option<usize> {
        let (row, col) = self.split(i);
        self.join(row, col.checked_sub(1)?)
    }

    /// Diagonal neighbor in the next row, toward higher columns.
    pub fn up_right(&self, i: usize) -> Option<usize> {
        let (row, col) = self.split(i);
        let (right, _) = Self::diagonal_cols(row, col);
        self.join(row + 1, right?)
    }

    /// Diagonal neighbor in the next row, toward lower columns.
    pub fn up_left(&self, i: usize) -> Option<usize> {
        let (row, col) = self.split(i);
        let (_, left) = Self::diagonal_cols(row, col);
        self.join(row + 1, left?)
    }

    /// Diagonal neighbor in the previous row, toward higher columns.
    pub fn down_right(&self, i: usize) -> Option<usize> {
        let (row, col) = self.split(i);
        let (right, _) = Self::diagonal_cols(row, col);
        self.join(row.checked_sub(1)?, right?)
    }

    /// Diagonal neighbor in the previous row, toward lower columns.
    pub fn down_left(&self, i: usize) -> Option<usize> {
        let (row, col) = self.split(i);
        let (_, left) = Self::diagonal_cols(row, col);
        self.join(row.checked_sub(1)?, left?)
    }

    /// Whether `i` lies on an edge of the cell.
    pub fn is_boundary(&self, i: usize) -> bool {
        let (row, col) = self.split(i);
        row == 0 || row + 1 == self.dims.rows() || col == 0 || col + 1 == self.dims.n_z()
    }
}

impl Topology for OpenLattice {
    fn dims(&self) -> LatticeDims {
        self.dims
    }

    fn step(&self, site: usize, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Right => self.right(site),
            Direction::UpRight => self.up_right(site),
            Direction::UpLeft => self.up_left(site),
            Direction::Left => self.left(site),
            Direction::DownLeft => self.down_left(site),
            Direction::DownRight => self.down_right(site),
        }
    }
}

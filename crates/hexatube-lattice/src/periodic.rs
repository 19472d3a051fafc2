//! Neighbors with periodic boundary conditions.
//!
//! The unit cell is repeated in both directions: around the circumference
//! (rows wrap modulo `2 * n_phi`) and along the tube (columns wrap modulo
//! `n_z`). Every direction is total, so each site has six bonds.
//!
//! For a site in row `r`, column `c`, the diagonal bonds land on column `c`
//! of the adjacent row when `r` is even and on column `c + 1` when `r` is
//! odd. Since `2 * n_phi` is even, row parity alternates across the
//! circumferential seam too, which keeps the relation symmetric.

use crate::neighbors::{Direction, Topology};
use crate::LatticeDims;

/// Hexagonal lattice on a torus: periodic around and along the tube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodicLattice {
    dims: LatticeDims,
}

impl PeriodicLattice {
    /// Create the periodic topology for `dims`.
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
    fn join(&self, row: usize, col: usize) -> usize {
        row * self.dims.n_z() + col
    }

    #[inline]
    fn next_col(&self, col: usize) -> usize {
        (col + 1) % self.dims.n_z()
    }

    /// Column reached by a diagonal bond from `(row, col)`.
    #[inline]
    fn diagonal_col(&self, row: usize, col: usize) -> usize {
        if row % 2 == 0 {
            col
        } else {
            self.next_col(col)
        }
    }

    /// Next site along the axis.
    pub fn right(&self, i: usize) -> usize {
        let (row, col) = self.split(i);
        self.join(row, self.next_col(col))
    }

    /// Previous site along the axis.
    pub fn left(&self, i: usize) -> usize {
        let (row, col) = self.split(i);
        let n_z = self.dims.n_z();
        self.join(row, (col + n_z - 1) % n_z)
    }

    /// Diagonal neighbor in the next row, further along the axis.
    pub fn up_right(&self, i: usize) -> usize {
        let (row, col) = self.split(i);
        let up = (row + 1) % self.dims.rows();
        self.join(up, self.diagonal_col(row, col))
    }

    /// Diagonal neighbor in the next row, back along the axis.
    pub fn up_left(&self, i: usize) -> usize {
        self.left(self.up_right(i))
    }

    /// Diagonal neighbor in the previous row, further along the axis.
    pub fn down_right(&self, i: usize) -> usize {
        let (row, col) = self.split(i);
        let rows = self.dims.rows();
        let down = (row + rows - 1) % rows;
        self.join(down, self.diagonal_col(row, col))
    }

    /// Diagonal neighbor in the previous row, back along the axis.
    pub fn down_left(&self, i: usize) -> usize {
        self.left(self.down_right(i))
    }

    /// Neighbor of `i` in `direction`. Always defined.
    pub fn toward(&self, i: usize, direction: Direction) -> usize {
        match direction {
            Direction::Right => self.right(i),
            Direction::UpRight => self.up_right(i),
            Direction::UpLeft => self.up_left(i),
            Direction::Left => self.left(i),
            Direction::DownLeft => self.down_left(i),
            Direction::DownRight => self.down_right(i),
        }
    }
}

impl Topology for PeriodicLattice {
    fn dims(&self) -> LatticeDims {
        self.dims
    }

    fn step(&self, site: usize, direction: Direction) -> Option<usize> {
        Some(self.toward(site, direction))
    }
}

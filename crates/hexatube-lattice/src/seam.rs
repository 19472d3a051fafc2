//! Bonds across the seams of a periodic unit cell.
//!
//! Repeating the cell only builds a tube if the cell actually bonds to its
//! own images. The axial seam joins column `n_z - 1` to column `0`; the
//! circumferential seam joins the last row to row `0`. A cell whose atoms
//! never reach across a seam would fall apart into rings or strips.
//!
//! Bonds that leave column `n_z - 1` through the axial seam are `right` for
//! every row, plus `up_right` and `down_right` for shifted (odd) rows. Bonds
//! that leave the last row (always odd) are `up_left` and `up_right`.

use crate::neighbors::{Direction, Topology};
use crate::occupancy::{assert_shape, Occupancy};
use crate::PeriodicLattice;

const AXIAL_EVEN_ROW: &[Direction] = &[Direction::Right];
const AXIAL_ODD_ROW: &[Direction] = &[Direction::Right, Direction::UpRight, Direction::DownRight];
const CIRCUMFERENTIAL: &[Direction] = &[Direction::UpLeft, Direction::UpRight];

/// Whether atom `i` bonds to another atom through one of `directions`.
fn bonds_through<O: Occupancy + ?Sized>(
    lattice: &PeriodicLattice,
    v: &O,
    i: usize,
    directions: &[Direction],
) -> bool {
    v.is_occupied(i)
        && directions.iter().any(|&d| {
            let j = lattice.toward(i, d);
            j != i && v.is_occupied(j)
        })
}

/// Whether at least one bond of `v` crosses the axial seam.
///
/// # Panics
///
/// Panics if `v` does not match the lattice.
pub fn axial_seam_has_bond<O: Occupancy + ?Sized>(lattice: &PeriodicLattice, v: &O) -> bool {
    assert_shape(lattice, v);
    let dims = lattice.dims();
    let last_col = dims.n_z() - 1;
    (0..dims.rows()).any(|row| {
        let directions = if row % 2 == 0 {
            AXIAL_EVEN_ROW
        } else {
            AXIAL_ODD_ROW
        };
        bonds_through(lattice, v, row * dims.n_z() + last_col, directions)
    })
}

/// Whether at least one bond of `v` crosses the circumferential seam.
///
/// # Panics
///
/// Panics if `v` does not match the lattice.
pub fn circumferential_seam_has_bond<O: Occupancy + ?Sized>(
    lattice: &PeriodicLattice,
    v: &O,
) -> bool {
    assert_shape(lattice, v);
    let sites = v.len();
    let n_z = lattice.dims().n_z();
    (sites - n_z..sites).any(|i| bonds_through(lattice, v, i, CIRCUMFERENTIAL))
}

//! Hexatube Lattice
//!
//! Topology and motif analysis for the unit cell of a rolled hexagonal
//! lattice (a nanotube), evaluated from a binary occupancy vector.
//!
//! # Lattice
//!
//! The cell holds `2 * n_phi * n_z` sites of a triangular lattice: `2 * n_phi`
//! rows around the circumference, `n_z` columns along the axis, odd rows
//! shifted by half a spacing. Each site has six bonds. Two topologies share
//! that geometry:
//!
//! - [`PeriodicLattice`]: the cell repeats in both directions, every site
//!   has all six bonds.
//! - [`OpenLattice`]: bonds that would cross the cell edge are dropped.
//!
//! # Analysis
//!
//! - Occupancy queries: [`atoms`], [`number_of_atoms`], [`neighbor_atoms`],
//!   [`number_of_neighbor_atoms`].
//! - Motif decomposition `(n_0, ..., n_6)` and the per-atom [`energy`].
//! - Structural predicates: [`is_single_component`] (open topology),
//!   [`axial_seam_has_bond`] and [`circumferential_seam_has_bond`] (periodic).
//!
//! Every function is pure. Topologies are small `Copy` values built once and
//! shared read-only; evaluating many configurations concurrently needs no
//! locking.
//!
//! ```
//! use hexatube_lattice::{LatticeDims, OpenLattice, PeriodicLattice, decomposition, is_single_component};
//!
//! let dims = LatticeDims::new(3, 2).unwrap();
//! let periodic = PeriodicLattice::new(dims);
//! let open = OpenLattice::new(dims);
//!
//! let mut v = vec![false; dims.site_count()];
//! v[0] = true;
//! v[1] = true;
//! assert!(is_single_component(&open, &v));
//! assert_eq!(decomposition(&periodic, &v).atoms(), 2);
//! ```

mod connectivity;
mod error;
mod motif;
mod neighbors;
mod occupancy;
mod open;
mod periodic;
mod seam;
mod site;

pub use connectivity::{atom_clusters, is_single_component, DisjointSet};
pub use error::{Error, Result};
pub use motif::{decomposition, energy, Decomposition, MotifCoefficients, MOTIF_COUNT};
pub use neighbors::{are_neighbors, count_present_neighbors, Direction, SiteNeighbors, Topology, MAX_NEIGHBORS};
pub use occupancy::{atoms, neighbor_atoms, number_of_atoms, number_of_neighbor_atoms, Occupancy};
pub use open::OpenLattice;
pub use periodic::PeriodicLattice;
pub use seam::{axial_seam_has_bond, circumferential_seam_has_bond};
pub use site::{LatticeDims, Site};

// Topologies are shared read-only across evaluation workers.
const _: () = {
    const fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<PeriodicLattice>();
    assert_send_sync::<OpenLattice>();
};

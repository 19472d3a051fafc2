//! Motif decomposition and the decomposition energy model.
//!
//! Every atom is classified by how many of its six periodic neighbors are
//! occupied. The histogram of those classes, `(n_0, n_1, ..., n_6)`, is the
//! motif decomposition. The energy per atom is the histogram weighted by
//! per-motif coefficients:
//!
//! ```text
//! E = (Σ_k n_k * e_k) / Σ_k n_k
//! ```

use crate::neighbors::{Topology, MAX_NEIGHBORS};
use crate::occupancy::{assert_shape, count_occupied, Occupancy};
use crate::{Error, PeriodicLattice, Result};

/// Number of motif classes (0 through 6 occupied neighbors).
pub const MOTIF_COUNT: usize = MAX_NEIGHBORS + 1;

/// Histogram of atoms by occupied-neighbor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposition(pub [usize; MOTIF_COUNT]);

impl Decomposition {
    /// Atoms with exactly `k` occupied neighbors.
    #[inline]
    pub fn count(&self, k: usize) -> usize {
        self.0[k]
    }

    /// Total number of atoms classified.
    pub fn atoms(&self) -> usize {
        self.0.iter().sum()
    }

    /// `Σ_k n_k * e_k`, not normalised.
    pub fn weighted_sum(&self, coefficients: &MotifCoefficients) -> f64 {
        self.0
            .iter()
            .zip(coefficients.0.iter())
            .map(|(&n, &e)| n as f64 * e)
            .sum()
    }

    /// Energy per atom, `weighted_sum / atoms`; `None` when empty.
    pub fn energy_per_atom(&self, coefficients: &MotifCoefficients) -> Option<f64> {
        match self.atoms() {
            0 => None,
            atoms => Some(self.weighted_sum(coefficients) / atoms as f64),
        }
    }

    /// Mean occupied-neighbor count per atom, `None` when empty.
    pub fn coordination_mean(&self) -> Option<f64> {
        let atoms = self.atoms();
        if atoms == 0 {
            return None;
        }
        let bonds: usize = self.0.iter().enumerate().map(|(k, &n)| k * n).sum();
        Some(bonds as f64 / atoms as f64)
    }
}

impl std::fmt::Display for Decomposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [n0, n1, n2, n3, n4, n5, n6] = self.0;
        write!(f, "({n0}, {n1}, {n2}, {n3}, {n4}, {n5}, {n6})")
    }
}

/// Energy contribution of one atom in each motif class, caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotifCoefficients(pub [f64; MOTIF_COUNT]);

impl MotifCoefficients {
    /// Every coefficient multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.map(|e| e * factor))
    }
}

impl From<[f64; MOTIF_COUNT]> for MotifCoefficients {
    fn from(values: [f64; MOTIF_COUNT]) -> Self {
        Self(values)
    }
}

/// Motif decomposition of `v` under periodic boundary conditions.
///
/// # Panics
///
/// Panics if `v` does not match the lattice.
pub fn decomposition<O: Occupancy + ?Sized>(lattice: &PeriodicLattice, v: &O) -> Decomposition {
    assert_shape(lattice, v);
    let mut histogram = [0usize; MOTIF_COUNT];
    for i in (0..v.len()).filter(|&i| v.is_occupied(i)) {
        histogram[count_occupied(&lattice.neighbors(i), v)] += 1;
    }
    Decomposition(histogram)
}

/// Energy per atom of `v` from the decomposition model.
///
/// Returns [`Error::EmptyConfiguration`] when `v` holds no atoms; callers
/// should treat that as a constraint violation.
///
/// # Panics
///
/// Panics if `v` does not match the lattice.
pub fn energy<O: Occupancy + ?Sized>(
    lattice: &PeriodicLattice,
    v: &O,
    coefficients: &MotifCoefficients,
) -> Result<f64> {
    decomposition(lattice, v)
        .energy_per_atom(coefficients)
        .ok_or(Error::EmptyConfiguration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LatticeDims, Site};

    fn lattice(n_phi: usize, n_z: usize) -> PeriodicLattice {
        PeriodicLattice::new(LatticeDims::new(n_phi, n_z).unwrap())
    }

    const COEFFS: MotifCoefficients =
        MotifCoefficients([0.0, -1.0, -2.5, -3.0, -4.25, -5.0, -6.0]);

    #[test]
    fn full_lattice_is_all_six() {
        let l = lattice(2, 3);
        let v = vec![true; l.site_count()];
        let d = decomposition(&l, &v);
        assert_eq!(d, Decomposition([0, 0, 0, 0, 0, 0, 12]));
        assert_eq!(energy(&l, &v, &COEFFS), Ok(-6.0));
        assert_eq!(d.coordination_mean(), Some(6.0));
    }

    #[test]
    fn isolated_atom() {
        let l = lattice(2, 3);
        let mut v = vec![false; l.site_count()];
        v[7] = true;
        assert_eq!(decomposition(&l, &v), Decomposition([1, 0, 0, 0, 0, 0, 0]));
        assert_eq!(energy(&l, &v, &COEFFS), Ok(0.0));
    }

    #[test]
    fn axial_chain_wraps_into_ring() {
        // One full row: each atom bonds left and right through the seam.
        let l = lattice(2, 4);
        let mut v = vec![false; l.site_count()];
        for col in 0..4 {
            v[l.dims().index(Site::new(1, col))] = true;
        }
        assert_eq!(decomposition(&l, &v), Decomposition([0, 0, 4, 0, 0, 0, 0]));
        assert_eq!(energy(&l, &v, &COEFFS), Ok(-2.5));
    }

    #[test]
    fn mixed_motifs() {
        let l = lattice(2, 4);
        let mut v = vec![false; l.site_count()];
        // A bonded pair plus a distant singleton.
        let a = l.dims().index(Site::new(0, 0));
        v[a] = true;
        v[l.right(a)] = true;
        v[l.dims().index(Site::new(2, 2))] = true;
        let d = decomposition(&l, &v);
        assert_eq!(d, Decomposition([1, 2, 0, 0, 0, 0, 0]));
        let expected = (0.0 + 2.0 * -1.0) / 3.0;
        assert!((energy(&l, &v, &COEFFS).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_configuration_has_no_energy() {
        let l = lattice(1, 2);
        assert_eq!(energy(&l, &[false; 4], &COEFFS), Err(Error::EmptyConfiguration));
        assert_eq!(decomposition(&l, &[false; 4]).atoms(), 0);
        assert_eq!(Decomposition::default().coordination_mean(), None);
        assert_eq!(Decomposition::default().energy_per_atom(&COEFFS), None);
    }

    #[test]
    fn energy_per_atom_normalises_weighted_sum() {
        let d = Decomposition([1, 2, 0, 0, 0, 0, 1]);
        assert_eq!(d.weighted_sum(&COEFFS), -8.0);
        assert_eq!(d.energy_per_atom(&COEFFS), Some(-2.0));
    }

    #[test]
    #[should_panic(expected = "does not match lattice")]
    fn decomposition_rejects_wrong_length() {
        decomposition(&lattice(2, 3), &[true; 11]);
    }

    #[test]
    #[should_panic(expected = "does not match lattice")]
    fn energy_rejects_wrong_length() {
        let _ = energy(&lattice(1, 2), &[false; 3], &COEFFS);
    }

    #[test]
    fn energy_scales_with_coefficients() {
        let l = lattice(2, 3);
        let v = [true, false, true, true, true, false, false, true, false, false, true, true];
        let base = energy(&l, &v, &COEFFS).unwrap();
        for alpha in [-2.0, 0.5, 3.0] {
            let scaled = energy(&l, &v, &COEFFS.scaled(alpha)).unwrap();
            assert!((scaled - alpha * base).abs() < 1e-9);
        }
    }

    #[test]
    fn display_lists_buckets() {
        assert_eq!(
            Decomposition([1, 2, 3, 4, 5, 6, 7]).to_string(),
            "(1, 2, 3, 4, 5, 6, 7)"
        );
    }
}

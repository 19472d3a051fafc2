//! Occupancy vectors and the read-only queries over them.
//!
//! An occupancy vector holds one bit per site: `true` means an atom sits
//! there. Anything with a known length and indexed boolean reads qualifies;
//! arrays give a compile-time length, slices and vectors a runtime one.

use crate::neighbors::{SiteNeighbors, Topology};

/// A fixed-length, read-only boolean sequence indexed by site.
pub trait Occupancy {
    /// Number of sites covered.
    fn len(&self) -> usize;

    /// Whether site `i` holds an atom.
    ///
    /// # Panics
    ///
    /// Implementations panic if `i >= self.len()`.
    fn is_occupied(&self, i: usize) -> bool;

    /// Whether the sequence covers no sites at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Occupancy for [bool] {
    #[inline]
    fn len(&self) -> usize {
        <[bool]>::len(self)
    }

    #[inline]
    fn is_occupied(&self, i: usize) -> bool {
        self[i]
    }
}

impl<const N: usize> Occupancy for [bool; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn is_occupied(&self, i: usize) -> bool {
        self[i]
    }
}

impl Occupancy for Vec<bool> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn is_occupied(&self, i: usize) -> bool {
        self[i]
    }
}

impl<O: Occupancy + ?Sized> Occupancy for &O {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn is_occupied(&self, i: usize) -> bool {
        (**self).is_occupied(i)
    }
}

/// Panic unless `v` covers exactly the sites of `topology`.
#[inline]
pub(crate) fn assert_shape<T, O>(topology: &T, v: &O)
where
    T: Topology + ?Sized,
    O: Occupancy + ?Sized,
{
    assert_eq!(
        v.len(),
        topology.site_count(),
        "occupancy vector length does not match lattice {}",
        topology.dims()
    );
}

/// Indices of occupied sites, ascending.
pub fn atoms<O: Occupancy + ?Sized>(v: &O) -> Vec<usize> {
    (0..v.len()).filter(|&i| v.is_occupied(i)).collect()
}

/// Number of occupied sites.
pub fn number_of_atoms<O: Occupancy + ?Sized>(v: &O) -> usize {
    (0..v.len()).filter(|&i| v.is_occupied(i)).count()
}

/// Occupied neighbors of site `i`.
///
/// # Panics
///
/// Panics if `i` is out of range or `v` does not match the lattice.
pub fn neighbor_atoms<T, O>(topology: &T, v: &O, i: usize) -> Vec<usize>
where
    T: Topology + ?Sized,
    O: Occupancy + ?Sized,
{
    assert_shape(topology, v);
    topology
        .neighbors(i)
        .iter()
        .copied()
        .filter(|&j| v.is_occupied(j))
        .collect()
}

/// Number of occupied neighbors of site `i`, in `0..=6`.
///
/// # Panics
///
/// Panics if `i` is out of range or `v` does not match the lattice.
pub fn number_of_neighbor_atoms<T, O>(topology: &T, v: &O, i: usize) -> usize
where
    T: Topology + ?Sized,
    O: Occupancy + ?Sized,
{
    assert_shape(topology, v);
    count_occupied(&topology.neighbors(i), v)
}

#[inline]
pub(crate) fn count_occupied<O: Occupancy + ?Sized>(neighbors: &SiteNeighbors, v: &O) -> usize {
    neighbors.iter().filter(|&&j| v.is_occupied(j)).count()
}

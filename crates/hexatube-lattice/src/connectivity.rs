//! Connectivity of the atoms inside one unit cell.
//!
//! The bond graph spans every site of the cell; edges join occupied
//! neighbors under the open topology, so no bond is invented across the
//! cut edges of the cell. Empty sites stay singleton components. The atoms
//! form one connected piece exactly when
//!
//! ```text
//! atoms + components == 1 + sites
//! ```
//!
//! i.e. `components == (sites - atoms) + 1`. An empty configuration fails
//! this (it has `sites` components), as does any split configuration.

use crate::neighbors::Topology;
use crate::occupancy::{assert_shape, number_of_atoms, Occupancy};
use crate::OpenLattice;

/// Union-find forest with path halving and union by size.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merge the sets containing `a` and `b`. Returns `false` if they were
    /// already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.components -= 1;
        true
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets.
    pub fn components(&self) -> usize {
        self.components
    }
}

/// Bond graph of `v` over the whole cell, as a disjoint-set forest.
fn bond_forest<O: Occupancy + ?Sized>(lattice: &OpenLattice, v: &O) -> DisjointSet {
    assert_shape(lattice, v);
    let mut forest = DisjointSet::new(v.len());
    for i in (0..v.len()).filter(|&i| v.is_occupied(i)) {
        for &j in lattice.neighbors(i).iter() {
            if j > i && v.is_occupied(j) {
                forest.union(i, j);
            }
        }
    }
    forest
}

/// Whether the atoms of `v` form exactly one connected piece inside the cell.
///
/// # Panics
///
/// Panics if `v` does not match the lattice.
pub fn is_single_component<O: Occupancy + ?Sized>(lattice: &OpenLattice, v: &O) -> bool {
    let components = bond_forest(lattice, v).components();
    number_of_atoms(v) + components == 1 + v.len()
}

/// Number of separate atom clusters in `v` (0 for an empty configuration).
///
/// # Panics
///
/// Panics if `v` does not match the lattice.
pub fn atom_clusters<O: Occupancy + ?Sized>(lattice: &OpenLattice, v: &O) -> usize {
    let components = bond_forest(lattice, v).components();
    components - (v.len() - number_of_atoms(v))
}

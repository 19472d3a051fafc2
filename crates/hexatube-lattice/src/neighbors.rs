//! Six-direction neighbor sets shared by both lattice variants.
//!
//! Every site of the triangular lattice has six bonds: `right`, `left` along
//! the axis and four diagonal bonds to the rows above and below. The
//! periodic variant always resolves all six (possibly coinciding on tiny
//! cells); the open variant drops the ones that would leave the cell.

use crate::LatticeDims;

/// Maximum number of neighbors per site.
pub const MAX_NEIGHBORS: usize = 6;

/// The six bond directions, in the order neighbor sets are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Right,
    UpRight,
    UpLeft,
    Left,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All six directions.
    pub const ALL: [Self; MAX_NEIGHBORS] = [
        Self::Right,
        Self::UpRight,
        Self::UpLeft,
        Self::Left,
        Self::DownLeft,
        Self::DownRight,
    ];

    /// The direction pointing back.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::UpRight => Self::DownLeft,
            Self::UpLeft => Self::DownRight,
            Self::Left => Self::Right,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
        }
    }
}

/// Distinct neighbor indices of one site.
///
/// Stored inline; never allocates.
#[derive(Debug, Clone, Copy)]
pub struct SiteNeighbors {
    sites: [usize; MAX_NEIGHBORS],
    len: usize,
}

impl SiteNeighbors {
    pub(crate) const fn empty() -> Self {
        Self {
            sites: [0; MAX_NEIGHBORS],
            len: 0,
        }
    }

    /// Add `site` unless it is `origin` or already present.
    pub(crate) fn insert(&mut self, origin: usize, site: usize) {
        if site != origin && !self.as_slice().contains(&site) {
            self.sites[self.len] = site;
            self.len += 1;
        }
    }

    /// The neighbor indices as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.sites[..self.len]
    }
}

impl PartialEq for SiteNeighbors {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for SiteNeighbors {}

impl std::ops::Deref for SiteNeighbors {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a SiteNeighbors {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// A neighbor relation over the sites of a unit cell.
///
/// Implementations are immutable values; every method is a pure function of
/// the site index and the dimensions, so one instance can be shared across
/// threads for the whole search.
pub trait Topology {
    /// Dimensions of the cell.
    fn dims(&self) -> LatticeDims;

    /// Neighbor of `site` in `direction`, if the bond exists.
    ///
    /// # Panics
    ///
    /// Panics if `site` is out of range.
    fn step(&self, site: usize, direction: Direction) -> Option<usize>;

    /// Distinct neighbors of `site`.
    ///
    /// # Panics
    ///
    /// Panics if `site` is out of range.
    fn neighbors(&self, site: usize) -> SiteNeighbors {
        let mut result = SiteNeighbors::empty();
        for direction in Direction::ALL {
            if let Some(n) = self.step(site, direction) {
                result.insert(site, n);
            }
        }
        result
    }

    /// Number of sites in the cell.
    fn site_count(&self) -> usize {
        self.dims().site_count()
    }
}

/// Check if two sites are bonded under `topology`.
pub fn are_neighbors<T: Topology + ?Sized>(topology: &T, a: usize, b: usize) -> bool {
    topology.neighbors(a).contains(&b)
}

/// Count how many of a site's neighbors satisfy `is_present`.
pub fn count_present_neighbors<T, F>(topology: &T, site: usize, is_present: F) -> usize
where
    T: Topology + ?Sized,
    F: Fn(usize) -> bool,
{
    topology
        .neighbors(site)
        .iter()
        .filter(|&&n| is_present(n))
        .count()
}

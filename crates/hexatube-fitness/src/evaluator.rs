//! Candidate evaluation: constraints first, energy second.
//!
//! A candidate is accepted only if it holds atoms, those atoms form one
//! piece inside the cell, and (when required) the cell bonds to its own
//! images across each seam. Accepted candidates carry their motif
//! decomposition and energy per atom; lower energy is fitter.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. shape (caller error, reported as [`Error::ShapeMismatch`])
//! 2. empty cell
//! 3. connectivity
//! 4. axial seam
//! 5. circumferential seam

use hexatube_lattice::{
    atom_clusters, axial_seam_has_bond, circumferential_seam_has_bond, decomposition,
    number_of_atoms, Decomposition, LatticeDims, MotifCoefficients,
    Occupancy, OpenLattice, PeriodicLattice, Topology,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Error, EvaluatorConfig, Result};

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// No atoms at all.
    Empty,
    /// Atoms split into several pieces inside the cell.
    Disconnected { clusters: usize },
    /// No bond crosses the axial seam.
    NoAxialBond,
    /// No bond crosses the circumferential seam.
    NoCircumferentialBond,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no atoms"),
            Self::Disconnected { clusters } => write!(f, "{} disconnected clusters", clusters),
            Self::NoAxialBond => write!(f, "no bond across the axial seam"),
            Self::NoCircumferentialBond => write!(f, "no bond across the circumferential seam"),
        }
    }
}

/// Measurements of an accepted candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Number of atoms.
    pub atoms: usize,
    /// Motif histogram under periodic boundary conditions.
    pub decomposition: Decomposition,
    /// Energy per atom.
    pub energy: f64,
}

/// Outcome of evaluating one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted(Evaluation),
    Rejected(Rejection),
}

impl Verdict {
    /// Whether every constraint holds.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Fitness to maximise: negated energy, `None` when rejected.
    pub fn fitness(&self) -> Option<f64> {
        match self {
            Self::Accepted(evaluation) => Some(-evaluation.energy),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

/// Evaluates occupancy vectors for one lattice and energy model.
///
/// Both topologies are built once here and shared by every evaluation.
#[derive(Debug)]
pub struct Evaluator {
    periodic: PeriodicLattice,
    open: OpenLattice,
    coefficients: MotifCoefficients,
    require_axial_bond: bool,
    require_circumferential_bond: bool,
    pool: Option<rayon::ThreadPool>,
}

impl Evaluator {
    /// Create an evaluator from a configuration.
    pub fn new(config: &EvaluatorConfig) -> Result<Self> {
        let dims = config.dims;
        let pool = match config.workers {
            0 => None,
            n => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
        };
        debug!(
            %dims,
            workers = config.workers,
            axial = config.require_axial_bond,
            circumferential = config.require_circumferential_bond,
            "evaluator ready"
        );
        Ok(Self {
            periodic: PeriodicLattice::new(dims),
            open: OpenLattice::new(dims),
            coefficients: config.coefficients,
            require_axial_bond: config.require_axial_bond,
            require_circumferential_bond: config.require_circumferential_bond,
            pool,
        })
    }

    /// Lattice dimensions.
    pub fn dims(&self) -> LatticeDims {
        self.periodic.dims()
    }

    /// Number of genes a candidate must have.
    pub fn genome_len(&self) -> usize {
        self.dims().site_count()
    }

    fn check_shape<O: Occupancy + ?Sized>(&self, v: &O) -> Result<()> {
        let expected = self.genome_len();
        if v.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                actual: v.len(),
            });
        }
        Ok(())
    }

    /// First violated constraint, if any. Assumes the shape was checked.
    fn violation<O: Occupancy + ?Sized>(&self, v: &O, atoms: usize) -> Option<Rejection> {
        if atoms == 0 {
            return Some(Rejection::Empty);
        }
        let clusters = atom_clusters(&self.open, v);
        if clusters != 1 {
            return Some(Rejection::Disconnected { clusters });
        }
        if self.require_axial_bond && !axial_seam_has_bond(&self.periodic, v) {
            return Some(Rejection::NoAxialBond);
        }
        if self.require_circumferential_bond && !circumferential_seam_has_bond(&self.periodic, v) {
            return Some(Rejection::NoCircumferentialBond);
        }
        None
    }

    /// Whether `v` passes every constraint.
    pub fn constraints_satisfied<O: Occupancy + ?Sized>(&self, v: &O) -> Result<bool> {
        self.check_shape(v)?;
        Ok(self.violation(v, number_of_atoms(v)).is_none())
    }

    /// Evaluate one candidate.
    pub fn evaluate<O: Occupancy + ?Sized>(&self, v: &O) -> Result<Verdict> {
        self.check_shape(v)?;
        let atoms = number_of_atoms(v);
        if let Some(reason) = self.violation(v, atoms) {
            trace!(%reason, atoms, "candidate rejected");
            return Ok(Verdict::Rejected(reason));
        }
        let decomposition = decomposition(&self.periodic, v);
        let Some(energy) = decomposition.energy_per_atom(&self.coefficients) else {
            return Ok(Verdict::Rejected(Rejection::Empty));
        };
        Ok(Verdict::Accepted(Evaluation {
            atoms,
            decomposition,
            energy,
        }))
    }

    /// Evaluate a population in parallel, preserving order.
    ///
    /// Fails if any candidate has the wrong shape.
    pub fn evaluate_population<O>(&self, population: &[O]) -> Result<Vec<Verdict>>
    where
        O: Occupancy + Sync,
    {
        let run = || {
            population
                .par_iter()
                .map(|v| self.evaluate(v))
                .collect::<Result<Vec<_>>>()
        };
        let verdicts = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }?;
        let accepted = verdicts.iter().filter(|v| v.is_accepted()).count();
        debug!(
            population = population.len(),
            accepted,
            rejected = population.len() - accepted,
            "population evaluated"
        );
        Ok(verdicts)
    }

    /// The accepted candidate with the lowest energy, by index.
    pub fn best<'a, I>(verdicts: I) -> Option<(usize, &'a Evaluation)>
    where
        I: IntoIterator<Item = &'a Verdict>,
    {
        verdicts
            .into_iter()
            .enumerate()
            .filter_map(|(i, v)| match v {
                Verdict::Accepted(e) => Some((i, e)),
                Verdict::Rejected(_) => None,
            })
            .min_by(|a, b| a.1.energy.total_cmp(&b.1.energy))
    }
}

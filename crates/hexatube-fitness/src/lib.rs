//! Fitness evaluation for nanotube unit-cell candidates.
//!
//! Sits between a combinatorial search and [`hexatube_lattice`]: a candidate
//! genotype (one bit per lattice site) is checked against the structural
//! constraints and, if it passes, scored by the motif energy model. Failed
//! constraints become [`Rejection`] reasons rather than errors, so the search
//! can discard the candidate and move on.
//!
//! ```
//! use hexatube_fitness::{Evaluator, EvaluatorConfig, Verdict};
//!
//! let evaluator = Evaluator::new(&EvaluatorConfig::default()).unwrap();
//! let full = vec![true; evaluator.genome_len()];
//! assert!(matches!(evaluator.evaluate(&full).unwrap(), Verdict::Accepted(_)));
//! ```

mod config;
mod error;
mod evaluator;
mod genotype;

pub use config::{EvaluatorConfig, ENV_CONFIG, ENV_N_PHI, ENV_N_Z, ENV_WORKERS};
pub use error::{Error, Result};
pub use evaluator::{Evaluation, Evaluator, Rejection, Verdict};
pub use genotype::{format_genotype, parse_genotype, read_genotypes};

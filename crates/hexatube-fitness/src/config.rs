//! Evaluator configuration.
//!
//! Loaded from JSON, from environment variables, or built in code. Unset
//! fields fall back to [`EvaluatorConfig::default`].
//!
//! ```json
//! {
//!   "dims": { "n_phi": 4, "n_z": 6 },
//!   "coefficients": [0.0, -1.2, -2.1, -2.9, -3.6, -4.2, -4.7],
//!   "require_axial_bond": true,
//!   "require_circumferential_bond": true,
//!   "workers": 0
//! }
//! ```

use std::path::Path;

use hexatube_lattice::{LatticeDims, MotifCoefficients};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable naming a JSON config file.
pub const ENV_CONFIG: &str = "HEXATUBE_CONFIG";
/// Environment variable overriding `dims.n_phi`.
pub const ENV_N_PHI: &str = "HEXATUBE_N_PHI";
/// Environment variable overriding `dims.n_z`.
pub const ENV_N_Z: &str = "HEXATUBE_N_Z";
/// Environment variable overriding `workers`.
pub const ENV_WORKERS: &str = "HEXATUBE_WORKERS";

/// Cell used when no dimensions are configured.
pub const DEFAULT_DIMS: LatticeDims = match LatticeDims::new(3, 4) {
    Ok(dims) => dims,
    Err(_) => panic!("default dimensions must be positive"),
};

/// Settings for an [`Evaluator`](crate::Evaluator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Unit cell size.
    pub dims: LatticeDims,

    /// Per-motif energy coefficients `e_0..e_6`.
    pub coefficients: MotifCoefficients,

    /// Reject cells with no bond across the axial seam.
    pub require_axial_bond: bool,

    /// Reject cells with no bond across the circumferential seam.
    pub require_circumferential_bond: bool,

    /// Worker threads for population evaluation (0 = rayon's global pool).
    pub workers: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            dims: DEFAULT_DIMS,
            coefficients: MotifCoefficients::default(),
            require_axial_bond: true,
            require_circumferential_bond: true,
            workers: 0,
        }
    }
}

impl EvaluatorConfig {
    /// Parse a JSON document. Dimensions are validated while parsing.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Create config from environment variables with defaults.
    ///
    /// `HEXATUBE_CONFIG` names a JSON file loaded first; `HEXATUBE_N_PHI`,
    /// `HEXATUBE_N_Z` and `HEXATUBE_WORKERS` override individual fields.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG) {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        let n_phi = parse_var(&lookup, ENV_N_PHI)?.unwrap_or(config.dims.n_phi());
        let n_z = parse_var(&lookup, ENV_N_Z)?.unwrap_or(config.dims.n_z());
        config.dims = LatticeDims::new(n_phi, n_z)?;
        if let Some(workers) = parse_var(&lookup, ENV_WORKERS)? {
            config.workers = workers;
        }

        Ok(config)
    }
}

fn parse_var<F>(lookup: &F, key: &'static str) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| Error::InvalidConfig { key, value })
        })
        .transpose()
}

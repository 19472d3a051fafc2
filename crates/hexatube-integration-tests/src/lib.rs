//! Shared fixtures for the end-to-end tests.

use hexatube_lattice::{LatticeDims, MotifCoefficients, Site};

/// Coefficients rewarding higher coordination, as a typical fitted model would.
pub const COEFFICIENTS: MotifCoefficients =
    MotifCoefficients([0.0, -1.2, -2.1, -2.9, -3.6, -4.2, -4.7]);

/// Install a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexatube_fitness=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Occupancy vector with exactly `sites` filled.
pub fn cell(dims: LatticeDims, sites: &[Site]) -> Vec<bool> {
    let mut v = vec![false; dims.site_count()];
    for &s in sites {
        v[dims.index(s)] = true;
    }
    v
}

/// Every site of rows `rows`.
pub fn rows(dims: LatticeDims, rows: impl IntoIterator<Item = usize>) -> Vec<Site> {
    rows.into_iter()
        .flat_map(|r| (0..dims.n_z()).map(move |c| Site::new(r, c)))
        .collect()
}

/// Every site of column `col`.
pub fn column(dims: LatticeDims, col: usize) -> Vec<Site> {
    (0..dims.rows()).map(|r| Site::new(r, col)).collect()
}

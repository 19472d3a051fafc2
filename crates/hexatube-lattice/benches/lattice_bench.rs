//! Benchmarks for hexatube lattice analysis
//!
//! Measures performance of:
//! - Neighbor lookups (periodic and open)
//! - Motif decomposition and energy
//! - Connectivity check
//! - Seam predicates

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hexatube_lattice::{
    axial_seam_has_bond, circumferential_seam_has_bond, decomposition, energy,
    is_single_component, LatticeDims, MotifCoefficients, OpenLattice, PeriodicLattice, Topology,
};

const SIZES: [(usize, usize); 4] = [(3, 4), (6, 8), (12, 16), (24, 32)];

const COEFFICIENTS: MotifCoefficients =
    MotifCoefficients([0.0, -1.2, -2.1, -2.9, -3.6, -4.2, -4.7]);

/// Dense but irregular occupancy, roughly 60% filled.
fn occupancy(dims: LatticeDims) -> Vec<bool> {
    (0..dims.site_count())
        .map(|i| (i * 7 + i / 3) % 5 < 3)
        .collect()
}

fn dims(n_phi: usize, n_z: usize) -> LatticeDims {
    LatticeDims::new(n_phi, n_z).expect("benchmark dimensions are positive")
}

/// Benchmark neighbor computation over every site
fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");

    for (n_phi, n_z) in SIZES {
        let d = dims(n_phi, n_z);
        let periodic = PeriodicLattice::new(d);
        let open = OpenLattice::new(d);
        group.throughput(Throughput::Elements(d.site_count() as u64));
        group.bench_with_input(BenchmarkId::new("periodic", d.site_count()), &periodic, |b, l| {
            b.iter(|| {
                (0..l.site_count())
                    .map(|i| l.neighbors(black_box(i)).len())
                    .sum::<usize>()
            })
        });
        group.bench_with_input(BenchmarkId::new("open", d.site_count()), &open, |b, l| {
            b.iter(|| {
                (0..l.site_count())
                    .map(|i| l.neighbors(black_box(i)).len())
                    .sum::<usize>()
            })
        });
    }
    group.finish();
}

/// Benchmark decomposition and energy
fn bench_motifs(c: &mut Criterion) {
    let mut group = c.benchmark_group("motifs");

    for (n_phi, n_z) in SIZES {
        let d = dims(n_phi, n_z);
        let lattice = PeriodicLattice::new(d);
        let v = occupancy(d);
        group.throughput(Throughput::Elements(d.site_count() as u64));
        group.bench_with_input(BenchmarkId::new("decomposition", d.site_count()), &v, |b, v| {
            b.iter(|| decomposition(&lattice, black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("energy", d.site_count()), &v, |b, v| {
            b.iter(|| energy(&lattice, black_box(v), &COEFFICIENTS))
        });
    }
    group.finish();
}

/// Benchmark union-find connectivity
fn bench_connectivity(c: &mut Criterion) {
    let mut group = c.benchmark_group("connectivity");

    for (n_phi, n_z) in SIZES {
        let d = dims(n_phi, n_z);
        let lattice = OpenLattice::new(d);
        let v = occupancy(d);
        group.throughput(Throughput::Elements(d.site_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(d.site_count()), &v, |b, v| {
            b.iter(|| is_single_component(&lattice, black_box(v)))
        });
    }
    group.finish();
}

/// Benchmark seam predicates on a configuration with no seam bonds (full scan)
fn bench_seams(c: &mut Criterion) {
    let mut group = c.benchmark_group("seams");

    for (n_phi, n_z) in SIZES {
        let d = dims(n_phi, n_z);
        let lattice = PeriodicLattice::new(d);
        let v = vec![false; d.site_count()];
        group.bench_with_input(BenchmarkId::new("axial", d.site_count()), &v, |b, v| {
            b.iter(|| axial_seam_has_bond(&lattice, black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("circumferential", d.site_count()), &v, |b, v| {
            b.iter(|| circumferential_seam_has_bond(&lattice, black_box(v)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_neighbors,
    bench_motifs,
    bench_connectivity,
    bench_seams,
);

criterion_main!(benches);

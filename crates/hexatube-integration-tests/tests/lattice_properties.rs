//! Structural properties of the lattice analysis, checked through the public API.

use hexatube_integration_tests::{cell, COEFFICIENTS};
use hexatube_lattice::{
    axial_seam_has_bond, circumferential_seam_has_bond, decomposition, energy,
    is_single_component, number_of_atoms, LatticeDims, OpenLattice, PeriodicLattice, Site,
    Topology,
};

#[test]
fn connectivity_on_three_by_two_cell() {
    let dims = LatticeDims::new(3, 2).unwrap();
    let open = OpenLattice::new(dims);

    assert!(!is_single_component(&open, &cell(dims, &[])));
    assert!(is_single_component(&open, &cell(dims, &[Site::new(2, 1)])));

    let a = Site::new(2, 0);
    let neighbor = dims.site(open.up_right(dims.index(a)).unwrap());
    assert!(is_single_component(&open, &cell(dims, &[a, neighbor])));

    assert!(!is_single_component(&open, &cell(dims, &[Site::new(0, 0), Site::new(5, 1)])));
}

#[test]
fn seam_predicates_are_independent() {
    let dims = LatticeDims::new(3, 4).unwrap();
    let lattice = PeriodicLattice::new(dims);

    let axial = cell(dims, &[Site::new(2, 3), Site::new(2, 0)]);
    assert!(axial_seam_has_bond(&lattice, &axial));
    assert!(!circumferential_seam_has_bond(&lattice, &axial));

    let circumferential = cell(dims, &[Site::new(5, 2), Site::new(0, 2)]);
    assert!(!axial_seam_has_bond(&lattice, &circumferential));
    assert!(circumferential_seam_has_bond(&lattice, &circumferential));
}

#[test]
fn shared_topology_across_threads() {
    let dims = LatticeDims::new(4, 6).unwrap();
    let lattice = PeriodicLattice::new(dims);
    let population: Vec<Vec<bool>> = (0..16)
        .map(|seed| (0..dims.site_count()).map(|i| (i * 31 + seed * 17) % 7 < 4).collect())
        .collect();

    let sequential: Vec<_> = population
        .iter()
        .map(|v| (decomposition(&lattice, v), energy(&lattice, v, &COEFFICIENTS)))
        .collect();

    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = population
            .iter()
            .map(|v| {
                let lattice = &lattice;
                s.spawn(move || (decomposition(lattice, v), energy(lattice, v, &COEFFICIENTS)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
    for (v, (d, _)) in population.iter().zip(&sequential) {
        assert_eq!(d.atoms(), number_of_atoms(v));
    }
}

#[test]
fn periodic_and_open_share_site_count() {
    let dims = LatticeDims::new(5, 3).unwrap();
    assert_eq!(PeriodicLattice::new(dims).site_count(), 30);
    assert_eq!(OpenLattice::new(dims).site_count(), 30);
}

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use ringsearch::{figueras::SssrFinder, hanser::AllRingsFinder, molecule::Molecule, templates};

pub fn ring_perception(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_perception");

    let fixtures: Vec<(&str, Molecule)> = vec![
        ("benzene", templates::benzene()),
        ("naphthalene", templates::naphthalene()),
        ("anthracene", templates::anthracene()),
        ("norbornane", templates::norbornane()),
        ("cubane", templates::cubane()),
    ];

    for (name, mol) in &fixtures {
        group.bench_with_input(BenchmarkId::new("all_rings", name), mol, |b, mol| {
            b.iter(|| AllRingsFinder::new().find_all_rings(mol).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("sssr", name), mol, |b, mol| {
            b.iter(|| SssrFinder::new().find_sssr(mol).unwrap())
        });
    }

    // the fused-square wall only makes sense size-bounded; unbounded, its
    // ring count is astronomical
    let grid = templates::square_grid(5, 10);
    group.bench_with_input(BenchmarkId::new("all_rings_max6", "grid_5x10"), &grid, |b, mol| {
        b.iter(|| {
            AllRingsFinder::new()
                .find_all_rings_bounded(mol, Some(6))
                .unwrap()
        })
    });
    group.bench_with_input(BenchmarkId::new("sssr", "grid_5x10"), &grid, |b, mol| {
        b.iter(|| SssrFinder::new().find_sssr(mol).unwrap())
    });

    group.finish();
}

criterion_group! {
    name = benchmark;
    config = Criterion::default().sample_size(20);
    targets = ring_perception
}
criterion_main!(benchmark);

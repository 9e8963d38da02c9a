//! Criterion micro-benchmarks for flood fill, write-back and rebuild.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use tessel_bench::{reference_section, scatter_coords, scenario, stress_section};
use tessel_core::{Coord, GeometryDescriptor, GridShape};
use tessel_edit::{
    encode_sites, flood_fill, EdgeDeltas, EditMode, EditorConfig, EditorSession, SyncEngine,
    WorldState,
};
use tessel_space::{build_grid, HexOffset, Square4};

/// Benchmark: flood the whole of an unconstrained 100x100 Square4.
fn bench_flood_square4_10k(c: &mut Criterion) {
    let grid = Square4::new(100, 100).unwrap();

    c.bench_function("flood_square4_10k", |b| {
        b.iter(|| {
            let region = flood_fill(&grid, Coord::new(50, 50), |_| true);
            black_box(region);
        });
    });
}

/// Benchmark: flood a checkerboard-restricted 100x100 HexOffset.
fn bench_flood_hex_10k(c: &mut Criterion) {
    let grid = HexOffset::new(100, 100).unwrap();

    c.bench_function("flood_hex_10k_sparse", |b| {
        b.iter(|| {
            let region = flood_fill(&grid, Coord::new(0, 0), |c| (c.x / 3 + c.y) % 5 != 0);
            black_box(region);
        });
    });
}

/// Benchmark: session fill of one 1000-cell owner band.
fn bench_fill_session_10k(c: &mut Criterion) {
    c.bench_function("session_fill_10k", |b| {
        b.iter_batched(
            || {
                let mut session =
                    EditorSession::new(scenario(reference_section()), EditorConfig::default())
                        .unwrap();
                session.apply_selection(Some(Coord::new(0, 0))).unwrap();
                session.set_mode(EditMode::Fill);
                session
            },
            |mut session| {
                let selection = session.apply_selection(Some(Coord::new(50, 5))).unwrap();
                black_box(selection);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: encode a fully built 100x100 world back into areas.
fn bench_encode_10k(c: &mut Criterion) {
    let world = WorldState::build(&reference_section()).unwrap();
    let default = reference_section().default_area;

    c.bench_function("encode_10k", |b| {
        b.iter(|| {
            let areas =
                encode_sites(world.sites().iter().map(|s| (s.coord(), s.content())), &default);
            black_box(areas);
        });
    });
}

/// Benchmark: write-back of 1000 scattered edits on the ~100K stress map.
fn bench_write_back_100k(c: &mut Criterion) {
    let coords = scatter_coords(1000, 316, 316);

    c.bench_function("write_back_100k", |b| {
        b.iter_batched(
            || {
                let mut session =
                    EditorSession::new(scenario(stress_section()), EditorConfig::default())
                        .unwrap();
                for &coord in &coords {
                    session.set_owner(coord, "Blue".into()).unwrap();
                }
                session
            },
            |mut session| {
                let report = session.synchronize().unwrap();
                black_box(report);
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: grow-then-rebuild of the 100x100 reference map.
fn bench_resize_10k(c: &mut Criterion) {
    c.bench_function("resize_10k", |b| {
        b.iter_batched(
            || {
                let mut engine =
                    SyncEngine::new(scenario(reference_section()), EditorConfig::default());
                engine.synchronize(EdgeDeltas::ZERO).unwrap();
                engine
            },
            |mut engine| {
                let report = engine.synchronize(EdgeDeltas::new(1, 1, 1, 1)).unwrap();
                black_box(report);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: construct each backend at 100x100.
fn bench_build_grid(c: &mut Criterion) {
    let shapes = [
        GridShape::Square4,
        GridShape::Square8,
        GridShape::Hex,
        GridShape::Triangle,
    ];

    c.bench_function("build_grid_all_shapes", |b| {
        b.iter(|| {
            for shape in shapes {
                let grid = build_grid(&GeometryDescriptor::new(shape, 100, 100)).unwrap();
                black_box(grid);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_flood_square4_10k,
    bench_flood_hex_10k,
    bench_fill_session_10k,
    bench_encode_10k,
    bench_write_back_100k,
    bench_resize_10k,
    bench_build_grid
);
criterion_main!(benches);

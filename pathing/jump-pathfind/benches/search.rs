//! Search throughput on procedurally obstructed grids.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use jump_pathfind::JumpPointSearcher;
use jump_types::{DiagonalPolicy, SearchConfig};
use vox_spatial::{VoxelGrid, VoxelPos};

/// Deterministic scatter of blockers, endpoints kept clear.
fn scattered_grid(dim: u32) -> VoxelGrid {
    let mut grid = VoxelGrid::open(dim, dim, dim);
    for z in 0..dim {
        for y in 0..dim {
            for x in 0..dim {
                let corner = (x, y, z) == (0, 0, 0) || (x, y, z) == (dim - 1, dim - 1, dim - 1);
                if !corner && (x * 7 + y * 13 + z * 29) % 11 == 0 {
                    grid.set(x, y, z, false);
                }
            }
        }
    }
    grid
}

fn bench_find_path(c: &mut Criterion) {
    let grid = scattered_grid(32);
    let start = VoxelPos::new(0, 0, 0);
    let finish = VoxelPos::new(31, 31, 31);

    c.bench_function("find_path/32_cube/always", |b| {
        let mut searcher = JumpPointSearcher::new(&grid);
        b.iter(|| black_box(searcher.find_path(black_box(start), black_box(finish))));
    });

    c.bench_function("find_path/32_cube/never", |b| {
        let config = SearchConfig::default().with_policy(DiagonalPolicy::Never);
        let mut searcher = JumpPointSearcher::with_config(&grid, config);
        b.iter(|| black_box(searcher.find_path(black_box(start), black_box(finish))));
    });
}

fn bench_open_grid(c: &mut Criterion) {
    let grid = VoxelGrid::open(64, 64, 64);
    let start = VoxelPos::new(0, 0, 0);
    let finish = VoxelPos::new(63, 63, 63);

    c.bench_function("find_path/64_cube/open", |b| {
        let mut searcher = JumpPointSearcher::new(&grid);
        b.iter(|| black_box(searcher.find_path(black_box(start), black_box(finish))));
    });
}

criterion_group!(benches, bench_find_path, bench_open_grid);
criterion_main!(benches);

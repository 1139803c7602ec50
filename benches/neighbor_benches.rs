use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xs_geotri::*;

// --- Fixtures for benchmarks ---
fn deep_cell(depth: usize) -> GeoTri {
  // Alternating corner tiles keep the ancestor search walking toward the root.
  let mut path = vec![7u8];
  path.extend((0..depth).map(|r| if r % 2 == 0 { 0 } else { 3 }));
  GeoTri::from_path(&path)
}

// --- Benchmark Functions ---

fn bench_from_path(c: &mut Criterion) {
  let mut group = c.benchmark_group("from_path");
  for depth in [1usize, 10, 29].iter() {
    let path = deep_cell(*depth).path();
    group.bench_with_input(format!("depth_{}", depth), &path, |b, p| {
      b.iter(|| GeoTri::from_path(black_box(p)));
    });
  }
  group.finish();
}

fn bench_truncate(c: &mut Criterion) {
  let g = deep_cell(29);
  c.benchmark_group("truncate")
    .bench_function("depth_29_to_0", |b| b.iter(|| black_box(g).truncate(black_box(0))))
    .bench_function("depth_29_to_15", |b| b.iter(|| black_box(g).truncate(black_box(15))));
}

fn bench_find_neighbor(c: &mut Criterion) {
  let mut group = c.benchmark_group("find_neighbor");
  for depth in [1usize, 10, 29].iter() {
    let g = deep_cell(*depth);
    for dir in [Direction::East, Direction::North, Direction::West] {
      group.bench_with_input(format!("depth_{}_{}", depth, dir), &g, |b, &g| {
        b.iter(|| find_neighbor(black_box(g), black_box(dir)));
      });
    }
  }
  group.finish();
}

fn bench_path_string(c: &mut Criterion) {
  let g = deep_cell(29);
  let s = g.to_string();
  c.benchmark_group("path_string")
    .bench_function("to_string", |b| b.iter(|| geo_tri_to_string(black_box(g))))
    .bench_function("parse", |b| b.iter(|| string_to_geo_tri(black_box(&s))));
}

criterion_group!(benches, bench_from_path, bench_truncate, bench_find_neighbor, bench_path_string);
criterion_main!(benches);

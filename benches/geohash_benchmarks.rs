use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geocell::{Direction, Geohash, adjacent, decode, decode_exact, distance3, encode, neighbors};

fn benchmark_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    for precision in [5, 9, 12] {
        group.bench_with_input(
            BenchmarkId::new("fixed_precision", precision),
            &precision,
            |b, &precision| {
                b.iter(|| encode(black_box(52.205), black_box(0.119), Some(precision)).unwrap())
            },
        );
    }

    // Auto precision tries each length until the decode reproduces the input
    group.bench_function("auto_precision_short", |b| {
        b.iter(|| encode(black_box(52.205), black_box(0.1188), None).unwrap())
    });
    group.bench_function("auto_precision_fallback", |b| {
        b.iter(|| encode(black_box(52.2050001234), black_box(0.1188005678), None).unwrap())
    });

    group.finish();
}

fn benchmark_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoding");

    group.bench_function("decode_exact", |b| {
        b.iter(|| decode_exact(black_box("u120fxwshvkg")).unwrap())
    });
    group.bench_function("decode_text", |b| {
        b.iter(|| decode(black_box("u120fxwshvkg")).unwrap())
    });

    group.finish();
}

fn benchmark_adjacency(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacency");

    group.bench_function("adjacent_interior", |b| {
        b.iter(|| adjacent(black_box("u120fxwshvkg"), Direction::East).unwrap())
    });
    // 'v' sits on a border, so the parent moves as well
    group.bench_function("adjacent_parent_carry", |b| {
        b.iter(|| adjacent(black_box("gbsuv"), Direction::North).unwrap())
    });
    group.bench_function("neighbors", |b| {
        b.iter(|| neighbors(black_box("u120fxwshvkg")).unwrap())
    });

    // Cached cell lookups versus a fresh cell every iteration
    let cell = Geohash::new("u120fxwshvkg").unwrap();
    group.bench_function("cell_neighbors_cached", |b| {
        b.iter(|| black_box(&cell).neighbors().n.as_str().len())
    });
    group.bench_function("cell_neighbors_fresh", |b| {
        b.iter(|| {
            let cell = Geohash::new(black_box("u120fxwshvkg")).unwrap();
            cell.neighbors().n.as_str().len()
        })
    });

    group.finish();
}

fn benchmark_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");

    group.bench_function("haversine_strings", |b| {
        b.iter(|| distance3(black_box("u120fxwsh"), black_box("gcpvj0"), None).unwrap())
    });

    let a = Geohash::new("u120fxwsh").unwrap();
    let other = Geohash::new("gcpvj0").unwrap();
    group.bench_function("haversine_cells", |b| {
        b.iter(|| black_box(&a).distance3_to(black_box(&other), geocell::R_M, false))
    });
    group.bench_function("prefix_cells", |b| {
        b.iter(|| black_box(&a).distance1_to(black_box(&other)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encoding,
    benchmark_decoding,
    benchmark_adjacency,
    benchmark_distance
);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use grah_geo::resolve_place;

fn resolve_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    group.bench_function("exact", |b| b.iter(|| resolve_place(black_box("Delhi"))));
    group.bench_function("partial_last", |b| {
        b.iter(|| resolve_place(black_box("tarawa")))
    });
    group.bench_function("miss", |b| {
        b.iter(|| resolve_place(black_box("Nowhereistan")))
    });
    group.finish();
}

criterion_group!(benches, resolve_bench);
criterion_main!(benches);

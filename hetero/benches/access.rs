use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hetero::prelude::*;

type Shape = (u8, u16, u32, u64, i8, i16, i32, i64);

const VALUES: Shape = (1, 2, 3, 4, 5, 6, 7, 8);

fn bench_access(c: &mut Criterion) {
    let mut g = c.benchmark_group("access");

    let flat = Flat::new(VALUES);
    let nested = Nested::new(VALUES);

    g.bench_function("flat/get_last", |b| b.iter(|| *black_box(&flat).get::<7>()));
    g.bench_function("nested/get_last", |b| {
        b.iter(|| *black_box(&nested).get::<7>())
    });
    g.bench_function("flat/unpack_ref", |b| {
        b.iter(|| {
            let (a, .., h) = black_box(&flat).unpack_ref();
            i64::from(*a) + *h
        })
    });
    g.bench_function("nested/unpack_ref", |b| {
        b.iter(|| {
            let (a, .., h) = black_box(&nested).unpack_ref();
            i64::from(*a) + *h
        })
    });

    let mut flat = flat;
    let mut nested = nested;
    g.bench_function("flat/set_last", |b| {
        b.iter(|| flat.set::<7>(black_box(9)))
    });
    g.bench_function("nested/set_last", |b| {
        b.iter(|| nested.set::<7>(black_box(9)))
    });
    g.finish();
}

criterion_group!(benches, bench_access);
criterion_main!(benches);

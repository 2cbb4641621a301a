use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_tiler::utils::polar::{PolarUnwrap, RemapTable};
use rust_tiler::{PointI, Raster};

fn bench_build_table(c: &mut Criterion) {
    let params = PolarUnwrap::new(PointI::new(640, 480), 150, 450);
    c.bench_function("polar_table_1280x960", |b| {
        b.iter(|| RemapTable::polar_unwrap(black_box(&params), 1280, 960))
    });
}

fn bench_apply_table(c: &mut Criterion) {
    let params = PolarUnwrap::new(PointI::new(640, 480), 150, 450);
    let table = RemapTable::polar_unwrap(&params, 1280, 960).unwrap();
    let image = Raster::<u8>::new(1280, 960, 1);
    c.bench_function("polar_apply_1280x960", |b| {
        b.iter(|| table.apply(black_box(&image)))
    });
}

criterion_group!(benches, bench_build_table, bench_apply_table);
criterion_main!(benches);

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nyx_lunar::{LunarConfig, model_lighting, moon_phase, moon_phase_exact, phase_bucket};

fn moon_phase_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    let config = LunarConfig::default();

    let mut group = c.benchmark_group("moon_phase");
    group.bench_function("rounded", |b| b.iter(|| moon_phase(black_box(date))));
    group.bench_function("exact", |b| {
        b.iter(|| moon_phase_exact(black_box(date), &config))
    });
    group.finish();
}

fn presentation_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("presentation");
    group.bench_function("phase_bucket", |b| b.iter(|| phase_bucket(black_box(18.42))));
    group.bench_function("model_lighting", |b| {
        b.iter(|| model_lighting(black_box(224.6)))
    });
    group.finish();
}

criterion_group!(benches, moon_phase_bench, presentation_bench);
criterion_main!(benches);

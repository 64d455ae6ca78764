use chart_core::{build_line_points, DataPoint, FieldId, MemoryScaling, TelemetryField, TelemetryUnit};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_field(n: usize) -> TelemetryField {
    let mut f = TelemetryField::new(FieldId(0), "heap", TelemetryUnit::Memory);
    let mut t = 0.0f64;
    for i in 0..n {
        // bursts of dense samples separated by multi-second gaps
        t += if i % 64 == 0 { 3.0 } else { 0.05 };
        let v = 512.0 * 1024.0 * 1024.0 + (i as f64 * 0.01).sin() * 64.0 * 1024.0 * 1024.0;
        f.push(DataPoint::scalar(t, v)).expect("ascending");
    }
    f
}

fn bench_line_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_points");
    for &n in &[10_000usize, 100_000usize] {
        let field = gen_field(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &field, |b, f| {
            b.iter(|| black_box(build_line_points(f, MemoryScaling::Megabytes, 1.0)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_line_points);
criterion_main!(benches);

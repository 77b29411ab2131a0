use dial_core::{interpolate, AnchorTable, Dial, DialConfig};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_anchors(n: usize) -> AnchorTable {
    // gently non-uniform scale over 0..n*10
    (0..=n)
        .map(|i| {
            let t = i as f64 * 10.0;
            (t, t * 1.35 + (i as f64 * 0.7).sin() * 4.0)
        })
        .collect()
}

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");
    for &(n, minor) in &[(20usize, 1.0f64), (200usize, 0.1f64)] {
        let anchors = build_anchors(n);
        group.bench_function(format!("anchors_{n}_minor_{minor}"), |b| {
            b.iter(|| black_box(interpolate(&anchors, 10.0, minor).expect("interpolate")));
        });
    }
    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let dial = Dial::new(DialConfig::default(), None).expect("default config");
    c.bench_function("plan_default_dial", |b| {
        b.iter(|| black_box(dial.plan().expect("plan")));
    });
}

criterion_group!(benches, bench_interpolate, bench_plan);
criterion_main!(benches);

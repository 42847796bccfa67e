use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ldasim::{
    run_topic_scene, RandSampler, RecordingSink, Sampler, SceneLayout, TopicSceneConfig,
};
use std::hint::black_box;
use std::time::Duration;

fn bench_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("draws");

    for k in [2usize, 10, 100] {
        let alpha = vec![5.0; k];
        group.bench_with_input(BenchmarkId::new("dirichlet", k), &alpha, |b, alpha| {
            let mut s = RandSampler::with_seed(0);
            b.iter(|| black_box(s.dirichlet(alpha).unwrap()))
        });

        let p = vec![1.0 / k as f64; k];
        group.bench_with_input(BenchmarkId::new("categorical", k), &p, |b, p| {
            let mut s = RandSampler::with_seed(0);
            b.iter(|| black_box(s.categorical(p).unwrap()))
        });
    }

    group.bench_function("beta/2,5", |b| {
        let mut s = RandSampler::with_seed(0);
        b.iter(|| black_box(s.beta(2.0, 5.0).unwrap()))
    });

    group.finish();
}

fn bench_topic_scene(c: &mut Criterion) {
    // A large corpus so setup costs are negligible.
    let cfg = TopicSceneConfig {
        documents: 200,
        words_per_document: 50,
        pause: Duration::ZERO,
        hold: Duration::ZERO,
        ..TopicSceneConfig::default()
    };
    c.bench_function("topic_scene/200x50", |b| {
        b.iter(|| {
            let mut sink = RecordingSink::new(SceneLayout::topic_generation(2, 10));
            let mut s = RandSampler::with_seed(0);
            black_box(run_topic_scene(&cfg, &mut s, &mut sink).unwrap())
        })
    });
}

criterion_group!(benches, bench_draws, bench_topic_scene);
criterion_main!(benches);

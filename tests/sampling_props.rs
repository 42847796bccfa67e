//! Property tests for the loop contracts.
//!
//! 1. **Valid samples**: every vector a loop pushes is a probability distribution.
//! 2. **Bounded indices**: every derived topic / word index is in range.
//! 3. **One update per iteration**: N iterations → exactly N `set_values` calls.
//! 4. **Determinism**: same seed + config → identical trace.

use ldasim::simplex::{is_distribution, SIMPLEX_TOL};
use ldasim::{
    run_beta_scene, run_dirichlet_scene, run_topic_scene, BetaSceneConfig, Chart,
    DirichletSceneConfig, RandSampler, RecordingSink, SceneLayout, TopicSceneConfig,
};
use proptest::prelude::*;
use std::time::Duration;

fn concentration() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.05f64..100.0f64, 1..8)
}

proptest! {
    #[test]
    fn dirichlet_scene_pushes_valid_distributions(
        alpha in concentration(),
        draws in 0usize..25,
        seed in any::<u64>(),
    ) {
        let cfg = DirichletSceneConfig { concentration: alpha.clone(), draws, pause: Duration::ZERO };
        let mut sink = RecordingSink::new(SceneLayout::single_chart(alpha.len(), 1.0));
        let trace = run_dirichlet_scene(&cfg, &mut RandSampler::with_seed(seed), &mut sink).unwrap();

        prop_assert_eq!(trace.samples.len(), draws);
        prop_assert_eq!(sink.updates(Chart::Topics), draws);
        for p in sink.value_history(Chart::Topics) {
            prop_assert!(is_distribution(p, SIMPLEX_TOL), "p={:?}", p);
        }
    }

    #[test]
    fn beta_scene_update_count_and_range(
        a in 0.1f64..20.0f64,
        b in 0.1f64..20.0f64,
        draws in 0usize..25,
        seed in any::<u64>(),
    ) {
        let cfg = BetaSceneConfig { alpha: a, beta: b, draws, curve_points: 0, ..BetaSceneConfig::default() };
        let mut sink = RecordingSink::new(SceneLayout::beta_resample());
        let trace = run_beta_scene(&cfg, &mut RandSampler::with_seed(seed), &mut sink).unwrap();

        prop_assert_eq!(sink.updates(Chart::Topics), draws);
        for pair in trace.pairs() {
            prop_assert!(is_distribution(&pair, 1e-12));
        }
    }

    #[test]
    fn topic_scene_indices_in_bounds(
        topic_alpha in concentration(),
        block in 1usize..6,
        documents in 0usize..5,
        words_per_document in 0usize..8,
        seed in any::<u64>(),
    ) {
        let topics = topic_alpha.len();
        let cfg = TopicSceneConfig {
            word_concentrations: vec![vec![2.0; block]; topics],
            topic_concentration: topic_alpha,
            documents,
            words_per_document,
            ..TopicSceneConfig::default()
        };
        let vocab = cfg.vocabulary_size();
        let mut sink = RecordingSink::new(SceneLayout::topic_generation(topics, vocab));
        let trace = run_topic_scene(&cfg, &mut RandSampler::with_seed(seed), &mut sink).unwrap();

        prop_assert_eq!(sink.updates(Chart::Topics), documents);
        prop_assert_eq!(sink.updates(Chart::Words), documents);
        prop_assert_eq!(trace.tokens().count(), documents * words_per_document);
        for t in trace.tokens() {
            prop_assert!(t.topic < topics);
            prop_assert!(t.word < vocab);
        }
    }

    #[test]
    fn same_seed_same_trace(seed in any::<u64>()) {
        let cfg = TopicSceneConfig::default();
        let run = || {
            let mut sink = RecordingSink::new(SceneLayout::topic_generation(2, 10));
            let trace = run_topic_scene(&cfg, &mut RandSampler::with_seed(seed), &mut sink).unwrap();
            (trace, sink.events().to_vec())
        };
        prop_assert_eq!(run(), run());
    }
}

//! LDA's generative story for three short documents, rendered as text.
//!
//! Run with:
//!   cargo run --example topic_generation
//!   cargo run --example topic_generation -- 7   # fixed seed

use ldasim::vocab::topic_label;
use ldasim::{run_topic_scene, RandSampler, SceneLayout, TextSink, TopicSceneConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with_writer(std::io::stderr)
        .init();

    let mut sampler = match std::env::args().nth(1) {
        Some(s) => RandSampler::with_seed(s.parse()?),
        None => RandSampler::from_entropy(),
    };

    let cfg = TopicSceneConfig::default();
    let layout = SceneLayout::topic_generation(cfg.topics(), cfg.vocabulary_size());
    let mut sink = TextSink::new(std::io::stdout().lock(), layout).with_width(30);
    let trace = run_topic_scene(&cfg, &mut sampler, &mut sink)?;

    for (topic, n) in trace.topic_counts(cfg.topics()).into_iter().enumerate() {
        eprintln!("{:>8}: {n} tokens", topic_label(topic));
    }
    Ok(())
}

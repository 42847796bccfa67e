//! Beta resampling next to its PDF, rendered as text.
//!
//! Run with:
//!   cargo run --example beta_resample
//!   RUST_LOG=debug cargo run --example beta_resample -- 42

use ldasim::{run_beta_scene, BetaSceneConfig, RandSampler, SceneLayout, TextSink};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    // Optional seed as the first argument; unseeded otherwise.
    let mut sampler = match std::env::args().nth(1) {
        Some(s) => RandSampler::with_seed(s.parse()?),
        None => RandSampler::from_entropy(),
    };

    let cfg = BetaSceneConfig::default();
    let mut sink =
        TextSink::new(std::io::stdout().lock(), SceneLayout::beta_resample()).realtime(true);
    let trace = run_beta_scene(&cfg, &mut sampler, &mut sink)?;

    let mean = trace.draws.iter().sum::<f64>() / trace.draws.len().max(1) as f64;
    eprintln!(
        "{} draws, sample mean {mean:.3} (Beta({}, {}) mean {:.3})",
        trace.draws.len(),
        cfg.alpha,
        cfg.beta,
        cfg.alpha / (cfg.alpha + cfg.beta)
    );
    Ok(())
}

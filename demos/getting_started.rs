//! Getting started: plug your own display into a sampling loop.
//!
//! A sink only needs two methods: `set_values` (new bar heights) and
//! `position` (where a bar is, so arrows can point at it). Everything else has
//! a no-op default.
//!
//! Run with:
//!   cargo run --example getting_started

use ldasim::{
    run_dirichlet_scene, run_topic_scene, Chart, DirichletSceneConfig, DisplaySink, Point,
    RandSampler, SimResult, Token, TopicSceneConfig,
};

/// Prints every update on one line and puts bar `k` at `x = k`.
struct PrintSink {
    updates: usize,
}

impl DisplaySink for PrintSink {
    fn set_values(&mut self, chart: Chart, values: &[f64]) -> SimResult<()> {
        self.updates += 1;
        let shown: Vec<String> = values.iter().map(|v| format!("{v:.2}")).collect();
        println!("{chart:?}: [{}]", shown.join(", "));
        Ok(())
    }

    fn position(&self, _chart: Chart, index: usize) -> SimResult<Point> {
        Ok(Point::new(index as f64, 0.0))
    }

    fn assign_token(&mut self, token: &Token) -> SimResult<()> {
        println!(
            "  doc {} slot {}: topic {} word {}",
            token.document, token.slot, token.topic, token.word
        );
        Ok(())
    }
}

fn main() -> SimResult<()> {
    // -----------------------------------------------------------------
    // 1. Five Dirichlet(10, 20) draws, fixed seed.
    // -----------------------------------------------------------------
    let mut sampler = RandSampler::with_seed(0);
    let mut sink = PrintSink { updates: 0 };
    let cfg = DirichletSceneConfig {
        draws: 5,
        ..DirichletSceneConfig::default()
    };
    run_dirichlet_scene(&cfg, &mut sampler, &mut sink)?;

    // -----------------------------------------------------------------
    // 2. One document of the topic scene with the same sampler.
    // -----------------------------------------------------------------
    let cfg = TopicSceneConfig {
        documents: 1,
        ..TopicSceneConfig::default()
    };
    run_topic_scene(&cfg, &mut sampler, &mut sink)?;

    println!("{} updates in total", sink.updates);
    Ok(())
}

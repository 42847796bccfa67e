//! `ldasim`: seedable Dirichlet / Beta sampling-and-redraw loops.
//!
//! The crate reproduces the logic of a few animated topic-model scenes without
//! any rendering dependency. A loop draws probability vectors, derives discrete
//! topic / word choices from them, and pushes everything into a
//! [`DisplaySink`]: whatever actually draws bars and arrows lives behind that
//! trait.
//!
//! **Loops:**
//! - [`run_dirichlet_scene`]: redraw one bar chart from `Dirichlet(alpha)`.
//! - [`run_beta_scene`]: resample `Beta(a, b)` next to its PDF; each draw `p`
//!   becomes the two-bar distribution `[p, 1 - p]` and moves a dot on the axes.
//! - [`run_topic_scene`]: LDA's generative story. Per document draw topic
//!   proportions and per-topic word distributions; per word slot draw a topic,
//!   then a word from that topic's block of the vocabulary.
//! - [`run_bar_transition`]: the static "chart becomes another chart" scene.
//!
//! **Collaborators:**
//! - [`Sampler`] / [`RandSampler`]: Dirichlet, Beta and one-hot multinomial
//!   draws on a seedable `StdRng`.
//! - [`DisplaySink`]: `set_values` + `position`, plus optional marker, curve,
//!   document and pause hooks. [`RecordingSink`] records calls,
//!   [`TextSink`] renders to any `io::Write`.
//!
//! **Goals:**
//! - **Deterministic by default**: same seed + config → same scene.
//! - **Immutable configuration**: parameters live in config structs handed to a
//!   loop; nothing is read from globals.
//! - **Fail fast**: a bad parameter or a failing sink ends the run with a
//!   [`SimError`]; there is no retry or recovery.
//!
//! **Non-goals:**
//! - No rendering engine, scene graph, tweening or timing model.
//! - No icon loading, colour themes or axis tick formatting.
//!
//! # Example
//!
//! ```rust
//! use ldasim::{run_topic_scene, Chart, RandSampler, RecordingSink, SceneLayout, TopicSceneConfig};
//!
//! let cfg = TopicSceneConfig::default();
//! let mut sampler = RandSampler::with_seed(0);
//! let mut sink = RecordingSink::new(SceneLayout::topic_generation(2, 10));
//!
//! let trace = run_topic_scene(&cfg, &mut sampler, &mut sink).unwrap();
//! assert_eq!(trace.documents.len(), 3);
//! assert!(trace.tokens().all(|t| t.word < cfg.vocabulary_size()));
//! assert_eq!(sink.updates(Chart::Words), 3);
//! ```

#![forbid(unsafe_code)]

mod error;
pub use error::*;

pub mod simplex;

mod sampler;
pub use sampler::*;

mod config;
pub use config::*;

mod layout;
pub use layout::*;

mod sink;
pub use sink::*;

mod text_sink;
pub use text_sink::*;

mod density;
pub use density::*;

mod scene;
pub use scene::*;

pub mod vocab;

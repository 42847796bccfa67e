//! Sampling-and-redraw loops.
//!
//! Each loop borrows a [`Sampler`] and a [`DisplaySink`], runs a fixed number of
//! iterations and returns a trace of everything it drew. Nothing is kept between
//! runs; calling a loop twice with the same seed replays the same scene.
//!
//! Per iteration the shape is always the same:
//! 1. draw a probability vector,
//! 2. optionally derive discrete categories from it (one-hot draw + arg-max),
//! 3. push the vector / highlights to the sink,
//! 4. ask the sink to pause.
//!
//! Errors from either collaborator end the run immediately.

use tracing::{debug, info};

use crate::simplex::complement_pair;
use crate::{
    pdf_curve, BarTransition, BetaSceneConfig, Chart, DirichletSceneConfig, DisplaySink, Marker,
    Sampler, SimError, SimResult, Token, TopicSceneConfig,
};

/// Every vector drawn by [`run_dirichlet_scene`], in draw order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirichletTrace {
    pub samples: Vec<Vec<f64>>,
}

/// Every scalar drawn by [`run_beta_scene`], in draw order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaTrace {
    pub draws: Vec<f64>,
}

impl BetaTrace {
    /// Each draw paired with its complement, as pushed to the bar chart.
    pub fn pairs(&self) -> Vec<[f64; 2]> {
        self.draws.iter().map(|&p| complement_pair(p)).collect()
    }
}

/// One generated document.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentTrace {
    pub topic_probs: Vec<f64>,
    /// Concatenation of the per-topic word distributions.
    pub word_probs: Vec<f64>,
    pub tokens: Vec<Token>,
}

/// Every document generated by [`run_topic_scene`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopicTrace {
    pub documents: Vec<DocumentTrace>,
}

impl TopicTrace {
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.documents.iter().flat_map(|d| d.tokens.iter())
    }

    /// How often each topic was drawn, indexed by topic.
    pub fn topic_counts(&self, topics: usize) -> Vec<usize> {
        let mut counts = vec![0; topics];
        for t in self.tokens() {
            if let Some(c) = counts.get_mut(t.topic) {
                *c += 1;
            }
        }
        counts
    }
}

/// Redraw a single bar chart from `Dirichlet(concentration)` `draws` times.
pub fn run_dirichlet_scene<S, D>(
    cfg: &DirichletSceneConfig,
    sampler: &mut S,
    sink: &mut D,
) -> SimResult<DirichletTrace>
where
    S: Sampler + ?Sized,
    D: DisplaySink + ?Sized,
{
    cfg.validate()?;
    info!(
        categories = cfg.concentration.len(),
        draws = cfg.draws,
        "dirichlet scene"
    );

    let mut trace = DirichletTrace {
        samples: Vec::with_capacity(cfg.draws),
    };
    for i in 0..cfg.draws {
        let sample = sampler.dirichlet(&cfg.concentration)?;
        debug!(draw = i, ?sample, "dirichlet draw");
        sink.set_values(Chart::Topics, &sample)?;
        sink.pause(cfg.pause)?;
        trace.samples.push(sample);
    }
    Ok(trace)
}

/// Resample `Beta(alpha, beta)` next to its PDF.
///
/// Each draw `p` moves the dot on the PDF axes to `(p, 0)` and sets the two-bar
/// chart to `[p, 1 - p]`.
pub fn run_beta_scene<S, D>(
    cfg: &BetaSceneConfig,
    sampler: &mut S,
    sink: &mut D,
) -> SimResult<BetaTrace>
where
    S: Sampler + ?Sized,
    D: DisplaySink + ?Sized,
{
    cfg.validate()?;
    info!(alpha = cfg.alpha, beta = cfg.beta, draws = cfg.draws, "beta scene");

    if cfg.curve_points >= 2 {
        let curve = pdf_curve(cfg.alpha, cfg.beta, cfg.curve_points)?;
        sink.plot_curve(&curve)?;
    }

    let mut trace = BetaTrace {
        draws: Vec::with_capacity(cfg.draws),
    };
    for i in 0..cfg.draws {
        let p = sampler.beta(cfg.alpha, cfg.beta)?;
        debug!(draw = i, p, "beta draw");
        let at = sink.axis_point(p, 0.0)?;
        sink.place_marker(Marker::Dot, at)?;
        sink.set_values(Chart::Topics, &complement_pair(p))?;
        sink.pause(cfg.pause)?;
        trace.draws.push(p);
    }
    sink.pause(cfg.hold)?;
    Ok(trace)
}

/// Generate documents the way LDA does: per document draw topic proportions and
/// per-topic word distributions, then per word slot draw a topic and a word
/// from that topic's block.
///
/// Word indices refer to the concatenated vocabulary, so they always lie in
/// `[0, cfg.vocabulary_size())`.
pub fn run_topic_scene<S, D>(
    cfg: &TopicSceneConfig,
    sampler: &mut S,
    sink: &mut D,
) -> SimResult<TopicTrace>
where
    S: Sampler + ?Sized,
    D: DisplaySink + ?Sized,
{
    cfg.validate()?;
    info!(
        topics = cfg.topics(),
        vocabulary = cfg.vocabulary_size(),
        documents = cfg.documents,
        words_per_document = cfg.words_per_document,
        "topic scene"
    );

    let mut trace = TopicTrace {
        documents: Vec::with_capacity(cfg.documents),
    };
    for doc in 0..cfg.documents {
        let topic_probs = sampler.dirichlet(&cfg.topic_concentration)?;
        let mut word_probs = Vec::with_capacity(cfg.vocabulary_size());
        for alpha in &cfg.word_concentrations {
            word_probs.extend(sampler.dirichlet(alpha)?);
        }

        if doc > 0 {
            sink.hide_marker(Marker::TopicArrow)?;
            sink.hide_marker(Marker::WordArrow)?;
        }
        sink.set_values(Chart::Topics, &topic_probs)?;
        sink.set_values(Chart::Words, &word_probs)?;
        sink.pause(cfg.pause)?;
        sink.begin_document(doc)?;
        info!(document = doc, ?topic_probs, "document");

        let mut tokens = Vec::with_capacity(cfg.words_per_document);
        for slot in 0..cfg.words_per_document {
            let topic = sampler.categorical(&topic_probs)?;
            let block = cfg.word_block(topic).ok_or(SimError::CategoryOutOfRange {
                chart: Chart::Topics,
                index: topic,
                len: cfg.topics(),
            })?;
            let block_probs = word_probs.get(block.clone()).ok_or_else(|| {
                SimError::InvalidProbabilities {
                    reason: format!(
                        "word distribution has {} entries, topic {topic} needs {block:?}",
                        word_probs.len()
                    ),
                }
            })?;
            let word = block.start + sampler.categorical(block_probs)?;
            let token = Token {
                document: doc,
                slot,
                topic,
                word,
            };
            debug!(document = doc, slot, topic, word, "token");

            let topic_at = sink.position(Chart::Topics, topic)?;
            sink.place_marker(Marker::TopicArrow, topic_at)?;
            let word_at = sink.position(Chart::Words, word)?;
            sink.place_marker(Marker::WordArrow, word_at)?;
            sink.assign_token(&token)?;
            tokens.push(token);
        }

        trace.documents.push(DocumentTrace {
            topic_probs,
            word_probs,
            tokens,
        });
    }
    sink.pause(cfg.hold)?;
    Ok(trace)
}

/// Show `from`, replace it with `to`, hold.
pub fn run_bar_transition<D>(t: &BarTransition, sink: &mut D) -> SimResult<()>
where
    D: DisplaySink + ?Sized,
{
    t.validate()?;
    debug!(from = ?t.from, to = ?t.to, "bar transition");
    if !t.labels.is_empty() {
        sink.set_labels(Chart::Topics, &t.labels)?;
    }
    sink.set_values(Chart::Topics, &t.from)?;
    sink.set_values(Chart::Topics, &t.to)?;
    sink.pause(t.hold)
}

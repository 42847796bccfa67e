//! Scene configuration.
//!
//! Distribution parameters are fixed for a whole run, so each loop takes one of
//! these structs by reference at the start and never mutates it. `Default`
//! gives the two-topic, ten-word scene and the Beta(2, 5) resampling scene.
//!
//! `validate` only checks structure (counts, block shapes). Whether a
//! concentration or shape is positive is left to the sampler, which reports it
//! as a [`SimError`] when the draw is attempted.

use std::time::Duration;

use crate::{SimError, SimResult};

/// Repeated Dirichlet draws pushed into a single bar chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DirichletSceneConfig {
    /// Concentration parameters (one per bar).
    pub concentration: Vec<f64>,
    pub draws: usize,
    /// Pause after each redraw.
    pub pause: Duration,
}

impl Default for DirichletSceneConfig {
    fn default() -> Self {
        Self {
            concentration: vec![10.0, 20.0],
            draws: 1,
            pause: Duration::from_secs(1),
        }
    }
}

impl DirichletSceneConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.concentration.is_empty() {
            return Err(SimError::Config {
                reason: "dirichlet scene needs at least one category".to_string(),
            });
        }
        Ok(())
    }
}

/// Beta resampling next to its PDF.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BetaSceneConfig {
    pub alpha: f64,
    pub beta: f64,
    /// Number of resamples.
    pub draws: usize,
    /// Pause after each resample.
    pub pause: Duration,
    /// Pause after the last resample.
    pub hold: Duration,
    /// Number of points used to draw the PDF curve (`0` skips the curve).
    pub curve_points: usize,
}

impl Default for BetaSceneConfig {
    fn default() -> Self {
        Self {
            alpha: 2.0,
            beta: 5.0,
            draws: 10,
            pause: Duration::from_secs(1),
            hold: Duration::from_secs(2),
            curve_points: 101,
        }
    }
}

impl BetaSceneConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.curve_points == 1 {
            return Err(SimError::Config {
                reason: "a PDF curve needs at least two points".to_string(),
            });
        }
        Ok(())
    }
}

/// Generative topic-model scene: documents of words drawn topic-first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TopicSceneConfig {
    /// Dirichlet concentration over topics.
    pub topic_concentration: Vec<f64>,
    /// One Dirichlet concentration vector per topic, over that topic's word block.
    pub word_concentrations: Vec<Vec<f64>>,
    pub documents: usize,
    pub words_per_document: usize,
    /// Pause after redrawing both charts for a document.
    pub pause: Duration,
    /// Pause after the last document.
    pub hold: Duration,
}

impl Default for TopicSceneConfig {
    fn default() -> Self {
        Self {
            topic_concentration: vec![10.0, 20.0],
            word_concentrations: vec![
                vec![5.0, 10.0, 8.0, 3.0, 10.0],
                vec![10.0, 3.0, 8.0, 9.0, 5.0],
            ],
            documents: 3,
            words_per_document: 5,
            pause: Duration::from_secs(1),
            hold: Duration::from_secs(2),
        }
    }
}

impl TopicSceneConfig {
    pub fn topics(&self) -> usize {
        self.topic_concentration.len()
    }

    /// Total vocabulary size (sum of all word blocks).
    pub fn vocabulary_size(&self) -> usize {
        self.word_concentrations.iter().map(Vec::len).sum()
    }

    /// Index range of topic `topic`'s block in the concatenated word vector.
    pub fn word_block(&self, topic: usize) -> Option<std::ops::Range<usize>> {
        let len = self.word_concentrations.get(topic)?.len();
        let start: usize = self.word_concentrations[..topic].iter().map(Vec::len).sum();
        Some(start..start + len)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.topic_concentration.is_empty() {
            return Err(SimError::Config {
                reason: "topic scene needs at least one topic".to_string(),
            });
        }
        if self.word_concentrations.len() != self.topic_concentration.len() {
            return Err(SimError::Config {
                reason: format!(
                    "{} topics but {} word blocks",
                    self.topic_concentration.len(),
                    self.word_concentrations.len()
                ),
            });
        }
        if let Some(t) = self.word_concentrations.iter().position(Vec::is_empty) {
            return Err(SimError::Config {
                reason: format!("word block of topic {t} is empty"),
            });
        }
        Ok(())
    }
}

/// Static chart transition: show `from`, morph into `to`, hold.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarTransition {
    pub labels: Vec<String>,
    pub from: Vec<f64>,
    pub to: Vec<f64>,
    pub hold: Duration,
}

impl Default for BarTransition {
    fn default() -> Self {
        Self {
            labels: ["food", "animals", "sport"].map(String::from).to_vec(),
            from: vec![0.0, 0.0, 0.0],
            to: vec![0.4, 0.3, 0.3],
            hold: Duration::from_secs(2),
        }
    }
}

impl BarTransition {
    pub fn validate(&self) -> SimResult<()> {
        if self.to.is_empty() || self.from.len() != self.to.len() {
            return Err(SimError::Config {
                reason: format!(
                    "transition from {} bars to {} bars",
                    self.from.len(),
                    self.to.len()
                ),
            });
        }
        if !self.labels.is_empty() && self.labels.len() != self.to.len() {
            return Err(SimError::Config {
                reason: format!("{} labels for {} bars", self.labels.len(), self.to.len()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_scene_constants() {
        let t = TopicSceneConfig::default();
        assert_eq!(t.topics(), 2);
        assert_eq!(t.vocabulary_size(), 10);
        assert_eq!(t.documents * t.words_per_document, 15);
        let b = BetaSceneConfig::default();
        assert_eq!((b.alpha, b.beta, b.draws), (2.0, 5.0, 10));
        assert!(t.validate().is_ok());
        assert!(b.validate().is_ok());
        assert!(DirichletSceneConfig::default().validate().is_ok());
    }

    #[test]
    fn word_blocks_are_contiguous() {
        let t = TopicSceneConfig {
            word_concentrations: vec![vec![1.0; 3], vec![1.0; 4]],
            ..TopicSceneConfig::default()
        };
        assert_eq!(t.word_block(0), Some(0..3));
        assert_eq!(t.word_block(1), Some(3..7));
        assert_eq!(t.word_block(2), None);
    }

    #[test]
    fn mismatched_blocks_are_rejected() {
        let t = TopicSceneConfig {
            topic_concentration: vec![1.0, 1.0, 1.0],
            ..TopicSceneConfig::default()
        };
        assert!(matches!(t.validate(), Err(SimError::Config { .. })));

        let t = TopicSceneConfig {
            word_concentrations: vec![vec![1.0], vec![]],
            ..TopicSceneConfig::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn non_positive_concentration_is_not_a_config_error() {
        // Left for the sampler to reject at draw time.
        let d = DirichletSceneConfig {
            concentration: vec![-1.0, 2.0],
            ..DirichletSceneConfig::default()
        };
        assert!(d.validate().is_ok());
    }

    #[test]
    fn transition_shapes_must_agree() {
        assert!(BarTransition::default().validate().is_ok());
        let t = BarTransition {
            to: vec![0.5, 0.5],
            ..BarTransition::default()
        };
        assert!(t.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let t: TopicSceneConfig = serde_json::from_str(r#"{"documents": 7}"#).unwrap();
        assert_eq!(t.documents, 7);
        assert_eq!(t.words_per_document, 5);
    }
}

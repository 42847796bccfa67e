//! Error types for sampling loops and display sinks.
//!
//! Nothing here is recovered from: a failed draw or a failed sink call ends the
//! run, and the error is handed back to the caller unchanged.

use thiserror::Error;

use crate::Chart;

/// Result alias used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;

/// Everything that can end a sampling run early.
#[derive(Debug, Error)]
pub enum SimError {
    /// A `rand_distr` constructor rejected its parameters.
    #[error("invalid {what} parameters: {source}")]
    Distribution {
        what: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A parameter vector had no entries.
    #[error("{what} needs at least one parameter")]
    EmptyParameters { what: &'static str },

    /// A single parameter was non-finite or not strictly positive.
    #[error("{what} parameter #{index} must be finite and > 0 (got {value})")]
    InvalidParameter {
        what: &'static str,
        index: usize,
        value: f64,
    },

    /// A probability vector handed to a categorical draw was malformed.
    #[error("invalid probability vector: {reason}")]
    InvalidProbabilities { reason: String },

    /// A probability vector is not on the simplex.
    #[error("invalid probability vector: {0}")]
    Simplex(#[from] logp::Error),

    /// Structurally inconsistent scene configuration.
    #[error("invalid scene configuration: {reason}")]
    Config { reason: String },

    /// A position query asked for a bar that does not exist.
    #[error("{chart:?} has {len} categories, index {index} is out of range")]
    CategoryOutOfRange {
        chart: Chart,
        index: usize,
        len: usize,
    },

    /// Sink-specific failure.
    #[error("display sink failed: {0}")]
    Sink(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub(crate) fn distribution<E>(what: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Distribution {
            what,
            source: Box::new(source),
        }
    }
}

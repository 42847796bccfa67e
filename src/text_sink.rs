//! Terminal rendering of a scene.
//!
//! [`TextSink`] draws each chart as horizontal text bars whenever its values
//! change, and logs marker moves and generated tokens as plain lines. It is the
//! sink the demos use; anything implementing `io::Write` can receive the output.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::vocab::{topic_label, word_label};
use crate::{Chart, DisplaySink, Marker, Point, SceneLayout, SimResult, Token};

fn chart_labels(given: &[String], bars: usize, fallback: fn(usize) -> String) -> Vec<String> {
    if given.is_empty() {
        (0..bars).map(fallback).collect()
    } else {
        given.to_vec()
    }
}

/// Text-mode [`DisplaySink`].
#[derive(Debug)]
pub struct TextSink<W: Write> {
    out: W,
    layout: SceneLayout,
    topic_labels: Vec<String>,
    word_labels: Vec<String>,
    topics: Vec<f64>,
    words: Vec<f64>,
    /// Characters for a bar at the chart's `y_max`.
    width: usize,
    realtime: bool,
}

impl<W: Write> TextSink<W> {
    /// Bars are named from the layout's labels, or from the built-in vocabulary
    /// when the layout has none.
    pub fn new(out: W, layout: SceneLayout) -> Self {
        let topic_labels = chart_labels(&layout.topics.labels, layout.topics.bars, topic_label);
        let word_bars = layout.words.as_ref().map(|w| w.bars).unwrap_or(0);
        let word_labels = match &layout.words {
            Some(w) => chart_labels(&w.labels, w.bars, word_label),
            None => Vec::new(),
        };
        Self {
            out,
            topics: vec![0.0; layout.topics.bars],
            words: vec![0.0; word_bars],
            layout,
            topic_labels,
            word_labels,
            width: 40,
            realtime: false,
        }
    }

    /// Override the bar labels of `chart`.
    pub fn with_labels(mut self, chart: Chart, labels: Vec<String>) -> Self {
        match chart {
            Chart::Topics => self.topic_labels = labels,
            Chart::Words => self.word_labels = labels,
        }
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Actually sleep on `pause` instead of just noting it.
    pub fn realtime(mut self, on: bool) -> Self {
        self.realtime = on;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn labels(&self, chart: Chart) -> &[String] {
        match chart {
            Chart::Topics => &self.topic_labels,
            Chart::Words => &self.word_labels,
        }
    }

    fn values(&self, chart: Chart) -> &[f64] {
        match chart {
            Chart::Topics => &self.topics,
            Chart::Words => &self.words,
        }
    }

    fn render(&mut self, chart: Chart) -> SimResult<()> {
        let y_max = self.layout.chart(chart)?.y_max;
        let label_width = self
            .labels(chart)
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let mut lines = Vec::with_capacity(self.values(chart).len() + 1);
        lines.push(format!("[{chart:?}]"));
        for (i, &v) in self.values(chart).iter().enumerate() {
            let label = self.labels(chart).get(i).map(String::as_str).unwrap_or("");
            let filled = if y_max > 0.0 {
                ((v / y_max) * self.width as f64).round().max(0.0) as usize
            } else {
                0
            };
            lines.push(format!(
                "{label:>label_width$} |{} {v:.3}",
                "#".repeat(filled.min(self.width))
            ));
        }
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

impl<W: Write> DisplaySink for TextSink<W> {
    fn set_values(&mut self, chart: Chart, values: &[f64]) -> SimResult<()> {
        let expected = self.layout.chart(chart)?.bars;
        if values.len() != expected {
            return Err(crate::SimError::Sink(format!(
                "{chart:?} has {expected} bars, got {} values",
                values.len()
            )));
        }
        match chart {
            Chart::Topics => self.topics = values.to_vec(),
            Chart::Words => self.words = values.to_vec(),
        }
        self.render(chart)
    }

    fn position(&self, chart: Chart, index: usize) -> SimResult<Point> {
        let layout = self.layout.chart(chart)?;
        let value = self.values(chart).get(index).copied().unwrap_or(0.0);
        layout.bar_top(chart, index, value)
    }

    fn axis_point(&self, x: f64, y: f64) -> SimResult<Point> {
        Ok(match &self.layout.axes {
            Some(ax) => ax.coords_to_point(x, y),
            None => Point::new(x, y),
        })
    }

    fn set_labels(&mut self, chart: Chart, labels: &[String]) -> SimResult<()> {
        match chart {
            Chart::Topics => self.topic_labels = labels.to_vec(),
            Chart::Words => self.word_labels = labels.to_vec(),
        }
        Ok(())
    }

    fn place_marker(&mut self, marker: Marker, at: Point) -> SimResult<()> {
        writeln!(self.out, "{marker:?} -> ({:.2}, {:.2})", at.x, at.y)?;
        Ok(())
    }

    fn hide_marker(&mut self, marker: Marker) -> SimResult<()> {
        writeln!(self.out, "{marker:?} hidden")?;
        Ok(())
    }

    fn plot_curve(&mut self, points: &[(f64, f64)]) -> SimResult<()> {
        let peak = points
            .iter()
            .copied()
            .fold(None, |best: Option<(f64, f64)>, p| match best {
                Some(b) if b.1 >= p.1 => Some(b),
                _ => Some(p),
            });
        match peak {
            Some((x, y)) => writeln!(
                self.out,
                "pdf: {} points, mode near x={x:.2} (density {y:.3})",
                points.len()
            )?,
            None => writeln!(self.out, "pdf: empty")?,
        }
        Ok(())
    }

    fn begin_document(&mut self, index: usize) -> SimResult<()> {
        writeln!(self.out, "doc {}:", index + 1)?;
        Ok(())
    }

    fn assign_token(&mut self, token: &Token) -> SimResult<()> {
        let topic = self
            .topic_labels
            .get(token.topic)
            .cloned()
            .unwrap_or_else(|| topic_label(token.topic));
        let word = self
            .word_labels
            .get(token.word)
            .cloned()
            .unwrap_or_else(|| word_label(token.word));
        writeln!(self.out, "  [{topic}] {word}")?;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> SimResult<()> {
        self.out.flush()?;
        if self.realtime {
            thread::sleep(duration);
        }
        Ok(())
    }
}

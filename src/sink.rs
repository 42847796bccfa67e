//! Display sink: the rendering side of a sampling loop.
//!
//! The loops push probability vectors, marker moves and token assignments into a
//! [`DisplaySink`] and query it for bar positions. They never own it and never
//! read display state back except through [`DisplaySink::position`] and
//! [`DisplaySink::axis_point`].
//!
//! [`RecordingSink`] keeps every call as a [`SinkEvent`], which is what the tests
//! (and any replay / export tooling) work from.

use std::time::Duration;

use crate::{Point, SceneLayout, SimResult};

/// Which bar chart a call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Chart {
    /// Per-document topic proportions (also the `[p, 1 - p]` chart of the Beta scene).
    Topics,
    /// Concatenated per-topic word distributions.
    Words,
}

/// Movable highlight markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    /// Dot on the PDF axes at the latest Beta draw.
    Dot,
    /// Arrow above the sampled topic's bar.
    TopicArrow,
    /// Arrow above the sampled word's bar.
    WordArrow,
}

/// One generated word slot of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub document: usize,
    pub slot: usize,
    pub topic: usize,
    /// Index into the concatenated vocabulary.
    pub word: usize,
}

/// Rendering collaborator of the sampling loops.
///
/// Only [`set_values`](Self::set_values) and [`position`](Self::position) are
/// required; everything else defaults to a no-op so a minimal sink is two methods.
pub trait DisplaySink {
    /// Replace the bar heights of `chart` with `values`.
    fn set_values(&mut self, chart: Chart, values: &[f64]) -> SimResult<()>;

    /// Scene position of bar `index` of `chart` (top centre of the bar).
    fn position(&self, chart: Chart, index: usize) -> SimResult<Point>;

    /// Scene position of the data point `(x, y)` on the PDF axes.
    fn axis_point(&self, x: f64, y: f64) -> SimResult<Point> {
        Ok(Point::new(x, y))
    }

    /// Name the bars of `chart`, left to right.
    fn set_labels(&mut self, _chart: Chart, _labels: &[String]) -> SimResult<()> {
        Ok(())
    }

    /// Show `marker` at `at`, creating it on first use.
    fn place_marker(&mut self, _marker: Marker, _at: Point) -> SimResult<()> {
        Ok(())
    }

    fn hide_marker(&mut self, _marker: Marker) -> SimResult<()> {
        Ok(())
    }

    /// Draw a curve on the PDF axes (points are data coordinates).
    fn plot_curve(&mut self, _points: &[(f64, f64)]) -> SimResult<()> {
        Ok(())
    }

    /// Start a new document row.
    fn begin_document(&mut self, _index: usize) -> SimResult<()> {
        Ok(())
    }

    fn assign_token(&mut self, _token: &Token) -> SimResult<()> {
        Ok(())
    }

    /// Hold the current frame for `duration`.
    fn pause(&mut self, _duration: Duration) -> SimResult<()> {
        Ok(())
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn set_values(&mut self, chart: Chart, values: &[f64]) -> SimResult<()> {
        (**self).set_values(chart, values)
    }
    fn position(&self, chart: Chart, index: usize) -> SimResult<Point> {
        (**self).position(chart, index)
    }
    fn axis_point(&self, x: f64, y: f64) -> SimResult<Point> {
        (**self).axis_point(x, y)
    }
    fn set_labels(&mut self, chart: Chart, labels: &[String]) -> SimResult<()> {
        (**self).set_labels(chart, labels)
    }
    fn place_marker(&mut self, marker: Marker, at: Point) -> SimResult<()> {
        (**self).place_marker(marker, at)
    }
    fn hide_marker(&mut self, marker: Marker) -> SimResult<()> {
        (**self).hide_marker(marker)
    }
    fn plot_curve(&mut self, points: &[(f64, f64)]) -> SimResult<()> {
        (**self).plot_curve(points)
    }
    fn begin_document(&mut self, index: usize) -> SimResult<()> {
        (**self).begin_document(index)
    }
    fn assign_token(&mut self, token: &Token) -> SimResult<()> {
        (**self).assign_token(token)
    }
    fn pause(&mut self, duration: Duration) -> SimResult<()> {
        (**self).pause(duration)
    }
}

/// A single recorded sink call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SinkEvent {
    SetValues { chart: Chart, values: Vec<f64> },
    SetLabels { chart: Chart, labels: Vec<String> },
    PlaceMarker { marker: Marker, at: Point },
    HideMarker { marker: Marker },
    PlotCurve { points: usize },
    BeginDocument { index: usize },
    AssignToken(Token),
    Pause(Duration),
}

/// Sink that records every call and answers position queries from a [`SceneLayout`].
#[derive(Debug, Clone)]
pub struct RecordingSink {
    layout: SceneLayout,
    topics: Vec<f64>,
    words: Vec<f64>,
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new(layout: SceneLayout) -> Self {
        Self {
            topics: vec![0.0; layout.topics.bars],
            words: vec![0.0; layout.words.as_ref().map(|w| w.bars).unwrap_or(0)],
            layout,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    /// Current bar values of `chart`.
    pub fn values(&self, chart: Chart) -> &[f64] {
        match chart {
            Chart::Topics => &self.topics,
            Chart::Words => &self.words,
        }
    }

    /// Number of `set_values` calls received for `chart`.
    pub fn updates(&self, chart: Chart) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::SetValues { chart: c, .. } if *c == chart))
            .count()
    }

    /// Every vector pushed to `chart`, in order.
    pub fn value_history(&self, chart: Chart) -> Vec<&[f64]> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::SetValues { chart: c, values } if *c == chart => {
                    Some(values.as_slice())
                }
                _ => None,
            })
            .collect()
    }

    /// Latest labels sent for `chart`, if any.
    pub fn labels(&self, chart: Chart) -> Option<&[String]> {
        self.events.iter().rev().find_map(|e| match e {
            SinkEvent::SetLabels { chart: c, labels } if *c == chart => Some(labels.as_slice()),
            _ => None,
        })
    }

    /// Every position `marker` was placed at, in order.
    pub fn marker_trail(&self, marker: Marker) -> Vec<Point> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::PlaceMarker { marker: m, at } if *m == marker => Some(*at),
                _ => None,
            })
            .collect()
    }

    pub fn tokens(&self) -> Vec<Token> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::AssignToken(t) => Some(*t),
                _ => None,
            })
            .collect()
    }

    /// Sum of all pauses.
    pub fn total_pause(&self) -> Duration {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Pause(d) => Some(*d),
                _ => None,
            })
            .sum()
    }
}

impl DisplaySink for RecordingSink {
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
        self.events.push(SinkEvent::SetValues {
            chart,
            values: values.to_vec(),
        });
        Ok(())
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
        self.events.push(SinkEvent::SetLabels {
            chart,
            labels: labels.to_vec(),
        });
        Ok(())
    }

    fn place_marker(&mut self, marker: Marker, at: Point) -> SimResult<()> {
        self.events.push(SinkEvent::PlaceMarker { marker, at });
        Ok(())
    }

    fn hide_marker(&mut self, marker: Marker) -> SimResult<()> {
        self.events.push(SinkEvent::HideMarker { marker });
        Ok(())
    }

    fn plot_curve(&mut self, points: &[(f64, f64)]) -> SimResult<()> {
        self.events.push(SinkEvent::PlotCurve {
            points: points.len(),
        });
        Ok(())
    }

    fn begin_document(&mut self, index: usize) -> SimResult<()> {
        self.events.push(SinkEvent::BeginDocument { index });
        Ok(())
    }

    fn assign_token(&mut self, token: &Token) -> SimResult<()> {
        self.events.push(SinkEvent::AssignToken(*token));
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> SimResult<()> {
        self.events.push(SinkEvent::Pause(duration));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn records_updates_per_chart() {
        let mut s = RecordingSink::new(SceneLayout::topic_generation(2, 10));
        s.set_values(Chart::Topics, &[0.4, 0.6]).unwrap();
        s.set_values(Chart::Topics, &[0.5, 0.5]).unwrap();
        s.set_values(Chart::Words, &[0.1; 10]).unwrap();
        assert_eq!(s.updates(Chart::Topics), 2);
        assert_eq!(s.updates(Chart::Words), 1);
        assert_eq!(s.values(Chart::Topics), &[0.5, 0.5]);
    }

    #[test]
    fn rejects_wrong_bar_count() {
        let mut s = RecordingSink::new(SceneLayout::single_chart(3, 0.6));
        assert!(matches!(
            s.set_values(Chart::Topics, &[0.5, 0.5]),
            Err(SimError::Sink(_))
        ));
        assert!(s.events().is_empty());
    }

    #[test]
    fn position_tracks_current_bar_height() {
        let mut s = RecordingSink::new(SceneLayout::single_chart(2, 0.8));
        let before = s.position(Chart::Topics, 1).unwrap();
        s.set_values(Chart::Topics, &[0.2, 0.8]).unwrap();
        let after = s.position(Chart::Topics, 1).unwrap();
        assert_eq!(before.x, after.x);
        assert!(after.y > before.y);
    }

    #[test]
    fn latest_labels_win() {
        let mut s = RecordingSink::new(SceneLayout::single_chart(2, 0.8));
        assert_eq!(s.labels(Chart::Topics), None);
        s.set_labels(Chart::Topics, &["a".to_string(), "b".to_string()])
            .unwrap();
        s.set_labels(Chart::Topics, &["c".to_string(), "d".to_string()])
            .unwrap();
        assert_eq!(
            s.labels(Chart::Topics),
            Some(&["c".to_string(), "d".to_string()][..])
        );
        assert_eq!(s.labels(Chart::Words), None);
    }

    #[test]
    fn minimal_sink_gets_default_no_ops() {
        struct Bars(Vec<f64>);
        impl DisplaySink for Bars {
            fn set_values(&mut self, _chart: Chart, values: &[f64]) -> SimResult<()> {
                self.0 = values.to_vec();
                Ok(())
            }
            fn position(&self, _chart: Chart, index: usize) -> SimResult<Point> {
                Ok(Point::new(index as f64, 0.0))
            }
        }
        let mut b = Bars(Vec::new());
        b.place_marker(Marker::Dot, Point::default()).unwrap();
        b.set_labels(Chart::Topics, &["x".to_string()]).unwrap();
        b.pause(Duration::from_secs(1)).unwrap();
        assert_eq!(b.axis_point(0.25, 0.0).unwrap(), Point::new(0.25, 0.0));
        b.set_values(Chart::Topics, &[1.0]).unwrap();
        assert_eq!(b.0, vec![1.0]);
    }
}

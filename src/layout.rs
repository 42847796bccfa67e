//! Chart geometry.
//!
//! Sinks answer position queries ("where is bar K?", "where is `(x, y)` on the
//! PDF axes?") from these layouts. Coordinates are scene units with `y` pointing
//! up, matching what an animation engine would report.

use crate::{Chart, SimError, SimResult};

/// A point in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometry of a vertical bar chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarLayout {
    /// Bottom-left corner of the plotting area.
    pub origin: Point,
    pub x_length: f64,
    pub y_length: f64,
    /// Value mapped to the full `y_length`.
    pub y_max: f64,
    pub bars: usize,
    /// Fraction of each slot left empty between bars, in `[0, 1)`.
    pub bar_buff: f64,
    /// Bar names, left to right. Empty means the sink picks its own.
    #[cfg_attr(feature = "serde", serde(default))]
    pub labels: Vec<String>,
}

impl BarLayout {
    pub fn new(bars: usize, x_length: f64, y_length: f64, y_max: f64) -> Self {
        Self {
            origin: Point::default(),
            x_length,
            y_length,
            y_max,
            bars,
            bar_buff: 0.25,
            labels: Vec::new(),
        }
    }

    pub fn at(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    fn slot_width(&self) -> f64 {
        self.x_length / self.bars.max(1) as f64
    }

    /// Drawn width of one bar.
    pub fn bar_width(&self) -> f64 {
        self.slot_width() * (1.0 - self.bar_buff.clamp(0.0, 0.99))
    }

    /// Height in scene units for a bar value.
    pub fn bar_height(&self, value: f64) -> f64 {
        if !(self.y_max > 0.0) || !value.is_finite() {
            return 0.0;
        }
        value.max(0.0) / self.y_max * self.y_length
    }

    /// Centre of the base of bar `index`.
    pub fn bar_base(&self, chart: Chart, index: usize) -> SimResult<Point> {
        if index >= self.bars {
            return Err(SimError::CategoryOutOfRange {
                chart,
                index,
                len: self.bars,
            });
        }
        let x = self.origin.x + (index as f64 + 0.5) * self.slot_width();
        Ok(Point::new(x, self.origin.y))
    }

    /// Centre of the top edge of bar `index` when it shows `value`.
    pub fn bar_top(&self, chart: Chart, index: usize, value: f64) -> SimResult<Point> {
        let base = self.bar_base(chart, index)?;
        Ok(Point::new(base.x, base.y + self.bar_height(value)))
    }
}

/// Geometry of a pair of linear axes (the PDF panel).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxesLayout {
    /// Scene point of the lower-left corner of the data range.
    pub origin: Point,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub x_length: f64,
    pub y_length: f64,
}

impl AxesLayout {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), x_length: f64, y_length: f64) -> Self {
        Self {
            origin: Point::default(),
            x_range,
            y_range,
            x_length,
            y_length,
        }
    }

    pub fn at(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Map data coordinates to a scene point.
    pub fn coords_to_point(&self, x: f64, y: f64) -> Point {
        let scale = |v: f64, (lo, hi): (f64, f64), len: f64| {
            let span = hi - lo;
            if span.abs() <= f64::EPSILON {
                0.0
            } else {
                (v - lo) / span * len
            }
        };
        Point::new(
            self.origin.x + scale(x, self.x_range, self.x_length),
            self.origin.y + scale(y, self.y_range, self.y_length),
        )
    }
}

/// Layout of one whole scene: the bar charts and the optional PDF axes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneLayout {
    pub topics: BarLayout,
    pub words: Option<BarLayout>,
    pub axes: Option<AxesLayout>,
}

/// Frame size of the scenes, in scene units.
pub const FRAME_WIDTH: f64 = 14.222;
pub const FRAME_HEIGHT: f64 = 8.0;

impl SceneLayout {
    /// PDF axes on the left, two-bar topic chart on the right.
    ///
    /// The left bar shows the draw `p` ("animals"), the right one `1 - p` ("food").
    pub fn beta_resample() -> Self {
        let axes = AxesLayout::new((0.0, 1.0), (0.0, 3.0), FRAME_WIDTH / 3.0, FRAME_HEIGHT * 0.6)
            .at(Point::new(-FRAME_WIDTH / 2.0 + 1.0, -FRAME_HEIGHT / 2.0 + 1.0));
        let topics = BarLayout::new(2, FRAME_WIDTH / 2.5, FRAME_HEIGHT - 3.25, 0.8)
            .at(Point::new(1.0, -FRAME_HEIGHT / 2.0 + 1.0))
            .with_labels(["animals", "food"]);
        Self {
            topics,
            words: None,
            axes: Some(axes),
        }
    }

    /// Topic chart bottom-left, word chart bottom-right.
    pub fn topic_generation(topics: usize, words: usize) -> Self {
        let topics_chart =
            BarLayout::new(topics, 4.0, 4.0, 0.8).at(Point::new(-FRAME_WIDTH / 2.0 + 0.5, -3.5));
        let words_chart = BarLayout::new(words, 7.5, 4.0, 0.5).at(Point::new(-1.0, -3.5));
        Self {
            topics: topics_chart,
            words: Some(words_chart),
            axes: None,
        }
    }

    /// A single chart with `bars` bars (Dirichlet resampling, bar transitions).
    pub fn single_chart(bars: usize, y_max: f64) -> Self {
        Self {
            topics: BarLayout::new(bars, 10.0, 6.0, y_max).at(Point::new(-5.0, -3.0)),
            words: None,
            axes: None,
        }
    }

    /// Layout for `chart`, or an out-of-range error if the scene has no such chart.
    pub fn chart(&self, chart: Chart) -> SimResult<&BarLayout> {
        match chart {
            Chart::Topics => Ok(&self.topics),
            Chart::Words => self.words.as_ref().ok_or(SimError::CategoryOutOfRange {
                chart,
                index: 0,
                len: 0,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_centres_are_evenly_spaced() {
        let l = BarLayout::new(4, 8.0, 4.0, 1.0);
        let xs: Vec<f64> = (0..4)
            .map(|i| l.bar_base(Chart::Topics, i).unwrap().x)
            .collect();
        assert_eq!(xs, vec![1.0, 3.0, 5.0, 7.0]);
    }

    #[test]
    fn bar_top_scales_with_value() {
        let l = BarLayout::new(2, 4.0, 6.0, 0.6);
        let top = l.bar_top(Chart::Topics, 1, 0.3).unwrap();
        assert!((top.y - 3.0).abs() < 1e-12);
        assert!((top.x - 3.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_bar_is_an_error() {
        let l = BarLayout::new(2, 4.0, 6.0, 0.6);
        assert!(matches!(
            l.bar_base(Chart::Words, 2),
            Err(SimError::CategoryOutOfRange { index: 2, len: 2, .. })
        ));
    }

    #[test]
    fn coords_to_point_maps_range_ends() {
        let ax = AxesLayout::new((0.0, 1.0), (0.0, 3.0), 5.0, 6.0).at(Point::new(-1.0, -2.0));
        assert_eq!(ax.coords_to_point(0.0, 0.0), Point::new(-1.0, -2.0));
        assert_eq!(ax.coords_to_point(1.0, 3.0), Point::new(4.0, 4.0));
        let mid = ax.coords_to_point(0.5, 0.0);
        assert!((mid.x - 1.5).abs() < 1e-12);
    }

    #[test]
    fn scene_without_word_chart_rejects_word_queries() {
        let s = SceneLayout::beta_resample();
        assert!(s.chart(Chart::Words).is_err());
        assert_eq!(s.chart(Chart::Topics).unwrap().bars, 2);
    }

    #[test]
    fn beta_scene_names_the_draw_bar_first() {
        let s = SceneLayout::beta_resample();
        assert_eq!(s.topics.labels, vec!["animals", "food"]);
        assert!(SceneLayout::single_chart(2, 0.8).topics.labels.is_empty());
    }
}

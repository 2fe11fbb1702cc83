//! The plotting capability and view options.
//!
//! Consumers build layers and palettes through [`Graphics`] and hand the
//! finished [`Chart`] back to it for viewing. They never name a concrete
//! backend.

use crate::error::PlotError;
use crate::model::{Chart, Cloud, Color, Layer, MarkerStyle, Point, Text};
use crate::palette::default_palette;

/// Figure size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureOptions {
    /// Width in inches.
    pub width_in: f64,
    /// Height in inches.
    pub height_in: f64,
    /// Pixels per inch.
    pub dpi: f64,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width_in: 4.0,
            height_in: 4.0,
            dpi: 100.0,
        }
    }
}

impl FigureOptions {
    /// Figure width and height in pixels.
    #[must_use]
    pub fn pixels(&self) -> (f64, f64) {
        (self.width_in * self.dpi, self.height_in * self.dpi)
    }
}

/// Which corner of the legend box sits on the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendLocation {
    /// Legend's upper-left corner on the anchor.
    UpperLeft,
    /// Legend's upper-right corner on the anchor.
    UpperRight,
    /// Legend's lower-left corner on the anchor.
    LowerLeft,
    /// Legend's lower-right corner on the anchor.
    LowerRight,
}

/// Explicit legend placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendOptions {
    /// Anchor in axes-fraction coordinates (`(0, 0)` bottom-left,
    /// `(1, 1)` top-right of the plotting area).
    pub anchor: (f64, f64),
    /// Corner of the legend box placed on the anchor.
    pub location: LegendLocation,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            anchor: (1.0, 1.0),
            location: LegendLocation::UpperLeft,
        }
    }
}

/// Options applied when a chart is turned into a view.
///
/// The default is a 4 × 4 inch figure with the legend anchored at the
/// top-right of the axes, outside the plotting area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    /// Figure size.
    pub figure: FigureOptions,
    /// Legend placement; `None` falls back to the chart's legend corner.
    pub legend: Option<LegendOptions>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            figure: FigureOptions::default(),
            legend: Some(LegendOptions::default()),
        }
    }
}

/// A plotting backend.
pub trait Graphics {
    /// Renderable object produced by [`view`](Self::view).
    type View;

    /// Builds a scatter layer.
    fn scatter_layer(&self, points: Vec<Point>, marker: MarkerStyle) -> Layer {
        Layer::Cloud(Cloud::new(points, marker))
    }

    /// Builds a text layer.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::LabelCountMismatch`] if `points` and `labels`
    /// differ in length.
    fn text_layer(&self, points: Vec<Point>, labels: Vec<String>) -> Result<Layer, PlotError> {
        Text::new(points, labels).map(Layer::Text)
    }

    /// Returns `size` distinct colours, deterministically.
    fn palette(&self, size: usize) -> Vec<Color> {
        default_palette(size)
    }

    /// Wraps a finished chart into a renderable view.
    fn view(&self, chart: Chart, options: &ViewOptions) -> Self::View;
}

impl<G: Graphics + ?Sized> Graphics for &G {
    type View = G::View;

    fn scatter_layer(&self, points: Vec<Point>, marker: MarkerStyle) -> Layer {
        (**self).scatter_layer(points, marker)
    }

    fn text_layer(&self, points: Vec<Point>, labels: Vec<String>) -> Result<Layer, PlotError> {
        (**self).text_layer(points, labels)
    }

    fn palette(&self, size: usize) -> Vec<Color> {
        (**self).palette(size)
    }

    fn view(&self, chart: Chart, options: &ViewOptions) -> Self::View {
        (**self).view(chart, options)
    }
}

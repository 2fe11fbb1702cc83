//! Chart model types.
//!
//! All types are plain owned data. A [`Chart`] is immutable once built; the
//! only way to produce one is [`ChartBuilder::build`].

use crate::error::PlotError;

/// A point in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point displaced by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure red, used for rank labels.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Black, used for axes and titles.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Creates a colour from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a colour from hue (degrees), saturation and value in `[0, 1]`.
    #[must_use]
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = value * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = value - c;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// `#rrggbb` notation.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Marker drawn for each point of a [`Cloud`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    /// Filled circle.
    #[default]
    Circle,
    /// Filled square.
    Square,
    /// Diagonal cross.
    Cross,
}

impl MarkerStyle {
    /// Lower-case name used in serialized output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerStyle::Circle => "circle",
            MarkerStyle::Square => "square",
            MarkerStyle::Cross => "cross",
        }
    }
}

/// Corner of the axes where the legend is drawn when the view does not
/// override the placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    /// Upper-right corner.
    #[default]
    TopRight,
    /// Upper-left corner.
    TopLeft,
    /// Lower-right corner.
    BottomRight,
    /// Lower-left corner.
    BottomLeft,
}

impl LegendPosition {
    /// Compact name (`"topright"`, …).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LegendPosition::TopRight => "topright",
            LegendPosition::TopLeft => "topleft",
            LegendPosition::BottomRight => "bottomright",
            LegendPosition::BottomLeft => "bottomleft",
        }
    }
}

/// Axis scaling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aspect {
    /// Independent scales on both axes.
    #[default]
    Auto,
    /// One data unit spans the same length on both axes.
    Square,
}

/// Tick placement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickLocator {
    /// Evenly spaced ticks at arbitrary values.
    #[default]
    Auto,
    /// Ticks only at integer values.
    Integer,
}

/// A scatter layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    points: Vec<Point>,
    marker: MarkerStyle,
    color: Option<Color>,
    legend: Option<String>,
}

impl Cloud {
    /// Creates an uncoloured, unlegended cloud.
    #[must_use]
    pub fn new(points: Vec<Point>, marker: MarkerStyle) -> Self {
        Self {
            points,
            marker,
            color: None,
            legend: None,
        }
    }

    /// Marker style.
    #[must_use]
    pub fn marker(&self) -> MarkerStyle {
        self.marker
    }
}

/// A layer of text labels, one label per anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    points: Vec<Point>,
    labels: Vec<String>,
    color: Option<Color>,
    size: f64,
    legend: Option<String>,
}

impl Text {
    /// Creates a text layer.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::LabelCountMismatch`] if `points` and `labels`
    /// differ in length.
    pub fn new(points: Vec<Point>, labels: Vec<String>) -> Result<Self, PlotError> {
        if points.len() != labels.len() {
            return Err(PlotError::LabelCountMismatch {
                points: points.len(),
                labels: labels.len(),
            });
        }
        Ok(Self {
            points,
            labels,
            color: None,
            size: 1.0,
            legend: None,
        })
    }

    /// Labels, parallel to [`Layer::points`].
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Relative font size (1.0 is the default size).
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns this layer with relative font size `size`.
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

/// One drawable of a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Scatter markers.
    Cloud(Cloud),
    /// Text labels.
    Text(Text),
}

impl Layer {
    /// Points of the layer, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        match self {
            Layer::Cloud(c) => &c.points,
            Layer::Text(t) => &t.points,
        }
    }

    /// Explicit colour, if any.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            Layer::Cloud(c) => c.color,
            Layer::Text(t) => t.color,
        }
    }

    /// Legend entry, if any.
    #[must_use]
    pub fn legend(&self) -> Option<&str> {
        match self {
            Layer::Cloud(c) => c.legend.as_deref(),
            Layer::Text(t) => t.legend.as_deref(),
        }
    }

    /// Returns this layer with colour `color`.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        match &mut self {
            Layer::Cloud(c) => c.color = Some(color),
            Layer::Text(t) => t.color = Some(color),
        }
        self
    }

    /// Returns this layer with legend entry `legend`.
    #[must_use]
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        let legend = Some(legend.into());
        match &mut self {
            Layer::Cloud(c) => c.legend = legend,
            Layer::Text(t) => t.legend = legend,
        }
        self
    }

    /// The cloud payload, if this is a cloud.
    #[must_use]
    pub fn as_cloud(&self) -> Option<&Cloud> {
        match self {
            Layer::Cloud(c) => Some(c),
            Layer::Text(_) => None,
        }
    }

    /// The text payload, if this is a text layer.
    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Layer::Text(t) => Some(t),
            Layer::Cloud(_) => None,
        }
    }
}

/// An immutable 2D chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    title: String,
    x_title: String,
    y_title: String,
    legend_position: LegendPosition,
    aspect: Aspect,
    tick_locator: TickLocator,
    layers: Vec<Layer>,
}

impl Chart {
    /// Chart title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Horizontal axis title.
    #[must_use]
    pub fn x_title(&self) -> &str {
        &self.x_title
    }

    /// Vertical axis title.
    #[must_use]
    pub fn y_title(&self) -> &str {
        &self.y_title
    }

    /// Legend corner.
    #[must_use]
    pub fn legend_position(&self) -> LegendPosition {
        self.legend_position
    }

    /// Axis scaling policy.
    #[must_use]
    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    /// Tick placement policy.
    #[must_use]
    pub fn tick_locator(&self) -> TickLocator {
        self.tick_locator
    }

    /// Layers in drawing order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layers that carry a legend entry, in drawing order.
    pub fn legend_entries(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|l| l.legend().is_some())
    }

    /// Smallest box containing every point of every layer, or `None` for a
    /// chart without points.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.layers.iter().flat_map(|l| l.points().iter());
        let first = *points.next()?;
        let (lo, hi) = points.fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some((lo, hi))
    }
}

/// Accumulates layers and settings, then builds one [`Chart`].
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    title: String,
    x_title: String,
    y_title: String,
    legend_position: LegendPosition,
    aspect: Aspect,
    tick_locator: TickLocator,
    layers: Vec<Layer>,
    colors: Vec<Color>,
}

impl ChartBuilder {
    /// Starts a chart with the given titles.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_title: impl Into<String>,
        y_title: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_title: x_title.into(),
            y_title: y_title.into(),
            legend_position: LegendPosition::default(),
            aspect: Aspect::default(),
            tick_locator: TickLocator::default(),
            layers: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Sets the legend corner.
    #[must_use]
    pub fn legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = position;
        self
    }

    /// Requests equal scales on both axes.
    #[must_use]
    pub fn square(mut self) -> Self {
        self.aspect = Aspect::Square;
        self
    }

    /// Requests integer-only ticks.
    #[must_use]
    pub fn integer_ticks(mut self) -> Self {
        self.tick_locator = TickLocator::Integer;
        self
    }

    /// Appends a layer.
    #[must_use]
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Appends several layers, in order.
    #[must_use]
    pub fn layers(mut self, layers: impl IntoIterator<Item = Layer>) -> Self {
        self.layers.extend(layers);
        self
    }

    /// Colours applied at build time: `colors[i]` goes to layer `i`.
    /// Layers beyond the end of `colors` keep their own colour.
    #[must_use]
    pub fn colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    /// Builds the chart.
    #[must_use]
    pub fn build(self) -> Chart {
        let mut colors = self.colors.into_iter();
        let layers = self
            .layers
            .into_iter()
            .map(|layer| match colors.next() {
                Some(c) => layer.with_color(c),
                None => layer,
            })
            .collect();
        Chart {
            title: self.title,
            x_title: self.x_title,
            y_title: self.y_title,
            legend_position: self.legend_position,
            aspect: self.aspect,
            tick_locator: self.tick_locator,
            layers,
        }
    }
}

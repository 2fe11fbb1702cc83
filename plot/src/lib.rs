//! Minimal 2D chart model for multi-index visualizations.
//!
//! Charts are assembled with a [`ChartBuilder`], which accumulates layers
//! and produces one immutable [`Chart`]. A [`Graphics`] implementation turns
//! a chart into a renderable view; [`SvgGraphics`] renders in memory to an
//! SVG document.
//!
//! # Entry Point
//!
//! ```
//! use uqdemo_plot::{ChartBuilder, Graphics, MarkerStyle, Point, SvgGraphics, ViewOptions};
//!
//! let graphics = SvgGraphics;
//! let cloud = graphics.scatter_layer(vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)], MarkerStyle::Circle);
//! let chart = ChartBuilder::new("Demo", "x", "y").square().integer_ticks().layer(cloud).build();
//! let view = graphics.view(chart, &ViewOptions::default());
//! assert!(view.as_svg().starts_with("<svg"));
//! ```
//!
//! # Serialization
//!
//! ```
//! use uqdemo_plot::ChartBuilder;
//!
//! let chart = ChartBuilder::new("Empty", "x", "y").build();
//! let json = uqdemo_plot::serializer::json::to_json(&chart);
//! assert_eq!(json["title"], "Empty");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod graphics;
pub mod model;
pub mod palette;
pub mod serializer;
pub mod svg;
pub mod writer;

pub use error::PlotError;
pub use graphics::{FigureOptions, Graphics, LegendLocation, LegendOptions, ViewOptions};
pub use model::{
    Aspect, Chart, ChartBuilder, Cloud, Color, Layer, LegendPosition, MarkerStyle, Point, Text,
    TickLocator,
};
pub use palette::default_palette;
pub use svg::{SvgGraphics, SvgView};

//! Visual exploration of multi-index enumeration rules.
//!
//! [`MultiIndexEnumerationExplorer`] wraps one enumeration rule and draws
//! its multi-indices either labelled by rank or grouped by stratum. The
//! explorer only sees the [`EnumerationFunction`] and [`Graphics`] traits;
//! the default backend is the in-memory [`SvgGraphics`].
//!
//! # Entry Point
//!
//! ```
//! use uqdemo_explorer::MultiIndexEnumerationExplorer;
//! use uqdemo_multiindex::LinearEnumerateFunction;
//!
//! let rule = LinearEnumerateFunction::new(2)?;
//! let explorer = MultiIndexEnumerationExplorer::with_svg(&rule);
//!
//! let by_rank = explorer.draw_by_rank(10, 0.1)?;
//! assert_eq!(by_rank.chart().layers()[0].points().len(), 10);
//!
//! let by_stratum = explorer.draw_by_stratum(4)?;
//! assert_eq!(by_stratum.chart().layers().len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;

use std::ops::Range;

use uqdemo_multiindex::{EnumerationFunction, MultiIndex};
use uqdemo_plot::{
    ChartBuilder, Color, Graphics, LegendPosition, MarkerStyle, Point, SvgGraphics, ViewOptions,
};

pub use error::ExplorerError;

/// Displacement applied to rank labels so they do not cover their marker.
pub const DEFAULT_LABEL_OFFSET: f64 = 0.1;

/// Title of the rank view.
pub const RANK_TITLE: &str = "Multi-index set";

/// Title of the stratum view.
pub const STRATUM_TITLE: &str = "Linear enumeration rule";

/// Dimension of the multi-indices a chart can show.
const PLANAR: usize = 2;

/// Rank and stratum views over one enumeration rule.
///
/// Holds no state besides the rule and the (stateless) graphics backend;
/// every call recomputes its multi-indices.
#[derive(Debug, Clone)]
pub struct MultiIndexEnumerationExplorer<E, G = SvgGraphics> {
    enumeration: E,
    graphics: G,
}

impl<E: EnumerationFunction> MultiIndexEnumerationExplorer<E, SvgGraphics> {
    /// Creates an explorer rendering to SVG.
    #[must_use]
    pub fn with_svg(enumeration: E) -> Self {
        Self::new(enumeration, SvgGraphics)
    }
}

impl<E: EnumerationFunction, G: Graphics> MultiIndexEnumerationExplorer<E, G> {
    /// Creates an explorer over `enumeration`, drawing through `graphics`.
    #[must_use]
    pub fn new(enumeration: E, graphics: G) -> Self {
        Self {
            enumeration,
            graphics,
        }
    }

    /// The wrapped enumeration rule.
    #[must_use]
    pub fn enumeration(&self) -> &E {
        &self.enumeration
    }

    /// Draws the multi-indices of ranks `0..count`, each labelled with its
    /// rank, using the default view options.
    ///
    /// # Errors
    ///
    /// See [`draw_by_rank_with`](Self::draw_by_rank_with).
    pub fn draw_by_rank(&self, count: usize, label_offset: f64) -> Result<G::View, ExplorerError> {
        self.draw_by_rank_with(count, label_offset, &ViewOptions::default())
    }

    /// Draws the multi-indices of ranks `0..count`, each labelled with its
    /// rank. Labels sit at `multi_index + (label_offset, label_offset)`.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::DimensionMismatch`] if the rule is not 2-dimensional.
    /// - [`ExplorerError::InvalidLabelOffset`] if `label_offset` is not finite.
    pub fn draw_by_rank_with(
        &self,
        count: usize,
        label_offset: f64,
        options: &ViewOptions,
    ) -> Result<G::View, ExplorerError> {
        self.require_planar()?;
        if !label_offset.is_finite() {
            return Err(ExplorerError::InvalidLabelOffset(label_offset));
        }

        let points = to_points(&self.collect_multi_indices(0..count))?;
        let anchors = points
            .iter()
            .map(|p| p.offset(label_offset, label_offset))
            .collect();
        let labels = (0..count).map(|rank| rank.to_string()).collect();

        let cloud = self.graphics.scatter_layer(points, MarkerStyle::Circle);
        let text = self
            .graphics
            .text_layer(anchors, labels)?
            .with_color(Color::RED);

        let chart = ChartBuilder::new(RANK_TITLE, "Indice 1", "Indice 2")
            .legend_position(LegendPosition::TopRight)
            .square()
            .integer_ticks()
            .layer(cloud)
            .layer(text)
            .build();
        tracing::debug!(count, "drew multi-indices by rank");
        Ok(self.graphics.view(chart, options))
    }

    /// Draws strata `0..max_stratum_index`, one coloured group per stratum,
    /// using the default view options.
    ///
    /// # Errors
    ///
    /// See [`draw_by_stratum_with`](Self::draw_by_stratum_with).
    pub fn draw_by_stratum(&self, max_stratum_index: usize) -> Result<G::View, ExplorerError> {
        self.draw_by_stratum_with(max_stratum_index, &ViewOptions::default())
    }

    /// Draws strata `0..max_stratum_index`, one coloured group per stratum,
    /// legended by stratum index in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::DimensionMismatch`] if the rule is not
    /// 2-dimensional.
    pub fn draw_by_stratum_with(
        &self,
        max_stratum_index: usize,
        options: &ViewOptions,
    ) -> Result<G::View, ExplorerError> {
        self.require_planar()?;

        let mut layers = Vec::with_capacity(max_stratum_index);
        for stratum in 0..max_stratum_index {
            let ranks = self.stratum_ranks(stratum);
            tracing::debug!(stratum, start = ranks.start, end = ranks.end, "collecting stratum");
            let points = to_points(&self.collect_multi_indices(ranks))?;
            layers.push(
                self.graphics
                    .scatter_layer(points, MarkerStyle::Circle)
                    .with_legend(stratum.to_string()),
            );
        }

        let chart = ChartBuilder::new(STRATUM_TITLE, "α₁", "α₂")
            .legend_position(LegendPosition::TopRight)
            .square()
            .integer_ticks()
            .layers(layers)
            .colors(self.graphics.palette(max_stratum_index))
            .build();
        Ok(self.graphics.view(chart, options))
    }

    /// Ranks belonging to `stratum`:
    /// `[cumulated(stratum) - cardinal(stratum), cumulated(stratum))`.
    #[must_use]
    pub fn stratum_ranks(&self, stratum: usize) -> Range<usize> {
        let cumulated = self.enumeration.strata_cumulated_cardinal(stratum);
        let cardinal = self.enumeration.strata_cardinal(stratum);
        cumulated.saturating_sub(cardinal)..cumulated
    }

    /// Multi-indices of every rank in `stratum`, in rank order.
    #[must_use]
    pub fn stratum_multi_indices(&self, stratum: usize) -> Vec<MultiIndex> {
        self.collect_multi_indices(self.stratum_ranks(stratum))
    }

    /// Maps each rank to its multi-index, preserving order and duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::InvalidRank`] for the first negative rank;
    /// nothing is computed in that case.
    pub fn ranks_to_multi_index_set<I>(&self, ranks: I) -> Result<Vec<MultiIndex>, ExplorerError>
    where
        I: IntoIterator<Item = i64>,
    {
        let ranks = ranks
            .into_iter()
            .map(|r| usize::try_from(r).map_err(|_| ExplorerError::InvalidRank(r)))
            .collect::<Result<Vec<usize>, _>>()?;
        Ok(self.collect_multi_indices(ranks))
    }

    fn collect_multi_indices(&self, ranks: impl IntoIterator<Item = usize>) -> Vec<MultiIndex> {
        ranks.into_iter().map(|r| self.enumeration.call(r)).collect()
    }

    fn require_planar(&self) -> Result<(), ExplorerError> {
        match self.enumeration.dimension() {
            PLANAR => Ok(()),
            found => Err(ExplorerError::DimensionMismatch {
                expected: PLANAR,
                found,
            }),
        }
    }
}

fn to_points(indices: &[MultiIndex]) -> Result<Vec<Point>, ExplorerError> {
    indices
        .iter()
        .map(|m| match m.as_slice() {
            &[x, y] => Ok(Point::new(x as f64, y as f64)),
            other => Err(ExplorerError::DimensionMismatch {
                expected: PLANAR,
                found: other.len(),
            }),
        })
        .collect()
}

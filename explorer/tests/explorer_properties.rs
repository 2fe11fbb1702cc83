//! Property-based tests for the explorer against the linear rule.

use proptest::prelude::*;
use uqdemo_explorer::{
    ExplorerError, MultiIndexEnumerationExplorer, DEFAULT_LABEL_OFFSET, RANK_TITLE, STRATUM_TITLE,
};
use uqdemo_multiindex::{EnumerationFunction, LinearEnumerateFunction};
use uqdemo_plot::{Aspect, LegendPosition, Point, TickLocator};

fn planar() -> LinearEnumerateFunction {
    match LinearEnumerateFunction::new(2) {
        Ok(r) => r,
        Err(e) => unreachable!("{e}"),
    }
}

// =============================================================================
// draw_by_rank
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// count markers, count labels "0".."count-1" in rank order.
    #[test]
    fn prop_rank_view_has_one_marker_and_label_per_rank(count in 0usize..80) {
        let rule = planar();
        let explorer = MultiIndexEnumerationExplorer::with_svg(&rule);
        let view = explorer.draw_by_rank(count, DEFAULT_LABEL_OFFSET);
        prop_assert!(view.is_ok());
        if let Ok(view) = view {
            let layers = view.chart().layers();
            prop_assert_eq!(layers[0].points().len(), count);
            let labels = layers[1].as_text().map(|t| t.labels().to_vec()).unwrap_or_default();
            let expected: Vec<String> = (0..count).map(|i| i.to_string()).collect();
            prop_assert_eq!(labels, expected);
            prop_assert_eq!(view.as_svg().matches(r#"class="marker""#).count(), count);
            prop_assert_eq!(view.as_svg().matches(r#"class="label""#).count(), count);
        }
    }
}

// =============================================================================
// Strata
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Stratum ranges tile [0, cumulated(max - 1)) without gaps or overlaps.
    #[test]
    fn prop_stratum_ranges_tile_prefix(dimension in 1usize..5, max in 1usize..10) {
        let rule = match LinearEnumerateFunction::new(dimension) {
            Ok(r) => r,
            Err(e) => unreachable!("{e}"),
        };
        let explorer = MultiIndexEnumerationExplorer::with_svg(&rule);
        let mut next = 0usize;
        for stratum in 0..max {
            let ranks = explorer.stratum_ranks(stratum);
            prop_assert_eq!(ranks.start, next);
            prop_assert_eq!(ranks.len(), rule.strata_cardinal(stratum));
            next = ranks.end;
        }
        prop_assert_eq!(next, rule.strata_cumulated_cardinal(max - 1));
    }

    /// Output position k holds the multi-index of input rank k.
    #[test]
    fn prop_rank_conversion_preserves_order(ranks in proptest::collection::vec(0i64..500, 0..40)) {
        let rule = planar();
        let explorer = MultiIndexEnumerationExplorer::with_svg(&rule);
        let set = explorer.ranks_to_multi_index_set(ranks.clone());
        prop_assert!(set.is_ok());
        if let Ok(set) = set {
            prop_assert_eq!(set.len(), ranks.len());
            for (m, &r) in set.iter().zip(&ranks) {
                prop_assert_eq!(m, &rule.call(r as usize));
                prop_assert_eq!(m.dimension(), 2);
            }
        }
    }

    /// Any negative rank fails the whole conversion.
    #[test]
    fn prop_negative_rank_fails(prefix in proptest::collection::vec(0i64..50, 0..5), bad in i64::MIN..0) {
        let rule = planar();
        let explorer = MultiIndexEnumerationExplorer::with_svg(&rule);
        let mut ranks = prefix;
        ranks.push(bad);
        prop_assert_eq!(
            explorer.ranks_to_multi_index_set(ranks),
            Err(ExplorerError::InvalidRank(bad))
        );
    }
}

#[test]
fn stratum_view_matches_linear_degrees() -> Result<(), ExplorerError> {
    let rule = planar();
    let explorer = MultiIndexEnumerationExplorer::with_svg(&rule);
    let view = explorer.draw_by_stratum(4)?;
    let chart = view.chart();
    assert_eq!(chart.layers().len(), 4);
    for (stratum, layer) in chart.layers().iter().enumerate() {
        assert_eq!(layer.legend(), Some(stratum.to_string().as_str()));
        assert_eq!(layer.points().len(), stratum + 1);
        assert!(layer
            .points()
            .iter()
            .all(|p| (p.x + p.y - stratum as f64).abs() < f64::EPSILON));
    }
    assert_eq!(
        chart.layers()[2].points(),
        &[Point::new(2.0, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 2.0)]
    );
    assert_eq!(view.as_svg().matches("legend-entry").count(), 4);
    Ok(())
}

#[test]
fn stratum_view_rejects_non_planar_rules() {
    let rule = match LinearEnumerateFunction::new(3) {
        Ok(r) => r,
        Err(e) => unreachable!("{e}"),
    };
    let explorer = MultiIndexEnumerationExplorer::with_svg(&rule);
    assert!(matches!(
        explorer.draw_by_stratum(3),
        Err(ExplorerError::DimensionMismatch { expected: 2, found: 3 })
    ));
}

// =============================================================================
// Chart settings
// =============================================================================

#[test]
fn rank_view_is_square_with_integer_ticks() -> Result<(), ExplorerError> {
    let rule = planar();
    let explorer = MultiIndexEnumerationExplorer::with_svg(&rule);
    let view = explorer.draw_by_rank(6, DEFAULT_LABEL_OFFSET)?;
    let chart = view.chart();
    assert_eq!(chart.title(), RANK_TITLE);
    assert_eq!(chart.x_title(), "Indice 1");
    assert_eq!(chart.y_title(), "Indice 2");
    assert_eq!(chart.aspect(), Aspect::Square);
    assert_eq!(chart.tick_locator(), TickLocator::Integer);
    assert_eq!(chart.legend_position(), LegendPosition::TopRight);
    Ok(())
}

#[test]
fn stratum_view_is_square_with_integer_ticks() -> Result<(), ExplorerError> {
    let rule = planar();
    let explorer = MultiIndexEnumerationExplorer::with_svg(&rule);
    let view = explorer.draw_by_stratum(3)?;
    let chart = view.chart();
    assert_eq!(chart.title(), STRATUM_TITLE);
    assert_eq!(chart.x_title(), "α₁");
    assert_eq!(chart.y_title(), "α₂");
    assert_eq!(chart.aspect(), Aspect::Square);
    assert_eq!(chart.tick_locator(), TickLocator::Integer);
    assert_eq!(chart.legend_position(), LegendPosition::TopRight);
    Ok(())
}

#[test]
fn extreme_finite_offsets_still_render_ticks() -> Result<(), ExplorerError> {
    let rule = planar();
    let explorer = MultiIndexEnumerationExplorer::with_svg(&rule);
    for offset in [1e19, -1e19, 1e300, -1e300] {
        let view = explorer.draw_by_rank(3, offset)?;
        assert_eq!(view.as_svg().matches(r#"class="marker""#).count(), 3);
        assert!(view.as_svg().contains(r#"class="xtick""#), "offset {offset}");
        assert!(view.as_svg().contains(r#"class="ytick""#), "offset {offset}");
    }
    Ok(())
}

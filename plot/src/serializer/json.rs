//! JSON serializer for charts.
//!
//! Produces one object with the chart settings and a `layers` array in
//! drawing order. Points are `[x, y]` pairs; colours are `#rrggbb` strings
//! or `null` when the layer keeps the backend default.

use serde_json::{json, Value};

use crate::model::{Aspect, Chart, Layer, Point, TickLocator};

/// Serializes a chart to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(chart: &Chart) -> Value {
    let layers: Vec<Value> = chart.layers().iter().map(layer_to_json).collect();
    let aspect = match chart.aspect() {
        Aspect::Auto => "auto",
        Aspect::Square => "square",
    };
    let ticks = match chart.tick_locator() {
        TickLocator::Auto => "auto",
        TickLocator::Integer => "integer",
    };
    json!({
        "title": chart.title(),
        "x_title": chart.x_title(),
        "y_title": chart.y_title(),
        "legend_position": chart.legend_position().as_str(),
        "aspect": aspect,
        "ticks": ticks,
        "layers": layers
    })
}

fn points_to_json(points: &[Point]) -> Value {
    Value::Array(points.iter().map(|p| json!([p.x, p.y])).collect())
}

fn layer_to_json(layer: &Layer) -> Value {
    let color = layer.color().map(|c| c.hex());
    let mut node = match layer {
        Layer::Cloud(cloud) => json!({
            "kind": "cloud",
            "marker": cloud.marker().as_str(),
            "color": color,
            "points": points_to_json(layer.points())
        }),
        Layer::Text(text) => json!({
            "kind": "text",
            "color": color,
            "size": text.size(),
            "points": points_to_json(layer.points()),
            "labels": text.labels()
        }),
    };
    if let Some(legend) = layer.legend() {
        node["legend"] = json!(legend);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChartBuilder, Cloud, Color, MarkerStyle, Text};

    #[test]
    fn chart_settings_are_serialized() {
        let chart = ChartBuilder::new("Strata", "a1", "a2")
            .square()
            .integer_ticks()
            .build();
        let v = to_json(&chart);
        assert_eq!(v["title"], "Strata");
        assert_eq!(v["aspect"], "square");
        assert_eq!(v["ticks"], "integer");
        assert_eq!(v["legend_position"], "topright");
        assert_eq!(v["layers"], json!([]));
    }

    #[test]
    fn layers_keep_order_and_payload() {
        let cloud = Layer::Cloud(Cloud::new(vec![Point::new(1.0, 0.0)], MarkerStyle::Circle))
            .with_legend("1")
            .with_color(Color::rgb(0x1f, 0x77, 0xb4));
        let text = match Text::new(vec![Point::new(1.1, 0.1)], vec!["1".into()]) {
            Ok(t) => Layer::Text(t),
            Err(e) => unreachable!("{e}"),
        };
        let chart = ChartBuilder::new("t", "x", "y").layer(cloud).layer(text).build();
        let v = to_json(&chart);
        assert_eq!(v["layers"][0]["kind"], "cloud");
        assert_eq!(v["layers"][0]["legend"], "1");
        assert_eq!(v["layers"][0]["color"], "#1f77b4");
        assert_eq!(v["layers"][0]["points"], json!([[1.0, 0.0]]));
        assert_eq!(v["layers"][1]["kind"], "text");
        assert_eq!(v["layers"][1]["color"], Value::Null);
        assert_eq!(v["layers"][1]["labels"], json!(["1"]));
    }
}

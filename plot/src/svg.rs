//! In-memory SVG rendering.
//!
//! [`SvgGraphics`] renders a chart into a self-contained SVG document. Each
//! cloud marker carries `class="marker"`, each text label `class="label"`,
//! and each legend row `class="legend-entry"`.

use std::fmt::Write as _;

use crate::graphics::{Graphics, LegendLocation, LegendOptions, ViewOptions};
use crate::model::{Aspect, Chart, Color, Layer, LegendPosition, MarkerStyle, Point, TickLocator};
use crate::palette::CATEGORICAL;

const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 32.0;
const MARGIN_BOTTOM: f64 = 44.0;
const MARKER_RADIUS: f64 = 3.5;
const BASE_FONT: f64 = 11.0;
const CHAR_WIDTH: f64 = 6.5;
const LEGEND_ROW: f64 = 16.0;
const LEGEND_PAD: f64 = 6.0;
const TICK_LENGTH: f64 = 4.0;
const MAX_INTEGER_TICKS: i128 = 10;

/// Graphics backend producing [`SvgView`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgGraphics;

impl Graphics for SvgGraphics {
    type View = SvgView;

    fn view(&self, chart: Chart, options: &ViewOptions) -> SvgView {
        let document = render(&chart, options);
        tracing::debug!(
            layers = chart.layers().len(),
            bytes = document.len(),
            "rendered chart to SVG"
        );
        SvgView {
            chart,
            options: *options,
            document,
        }
    }
}

/// A chart together with its rendered SVG document.
#[derive(Debug, Clone)]
pub struct SvgView {
    chart: Chart,
    options: ViewOptions,
    document: String,
}

impl SvgView {
    /// The chart this view renders.
    #[must_use]
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    /// Options the view was rendered with.
    #[must_use]
    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// The SVG document.
    #[must_use]
    pub fn as_svg(&self) -> &str {
        &self.document
    }

    /// Consumes the view, returning the SVG document.
    #[must_use]
    pub fn into_svg(self) -> String {
        self.document
    }
}

/// Maps data coordinates onto the pixel canvas.
struct Frame {
    lo: Point,
    hi: Point,
    left: f64,
    bottom: f64,
    sx: f64,
    sy: f64,
}

impl Frame {
    fn new(chart: &Chart, width: f64, height: f64) -> Self {
        let (lo, hi) = chart
            .bounds()
            .unwrap_or((Point::new(0.0, 0.0), Point::new(1.0, 1.0)));
        let (x_lo, x_hi) = pad(lo.x, hi.x, chart.tick_locator());
        let (y_lo, y_hi) = pad(lo.y, hi.y, chart.tick_locator());
        let (dx, dy) = (x_hi - x_lo, y_hi - y_lo);

        let plot_w = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_h = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);

        let (sx, sy) = match chart.aspect() {
            Aspect::Auto => (plot_w / dx, plot_h / dy),
            Aspect::Square => {
                let s = (plot_w / dx).min(plot_h / dy);
                (s, s)
            }
        };
        let left = MARGIN_LEFT + (plot_w - dx * sx) / 2.0;
        let bottom = MARGIN_TOP + plot_h - (plot_h - dy * sy) / 2.0;
        Self {
            lo: Point::new(x_lo, y_lo),
            hi: Point::new(x_hi, y_hi),
            left,
            bottom,
            sx,
            sy,
        }
    }

    fn px(&self, p: Point) -> (f64, f64) {
        (
            self.left + (p.x - self.lo.x) * self.sx,
            self.bottom - (p.y - self.lo.y) * self.sy,
        )
    }

    fn width(&self) -> f64 {
        (self.hi.x - self.lo.x) * self.sx
    }

    fn height(&self) -> f64 {
        (self.hi.y - self.lo.y) * self.sy
    }

    fn top(&self) -> f64 {
        self.bottom - self.height()
    }
}

fn pad(lo: f64, hi: f64, locator: TickLocator) -> (f64, f64) {
    let span = hi - lo;
    let p = match locator {
        TickLocator::Integer => 0.5,
        TickLocator::Auto if span > 0.0 => 0.05 * span,
        TickLocator::Auto => 0.5,
    };
    (lo - p, hi + p)
}

/// Tick values inside `[lo, hi]`.
fn ticks(lo: f64, hi: f64, locator: TickLocator) -> Vec<f64> {
    match locator {
        TickLocator::Integer => {
            if !(lo.is_finite() && hi.is_finite()) {
                return Vec::new();
            }
            // Bounds outside the i128 range saturate and stay ordered.
            let start = lo.ceil() as i128;
            let end = hi.floor() as i128;
            let count = end.saturating_sub(start).saturating_add(1);
            if count <= 0 {
                return Vec::new();
            }
            let step = (count - 1) / MAX_INTEGER_TICKS + 1;
            let mut out = Vec::new();
            let mut v = start;
            while v <= end {
                out.push(v as f64);
                match v.checked_add(step) {
                    Some(next) => v = next,
                    None => break,
                }
            }
            out
        }
        TickLocator::Auto => (0..5).map(|i| lo + (hi - lo) * i as f64 / 4.0).collect(),
    }
}

fn tick_label(v: f64, locator: TickLocator) -> String {
    match locator {
        TickLocator::Integer => format!("{:.0}", v.round()),
        TickLocator::Auto => format!("{v:.2}"),
    }
}

/// Escapes text for use in SVG character data and attribute values.
#[must_use]
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layer_color(layer: &Layer) -> Color {
    match layer {
        Layer::Cloud(_) => layer.color().unwrap_or(CATEGORICAL[0]),
        Layer::Text(_) => layer.color().unwrap_or(Color::BLACK),
    }
}

fn write_marker(out: &mut String, class: &str, marker: MarkerStyle, x: f64, y: f64, color: Color) {
    let fill = color.hex();
    let r = MARKER_RADIUS;
    // Writing to a String cannot fail.
    let _ = match marker {
        MarkerStyle::Circle => writeln!(
            out,
            r#"<circle class="{class}" cx="{x:.2}" cy="{y:.2}" r="{r}" fill="{fill}"/>"#
        ),
        MarkerStyle::Square => writeln!(
            out,
            r#"<rect class="{class}" x="{:.2}" y="{:.2}" width="{w}" height="{w}" fill="{fill}"/>"#,
            x - r,
            y - r,
            w = 2.0 * r
        ),
        MarkerStyle::Cross => writeln!(
            out,
            r#"<path class="{class}" d="M{:.2},{:.2}L{:.2},{:.2}M{:.2},{:.2}L{:.2},{:.2}" stroke="{fill}" stroke-width="1.5"/>"#,
            x - r,
            y - r,
            x + r,
            y + r,
            x - r,
            y + r,
            x + r,
            y - r
        ),
    };
}

/// Pixel rectangle `(x, y, w, h)` of the legend box.
fn legend_box(chart: &Chart, options: &ViewOptions, frame: &Frame) -> Option<(f64, f64, f64, f64)> {
    let entries: Vec<&str> = chart.legend_entries().filter_map(Layer::legend).collect();
    if entries.is_empty() {
        return None;
    }
    let longest = entries.iter().map(|e| e.chars().count()).max().unwrap_or(0);
    let w = 2.0 * LEGEND_PAD + 2.0 * MARKER_RADIUS + 8.0 + CHAR_WIDTH * longest as f64;
    let h = 2.0 * LEGEND_PAD + LEGEND_ROW * entries.len() as f64 - 4.0;

    let placement = options.legend.unwrap_or(match chart.legend_position() {
        LegendPosition::TopRight => LegendOptions {
            anchor: (1.0, 1.0),
            location: LegendLocation::UpperRight,
        },
        LegendPosition::TopLeft => LegendOptions {
            anchor: (0.0, 1.0),
            location: LegendLocation::UpperLeft,
        },
        LegendPosition::BottomRight => LegendOptions {
            anchor: (1.0, 0.0),
            location: LegendLocation::LowerRight,
        },
        LegendPosition::BottomLeft => LegendOptions {
            anchor: (0.0, 0.0),
            location: LegendLocation::LowerLeft,
        },
    });
    let ax = frame.left + placement.anchor.0 * frame.width();
    let ay = frame.bottom - placement.anchor.1 * frame.height();
    let (x, y) = match placement.location {
        LegendLocation::UpperLeft => (ax, ay),
        LegendLocation::UpperRight => (ax - w, ay),
        LegendLocation::LowerLeft => (ax, ay - h),
        LegendLocation::LowerRight => (ax - w, ay - h),
    };
    Some((x, y, w, h))
}

/// Renders `chart` as an SVG document.
#[must_use]
pub fn render(chart: &Chart, options: &ViewOptions) -> String {
    let (width, height) = options.figure.pixels();
    let frame = Frame::new(chart, width, height);
    let legend = legend_box(chart, options, &frame);

    // Grow the canvas so that a legend placed outside the axes stays visible.
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (0.0_f64, 0.0_f64, width, height);
    if let Some((x, y, w, h)) = legend {
        min_x = min_x.min(x - 4.0);
        min_y = min_y.min(y - 4.0);
        max_x = max_x.max(x + w + 4.0);
        max_y = max_y.max(y + h + 4.0);
    }
    let (cw, ch) = (max_x - min_x, max_y - min_y);

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{cw:.0}" height="{ch:.0}" viewBox="{min_x:.2} {min_y:.2} {cw:.2} {ch:.2}" font-family="sans-serif">"#
    );
    let _ = writeln!(
        out,
        r#"<rect x="{min_x:.2}" y="{min_y:.2}" width="{cw:.2}" height="{ch:.2}" fill="white"/>"#
    );

    // Title
    let _ = writeln!(
        out,
        r#"<text class="title" x="{:.2}" y="{:.2}" font-size="{}" text-anchor="middle">{}</text>"#,
        frame.left + frame.width() / 2.0,
        frame.top() - 10.0,
        BASE_FONT + 2.0,
        escape_xml(chart.title())
    );

    // Axes frame
    let _ = writeln!(
        out,
        r#"<rect class="axes" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
        frame.left,
        frame.top(),
        frame.width(),
        frame.height()
    );

    // Ticks
    let locator = chart.tick_locator();
    for v in ticks(frame.lo.x, frame.hi.x, locator) {
        let (x, _) = frame.px(Point::new(v, frame.lo.y));
        let _ = writeln!(
            out,
            r#"<line class="xtick" x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="black"/>"#,
            frame.bottom,
            frame.bottom + TICK_LENGTH
        );
        let _ = writeln!(
            out,
            r#"<text x="{x:.2}" y="{:.2}" font-size="{BASE_FONT}" text-anchor="middle">{}</text>"#,
            frame.bottom + TICK_LENGTH + BASE_FONT,
            tick_label(v, locator)
        );
    }
    for v in ticks(frame.lo.y, frame.hi.y, locator) {
        let (_, y) = frame.px(Point::new(frame.lo.x, v));
        let _ = writeln!(
            out,
            r#"<line class="ytick" x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="black"/>"#,
            frame.left - TICK_LENGTH,
            frame.left
        );
        let _ = writeln!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="{BASE_FONT}" text-anchor="end">{}</text>"#,
            frame.left - TICK_LENGTH - 2.0,
            y + BASE_FONT / 3.0,
            tick_label(v, locator)
        );
    }

    // Axis titles
    let _ = writeln!(
        out,
        r#"<text class="xtitle" x="{:.2}" y="{:.2}" font-size="{BASE_FONT}" text-anchor="middle">{}</text>"#,
        frame.left + frame.width() / 2.0,
        frame.bottom + TICK_LENGTH + 2.5 * BASE_FONT,
        escape_xml(chart.x_title())
    );
    let (yx, yy) = (frame.left - 40.0, frame.top() + frame.height() / 2.0);
    let _ = writeln!(
        out,
        r#"<text class="ytitle" x="{yx:.2}" y="{yy:.2}" font-size="{BASE_FONT}" text-anchor="middle" transform="rotate(-90 {yx:.2} {yy:.2})">{}</text>"#,
        escape_xml(chart.y_title())
    );

    // Layers
    for layer in chart.layers() {
        let color = layer_color(layer);
        match layer {
            Layer::Cloud(cloud) => {
                let _ = writeln!(out, r#"<g class="cloud">"#);
                for &p in layer.points() {
                    let (x, y) = frame.px(p);
                    write_marker(&mut out, "marker", cloud.marker(), x, y, color);
                }
                let _ = writeln!(out, "</g>");
            }
            Layer::Text(text) => {
                let size = BASE_FONT * text.size();
                let _ = writeln!(out, r#"<g class="text">"#);
                for (&p, label) in layer.points().iter().zip(text.labels()) {
                    let (x, y) = frame.px(p);
                    let _ = writeln!(
                        out,
                        r#"<text class="label" x="{x:.2}" y="{y:.2}" font-size="{size:.2}" fill="{}">{}</text>"#,
                        color.hex(),
                        escape_xml(label)
                    );
                }
                let _ = writeln!(out, "</g>");
            }
        }
    }

    // Legend
    if let Some((lx, ly, lw, lh)) = legend {
        let _ = writeln!(
            out,
            r##"<g class="legend"><rect x="{lx:.2}" y="{ly:.2}" width="{lw:.2}" height="{lh:.2}" fill="white" stroke="#cccccc"/>"##
        );
        for (row, layer) in chart.legend_entries().enumerate() {
            let cy = ly + LEGEND_PAD + LEGEND_ROW * row as f64 + MARKER_RADIUS + 2.0;
            let cx = lx + LEGEND_PAD + MARKER_RADIUS;
            let marker = layer.as_cloud().map_or(MarkerStyle::Square, |c| c.marker());
            let _ = writeln!(out, r#"<g class="legend-entry">"#);
            write_marker(&mut out, "legend-marker", marker, cx, cy, layer_color(layer));
            let _ = writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" font-size="{BASE_FONT}">{}</text></g>"#,
                cx + MARKER_RADIUS + 6.0,
                cy + BASE_FONT / 3.0,
                escape_xml(layer.legend().unwrap_or_default())
            );
        }
        let _ = writeln!(out, "</g>");
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChartBuilder, Cloud, Text};

    fn cloud(points: &[(f64, f64)]) -> Layer {
        Layer::Cloud(Cloud::new(
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            MarkerStyle::Circle,
        ))
    }

    #[test]
    fn integer_ticks_are_whole_numbers() {
        assert_eq!(ticks(-0.5, 2.5, TickLocator::Integer), vec![0.0, 1.0, 2.0]);
        assert!(ticks(0.2, 0.8, TickLocator::Integer).is_empty());
    }

    #[test]
    fn integer_ticks_are_thinned() {
        let t = ticks(-0.5, 40.5, TickLocator::Integer);
        assert!(t.len() <= 11, "got {} ticks", t.len());
        assert!(t.iter().all(|v| v.fract() == 0.0));
    }

    #[test]
    fn integer_ticks_survive_huge_bounds() {
        let t = ticks(-1e19, 1e19, TickLocator::Integer);
        assert!(!t.is_empty() && t.len() <= 11, "got {} ticks", t.len());
        assert!(t.windows(2).all(|w| w[0] < w[1]));
        assert!(!ticks(1e19, 3e19, TickLocator::Integer).is_empty());
        assert!(!ticks(-3e19, -1e19, TickLocator::Integer).is_empty());
        assert!(!ticks(-f64::MAX, f64::MAX, TickLocator::Integer).is_empty());
        assert_eq!(tick_label(1e19, TickLocator::Integer), "10000000000000000000");
    }

    #[test]
    fn square_aspect_uses_one_scale() {
        let chart = ChartBuilder::new("t", "x", "y")
            .square()
            .layer(cloud(&[(0.0, 0.0), (4.0, 1.0)]))
            .build();
        let frame = Frame::new(&chart, 400.0, 400.0);
        assert_eq!(frame.sx, frame.sy);
    }

    #[test]
    fn markers_and_labels_are_tagged() {
        let text = match Text::new(
            vec![Point::new(0.1, 0.1), Point::new(1.1, 0.1)],
            vec!["0".into(), "1".into()],
        ) {
            Ok(t) => Layer::Text(t),
            Err(e) => unreachable!("{e}"),
        };
        let chart = ChartBuilder::new("t", "x", "y")
            .layer(cloud(&[(0.0, 0.0), (1.0, 0.0)]))
            .layer(text)
            .build();
        let svg = render(&chart, &ViewOptions::default());
        assert_eq!(svg.matches(r#"class="marker""#).count(), 2);
        assert_eq!(svg.matches(r#"class="label""#).count(), 2);
        assert!(!svg.contains("legend-entry"));
    }

    #[test]
    fn legend_lists_entries_in_order() {
        let chart = ChartBuilder::new("t", "x", "y")
            .layer(cloud(&[(0.0, 0.0)]).with_legend("0"))
            .layer(cloud(&[(1.0, 0.0)]).with_legend("1"))
            .build();
        let svg = render(&chart, &ViewOptions::default());
        assert_eq!(svg.matches("legend-entry").count(), 2);
        let first = svg.find(">0</text></g>");
        let second = svg.find(">1</text></g>");
        assert!(first.is_some() && second.is_some() && first < second);
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_xml(r#"a<b & "c""#), "a&lt;b &amp; &quot;c&quot;");
        let chart = ChartBuilder::new("<T>", "x", "y").build();
        let svg = render(&chart, &ViewOptions::default());
        assert!(svg.contains("&lt;T&gt;"));
    }

    #[test]
    fn empty_chart_renders() {
        let chart = ChartBuilder::new("t", "x", "y").integer_ticks().build();
        let svg = render(&chart, &ViewOptions::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}

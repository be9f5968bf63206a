use dioxus::prelude::*;

use crate::domain::{PointKind, PredictionPoint};
use crate::ui::theme;
use crate::util::format_inr;

const VIEW_WIDTH: f64 = 720.0;
const VIEW_HEIGHT: f64 = 260.0;
const MARGIN_X: f64 = 10.0;
const MARGIN_Y: f64 = 16.0;

/// Maps series indices and rupee prices into the SVG viewbox.
struct ChartGeometry {
    count: usize,
    min_price: f64,
    max_price: f64,
}

impl ChartGeometry {
    fn fit(points: &[PredictionPoint]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        for point in points {
            min_price = min_price.min(point.lower.unwrap_or(point.price));
            max_price = max_price.max(point.upper.unwrap_or(point.price));
        }
        if !min_price.is_finite() || !max_price.is_finite() {
            return None;
        }
        if (max_price - min_price).abs() < f64::EPSILON {
            // A flat series still needs a vertical span to draw against.
            min_price -= 1.0;
            max_price += 1.0;
        }

        Some(Self {
            count: points.len(),
            min_price,
            max_price,
        })
    }

    fn x(&self, index: usize) -> f64 {
        let span = (self.count - 1) as f64;
        MARGIN_X + (VIEW_WIDTH - 2.0 * MARGIN_X) * index as f64 / span
    }

    /// SVG y grows downward, so higher prices map to smaller y.
    fn y(&self, price: f64) -> f64 {
        let unit = (price - self.min_price) / (self.max_price - self.min_price);
        VIEW_HEIGHT - MARGIN_Y - (VIEW_HEIGHT - 2.0 * MARGIN_Y) * unit
    }

    fn point_list(&self, items: impl Iterator<Item = (usize, f64)>) -> String {
        items
            .map(|(index, price)| format!("{:.1},{:.1}", self.x(index), self.y(price)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Price history plus forecast, drawn as a solid past line and a dashed
/// future line inside its confidence band.
#[component]
pub fn ForecastChart(points: Vec<PredictionPoint>, loading: bool) -> Element {
    if loading {
        return rsx! {
            div { class: "chart-frame flex h-64 items-center justify-center",
                div { class: "spinner-lg" }
            }
        };
    }

    let Some(geometry) = ChartGeometry::fit(&points) else {
        return rsx! {
            div { class: "chart-frame flex h-64 items-center justify-center text-sm {theme::text_muted()}",
                "No price history available yet."
            }
        };
    };

    let last_history = points
        .iter()
        .rposition(|point| point.kind == PointKind::History);

    let history_line = geometry.point_list(
        points
            .iter()
            .enumerate()
            .filter(|(_, point)| point.kind == PointKind::History)
            .map(|(index, point)| (index, point.price)),
    );

    // The dashed segment starts at the last history point so the two lines
    // join up instead of leaving a gap.
    let forecast_line = geometry.point_list(
        points
            .iter()
            .enumerate()
            .filter(|(index, point)| {
                point.kind == PointKind::Forecast || Some(*index) == last_history
            })
            .map(|(index, point)| (index, point.price)),
    );

    let band: Vec<(usize, f64, f64)> = points
        .iter()
        .enumerate()
        .filter_map(|(index, point)| match (point.lower, point.upper) {
            (Some(lower), Some(upper)) => Some((index, lower, upper)),
            _ => None,
        })
        .collect();
    let band_polygon = geometry.point_list(
        band.iter()
            .map(|(index, _, upper)| (*index, *upper))
            .chain(band.iter().rev().map(|(index, lower, _)| (*index, *lower))),
    );

    let first_date = points.first().map(|point| point.date.to_string());
    let last_date = points.last().map(|point| point.date.to_string());
    let range_label = format!(
        "{} to {}",
        format_inr(geometry.min_price),
        format_inr(geometry.max_price)
    );

    rsx! {
        div { class: "chart-frame",
            svg {
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                preserve_aspect_ratio: "none",
                class: "h-64 w-full",
                if !band_polygon.is_empty() {
                    polygon { points: "{band_polygon}", fill: "rgba(16, 185, 129, 0.15)" }
                }
                polyline {
                    points: "{history_line}",
                    fill: "none",
                    stroke: "#475569",
                    stroke_width: "2",
                }
                if !forecast_line.is_empty() {
                    polyline {
                        points: "{forecast_line}",
                        fill: "none",
                        stroke: "#059669",
                        stroke_width: "2.5",
                        stroke_dasharray: "6 4",
                    }
                }
            }
            div { class: "mt-2 flex items-center justify-between text-xs {theme::text_muted()}",
                if let Some(date) = first_date {
                    span { "{date}" }
                }
                span { "{range_label}" }
                if let Some(date) = last_date {
                    span { "{date}" }
                }
            }
            div { class: "mt-1 flex items-center gap-4 text-xs {theme::text_muted()}",
                span { class: "flex items-center gap-1",
                    span { class: "inline-block h-0.5 w-6 bg-slate-600" }
                    "Last 30 days"
                }
                span { class: "flex items-center gap-1",
                    span { class: "inline-block h-0.5 w-6 border-t-2 border-dashed border-emerald-600" }
                    "14-day outlook with band"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;
    use time::Duration;

    use super::*;

    fn point(day: i64, price: f64, kind: PointKind) -> PredictionPoint {
        let band = matches!(kind, PointKind::Forecast);
        PredictionPoint {
            date: date!(2025 - 11 - 01) + Duration::days(day),
            price,
            lower: band.then(|| price * 0.95),
            upper: band.then(|| price * 1.05),
            kind,
        }
    }

    #[test]
    fn fit_rejects_degenerate_series() {
        assert!(ChartGeometry::fit(&[]).is_none());
        assert!(ChartGeometry::fit(&[point(0, 2_400.0, PointKind::History)]).is_none());
    }

    #[test]
    fn price_axis_is_inverted() {
        let series = vec![
            point(0, 2_000.0, PointKind::History),
            point(1, 3_000.0, PointKind::History),
        ];
        let geometry = ChartGeometry::fit(&series).unwrap();
        assert!(geometry.y(3_000.0) < geometry.y(2_000.0));
        assert!(geometry.y(2_000.0) <= VIEW_HEIGHT - MARGIN_Y);
    }

    #[test]
    fn band_extends_the_fitted_range() {
        let series = vec![
            point(0, 2_000.0, PointKind::History),
            point(1, 2_000.0, PointKind::Forecast),
        ];
        let geometry = ChartGeometry::fit(&series).unwrap();
        assert_eq!(geometry.min_price, 2_000.0 * 0.95);
        assert_eq!(geometry.max_price, 2_000.0 * 1.05);
    }

    #[test]
    fn x_spans_the_drawable_width() {
        let series = vec![
            point(0, 2_000.0, PointKind::History),
            point(1, 2_100.0, PointKind::History),
            point(2, 2_200.0, PointKind::History),
        ];
        let geometry = ChartGeometry::fit(&series).unwrap();
        assert_eq!(geometry.x(0), MARGIN_X);
        assert_eq!(geometry.x(2), VIEW_WIDTH - MARGIN_X);
    }
}

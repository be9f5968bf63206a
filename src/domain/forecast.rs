//! Synthetic price series and trade signal derivation.
//!
//! Mirrors the backend's mock prediction mode: a 30-day random-walk history
//! followed by a 14-day drifting forecast with a ±5% confidence band. The
//! walk is seeded from the commodity name, so a commodity always renders the
//! same series.

use std::cmp::Ordering;

use time::{Date, Duration};

use super::entities::{PointKind, PredictionPoint, TradeSignal};

pub const HISTORY_DAYS: i64 = 30;
pub const FORECAST_DAYS: i64 = 14;
const BAND_SPREAD: f64 = 0.05;

/// Relative forecast move below which the recommendation stays Hold.
const SIGNAL_THRESHOLD: f64 = 0.03;

struct SeededWalk {
    state: u64,
}

impl SeededWalk {
    fn new(seed: u64) -> Self {
        Self { state: seed | 1 }
    }

    /// Uniform draw in `[lo, hi)`.
    fn next_in(&mut self, lo: f64, hi: f64) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let unit = (self.state >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}

// FNV-1a over the commodity name; cheap and stable across runs.
fn seed_for(name: &str) -> u64 {
    name.bytes().fold(0xcbf29ce484222325, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(0x100000001b3)
    })
}

/// Builds the stand-in series used whenever the backend is unreachable.
///
/// History wanders ±₹50/day around the base price; the forecast drifts
/// upward (−10..+60 per day) with a ±5% band, like the backend's mock mode.
pub fn synthetic_series(
    commodity: &str,
    base_price: f64,
    last_history_date: Date,
) -> Vec<PredictionPoint> {
    let mut walk = SeededWalk::new(seed_for(commodity));
    let mut series = Vec::with_capacity((HISTORY_DAYS + FORECAST_DAYS) as usize);

    let mut price = base_price;
    for offset in (1..=HISTORY_DAYS).rev() {
        price = (price + walk.next_in(-50.0, 50.0)).max(1.0);
        series.push(PredictionPoint {
            date: last_history_date - Duration::days(offset),
            price: round2(price),
            lower: None,
            upper: None,
            kind: PointKind::History,
        });
    }

    let mut future = price;
    for offset in 1..=FORECAST_DAYS {
        future = (future + walk.next_in(-10.0, 60.0)).max(1.0);
        series.push(PredictionPoint {
            date: last_history_date + Duration::days(offset),
            price: round2(future),
            lower: Some(round2(future * (1.0 - BAND_SPREAD))),
            upper: Some(round2(future * (1.0 + BAND_SPREAD))),
            kind: PointKind::Forecast,
        });
    }

    series
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sell on a projected uptrend, buy back on a slump, hold inside the noise
/// band. Compares the mean forecast price against the last history price.
pub fn derive_signal(points: &[PredictionPoint]) -> TradeSignal {
    let last_history = points
        .iter()
        .rev()
        .find(|point| point.kind == PointKind::History)
        .map(|point| point.price);
    let forecast: Vec<f64> = points
        .iter()
        .filter(|point| point.kind == PointKind::Forecast)
        .map(|point| point.price)
        .collect();

    let Some(last) = last_history else {
        return TradeSignal::Hold;
    };
    if forecast.is_empty() || last <= 0.0 {
        return TradeSignal::Hold;
    }

    let mean = forecast.iter().sum::<f64>() / forecast.len() as f64;
    let delta = (mean - last) / last;
    if delta > SIGNAL_THRESHOLD {
        TradeSignal::Sell
    } else if delta < -SIGNAL_THRESHOLD {
        TradeSignal::Buy
    } else {
        TradeSignal::Hold
    }
}

/// Days from the end of history until the forecast peak. Drives the
/// "prices are projected to peak in N days" dashboard copy.
pub fn days_to_peak(points: &[PredictionPoint]) -> Option<i64> {
    let last_history = points
        .iter()
        .rev()
        .find(|point| point.kind == PointKind::History)?
        .date;
    points
        .iter()
        .filter(|point| point.kind == PointKind::Forecast)
        .max_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal))
        .map(|peak| (peak.date - last_history).whole_days())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn history(day: u8, price: f64) -> PredictionPoint {
        PredictionPoint {
            date: date!(2025 - 11 - 01) + Duration::days(day as i64),
            price,
            lower: None,
            upper: None,
            kind: PointKind::History,
        }
    }

    fn forecast(day: u8, price: f64) -> PredictionPoint {
        PredictionPoint {
            date: date!(2025 - 11 - 01) + Duration::days(day as i64),
            price,
            lower: Some(price * 0.95),
            upper: Some(price * 1.05),
            kind: PointKind::Forecast,
        }
    }

    #[test]
    fn series_has_expected_shape() {
        let series = synthetic_series("Onion", 2_400.0, date!(2025 - 11 - 15));
        let history_count = series
            .iter()
            .filter(|p| p.kind == PointKind::History)
            .count();
        let forecast_count = series
            .iter()
            .filter(|p| p.kind == PointKind::Forecast)
            .count();
        assert_eq!(history_count, HISTORY_DAYS as usize);
        assert_eq!(forecast_count, FORECAST_DAYS as usize);

        for point in &series {
            match point.kind {
                PointKind::History => {
                    assert!(point.lower.is_none() && point.upper.is_none());
                    assert!(point.date < date!(2025 - 11 - 15));
                }
                PointKind::Forecast => {
                    let lower = point.lower.unwrap();
                    let upper = point.upper.unwrap();
                    assert!(lower <= point.price && point.price <= upper);
                    assert!(point.date > date!(2025 - 11 - 15));
                }
            }
            assert!(point.price >= 1.0);
        }
    }

    #[test]
    fn series_is_deterministic_per_commodity() {
        let first = synthetic_series("Tomato", 3_200.0, date!(2025 - 11 - 15));
        let second = synthetic_series("Tomato", 3_200.0, date!(2025 - 11 - 15));
        assert_eq!(first, second);

        let other = synthetic_series("Potato", 3_200.0, date!(2025 - 11 - 15));
        assert_ne!(first, other);
    }

    #[test]
    fn uptrend_signals_sell() {
        let points = vec![history(0, 2_000.0), forecast(1, 2_200.0), forecast(2, 2_300.0)];
        assert_eq!(derive_signal(&points), TradeSignal::Sell);
    }

    #[test]
    fn downtrend_signals_buy() {
        let points = vec![history(0, 2_000.0), forecast(1, 1_800.0), forecast(2, 1_700.0)];
        assert_eq!(derive_signal(&points), TradeSignal::Buy);
    }

    #[test]
    fn flat_forecast_holds() {
        let points = vec![history(0, 2_000.0), forecast(1, 2_010.0), forecast(2, 1_990.0)];
        assert_eq!(derive_signal(&points), TradeSignal::Hold);
    }

    #[test]
    fn missing_data_holds() {
        assert_eq!(derive_signal(&[]), TradeSignal::Hold);
        assert_eq!(derive_signal(&[history(0, 2_000.0)]), TradeSignal::Hold);
        assert_eq!(derive_signal(&[forecast(1, 2_000.0)]), TradeSignal::Hold);
    }

    #[test]
    fn peak_offset_counts_from_end_of_history() {
        let points = vec![
            history(0, 2_000.0),
            forecast(1, 2_100.0),
            forecast(2, 2_500.0),
            forecast(3, 2_300.0),
        ];
        assert_eq!(days_to_peak(&points), Some(2));
        assert_eq!(days_to_peak(&[history(0, 2_000.0)]), None);
    }
}

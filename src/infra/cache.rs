//! Persistent on-disk caching of forecast series for offline fallbacks.

use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::OnceLock,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use time::{format_description::FormatItem, macros::format_description, Date};

use crate::domain::{PointKind, PredictionPoint};

const CACHE_FILENAME: &str = "forecast_cache.json";

/// Cache TTL: 24 hours. Mandi data updates once a day at best.
pub const FORECAST_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Disk rows keep dates as ISO strings so the file stays greppable.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredPoint {
    date: String,
    price: f64,
    #[serde(default)]
    lower: Option<f64>,
    #[serde(default)]
    upper: Option<f64>,
    forecast: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSeries {
    /// Unix timestamp (seconds) when this series was fetched.
    cached_at: u64,
    points: Vec<StoredPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastCache {
    entries: HashMap<String, StoredSeries>,
}

impl ForecastCache {
    pub fn insert(&mut self, commodity_id: &str, points: &[PredictionPoint]) {
        let cached_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let points = points
            .iter()
            .map(|point| StoredPoint {
                date: point
                    .date
                    .format(DATE_FORMAT)
                    .unwrap_or_else(|_| point.date.to_string()),
                price: point.price,
                lower: point.lower,
                upper: point.upper,
                forecast: point.kind == PointKind::Forecast,
            })
            .collect();
        self.entries
            .insert(commodity_id.to_string(), StoredSeries { cached_at, points });
    }

    /// Returns the cached series and its fetch time, unless expired.
    /// Rows with unparsable dates are dropped rather than failing the load.
    pub fn series_for(&self, commodity_id: &str) -> Option<(Vec<PredictionPoint>, SystemTime)> {
        let series = self.entries.get(commodity_id)?;

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let age = Duration::from_secs(now.saturating_sub(series.cached_at));
        if age > FORECAST_CACHE_TTL {
            println!(
                "[forecast-cache] Entry for {commodity_id} expired (age: {}h)",
                age.as_secs() / 3600
            );
            return None;
        }

        let points: Vec<PredictionPoint> = series
            .points
            .iter()
            .filter_map(|stored| {
                let date = Date::parse(&stored.date, DATE_FORMAT).ok()?;
                Some(PredictionPoint {
                    date,
                    price: stored.price,
                    lower: stored.lower,
                    upper: stored.upper,
                    kind: if stored.forecast {
                        PointKind::Forecast
                    } else {
                        PointKind::History
                    },
                })
            })
            .collect();

        if points.is_empty() {
            return None;
        }
        let fetched_at = UNIX_EPOCH + Duration::from_secs(series.cached_at);
        Some((points, fetched_at))
    }
}

/// Cache file path in the platform-local data directory.
fn cache_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("agri-pivot");
        let _ = fs::create_dir_all(&base);
        base.join(CACHE_FILENAME)
    })
    .clone()
}

/// Load the forecast cache from disk, if it exists.
pub fn load_forecast_cache() -> Option<ForecastCache> {
    let path = cache_path();

    if !path.exists() {
        return None;
    }

    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(cache) => Some(cache),
            Err(err) => {
                println!("[forecast-cache] Failed to parse {}: {err}", path.display());
                None
            }
        },
        Err(err) => {
            println!("[forecast-cache] Failed to read {}: {err}", path.display());
            None
        }
    }
}

/// Save the forecast cache to disk.
pub fn save_forecast_cache(cache: &ForecastCache) -> Result<(), std::io::Error> {
    let path = cache_path();
    let content = serde_json::to_string_pretty(cache)?;
    fs::write(&path, content)?;
    println!(
        "[forecast-cache] Saved {} series to {}",
        cache.entries.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn sample_points() -> Vec<PredictionPoint> {
        vec![
            PredictionPoint {
                date: date!(2025 - 11 - 14),
                price: 2_400.0,
                lower: None,
                upper: None,
                kind: PointKind::History,
            },
            PredictionPoint {
                date: date!(2025 - 11 - 16),
                price: 2_550.0,
                lower: Some(2_500.0),
                upper: Some(2_600.0),
                kind: PointKind::Forecast,
            },
        ]
    }

    #[test]
    fn fresh_entries_round_trip_through_the_stored_form() {
        let mut cache = ForecastCache::default();
        cache.insert("onion", &sample_points());
        let (points, _) = cache.series_for("onion").unwrap();
        assert_eq!(points, sample_points());
        assert!(cache.series_for("potato").is_none());
    }

    #[test]
    fn expired_entries_are_not_served() {
        let mut cache = ForecastCache::default();
        cache.insert("onion", &sample_points());
        // Backdate past the TTL.
        let entry = cache.entries.get_mut("onion").unwrap();
        entry.cached_at = entry
            .cached_at
            .saturating_sub(FORECAST_CACHE_TTL.as_secs() + 60);
        assert!(cache.series_for("onion").is_none());
    }

    #[test]
    fn unparsable_rows_are_dropped() {
        let mut cache = ForecastCache::default();
        cache.insert("onion", &sample_points());
        cache
            .entries
            .get_mut("onion")
            .unwrap()
            .points
            .push(StoredPoint {
                date: "not-a-date".to_string(),
                price: 1.0,
                lower: None,
                upper: None,
                forecast: false,
            });
        let (points, _) = cache.series_for("onion").unwrap();
        assert_eq!(points.len(), 2);
    }
}

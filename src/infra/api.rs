#![allow(dead_code)]

//! Thin asynchronous client for the Agri-Pivot prediction API.
//!
//! - Typed accessor for the forecast series of a commodity.
//! - 30-minute in-memory cache.
//! - Falls back to the on-disk cache, then to a synthetic series, when the
//!   backend is unreachable (it usually is; the demo ships without one).

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use time::{
    format_description::FormatItem, macros::format_description, Date, OffsetDateTime,
};
use tokio::sync::Mutex;

use crate::domain::{synthetic_series, Commodity, CommodityId, PointKind, PredictionPoint};
use crate::infra::cache::{load_forecast_cache, save_forecast_cache, ForecastCache};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/";
const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);
const USER_AGENT: &str = "agri-pivot/0.3.0";

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed payload: {0}")]
    Payload(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    /// Served by the backend on this call.
    Fresh,
    /// Served from the in-memory cache within TTL.
    Cached,
    /// Backend unreachable; served from the disk cache.
    Stale,
    /// Backend unreachable and no cache; generated client-side.
    Synthetic,
}

#[derive(Clone, Debug)]
pub struct CachedPayload<T> {
    pub data: T,
    pub fetched_at: SystemTime,
    pub status: FetchStatus,
}

struct Cached<T> {
    data: T,
    fetched_at: SystemTime,
}

#[derive(Default)]
struct MemoryCache {
    forecasts: HashMap<CommodityId, Cached<Vec<PredictionPoint>>>,
}

/// Wire format served by `GET /api/predict/{commodity}`.
#[derive(Debug, Deserialize)]
struct ApiPoint {
    date: String,
    price: f64,
    #[serde(default)]
    yhat_lower: Option<f64>,
    #[serde(default)]
    yhat_upper: Option<f64>,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Clone)]
pub struct PredictionClient {
    http: Client,
    base_url: Url,
    cache: Arc<Mutex<MemoryCache>>,
    ttl: Duration,
}

impl PredictionClient {
    pub fn new() -> Result<Self, ApiClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base: &str) -> Result<Self, ApiClientError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(4))
            .build()?;
        Ok(Self {
            http,
            base_url,
            cache: Arc::new(Mutex::new(MemoryCache::default())),
            ttl: DEFAULT_TTL,
        })
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the forecast series for a commodity, from the first source
    /// that answers: memory cache, backend, disk cache, synthetic generator.
    pub async fn get_forecast(
        &self,
        commodity: &Commodity,
    ) -> Result<CachedPayload<Vec<PredictionPoint>>, ApiClientError> {
        if let Some(payload) = self.cached_forecast(&commodity.id).await {
            return Ok(payload);
        }

        match self.fetch_forecast(&commodity.name).await {
            Ok(points) => {
                let fetched_at = SystemTime::now();
                self.store(&commodity.id, points.clone(), fetched_at).await;
                let mut disk = load_forecast_cache().unwrap_or_else(ForecastCache::default);
                disk.insert(&commodity.id, &points);
                if let Err(err) = save_forecast_cache(&disk) {
                    println!("[api] Failed to persist forecast cache: {err}");
                }
                Ok(CachedPayload {
                    data: points,
                    fetched_at,
                    status: FetchStatus::Fresh,
                })
            }
            Err(err) => {
                println!(
                    "[api] Backend fetch failed for {}: {err}",
                    commodity.name
                );

                if let Some((points, cached_at)) = load_forecast_cache()
                    .and_then(|disk| disk.series_for(&commodity.id))
                {
                    self.store(&commodity.id, points.clone(), cached_at).await;
                    return Ok(CachedPayload {
                        data: points,
                        fetched_at: cached_at,
                        status: FetchStatus::Stale,
                    });
                }

                let today = OffsetDateTime::now_utc().date();
                let points =
                    synthetic_series(&commodity.name, commodity.base_price_quintal, today);
                let fetched_at = SystemTime::now();
                self.store(&commodity.id, points.clone(), fetched_at).await;
                Ok(CachedPayload {
                    data: points,
                    fetched_at,
                    status: FetchStatus::Synthetic,
                })
            }
        }
    }

    async fn cached_forecast(
        &self,
        commodity_id: &str,
    ) -> Option<CachedPayload<Vec<PredictionPoint>>> {
        let cache = self.cache.lock().await;
        let entry = cache.forecasts.get(commodity_id)?;
        let age = entry.fetched_at.elapsed().ok()?;
        if age > self.ttl {
            return None;
        }
        Some(CachedPayload {
            data: entry.data.clone(),
            fetched_at: entry.fetched_at,
            status: FetchStatus::Cached,
        })
    }

    async fn store(
        &self,
        commodity_id: &str,
        points: Vec<PredictionPoint>,
        fetched_at: SystemTime,
    ) {
        let mut cache = self.cache.lock().await;
        cache.forecasts.insert(
            commodity_id.to_string(),
            Cached {
                data: points,
                fetched_at,
            },
        );
    }

    async fn fetch_forecast(&self, name: &str) -> Result<Vec<PredictionPoint>, ApiClientError> {
        let url = self.url(&format!("predict/{name}"))?;
        let raw: Vec<ApiPoint> = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        raw.into_iter().map(parse_point).collect()
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

fn parse_point(raw: ApiPoint) -> Result<PredictionPoint, ApiClientError> {
    let date = Date::parse(&raw.date, DATE_FORMAT)
        .map_err(|err| ApiClientError::Payload(format!("bad date {:?}: {err}", raw.date)))?;
    let kind = match raw.kind.as_str() {
        "history" => PointKind::History,
        "forecast" => PointKind::Forecast,
        other => {
            return Err(ApiClientError::Payload(format!(
                "unknown point type {other:?}"
            )))
        }
    };
    Ok(PredictionPoint {
        date,
        price: raw.price,
        lower: raw.yhat_lower,
        upper: raw.yhat_upper,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn parses_backend_payload() {
        let body = r#"[
            {"date": "2025-11-14", "price": 2400.0, "type": "history"},
            {"date": "2025-11-16", "price": 2550.5, "yhat_lower": 2500.0,
             "yhat_upper": 2600.0, "type": "forecast", "confidence": "High"}
        ]"#;
        let raw: Vec<ApiPoint> = serde_json::from_str(body).unwrap();
        let points: Vec<PredictionPoint> = raw
            .into_iter()
            .map(parse_point)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, date!(2025 - 11 - 14));
        assert_eq!(points[0].kind, PointKind::History);
        assert!(points[0].lower.is_none());
        assert_eq!(points[1].kind, PointKind::Forecast);
        assert_eq!(points[1].upper, Some(2600.0));
    }

    #[test]
    fn rejects_unknown_point_type() {
        let raw = ApiPoint {
            date: "2025-11-14".to_string(),
            price: 2400.0,
            yhat_lower: None,
            yhat_upper: None,
            kind: "projection".to_string(),
        };
        assert!(matches!(
            parse_point(raw),
            Err(ApiClientError::Payload(_))
        ));
    }

    #[test]
    fn rejects_malformed_date() {
        let raw = ApiPoint {
            date: "14/11/2025".to_string(),
            price: 2400.0,
            yhat_lower: None,
            yhat_upper: None,
            kind: "history".to_string(),
        };
        assert!(matches!(
            parse_point(raw),
            Err(ApiClientError::Payload(_))
        ));
    }
}

#![allow(dead_code)]

use std::{
    collections::HashMap,
    time::{Duration, SystemTime},
};

use serde::{Deserialize, Serialize};

use super::demo;
use super::entities::{Commodity, CommodityId, PredictionPoint, TradeSignal, User};

#[derive(Clone, Debug)]
pub struct AppState {
    /// Mock session; `None` sends every route to the login gate.
    pub user: Option<User>,
    pub commodities: Vec<Commodity>,
    pub selected_commodity: CommodityId,
    pub forecasts: HashMap<CommodityId, Vec<PredictionPoint>>,
    pub signals: HashMap<CommodityId, TradeSignal>,
    /// Load-pooling toggle on the logistics page; persisted across sessions.
    pub pooling_enabled: bool,
    pub cache: CacheTimestamps,
}

impl Default for AppState {
    fn default() -> Self {
        let commodities = demo::commodities();
        let selected_commodity = commodities
            .first()
            .map(|commodity| commodity.id.clone())
            .unwrap_or_default();
        Self {
            user: None,
            commodities,
            selected_commodity,
            forecasts: HashMap::new(),
            signals: HashMap::new(),
            pooling_enabled: false,
            cache: CacheTimestamps::default(),
        }
    }
}

impl AppState {
    pub fn is_stale(&self, resource: &CacheResource, ttl: Duration) -> bool {
        self.cache.is_stale(resource, ttl)
    }

    pub fn selected(&self) -> Option<&Commodity> {
        self.commodities
            .iter()
            .find(|commodity| commodity.id == self.selected_commodity)
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.user = persisted.user;
        if self
            .commodities
            .iter()
            .any(|commodity| commodity.id == persisted.selected_commodity)
        {
            self.selected_commodity = persisted.selected_commodity;
        }
        self.pooling_enabled = persisted.pooling_enabled;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            user: self.user.clone(),
            selected_commodity: self.selected_commodity.clone(),
            pooling_enabled: self.pooling_enabled,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CacheTimestamps {
    entries: HashMap<CacheResource, SystemTime>,
}

impl CacheTimestamps {
    pub fn record_fetch(&mut self, resource: CacheResource, fetched_at: SystemTime) {
        self.entries.insert(resource, fetched_at);
    }

    pub fn fetched_at(&self, resource: &CacheResource) -> Option<SystemTime> {
        self.entries.get(resource).copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CacheResource, &SystemTime)> {
        self.entries.iter()
    }

    pub fn is_stale(&self, resource: &CacheResource, ttl: Duration) -> bool {
        self.fetched_at(resource)
            .map(|time| time.elapsed().map(|elapsed| elapsed > ttl).unwrap_or(true))
            .unwrap_or(true)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheResource {
    Forecast(CommodityId),
}

/// What survives a restart: the session plus a couple of UI preferences.
/// The original web build kept the same blob in `localStorage`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub selected_commodity: String,
    #[serde(default)]
    pub pooling_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::demo_user;

    #[test]
    fn persisted_unknown_commodity_keeps_default_selection() {
        let mut state = AppState::default();
        let default_selection = state.selected_commodity.clone();
        state.apply_persisted(PersistedState {
            user: Some(demo_user()),
            selected_commodity: "durian".to_string(),
            pooling_enabled: true,
        });
        assert_eq!(state.selected_commodity, default_selection);
        assert!(state.user.is_some());
        assert!(state.pooling_enabled);
    }

    #[test]
    fn cache_entries_expire_by_ttl() {
        let mut cache = CacheTimestamps::default();
        let resource = CacheResource::Forecast("onion".to_string());
        assert!(cache.is_stale(&resource, Duration::from_secs(60)));

        cache.record_fetch(resource.clone(), SystemTime::now());
        assert!(!cache.is_stale(&resource, Duration::from_secs(60)));
        assert!(cache.is_stale(&resource, Duration::ZERO));
    }
}

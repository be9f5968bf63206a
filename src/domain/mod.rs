//! Domain logic for the advisory app lives here.

pub mod app_state;
pub mod auth;
pub mod calculator;
pub mod demo;
pub mod entities;
pub mod forecast;
pub mod market;
pub mod weather;

#[allow(unused_imports)]
pub use app_state::{AppState, CacheResource, CacheTimestamps, PersistedState};
#[allow(unused_imports)]
pub use auth::{authenticate, AuthError, DEMO_EMAIL, DEMO_PASSWORD};
#[allow(unused_imports)]
pub use calculator::{
    calculate_returns, CalculationInput, CalculationResult, LOADING_RATE_PER_KG,
};
#[allow(unused_imports)]
pub use entities::{
    Commodity, CommodityId, DayOutlook, MarketQuote, PointKind, PredictionPoint, QuantityUnit,
    TradeSignal, Transporter, User, UserRole, WeatherSnapshot,
};
#[allow(unused_imports)]
pub use forecast::{days_to_peak, derive_signal, synthetic_series};
#[allow(unused_imports)]
pub use market::{rank_markets, MarketComparison, DEFAULT_LOT_QUINTALS};
#[allow(unused_imports)]
pub use weather::{advisory_for, Advisory};

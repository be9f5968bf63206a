#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use time::Date;

/// Account role. The demo ships a single farmer login, but the session format
/// keeps the trader variant so stored sessions from the web build still load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Farmer,
    Trader,
}

impl UserRole {
    pub fn name(&self) -> &'static str {
        match self {
            UserRole::Farmer => "Farmer",
            UserRole::Trader => "Trader",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("Farmer")
    }

    /// Avatar initial for the header chip.
    pub fn initial(&self) -> char {
        self.display_name()
            .chars()
            .next()
            .map(|ch| ch.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

/// Identifier for commodities tracked by the app.
pub type CommodityId = String;

#[derive(Clone, Debug, PartialEq)]
pub struct Commodity {
    pub id: CommodityId,
    pub name: String,
    /// Last known modal price at the district mandi, ₹ per quintal.
    pub base_price_quintal: f64,
}

/// Mass unit for calculator input. Prices and quantities are normalised to
/// kilograms before the computation unit runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuantityUnit {
    #[default]
    Kilogram,
    Quintal,
}

impl QuantityUnit {
    pub const KG_PER_QUINTAL: f64 = 100.0;

    pub fn label(&self) -> &'static str {
        match self {
            QuantityUnit::Kilogram => "kg",
            QuantityUnit::Quintal => "quintal",
        }
    }

    pub fn to_kg(&self, quantity: f64) -> f64 {
        match self {
            QuantityUnit::Kilogram => quantity,
            QuantityUnit::Quintal => quantity * Self::KG_PER_QUINTAL,
        }
    }

    /// Converts a price quoted per this unit into ₹ per kilogram.
    pub fn price_per_kg(&self, price: f64) -> f64 {
        match self {
            QuantityUnit::Kilogram => price,
            QuantityUnit::Quintal => price / Self::KG_PER_QUINTAL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointKind {
    History,
    Forecast,
}

/// One point of a price series. History points carry no confidence band.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionPoint {
    pub date: Date,
    pub price: f64,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub kind: PointKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TradeSignal {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl TradeSignal {
    pub fn label(&self) -> &'static str {
        match self {
            TradeSignal::Buy => "BUY",
            TradeSignal::Sell => "SELL NOW",
            TradeSignal::Hold => "HOLD",
        }
    }
}

/// A nearby mandi with its posted modal price and the transport quote for a
/// standard lot.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketQuote {
    pub id: String,
    pub name: String,
    pub distance_km: f64,
    pub price_per_quintal: f64,
    /// Quoted cost to haul the comparison lot to this mandi.
    pub transport_cost: f64,
    pub grade: String,
    pub arrival: String,
    pub contact: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transporter {
    pub id: String,
    pub name: String,
    pub vehicle: String,
    pub capacity: String,
    pub rate_per_km: f64,
    pub rating: f32,
    pub verified: bool,
}

impl Transporter {
    /// Discount applied when the farmer pools a load with neighbours.
    pub const POOLING_DISCOUNT: f64 = 0.30;

    pub fn pooled_rate(&self) -> f64 {
        self.rate_per_km * (1.0 - Self::POOLING_DISCOUNT)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temp_c: i32,
    pub humidity_pct: u8,
    pub wind_kmh: u8,
    pub condition: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DayOutlook {
    pub day: String,
    pub temp_c: i32,
    pub icon: String,
}

//! Crop advisory rules driven by current conditions.

use super::entities::WeatherSnapshot;

/// Humidity at or above this, under cloud cover, means fungal pressure on
/// solanaceous crops.
pub const FUNGAL_RISK_HUMIDITY: u8 = 75;

#[derive(Clone, Debug, PartialEq)]
pub struct Advisory {
    pub headline: String,
    pub detail: String,
    pub recommendation: String,
}

pub fn advisory_for(current: &WeatherSnapshot) -> Option<Advisory> {
    let overcast = matches!(current.condition.as_str(), "Cloudy" | "Overcast" | "Rain");
    if current.humidity_pct >= FUNGAL_RISK_HUMIDITY && overcast {
        return Some(Advisory {
            headline: "High Fungal Risk Alert".to_string(),
            detail: format!(
                "Humidity at {}% with {} skies raises the risk of Early Blight \
                 in Tomato and Potato crops.",
                current.humidity_pct,
                current.condition.to_lowercase()
            ),
            recommendation: "Spray Mancozeb (2.5g/litre)".to_string(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(humidity: u8, condition: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            location: "Pune, Maharashtra".to_string(),
            temp_c: 28,
            humidity_pct: humidity,
            wind_kmh: 12,
            condition: condition.to_string(),
        }
    }

    #[test]
    fn humid_overcast_triggers_fungal_alert() {
        let advisory = advisory_for(&snapshot(82, "Cloudy")).unwrap();
        assert_eq!(advisory.headline, "High Fungal Risk Alert");
        assert!(advisory.detail.contains("82%"));
    }

    #[test]
    fn dry_or_sunny_days_have_no_advisory() {
        assert!(advisory_for(&snapshot(60, "Cloudy")).is_none());
        assert!(advisory_for(&snapshot(90, "Sunny")).is_none());
    }
}

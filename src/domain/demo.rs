//! Canned demo datasets. Stand-ins until the backend grows these endpoints.

use super::entities::{Commodity, DayOutlook, MarketQuote, Transporter, WeatherSnapshot};

pub fn commodities() -> Vec<Commodity> {
    vec![
        Commodity {
            id: "onion".to_string(),
            name: "Onion".to_string(),
            base_price_quintal: 2_400.0,
        },
        Commodity {
            id: "potato".to_string(),
            name: "Potato".to_string(),
            base_price_quintal: 1_800.0,
        },
        Commodity {
            id: "tomato".to_string(),
            name: "Tomato".to_string(),
            base_price_quintal: 3_200.0,
        },
    ]
}

pub fn market_quotes() -> Vec<MarketQuote> {
    vec![
        MarketQuote {
            id: "pune-apmc".to_string(),
            name: "Pune APMC".to_string(),
            distance_km: 120.0,
            price_per_quintal: 2_400.0,
            transport_cost: 1_800.0,
            grade: "A".to_string(),
            arrival: "150 Tons".to_string(),
            contact: "+91 98220 12345".to_string(),
        },
        MarketQuote {
            id: "lasalgaon".to_string(),
            name: "Lasalgaon".to_string(),
            distance_km: 210.0,
            price_per_quintal: 2_800.0,
            transport_cost: 3_150.0,
            grade: "A+".to_string(),
            arrival: "500 Tons".to_string(),
            contact: "+91 99230 67890".to_string(),
        },
        MarketQuote {
            id: "nashik-market".to_string(),
            name: "Nashik Market".to_string(),
            distance_km: 200.0,
            price_per_quintal: 2_600.0,
            transport_cost: 3_000.0,
            grade: "A".to_string(),
            arrival: "320 Tons".to_string(),
            contact: "+91 94220 54321".to_string(),
        },
        MarketQuote {
            id: "mumbai-vashi".to_string(),
            name: "Mumbai Vashi".to_string(),
            distance_km: 150.0,
            price_per_quintal: 2_900.0,
            transport_cost: 2_800.0,
            grade: "B".to_string(),
            arrival: "120 Tons".to_string(),
            contact: "+91 98200 98765".to_string(),
        },
    ]
}

pub fn transporters() -> Vec<Transporter> {
    vec![
        Transporter {
            id: "ramesh-transport".to_string(),
            name: "Ramesh Transport".to_string(),
            vehicle: "Tata Ace (Chota Hathi)".to_string(),
            capacity: "750 kg".to_string(),
            rate_per_km: 15.0,
            rating: 4.5,
            verified: true,
        },
        Transporter {
            id: "priya-logistics".to_string(),
            name: "Priya Logistics".to_string(),
            vehicle: "Mahindra Bolero Pickup".to_string(),
            capacity: "1.2 Ton".to_string(),
            rate_per_km: 18.0,
            rating: 4.8,
            verified: true,
        },
        Transporter {
            id: "pune-express".to_string(),
            name: "Pune Express".to_string(),
            vehicle: "Eicher Pro".to_string(),
            capacity: "3.5 Ton".to_string(),
            rate_per_km: 28.0,
            rating: 4.2,
            verified: false,
        },
    ]
}

pub fn current_weather() -> WeatherSnapshot {
    WeatherSnapshot {
        location: "Pune, Maharashtra".to_string(),
        temp_c: 28,
        humidity_pct: 82,
        wind_kmh: 12,
        condition: "Cloudy".to_string(),
    }
}

pub fn weekly_outlook() -> Vec<DayOutlook> {
    [
        ("Tue", 29, "⛅"),
        ("Wed", 27, "🌧️"),
        ("Thu", 26, "🌧️"),
        ("Fri", 28, "⛅"),
        ("Sat", 30, "☀️"),
    ]
    .into_iter()
    .map(|(day, temp_c, icon)| DayOutlook {
        day: day.to_string(),
        temp_c,
        icon: icon.to_string(),
    })
    .collect()
}

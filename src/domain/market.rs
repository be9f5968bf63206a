//! Mandi comparison: ranks nearby markets by what a lot actually nets.

use std::cmp::Ordering;

use super::entities::MarketQuote;

/// Comparison lot size in quintals (one tonne).
pub const DEFAULT_LOT_QUINTALS: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct MarketComparison {
    pub quote: MarketQuote,
    pub gross_revenue: f64,
    pub net_profit: f64,
}

/// Gross revenue minus the transport quote for the given lot, best net first.
pub fn rank_markets(quotes: &[MarketQuote], lot_quintals: f64) -> Vec<MarketComparison> {
    let mut ranked: Vec<MarketComparison> = quotes
        .iter()
        .map(|quote| {
            let gross_revenue = quote.price_per_quintal * lot_quintals;
            let net_profit = gross_revenue - quote.transport_cost;
            MarketComparison {
                quote: quote.clone(),
                gross_revenue,
                net_profit,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.net_profit
            .partial_cmp(&a.net_profit)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::demo;

    fn quote(name: &str, price: f64, transport: f64) -> MarketQuote {
        MarketQuote {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            distance_km: 100.0,
            price_per_quintal: price,
            transport_cost: transport,
            grade: "A".to_string(),
            arrival: "100 Tons".to_string(),
            contact: "+91 00000 00000".to_string(),
        }
    }

    #[test]
    fn ranks_by_net_profit_descending() {
        let quotes = vec![
            quote("Near Cheap", 2_000.0, 500.0),  // 19_500
            quote("Far Rich", 2_800.0, 3_000.0),  // 25_000
            quote("Mid", 2_400.0, 1_800.0),       // 22_200
        ];
        let ranked = rank_markets(&quotes, DEFAULT_LOT_QUINTALS);
        let names: Vec<_> = ranked.iter().map(|c| c.quote.name.as_str()).collect();
        assert_eq!(names, ["Far Rich", "Mid", "Near Cheap"]);
        assert_eq!(ranked[0].gross_revenue, 28_000.0);
        assert_eq!(ranked[0].net_profit, 25_000.0);
    }

    #[test]
    fn demo_markets_put_vashi_first() {
        // Highest posted price (Lasalgaon) loses to the closer Mumbai Vashi
        // once transport is subtracted; that asymmetry is the whole point of
        // the page.
        let ranked = rank_markets(&demo::market_quotes(), DEFAULT_LOT_QUINTALS);
        assert_eq!(ranked[0].quote.name, "Mumbai Vashi");
        assert_eq!(ranked[0].net_profit, 26_200.0);
    }

    #[test]
    fn negative_net_is_kept_and_ranked_last() {
        let quotes = vec![
            quote("Good", 2_400.0, 1_000.0),
            quote("Ruinous", 500.0, 9_000.0), // nets -4_000
        ];
        let ranked = rank_markets(&quotes, DEFAULT_LOT_QUINTALS);
        assert_eq!(ranked.last().unwrap().quote.name, "Ruinous");
        assert!(ranked.last().unwrap().net_profit < 0.0);
    }
}

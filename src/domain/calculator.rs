//! The financial computation unit behind the profit calculator.
//!
//! Pure arithmetic over caller-normalised inputs. Callers convert quintal
//! prices and quantities to kilograms before invoking this module.

/// Fixed loading/unloading labor rate, ₹ per kilogram.
pub const LOADING_RATE_PER_KG: f64 = 2.50;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationInput {
    pub price_per_kg: f64,
    pub quantity_kg: f64,
    pub distance_km: f64,
    pub vehicle_rate_per_km: f64,
}

impl CalculationInput {
    /// All four inputs must be finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        [
            self.price_per_kg,
            self.quantity_kg,
            self.distance_km,
            self.vehicle_rate_per_km,
        ]
        .iter()
        .all(|value| value.is_finite() && *value > 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationResult {
    pub gross_revenue: f64,
    pub transport_cost: f64,
    pub labor_cost: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub profit_margin_pct: f64,
    pub is_profitable: bool,
}

/// Computes the full profit/loss breakdown for a sale.
///
/// Returns `None` when any input is zero, negative, or not finite. A zeroed
/// breakdown would read as a real (terrible) outcome in the UI, so invalid
/// input produces no result at all.
pub fn calculate_returns(input: &CalculationInput) -> Option<CalculationResult> {
    if !input.is_valid() {
        return None;
    }

    let gross_revenue = input.price_per_kg * input.quantity_kg;
    let transport_cost = input.distance_km * input.vehicle_rate_per_km;
    let labor_cost = input.quantity_kg * LOADING_RATE_PER_KG;
    let total_expenses = transport_cost + labor_cost;
    let net_profit = gross_revenue - total_expenses;

    // Division guard. Unreachable through the validity check above, kept so
    // the formula can never emit NaN.
    let profit_margin_pct = if gross_revenue > 0.0 {
        net_profit / gross_revenue * 100.0
    } else {
        0.0
    };

    Some(CalculationResult {
        gross_revenue,
        transport_cost,
        labor_cost,
        total_expenses,
        net_profit,
        profit_margin_pct,
        is_profitable: net_profit > 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(price: f64, quantity: f64, distance: f64, rate: f64) -> CalculationInput {
        CalculationInput {
            price_per_kg: price,
            quantity_kg: quantity,
            distance_km: distance,
            vehicle_rate_per_km: rate,
        }
    }

    #[test]
    fn onion_lot_is_profitable() {
        let result = calculate_returns(&input(24.0, 500.0, 100.0, 15.0)).unwrap();
        assert_eq!(result.gross_revenue, 12_000.0);
        assert_eq!(result.transport_cost, 1_500.0);
        assert_eq!(result.labor_cost, 1_250.0);
        assert_eq!(result.total_expenses, 2_750.0);
        assert_eq!(result.net_profit, 9_250.0);
        assert!((result.profit_margin_pct - 77.083_333).abs() < 1e-3);
        assert!(result.is_profitable);
    }

    #[test]
    fn distant_mandi_is_a_loss() {
        let result = calculate_returns(&input(5.0, 100.0, 400.0, 18.0)).unwrap();
        assert_eq!(result.gross_revenue, 500.0);
        assert_eq!(result.transport_cost, 7_200.0);
        assert_eq!(result.labor_cost, 250.0);
        assert_eq!(result.total_expenses, 7_450.0);
        assert_eq!(result.net_profit, -6_950.0);
        assert!(result.profit_margin_pct < 0.0);
        assert!(!result.is_profitable);
    }

    #[test]
    fn any_zero_or_negative_input_yields_no_result() {
        let valid = input(24.0, 500.0, 100.0, 15.0);
        for bad in [0.0, -1.0] {
            assert!(calculate_returns(&CalculationInput { price_per_kg: bad, ..valid }).is_none());
            assert!(calculate_returns(&CalculationInput { quantity_kg: bad, ..valid }).is_none());
            assert!(calculate_returns(&CalculationInput { distance_km: bad, ..valid }).is_none());
            assert!(
                calculate_returns(&CalculationInput { vehicle_rate_per_km: bad, ..valid })
                    .is_none()
            );
        }
    }

    #[test]
    fn non_finite_input_yields_no_result() {
        let valid = input(24.0, 500.0, 100.0, 15.0);
        for bad in [f64::NAN, f64::INFINITY] {
            assert!(calculate_returns(&CalculationInput { price_per_kg: bad, ..valid }).is_none());
            assert!(calculate_returns(&CalculationInput { quantity_kg: bad, ..valid }).is_none());
        }
    }

    #[test]
    fn zero_revenue_is_caught_by_the_input_guard_not_the_margin_formula() {
        // Gross revenue can only be zero through a zero price or quantity,
        // and both are rejected before the margin division ever runs.
        assert!(calculate_returns(&input(0.0, 500.0, 100.0, 15.0)).is_none());
        assert!(calculate_returns(&input(24.0, 0.0, 100.0, 15.0)).is_none());
    }

    #[test]
    fn breakdown_invariants_hold() {
        let cases = [
            input(24.0, 500.0, 100.0, 15.0),
            input(5.0, 100.0, 400.0, 18.0),
            input(0.75, 12.5, 3.2, 28.0),
            input(3_200.0, 1.0, 1.0, 1.0),
        ];
        for case in cases {
            let result = calculate_returns(&case).unwrap();
            assert_eq!(
                result.total_expenses,
                result.transport_cost + result.labor_cost
            );
            assert_eq!(
                result.net_profit,
                result.gross_revenue - result.total_expenses
            );
            assert_eq!(result.is_profitable, result.net_profit > 0.0);
        }
    }

    #[test]
    fn identical_inputs_yield_bit_identical_results() {
        let case = input(17.3, 421.5, 88.0, 16.5);
        let first = calculate_returns(&case).unwrap();
        let second = calculate_returns(&case).unwrap();
        assert_eq!(first.net_profit.to_bits(), second.net_profit.to_bits());
        assert_eq!(
            first.profit_margin_pct.to_bits(),
            second.profit_margin_pct.to_bits()
        );
        assert_eq!(first, second);
    }
}

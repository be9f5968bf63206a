use dioxus::prelude::*;

use crate::domain::{
    calculate_returns, demo, AppState, CalculationInput, QuantityUnit, LOADING_RATE_PER_KG,
};
use crate::ui::components::breakdown::BreakdownCard;
use crate::ui::theme;

/// Accepts a text field value only if it parses to a finite positive number.
fn parse_positive(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Normalises the form fields into kilogram terms for the computation unit.
fn parse_input(
    price: &str,
    quantity: &str,
    unit: QuantityUnit,
    distance: &str,
    rate_per_km: f64,
) -> Option<CalculationInput> {
    Some(CalculationInput {
        price_per_kg: unit.price_per_kg(parse_positive(price)?),
        quantity_kg: unit.to_kg(parse_positive(quantity)?),
        distance_km: parse_positive(distance)?,
        vehicle_rate_per_km: rate_per_km,
    })
}

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let role = state.with(|st| st.user.as_ref().map(|user| user.role).unwrap_or_default());
    let pooling = state.with(|st| st.pooling_enabled);

    let mut price = use_signal(|| "2400".to_string());
    let mut quantity = use_signal(|| "10".to_string());
    let mut unit = use_signal(|| QuantityUnit::Quintal);
    let mut distance = use_signal(|| "120".to_string());

    let transporters = demo::transporters();
    let mut transporter_id = use_signal(|| {
        demo::transporters()
            .first()
            .map(|transporter| transporter.id.clone())
            .unwrap_or_default()
    });

    let transporter = transporters
        .iter()
        .find(|candidate| candidate.id == transporter_id())
        .cloned();
    let rate_per_km = transporter
        .as_ref()
        .map(|t| if pooling { t.pooled_rate() } else { t.rate_per_km })
        .unwrap_or(0.0);

    let result = parse_input(&price(), &quantity(), unit(), &distance(), rate_per_km)
        .and_then(|input| calculate_returns(&input));

    let unit_label = unit().label();

    rsx! {
        div { class: "space-y-6",
            div {
                h2 { class: "text-lg font-semibold text-slate-900", "Should you make the trip?" }
                p { class: "text-sm {theme::text_muted()}",
                    "Revenue minus transport and loading labor, before you load the truck."
                }
            }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                div { class: "{theme::panel()}",
                    div { class: "grid grid-cols-2 gap-4",
                        div {
                            label { class: "{theme::label_class()}", "Price (₹ per {unit_label})" }
                            input {
                                class: "{theme::input_class(role)}",
                                r#type: "number",
                                min: "0",
                                value: "{price}",
                                oninput: move |event| price.set(event.value()),
                            }
                        }
                        div {
                            label { class: "{theme::label_class()}", "Quantity ({unit_label})" }
                            input {
                                class: "{theme::input_class(role)}",
                                r#type: "number",
                                min: "0",
                                value: "{quantity}",
                                oninput: move |event| quantity.set(event.value()),
                            }
                        }
                        div {
                            label { class: "{theme::label_class()}", "Unit" }
                            select {
                                class: "{theme::input_class(role)}",
                                onchange: move |event| {
                                    unit.set(match event.value().as_str() {
                                        "kg" => QuantityUnit::Kilogram,
                                        _ => QuantityUnit::Quintal,
                                    });
                                },
                                option {
                                    value: "quintal",
                                    selected: unit() == QuantityUnit::Quintal,
                                    "Quintal (100 kg)"
                                }
                                option {
                                    value: "kg",
                                    selected: unit() == QuantityUnit::Kilogram,
                                    "Kilogram"
                                }
                            }
                        }
                        div {
                            label { class: "{theme::label_class()}", "Distance to mandi (km)" }
                            input {
                                class: "{theme::input_class(role)}",
                                r#type: "number",
                                min: "0",
                                value: "{distance}",
                                oninput: move |event| distance.set(event.value()),
                            }
                        }
                    }

                    div { class: "mt-4",
                        label { class: "{theme::label_class()}", "Transporter" }
                        select {
                            class: "{theme::input_class(role)}",
                            onchange: move |event| transporter_id.set(event.value()),
                            for candidate in transporters.iter() {
                                option {
                                    value: "{candidate.id}",
                                    selected: candidate.id == transporter_id(),
                                    "{candidate.name} ({candidate.vehicle})"
                                }
                            }
                        }
                        p { class: "mt-2 text-xs {theme::text_muted()}",
                            if pooling {
                                "Rate ₹{rate_per_km:.2}/km with load pooling applied."
                            } else {
                                "Rate ₹{rate_per_km:.2}/km."
                            }
                        }
                    }

                    p { class: "mt-4 text-xs {theme::text_muted()}",
                        "Loading and unloading labor is charged at a flat ₹{LOADING_RATE_PER_KG:.2} per kg."
                    }
                }

                if let Some(result) = result {
                    BreakdownCard { result }
                } else {
                    div { class: "flex items-center justify-center rounded-2xl border-2 border-dashed border-slate-200 p-8 text-center text-sm {theme::text_muted()}",
                        "Enter a price, quantity and distance above zero to see the full breakdown."
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quintal_fields_are_normalised_to_kilograms() {
        let input = parse_input("2400", "10", QuantityUnit::Quintal, "120", 15.0).unwrap();
        assert_eq!(input.price_per_kg, 24.0);
        assert_eq!(input.quantity_kg, 1_000.0);
        assert_eq!(input.distance_km, 120.0);
        assert_eq!(input.vehicle_rate_per_km, 15.0);
    }

    #[test]
    fn kilogram_fields_pass_through_unchanged() {
        let input = parse_input("24", "500", QuantityUnit::Kilogram, "100", 15.0).unwrap();
        assert_eq!(input.price_per_kg, 24.0);
        assert_eq!(input.quantity_kg, 500.0);
    }

    #[test]
    fn junk_and_non_positive_text_is_rejected() {
        assert!(parse_input("", "10", QuantityUnit::Quintal, "120", 15.0).is_none());
        assert!(parse_input("abc", "10", QuantityUnit::Quintal, "120", 15.0).is_none());
        assert!(parse_input("-5", "10", QuantityUnit::Quintal, "120", 15.0).is_none());
        assert!(parse_input("2400", "0", QuantityUnit::Quintal, "120", 15.0).is_none());
        assert!(parse_input("2400", "10", QuantityUnit::Quintal, "inf", 15.0).is_none());
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(parse_input(" 2400 ", "10", QuantityUnit::Quintal, "120", 15.0).is_some());
    }

    #[test]
    fn parsed_input_feeds_the_computation_unit() {
        let input = parse_input("2400", "5", QuantityUnit::Quintal, "100", 15.0).unwrap();
        let result = calculate_returns(&input).unwrap();
        assert_eq!(result.gross_revenue, 12_000.0);
        assert_eq!(result.transport_cost, 1_500.0);
        assert_eq!(result.labor_cost, 1_250.0);
    }
}

use dioxus::prelude::*;

use crate::app::{persist_user_state, request_forecast, Route};
use crate::domain::{
    days_to_peak, demo, rank_markets, AppState, Commodity, PointKind, TradeSignal, UserRole,
    DEFAULT_LOT_QUINTALS,
};
use crate::ui::components::forecast_chart::ForecastChart;
use crate::ui::components::kpi_card::KpiCard;
use crate::ui::components::signal_banner::SignalBanner;
use crate::ui::theme;
use crate::util::format_inr;

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let forecast_request = use_context::<Signal<Option<String>>>();

    // Kick off a fetch for the stored commodity on first render.
    use_hook({
        let state = state.clone();
        let forecast_request = forecast_request.clone();
        move || {
            let selected = state.with(|st| st.selected_commodity.clone());
            request_forecast(state, forecast_request, &selected);
        }
    });

    let role = state.with(|st| st.user.as_ref().map(|user| user.role).unwrap_or_default());
    let commodities = state.with(|st| st.commodities.clone());
    let selected_id = state.with(|st| st.selected_commodity.clone());
    let selected = commodities
        .iter()
        .find(|commodity| commodity.id == selected_id)
        .cloned();
    let points = state
        .with(|st| st.forecasts.get(&selected_id).cloned())
        .unwrap_or_default();
    let signal = state
        .with(|st| st.signals.get(&selected_id).copied())
        .unwrap_or_default();
    let loading = forecast_request().is_some();

    let latest_price = points
        .iter()
        .rev()
        .find(|point| point.kind == PointKind::History)
        .map(|point| point.price)
        .or_else(|| selected.as_ref().map(|c| c.base_price_quintal));
    let peak_price = points
        .iter()
        .filter(|point| point.kind == PointKind::Forecast)
        .map(|point| point.price)
        .fold(None::<f64>, |peak, price| {
            Some(peak.map_or(price, |p| p.max(price)))
        });
    let peak_days = days_to_peak(&points);
    let best_mandi = rank_markets(&demo::market_quotes(), DEFAULT_LOT_QUINTALS)
        .into_iter()
        .next();

    let mut state_for_select = state.clone();
    let forecast_request_for_select = forecast_request.clone();
    let on_commodity_change = move |event: Event<FormData>| {
        let id = event.value();
        state_for_select.with_mut(|st| st.selected_commodity = id.clone());
        persist_user_state(&state_for_select);
        request_forecast(state_for_select, forecast_request_for_select, &id);
    };

    let nav = use_navigator();
    let commodity_name = selected
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| selected_id.clone());

    rsx! {
        div { class: "space-y-6",
            SignalBanner { signal, peak_days, loading }

            div { class: "grid grid-cols-1 gap-4 md:grid-cols-3",
                KpiCard {
                    title: "Today's modal price".to_string(),
                    value: latest_price
                        .map(|price| format!("{}/q", format_inr(price)))
                        .unwrap_or_else(|| "--".to_string()),
                    description: Some(format!("{commodity_name}, district mandi")),
                }
                KpiCard {
                    title: "Projected peak".to_string(),
                    value: peak_price
                        .map(|price| format!("{}/q", format_inr(price)))
                        .unwrap_or_else(|| "--".to_string()),
                    description: peak_days
                        .filter(|days| *days > 0)
                        .map(|days| format!("in about {days} days")),
                }
                KpiCard {
                    title: "Best mandi today".to_string(),
                    value: best_mandi
                        .as_ref()
                        .map(|best| best.quote.name.clone())
                        .unwrap_or_else(|| "--".to_string()),
                    description: best_mandi.as_ref().map(|best| {
                        format!(
                            "nets {} on a {DEFAULT_LOT_QUINTALS:.0} quintal lot",
                            format_inr(best.net_profit)
                        )
                    }),
                }
            }

            div { class: "{theme::panel()}",
                div { class: "mb-4 flex flex-wrap items-center justify-between gap-3",
                    div {
                        h2 { class: "text-lg font-semibold text-slate-900", "Price outlook" }
                        p { class: "text-xs {theme::text_muted()}",
                            "30 days of history and a 14-day AI projection"
                        }
                    }
                    select {
                        class: "{theme::input_class(role)} md:w-48",
                        value: "{selected_id}",
                        onchange: on_commodity_change,
                        for commodity in commodities.iter() {
                            option {
                                value: "{commodity.id}",
                                selected: commodity.id == selected_id,
                                "{commodity.name}"
                            }
                        }
                    }
                }
                ForecastChart { points, loading }
            }

            div { class: "{theme::panel()}",
                h2 { class: "mb-1 text-lg font-semibold text-slate-900", "Market pulse" }
                p { class: "mb-3 text-xs {theme::text_muted()}",
                    "Last posted modal prices. Tap a crop to load its outlook."
                }
                div { class: "divide-y divide-slate-100",
                    for commodity in commodities.clone() {
                        PulseRow {
                            commodity: commodity.clone(),
                            selected: commodity.id == selected_id,
                            signal: state.with(|st| st.signals.get(&commodity.id).copied()),
                            on_select: {
                                let mut state = state.clone();
                                let forecast_request = forecast_request.clone();
                                move |id: String| {
                                    state.with_mut(|st| st.selected_commodity = id.clone());
                                    persist_user_state(&state);
                                    request_forecast(state, forecast_request, &id);
                                }
                            },
                        }
                    }
                }
            }

            div {
                h2 { class: "mb-3 text-lg font-semibold text-slate-900", "Quick tools" }
                div { class: "grid grid-cols-2 gap-3 md:grid-cols-4",
                    QuickTool {
                        icon: "🧮",
                        label: "Profit calculator",
                        onclick: move |_| { nav.push(Route::Calculator {}); },
                        role,
                    }
                    QuickTool {
                        icon: "🏪",
                        label: "Compare mandis",
                        onclick: move |_| { nav.push(Route::Market {}); },
                        role,
                    }
                    QuickTool {
                        icon: "🚛",
                        label: "Book transport",
                        onclick: move |_| { nav.push(Route::Logistics {}); },
                        role,
                    }
                    QuickTool {
                        icon: "🌦️",
                        label: "Weather advisory",
                        onclick: move |_| { nav.push(Route::Weather {}); },
                        role,
                    }
                }
            }
        }
    }
}

#[component]
fn PulseRow(
    commodity: Commodity,
    selected: bool,
    signal: Option<TradeSignal>,
    on_select: EventHandler<String>,
) -> Element {
    let signal_badge = signal.map(|signal| {
        let tone = match signal {
            TradeSignal::Sell => "bg-emerald-100 text-emerald-700",
            TradeSignal::Buy => "bg-sky-100 text-sky-700",
            TradeSignal::Hold => "bg-amber-100 text-amber-700",
        };
        (signal.label(), tone)
    });
    let name_class = if selected {
        "font-semibold text-emerald-700"
    } else {
        "font-medium text-slate-900"
    };
    let commodity_id = commodity.id.clone();

    rsx! {
        button {
            class: "flex w-full items-center justify-between py-3 text-left transition hover:bg-slate-50",
            onclick: move |_| on_select.call(commodity_id.clone()),
            span { class: "{name_class}", "{commodity.name}" }
            span { class: "flex items-center gap-3",
                if let Some((label, badge)) = signal_badge {
                    span { class: "rounded-full px-2 py-0.5 text-[10px] font-bold {badge}",
                        "{label}"
                    }
                }
                span { class: "text-sm font-semibold text-slate-700",
                    "{format_inr(commodity.base_price_quintal)}/q"
                }
            }
        }
    }
}

#[component]
fn QuickTool(
    icon: &'static str,
    label: &'static str,
    onclick: EventHandler<()>,
    role: UserRole,
) -> Element {
    rsx! {
        button {
            class: "{theme::quick_tool(role)}",
            onclick: move |_| onclick.call(()),
            span { class: "text-2xl", "{icon}" }
            span { class: "mt-1 text-xs font-medium", "{label}" }
        }
    }
}

use dioxus::prelude::*;

use crate::domain::TradeSignal;

/// Dark hero card with the current recommendation and a traffic-light visual.
#[component]
pub fn SignalBanner(signal: TradeSignal, peak_days: Option<i64>, loading: bool) -> Element {
    let (tone, icon) = match signal {
        TradeSignal::Sell => ("text-emerald-400", "📈"),
        TradeSignal::Buy => ("text-sky-400", "📉"),
        TradeSignal::Hold => ("text-amber-400", "⏸"),
    };

    let copy = match (loading, peak_days) {
        (true, _) => "Crunching mandi patterns...".to_string(),
        (false, Some(days)) if days > 0 => format!(
            "Prices are projected to peak in {days} day{} based on historical mandi patterns.",
            if days == 1 { "" } else { "s" }
        ),
        _ => "No clear peak in the current forecast window.".to_string(),
    };

    rsx! {
        div { class: "relative overflow-hidden rounded-2xl bg-slate-900 p-6 text-white shadow-xl",
            div { class: "flex items-center justify-between gap-6",
                div {
                    h3 { class: "mb-2 text-xs font-bold uppercase tracking-widest text-slate-400",
                        "AI Recommendation"
                    }
                    if loading {
                        div { class: "flex items-center gap-3",
                            div { class: "spinner" }
                            span { class: "text-2xl font-bold text-slate-300", "Analysing..." }
                        }
                    } else {
                        div { class: "mb-2 flex items-center gap-3 text-4xl font-bold",
                            span { class: "{tone}", "{signal.label()}" }
                            span { "{icon}" }
                        }
                    }
                    p { class: "max-w-sm text-sm text-slate-300", "{copy}" }
                }
                TrafficLight { signal }
            }
        }
    }
}

#[component]
fn TrafficLight(signal: TradeSignal) -> Element {
    let lamp = |on: bool, lit: &'static str, dim: &'static str| {
        if on {
            format!("h-12 w-12 rounded-full {lit}")
        } else {
            format!("h-12 w-12 rounded-full {dim}")
        }
    };

    // Red = hold off selling, amber = hold, green = sell. Mirrors the web
    // dashboard's lamp ordering.
    rsx! {
        div { class: "hidden md:flex flex-col gap-3 rounded-full border border-slate-700 bg-slate-800 p-3",
            div { class: lamp(signal == TradeSignal::Buy, "bg-red-500 lamp-active-red", "bg-red-500/20") }
            div { class: lamp(signal == TradeSignal::Hold, "bg-amber-500 lamp-active-amber", "bg-amber-500/20") }
            div { class: lamp(signal == TradeSignal::Sell, "bg-emerald-500 lamp-active-green", "bg-emerald-500/20") }
        }
    }
}

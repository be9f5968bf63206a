use dioxus::prelude::*;

use crate::domain::{MarketComparison, UserRole};
use crate::ui::theme;
use crate::util::format_inr;

/// Ranked mandi comparison. Rows arrive best-net-first, so the first row
/// carries the badge.
#[component]
pub fn MarketTable(
    rows: Vec<MarketComparison>,
    role: UserRole,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "{theme::table_container()}",
            table { class: "w-full text-left text-sm",
                thead { class: "{theme::table_header()}",
                    tr {
                        th { class: "px-4 py-3", "Mandi" }
                        th { class: "px-4 py-3", "Distance" }
                        th { class: "px-4 py-3", "Modal price" }
                        th { class: "px-4 py-3", "Transport" }
                        th { class: "px-4 py-3", "Net on lot" }
                        th { class: "px-4 py-3", "Grade" }
                    }
                }
                tbody {
                    for (index, row) in rows.into_iter().enumerate() {
                        MarketRow { row, best: index == 0, role, on_select }
                    }
                }
            }
        }
    }
}

#[component]
fn MarketRow(
    row: MarketComparison,
    best: bool,
    role: UserRole,
    on_select: EventHandler<String>,
) -> Element {
    let net_tone = if row.net_profit >= 0.0 {
        "font-semibold text-emerald-600"
    } else {
        "font-semibold text-red-600"
    };
    let badge_class = match role {
        UserRole::Farmer => {
            "rounded-full bg-emerald-100 px-2 py-0.5 text-[10px] font-bold uppercase text-emerald-700"
        }
        UserRole::Trader => {
            "rounded-full bg-sky-100 px-2 py-0.5 text-[10px] font-bold uppercase text-sky-700"
        }
    };
    let quote_id = row.quote.id.clone();

    rsx! {
        tr {
            class: "cursor-pointer border-b border-slate-100 transition hover:bg-slate-50",
            onclick: move |_| on_select.call(quote_id.clone()),
            td { class: "px-4 py-3",
                div { class: "flex items-center gap-2",
                    span { class: "font-medium text-slate-900", "{row.quote.name}" }
                    if best {
                        span { class: badge_class, "Best net" }
                    }
                }
                p { class: "text-xs {theme::text_muted()}", "Arrivals: {row.quote.arrival}" }
            }
            td { class: "px-4 py-3", "{row.quote.distance_km:.0} km" }
            td { class: "px-4 py-3", "{format_inr(row.quote.price_per_quintal)}/q" }
            td { class: "px-4 py-3", "{format_inr(row.quote.transport_cost)}" }
            td { class: "px-4 py-3 {net_tone}", "{format_inr(row.net_profit)}" }
            td { class: "px-4 py-3",
                span { class: "rounded bg-slate-100 px-2 py-0.5 text-xs font-semibold text-slate-600",
                    "{row.quote.grade}"
                }
            }
        }
    }
}

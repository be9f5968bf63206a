use dioxus::prelude::*;

use crate::domain::{CalculationResult, LOADING_RATE_PER_KG};
use crate::ui::theme;
use crate::util::format_inr;

/// Revenue and cost lines for a computed sale, with the net verdict.
#[component]
pub fn BreakdownCard(result: CalculationResult) -> Element {
    let net_tone = if result.is_profitable {
        "text-emerald-600"
    } else {
        "text-red-600"
    };
    let verdict = if result.is_profitable {
        ("Profitable trip", "bg-emerald-100 text-emerald-700")
    } else {
        ("Loss-making trip", "bg-red-100 text-red-700")
    };
    let labor_label = format!("Loading & unloading (₹{LOADING_RATE_PER_KG:.2}/kg)");

    rsx! {
        div { class: "{theme::panel()}",
            div { class: "flex items-center justify-between",
                h3 { class: "{theme::label_class()}", "Profit breakdown" }
                span { class: "rounded-full px-3 py-1 text-xs font-bold {verdict.1}", "{verdict.0}" }
            }
            dl { class: "mt-4 space-y-2",
                BreakdownRow {
                    label: "Gross revenue".to_string(),
                    value: format_inr(result.gross_revenue),
                    tone: "text-slate-900",
                }
                BreakdownRow {
                    label: "Transport".to_string(),
                    value: format!("-{}", format_inr(result.transport_cost)),
                    tone: "text-red-500",
                }
                BreakdownRow {
                    label: labor_label,
                    value: format!("-{}", format_inr(result.labor_cost)),
                    tone: "text-red-500",
                }
                BreakdownRow {
                    label: "Total expenses".to_string(),
                    value: format_inr(result.total_expenses),
                    tone: "text-slate-600",
                }
            }
            div { class: "mt-4 flex items-baseline justify-between border-t border-slate-200 pt-4",
                span { class: "text-sm font-semibold text-slate-700", "Net profit" }
                span { class: "text-2xl font-bold {net_tone}", "{format_inr(result.net_profit)}" }
            }
            p { class: "mt-1 text-right text-xs {theme::text_muted()}",
                "Margin {result.profit_margin_pct:.1}% of revenue"
            }
        }
    }
}

#[component]
fn BreakdownRow(label: String, value: String, tone: &'static str) -> Element {
    rsx! {
        div { class: "flex items-center justify-between text-sm",
            dt { class: "{theme::text_muted()}", "{label}" }
            dd { class: "font-medium {tone}", "{value}" }
        }
    }
}

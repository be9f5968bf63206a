use dioxus::prelude::*;

use crate::domain::{demo, rank_markets, AppState, DEFAULT_LOT_QUINTALS};
use crate::ui::components::market_table::MarketTable;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::format_inr;

#[component]
pub fn MarketPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let role = state.with(|st| st.user.as_ref().map(|user| user.role).unwrap_or_default());

    let mut selected_mandi = use_signal(|| None::<String>);

    let ranked = rank_markets(&demo::market_quotes(), DEFAULT_LOT_QUINTALS);
    let detail = selected_mandi().and_then(|id| {
        ranked
            .iter()
            .find(|comparison| comparison.quote.id == id)
            .cloned()
    });

    rsx! {
        div { class: "space-y-6",
            div {
                h2 { class: "text-lg font-semibold text-slate-900", "Nearby mandis" }
                p { class: "text-sm {theme::text_muted()}",
                    "Ranked by what a {DEFAULT_LOT_QUINTALS:.0} quintal lot nets after transport, not by the posted price."
                }
            }

            MarketTable {
                rows: ranked.clone(),
                role,
                on_select: move |id| selected_mandi.set(Some(id)),
            }

            if let Some(detail) = detail {
                div { class: "{theme::panel()}",
                    div { class: "flex flex-wrap items-start justify-between gap-4",
                        div {
                            h3 { class: "text-lg font-semibold text-slate-900", "{detail.quote.name}" }
                            p { class: "text-sm {theme::text_muted()}",
                                "{detail.quote.distance_km:.0} km away, grade {detail.quote.grade} produce, arrivals {detail.quote.arrival}"
                            }
                        }
                        div { class: "text-right",
                            p { class: "{theme::label_class()}", "Net on lot" }
                            p { class: "text-2xl font-bold text-emerald-600",
                                "{format_inr(detail.net_profit)}"
                            }
                        }
                    }
                    div { class: "mt-4 flex flex-wrap items-center justify-between gap-3 border-t border-slate-200 pt-4",
                        div {
                            p { class: "{theme::label_class()}", "Mandi office" }
                            p { class: "text-sm font-medium text-slate-900", "{detail.quote.contact}" }
                        }
                        button {
                            class: "{theme::btn_primary(role)}",
                            onclick: move |_| {
                                push_toast(
                                    toasts,
                                    ToastKind::Info,
                                    "Calling is not wired up in the demo build.",
                                );
                            },
                            "📞 Call mandi office"
                        }
                    }
                }
            } else {
                p { class: "text-center text-sm {theme::text_muted()}",
                    "Select a mandi to see its contact details."
                }
            }
        }
    }
}

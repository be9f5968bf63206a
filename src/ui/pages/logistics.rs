use dioxus::prelude::*;

use crate::app::persist_user_state;
use crate::domain::{demo, AppState, Transporter, UserRole};
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;

#[component]
pub fn LogisticsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let role = state.with(|st| st.user.as_ref().map(|user| user.role).unwrap_or_default());
    let pooling = state.with(|st| st.pooling_enabled);

    let mut state_for_toggle = state.clone();
    let on_toggle = move |_| {
        state_for_toggle.with_mut(|st| st.pooling_enabled = !st.pooling_enabled);
        persist_user_state(&state_for_toggle);
    };

    let discount_pct = (Transporter::POOLING_DISCOUNT * 100.0) as u32;

    rsx! {
        div { class: "space-y-6",
            div {
                h2 { class: "text-lg font-semibold text-slate-900", "Transport partners" }
                p { class: "text-sm {theme::text_muted()}",
                    "Local operators for the mandi run, with per-kilometre rates."
                }
            }

            div { class: "{theme::panel()} flex flex-wrap items-center justify-between gap-4",
                div {
                    h3 { class: "font-semibold text-slate-900", "Pool loads with neighbours" }
                    p { class: "text-sm {theme::text_muted()}",
                        "Share a vehicle and cut the per-km rate by {discount_pct}%. Applies in the calculator too."
                    }
                }
                button {
                    class: if pooling {
                        "relative h-7 w-12 rounded-full bg-emerald-500 transition"
                    } else {
                        "relative h-7 w-12 rounded-full bg-slate-300 transition"
                    },
                    onclick: on_toggle,
                    span {
                        class: if pooling {
                            "absolute top-1 left-6 h-5 w-5 rounded-full bg-white shadow transition-all"
                        } else {
                            "absolute top-1 left-1 h-5 w-5 rounded-full bg-white shadow transition-all"
                        },
                    }
                }
            }

            div { class: "grid grid-cols-1 gap-4 md:grid-cols-3",
                for transporter in demo::transporters() {
                    TransporterCard { transporter, pooling, role }
                }
            }
        }
    }
}

#[component]
fn TransporterCard(transporter: Transporter, pooling: bool, role: UserRole) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let name_for_call = transporter.name.clone();
    let pooled = transporter.pooled_rate();

    rsx! {
        div { class: "{theme::panel()} flex flex-col",
            div { class: "flex items-start justify-between",
                div {
                    h3 { class: "font-semibold text-slate-900", "{transporter.name}" }
                    p { class: "text-sm {theme::text_muted()}",
                        "{transporter.vehicle} · {transporter.capacity}"
                    }
                }
                if transporter.verified {
                    span { class: "rounded-full bg-emerald-100 px-2 py-0.5 text-[10px] font-bold uppercase text-emerald-700",
                        "Verified"
                    }
                }
            }

            div { class: "mt-4 flex items-baseline gap-2",
                if pooling {
                    span { class: "text-sm text-slate-400 line-through",
                        "₹{transporter.rate_per_km:.0}"
                    }
                    span { class: "text-2xl font-bold text-emerald-600", "₹{pooled:.2}" }
                } else {
                    span { class: "text-2xl font-bold text-slate-900",
                        "₹{transporter.rate_per_km:.0}"
                    }
                }
                span { class: "text-sm {theme::text_muted()}", "per km" }
            }
            p { class: "mt-1 text-sm text-amber-500", "★ {transporter.rating:.1}" }

            button {
                class: "mt-4 w-full {theme::btn_primary(role)}",
                onclick: move |_| {
                    push_toast(
                        toasts,
                        ToastKind::Info,
                        format!("Booking with {name_for_call} is not wired up in the demo build."),
                    );
                },
                "📞 Book now"
            }
        }
    }
}

use dioxus::prelude::*;

use crate::domain::{advisory_for, demo};
use crate::ui::theme;

#[component]
pub fn WeatherPage() -> Element {
    let current = demo::current_weather();
    let advisory = advisory_for(&current);
    let outlook = demo::weekly_outlook();

    rsx! {
        div { class: "space-y-6",
            div { class: "rounded-2xl bg-gradient-to-br from-sky-500 to-blue-700 p-6 text-white shadow-lg",
                div { class: "flex items-start justify-between",
                    div {
                        p { class: "text-sm text-sky-100", "{current.location}" }
                        p { class: "mt-1 text-5xl font-bold", "{current.temp_c}°C" }
                        p { class: "mt-1 text-sky-100", "{current.condition}" }
                    }
                    span { class: "text-6xl", "⛅" }
                }
                div { class: "mt-6 grid grid-cols-2 gap-4 border-t border-white/20 pt-4 text-sm",
                    div {
                        p { class: "text-sky-100", "Humidity" }
                        p { class: "text-lg font-semibold", "{current.humidity_pct}%" }
                    }
                    div {
                        p { class: "text-sky-100", "Wind" }
                        p { class: "text-lg font-semibold", "{current.wind_kmh} km/h" }
                    }
                }
            }

            if let Some(advisory) = advisory {
                div { class: "rounded-2xl border border-amber-300 bg-amber-50 p-5",
                    div { class: "flex items-start gap-3",
                        span { class: "text-2xl", "⚠️" }
                        div {
                            h3 { class: "font-bold text-amber-800", "{advisory.headline}" }
                            p { class: "mt-1 text-sm text-amber-700", "{advisory.detail}" }
                            p { class: "mt-2 text-sm font-semibold text-amber-800",
                                "Recommended: {advisory.recommendation}"
                            }
                        }
                    }
                }
            }

            div {
                h2 { class: "mb-3 text-lg font-semibold text-slate-900", "Next 5 days" }
                div { class: "grid grid-cols-5 gap-3",
                    for day in outlook {
                        div { class: "rounded-2xl border border-slate-200 bg-white p-4 text-center shadow-sm",
                            p { class: "text-xs font-semibold uppercase {theme::text_muted()}",
                                "{day.day}"
                            }
                            p { class: "my-2 text-2xl", "{day.icon}" }
                            p { class: "text-sm font-semibold text-slate-900", "{day.temp_c}°C" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::app::{persist_user_state, Route};
use crate::domain::{AppState, UserRole};
use crate::ui::pages::LoginPage;
use crate::ui::theme;
use crate::util::version;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let user = state.with(|st| st.user.clone());

    // Every routed page sits behind the mock session gate.
    let Some(user) = user else {
        return rsx! {
            div { class: "min-h-screen bg-slate-50 text-slate-900",
                LoginPage {}
            }
        };
    };

    let role = user.role;
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let mut state_mut = state;

    let on_logout = move |_| {
        state_mut.with_mut(|st| st.user = None);
        persist_user_state(&state_mut);
    };

    rsx! {
        div { class: "min-h-screen bg-slate-50 text-slate-900",
            header { class: "sticky top-0 z-10 border-b border-slate-200 bg-white/95 backdrop-blur px-6 py-3",
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    div { class: "flex items-center gap-2",
                        span { class: "text-2xl", "🌿" }
                        div {
                            h1 { class: "text-lg font-bold tracking-tight {theme::accent_text(role)}",
                                "Agri-Pivot"
                            }
                            p { class: "text-xs text-slate-400", "{version::version_label()}" }
                        }
                    }

                    nav { class: "flex gap-1 justify-center text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Dashboard {}),
                            onclick: move |_| { nav.push(Route::Dashboard {}); },
                            label: "Dashboard",
                            role: role,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: "Calculator",
                            role: role,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Market {}),
                            onclick: move |_| { nav.push(Route::Market {}); },
                            label: "Mandis",
                            role: role,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Logistics {}),
                            onclick: move |_| { nav.push(Route::Logistics {}); },
                            label: "Transport",
                            role: role,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Weather {}),
                            onclick: move |_| { nav.push(Route::Weather {}); },
                            label: "Weather",
                            role: role,
                        }
                    }

                    div { class: "flex items-center gap-3 justify-end",
                        div { class: "hidden md:block text-right",
                            p { class: "text-sm font-medium text-slate-900", "{user.display_name()}" }
                            p { class: "text-xs capitalize text-slate-500", "{role.name()}" }
                        }
                        div {
                            class: "flex h-9 w-9 items-center justify-center rounded-full border border-emerald-200 bg-emerald-100 font-bold text-emerald-700",
                            "{user.initial()}"
                        }
                        button {
                            class: "text-sm font-medium text-red-500 hover:text-red-600",
                            onclick: on_logout,
                            "Log out"
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-8",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(
    active: bool,
    onclick: EventHandler<()>,
    label: &'static str,
    role: UserRole,
) -> Element {
    let class = if active {
        theme::nav_active(role)
    } else {
        theme::nav_inactive(role)
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

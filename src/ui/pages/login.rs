use std::time::Duration;

use dioxus::prelude::*;

use crate::app::persist_user_state;
use crate::domain::{authenticate, AppState, UserRole, DEMO_EMAIL, DEMO_PASSWORD};
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;
use crate::util::version;

/// Matches the fake round-trip the web prototype showed on its login screen.
const LOGIN_DELAY: Duration = Duration::from_millis(600);

#[component]
pub fn LoginPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut email = use_signal(|| DEMO_EMAIL.to_string());
    let mut password = use_signal(|| DEMO_PASSWORD.to_string());
    let busy = use_signal(|| false);

    // No session yet; the login screen always renders in the farmer palette.
    let role = UserRole::Farmer;

    let on_login = move |_| {
        if busy() {
            return;
        }
        let mut busy = busy.clone();
        busy.set(true);
        let mut state = state.clone();
        let toasts = toasts.clone();
        let email_value = email();
        let password_value = password();
        spawn(async move {
            tokio::time::sleep(LOGIN_DELAY).await;
            match authenticate(&email_value, &password_value) {
                Ok(user) => {
                    state.with_mut(|st| st.user = Some(user));
                    persist_user_state(&state);
                }
                Err(err) => {
                    push_toast(
                        toasts,
                        ToastKind::Error,
                        format!("{err}. Use {DEMO_EMAIL} / {DEMO_PASSWORD} for the demo."),
                    );
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "flex min-h-screen items-center justify-center px-4",
            div { class: "w-full max-w-sm",
                div { class: "mb-6 text-center",
                    span { class: "text-5xl", "🌿" }
                    h1 { class: "mt-2 text-2xl font-bold tracking-tight {theme::accent_text(role)}",
                        "Agri-Pivot AI"
                    }
                    p { class: "text-sm {theme::text_muted()}",
                        "Price forecasts and profit planning for your mandi runs"
                    }
                }

                div { class: "{theme::panel()}",
                    label { class: "{theme::label_class()}", "Email" }
                    input {
                        class: "{theme::input_class(role)}",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
                    }
                    div { class: "mt-4",
                        label { class: "{theme::label_class()}", "Password" }
                        input {
                            class: "{theme::input_class(role)}",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |event| password.set(event.value()),
                        }
                    }

                    button {
                        class: "mt-6 w-full {theme::btn_primary(role)}",
                        disabled: busy(),
                        onclick: on_login,
                        if busy() {
                            div { class: "flex items-center justify-center gap-2",
                                div { class: "spinner" }
                                span { "Signing in..." }
                            }
                        } else {
                            span { "Sign in" }
                        }
                    }

                    p { class: "mt-4 text-center text-xs {theme::text_muted()}",
                        "Demo account: {DEMO_EMAIL} / {DEMO_PASSWORD}"
                    }
                }

                p { class: "mt-6 text-center text-xs text-slate-400",
                    "{version::version_label()}"
                }
            }
        }
    }
}

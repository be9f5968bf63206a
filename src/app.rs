use std::time::Duration;

use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{derive_signal, AppState, CacheResource},
    infra::api::{FetchStatus, PredictionClient},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, DashboardPage, LogisticsPage, MarketPage, WeatherPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

/// Shared TTL for forecast data before a refresh is triggered.
pub const FORECAST_TTL: Duration = Duration::from_secs(30 * 60);

/// Pause before resolving a forecast so the loading state is visible; the
/// web prototype faked its API latency the same way.
const SIMULATED_LATENCY: Duration = Duration::from_millis(600);

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/calculator")]
    Calculator {},
    #[route("/market")]
    Market {},
    #[route("/logistics")]
    Logistics {},
    #[route("/weather")]
    Weather {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Forecast fetch trigger shared across routes.
    let forecast_request = use_signal(|| None::<String>);
    use_context_provider(|| forecast_request.clone());

    let _forecasts = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        let forecast_request = forecast_request.clone();
        move || async move {
            fetch_forecast(state.clone(), toasts.clone(), forecast_request.clone()).await
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        println!("Failed to persist user state: {err}");
    }
}

/// Queues a forecast fetch unless the cached series is still fresh.
pub fn request_forecast(
    state: Signal<AppState>,
    mut forecast_request: Signal<Option<String>>,
    commodity_id: &str,
) {
    let resource = CacheResource::Forecast(commodity_id.to_string());
    let stale = state.with(|st| st.is_stale(&resource, FORECAST_TTL));
    if stale {
        forecast_request.set(Some(commodity_id.to_string()));
    }
}

async fn fetch_forecast(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    mut forecast_request: Signal<Option<String>>,
) -> Option<(String, FetchStatus)> {
    let Some(commodity_id) = forecast_request() else {
        return None;
    };

    let Ok(client) = PredictionClient::new() else {
        push_toast(
            toasts.clone(),
            ToastKind::Error,
            "Failed to initialise the prediction client.",
        );
        return None;
    };

    let commodity = state.with(|st| {
        st.commodities
            .iter()
            .find(|c| c.id == commodity_id)
            .cloned()
    });
    let Some(commodity) = commodity else {
        forecast_request.set(None);
        return None;
    };

    tokio::time::sleep(SIMULATED_LATENCY).await;

    match client.get_forecast(&commodity).await {
        Ok(payload) => {
            forecast_request.set(None);
            println!(
                "[forecast] {} points for {} ({:?})",
                payload.data.len(),
                commodity.name,
                payload.status
            );
            let signal = derive_signal(&payload.data);
            state.with_mut(|st| {
                st.forecasts.insert(commodity_id.clone(), payload.data.clone());
                st.signals.insert(commodity_id.clone(), signal);
                st.cache.record_fetch(
                    CacheResource::Forecast(commodity_id.clone()),
                    payload.fetched_at,
                );
            });

            match payload.status {
                FetchStatus::Synthetic => push_toast(
                    toasts.clone(),
                    ToastKind::Info,
                    format!(
                        "Backend offline; showing a simulated forecast for {}.",
                        commodity.name
                    ),
                ),
                FetchStatus::Stale => push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    format!(
                        "Showing a cached forecast for {}; data might be stale.",
                        commodity.name
                    ),
                ),
                _ => {}
            }

            Some((commodity_id, payload.status))
        }
        Err(err) => {
            forecast_request.set(None);
            push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("Failed to load forecast: {err}"),
            );
            None
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Market() -> Element {
    rsx! { Shell { MarketPage {} } }
}

#[component]
pub fn Logistics() -> Element {
    rsx! { Shell { LogisticsPage {} } }
}

#[component]
pub fn Weather() -> Element {
    rsx! { Shell { WeatherPage {} } }
}

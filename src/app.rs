use dioxus::{prelude::*, signals::Signal};
use tracing::{error, info};

use crate::{
    domain::{AppState, LoadOutcome, Shipment, LOAD_FAILED_MESSAGE},
    infra::mock_api::{AuthApi, ShipmentsApi},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{
            LoginPage, ProfilePage, ScanPage, ShipmentDetailPage, ShipmentsPage, SplashPage,
            WalletPage,
        },
        shell::Shell,
    },
    util::{assets, config},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Splash {},
    #[route("/login")]
    Login {},
    #[route("/shipments")]
    Shipments {},
    #[route("/shipments/:id")]
    ShipmentDetail { id: String },
    #[route("/scan")]
    Scan {},
    #[route("/wallet")]
    Wallet {},
    #[route("/profile")]
    Profile {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    let shipments_api = use_hook(|| {
        ShipmentsApi::new(config::current()).unwrap_or_else(|err| {
            error!(%err, "shipment data unavailable");
            ShipmentsApi::unavailable(err.to_string())
        })
    });
    use_context_provider(|| shipments_api.clone());

    let auth_api = use_hook(|| AuthApi::new(config::current()));
    use_context_provider(|| auth_api.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Fetches the first page of shipments, collapsing failures into the user-facing message.
pub async fn fetch_shipment_list(api: &ShipmentsApi, limit: usize) -> Result<Vec<Shipment>, String> {
    match api.get_shipments(1, limit, None, None).await {
        Ok(page) => {
            info!(count = page.shipments.len(), total = page.total, "shipments loaded");
            Ok(page.shipments)
        }
        Err(err) => {
            error!(%err, "failed to load shipments");
            Err(LOAD_FAILED_MESSAGE.to_string())
        }
    }
}

/// Starts a shipments load. A load already in flight is superseded.
pub fn load_shipments(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    api: ShipmentsApi,
) {
    let ticket = state.with_mut(|st| st.shipments.begin_load());
    let limit = config::current().page_limit;
    spawn(async move {
        let result = fetch_shipment_list(&api, limit).await;
        let failed = result.is_err();
        let outcome = state.with_mut(|st| st.shipments.finish_load(ticket, result));
        if failed && outcome == LoadOutcome::Applied {
            push_toast(toasts, ToastKind::Error, LOAD_FAILED_MESSAGE);
        }
    });
}

#[component]
pub fn Splash() -> Element {
    rsx! { SplashPage {} }
}

#[component]
pub fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
pub fn Shipments() -> Element {
    rsx! { Shell { ShipmentsPage {} } }
}

#[component]
pub fn ShipmentDetail(id: String) -> Element {
    rsx! { Shell { ShipmentDetailPage { id } } }
}

#[component]
pub fn Scan() -> Element {
    rsx! { Shell { ScanPage {} } }
}

#[component]
pub fn Wallet() -> Element {
    rsx! { Shell { WalletPage {} } }
}

#[component]
pub fn Profile() -> Element {
    rsx! { Shell { ProfilePage {} } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ShipmentsAction, ShipmentsState};
    use crate::infra::mock_api::fixture_shipments;

    #[tokio::test(start_paused = true)]
    async fn failed_fetch_leaves_loaded_shipments_in_place() {
        let api = ShipmentsApi::with_shipments(fixture_shipments().unwrap());
        let mut state = ShipmentsState::default();

        let ticket = state.begin_load();
        let first = fetch_shipment_list(&api, 10).await;
        state.finish_load(ticket, first);
        state.dispatch(ShipmentsAction::SetSearchQuery("cairo".into()));
        let filtered_before = state.filtered().to_vec();

        api.set_failure(Some("network down".into())).await;
        let ticket = state.begin_load();
        let second = fetch_shipment_list(&api, 10).await;
        assert_eq!(second, Err(LOAD_FAILED_MESSAGE.to_string()));
        state.finish_load(ticket, second);

        assert_eq!(state.shipments().len(), 10);
        assert_eq!(state.filtered(), filtered_before.as_slice());
        assert_eq!(state.error(), Some(LOAD_FAILED_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn page_limit_caps_the_list() {
        let api = ShipmentsApi::with_shipments(fixture_shipments().unwrap());
        let shipments = fetch_shipment_list(&api, 4).await.unwrap();
        assert_eq!(shipments.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn unavailable_source_reports_the_load_failure() {
        let api = ShipmentsApi::unavailable("fixture missing");
        assert_eq!(
            fetch_shipment_list(&api, 10).await,
            Err(LOAD_FAILED_MESSAGE.to_string())
        );
    }
}

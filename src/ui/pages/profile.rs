use dioxus::prelude::*;
use tracing::info;

use crate::{
    app::Route,
    domain::AppState,
    infra::mock_api::AuthApi,
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn ProfilePage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let auth_api = use_context::<AuthApi>();
    let nav = use_navigator();
    let mut is_leaving = use_signal(|| false);

    let user = state.with(|st| st.auth.user.clone());
    let version = version_label();

    let on_logout = move |_| {
        if is_leaving() {
            return;
        }
        is_leaving.set(true);
        let auth_api = auth_api.clone();
        spawn(async move {
            let response = auth_api.logout().await;
            info!(message = %response.message, "session ended");
            state.with_mut(|st| st.end_session());
            push_toast(toasts, ToastKind::Info, response.message);
            is_leaving.set(false);
            nav.replace(Route::Login {});
        });
    };

    rsx! {
        div {
            h2 { "Profile" }
            if let Some(user) = user {
                dl { class: "detail",
                    dt { "Name" } dd { "{user.name}" }
                    dt { "Email" } dd { "{user.email}" }
                    dt { "Role" } dd { "{user.role}" }
                }
            }
            button {
                class: "btn btn-outline",
                disabled: is_leaving(),
                onclick: on_logout,
                if is_leaving() { "Logging out…" } else { "Logout" }
            }
            p { class: "placeholder", "{APP_NAME} {version}" }
        }
    }
}

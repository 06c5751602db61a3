//! Login screen: company URL, email and password.

use dioxus::prelude::*;
use tracing::info;

use crate::{
    app::Route,
    domain::{AppState, LoginForm},
    infra::mock_api::AuthApi,
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::config,
};

const DEMO_URL: &str = "https://www.brandimic.com";
const DEMO_EMAIL: &str = "test@example.com";
const DEMO_PASSWORD: &str = "password123";

#[component]
pub fn LoginPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let auth_api = use_context::<AuthApi>();
    let nav = use_navigator();

    let mut url = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_loading = use_signal(|| false);

    let form = LoginForm {
        url: url(),
        email: email(),
        password: password(),
    };
    let can_submit = form.is_complete() && !is_loading();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = LoginForm {
            url: url(),
            email: email(),
            password: password(),
        };
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(err) => {
                push_toast(toasts, ToastKind::Error, err.to_string());
                return;
            }
        };

        if !config::current().verify_credentials {
            info!(email = %valid.email, company = %valid.url, "direct login");
            state.with_mut(|st| st.auth.direct_login(&valid.email));
            push_toast(toasts, ToastKind::Success, format!("Signed in as {}", valid.email));
            nav.replace(Route::Shipments {});
            return;
        }

        is_loading.set(true);
        let auth_api = auth_api.clone();
        spawn(async move {
            let response = auth_api.login(&valid.email, &valid.password).await;
            is_loading.set(false);
            match state.with_mut(|st| st.auth.apply_login(response)) {
                Ok(()) => {
                    push_toast(toasts, ToastKind::Success, format!("Signed in as {}", valid.email));
                    nav.replace(Route::Shipments {});
                }
                Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
            }
        });
    };

    rsx! {
        div { class: "app-main",
            div { class: "sheet-header",
                button {
                    class: "btn-link",
                    onclick: move |_| { nav.replace(Route::Splash {}); },
                    "Cancel"
                }
            }
            form { class: "form",
                onsubmit: on_submit,
                h2 { "Login" }
                p { class: "greeting", "Please enter your company URL, email and password." }
                label { "Company URL" }
                input {
                    class: "input",
                    r#type: "url",
                    value: url(),
                    oninput: move |evt| url.set(evt.value()),
                    placeholder: "https://www.example.com",
                }
                label { "Email" }
                input {
                    class: "input",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                    placeholder: "you@example.com",
                }
                label { "Password" }
                input {
                    class: "input",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !can_submit,
                    if is_loading() { "Signing in…" } else { "Login" }
                }
                button {
                    class: "btn-link",
                    r#type: "button",
                    onclick: move |_| {
                        url.set(DEMO_URL.to_string());
                        email.set(DEMO_EMAIL.to_string());
                        password.set(DEMO_PASSWORD.to_string());
                    },
                    "Use demo account"
                }
            }
        }
    }
}

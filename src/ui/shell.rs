use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::pages::LoginPage;
use crate::ui::theme;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let (authenticated, initial) = state.with(|s| {
        let initial = s
            .auth
            .user
            .as_ref()
            .and_then(|user| user.name.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?');
        (s.auth.is_authenticated, initial)
    });

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    // Tabs are only reachable with a session.
    if !authenticated {
        return rsx! { LoginPage {} };
    }

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                button {
                    class: "app-avatar",
                    onclick: move |_| { nav.push(Route::Profile {}); },
                    "{initial}"
                }
                span { class: "app-logo", "SHIPPEX" }
                span { class: "app-avatar", "🔔" }
            }
            main { class: "app-main",
                {children}
            }
            nav { class: "tab-bar",
                TabButton {
                    active: matches!(current_route, Route::Shipments {} | Route::ShipmentDetail { .. }),
                    onclick: move |_| { nav.push(Route::Shipments {}); },
                    label: "📦 Shipments",
                }
                TabButton {
                    active: matches!(current_route, Route::Scan {}),
                    onclick: move |_| { nav.push(Route::Scan {}); },
                    label: "🔍 Scan",
                }
                TabButton {
                    active: matches!(current_route, Route::Wallet {}),
                    onclick: move |_| { nav.push(Route::Wallet {}); },
                    label: "👛 Wallet",
                }
                TabButton {
                    active: matches!(current_route, Route::Profile {}),
                    onclick: move |_| { nav.push(Route::Profile {}); },
                    label: "👤 Profile",
                }
            }
        }
    }
}

#[component]
fn TabButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::tab_class(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn SplashPage() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "splash",
            h1 { "SHIPPEX" }
            button {
                class: "btn btn-light",
                onclick: move |_| { nav.push(Route::Login {}); },
                "Login"
            }
        }
    }
}

use dioxus::prelude::*;

#[component]
pub fn WalletPage() -> Element {
    rsx! {
        div { class: "placeholder",
            h2 { "Wallet" }
            p { "Payments and balances" }
        }
    }
}

use dioxus::prelude::*;

use crate::domain::FilterStatus;
use crate::ui::theme;

/// Bottom sheet with one chip per status. Chips apply immediately; "Done" only closes.
#[component]
pub fn FilterSheet(
    active: Vec<FilterStatus>,
    on_toggle: EventHandler<FilterStatus>,
    on_clear: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "sheet-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "sheet-header",
                    button { class: "btn-link", onclick: move |_| on_close.call(()), "Cancel" }
                    strong { "Filters" }
                    button { class: "btn-link", onclick: move |_| on_close.call(()), "Done" }
                }
                div {
                    class: "list-header",
                    h3 { "Shipment status" }
                    button {
                        class: "btn-link",
                        disabled: active.is_empty(),
                        onclick: move |_| on_clear.call(()),
                        "Clear"
                    }
                }
                div {
                    class: "chips",
                    for status in FilterStatus::ALL {
                        button {
                            key: "{status.label()}",
                            class: theme::chip_class(active.contains(&status)),
                            onclick: move |_| on_toggle.call(status),
                            "{status.label()}"
                        }
                    }
                }
            }
        }
    }
}

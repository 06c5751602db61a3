//! Tracking-number lookup.

use dioxus::prelude::*;
use tracing::warn;

use crate::{
    app::Route,
    infra::mock_api::ShipmentsApi,
    ui::components::{
        shipment_list::{ShipmentList, ShipmentRow},
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[derive(Clone, PartialEq)]
enum LookupResult {
    Found(ShipmentRow),
    NotFound(String),
}

#[component]
pub fn ScanPage() -> Element {
    let api = use_context::<ShipmentsApi>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let mut tracking = use_signal(String::new);
    let mut is_searching = use_signal(|| false);
    let mut result = use_signal(|| None::<LookupResult>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let needle = tracking().trim().to_string();
        if needle.is_empty() {
            return;
        }
        is_searching.set(true);
        let api = api.clone();
        spawn(async move {
            match api.get_shipment_by_tracking(&needle).await {
                Ok(Some(shipment)) => {
                    result.set(Some(LookupResult::Found(ShipmentRow::new(&shipment, false))));
                }
                Ok(None) => result.set(Some(LookupResult::NotFound(needle))),
                Err(err) => {
                    warn!(%err, "tracking lookup failed");
                    result.set(None);
                    push_toast(toasts, ToastKind::Error, err.to_string());
                }
            }
            is_searching.set(false);
        });
    };

    let lookup = match result() {
        Some(LookupResult::Found(row)) => rsx! {
            ShipmentList {
                rows: vec![row],
                on_toggle: move |_: String| {},
                on_open: move |id: String| {
                    nav.push(Route::ShipmentDetail { id });
                },
            }
        },
        Some(LookupResult::NotFound(needle)) => rsx! {
            p { class: "empty", "No shipment with tracking number {needle}" }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            h2 { "Scan" }
            form { class: "form",
                onsubmit: on_submit,
                label { "Tracking number" }
                input {
                    class: "input",
                    value: tracking(),
                    oninput: move |evt| tracking.set(evt.value()),
                    placeholder: "e.g. FF123456789",
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: is_searching() || tracking().trim().is_empty(),
                    if is_searching() { "Searching…" } else { "Find shipment" }
                }
            }
            {lookup}
        }
    }
}

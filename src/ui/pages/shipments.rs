use dioxus::prelude::*;

use crate::{
    app::{load_shipments, Route},
    domain::{AppState, FilterStatus, ShipmentsAction},
    infra::mock_api::ShipmentsApi,
    ui::components::{
        filter_sheet::FilterSheet,
        shipment_list::{ShipmentList, ShipmentRow},
        toast::ToastMessage,
    },
};

#[component]
pub fn ShipmentsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let api = use_context::<ShipmentsApi>();
    let nav = use_navigator();
    let mut show_filters = use_signal(|| false);

    use_hook({
        let api = api.clone();
        move || load_shipments(state, toasts, api)
    });

    let (user_name, search, active_filters, rows, selected_count, mark_all, is_loading, error) =
        state.with(|st| {
            let shipments = &st.shipments;
            let rows = shipments
                .filtered()
                .iter()
                .map(|shipment| ShipmentRow::new(shipment, shipments.is_selected(&shipment.id)))
                .collect::<Vec<_>>();
            (
                st.auth
                    .user
                    .as_ref()
                    .map(|user| user.name.clone())
                    .unwrap_or_default(),
                shipments.query().text.clone(),
                shipments.query().statuses.iter().copied().collect::<Vec<FilterStatus>>(),
                rows,
                shipments.selected_count(),
                shipments.mark_all(),
                shipments.is_loading(),
                shipments.error().map(str::to_string),
            )
        });

    let filter_label = if active_filters.is_empty() {
        "Filters".to_string()
    } else {
        format!("Filters ({})", active_filters.len())
    };

    let on_refresh = {
        let api = api.clone();
        move |_| load_shipments(state, toasts, api.clone())
    };

    rsx! {
        div {
            p { class: "greeting", "Hello," }
            p { class: "greeting-name", "{user_name}" }

            input {
                class: "input",
                r#type: "search",
                placeholder: "Search",
                value: "{search}",
                oninput: move |evt| {
                    state.with_mut(|st| st.shipments.dispatch(ShipmentsAction::SetSearchQuery(evt.value())));
                },
            }

            div { class: "actions",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| show_filters.set(true),
                    "{filter_label}"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { nav.push(Route::Scan {}); },
                    "Add Scan"
                }
            }

            if let Some(message) = error {
                div { class: "error-banner", "{message}" }
            }

            div { class: "list-header",
                h2 { "Shipments" }
                label { class: "selection-bar",
                    input {
                        r#type: "checkbox",
                        class: "checkbox",
                        checked: mark_all,
                        onclick: move |_| {
                            state.with_mut(|st| st.shipments.dispatch(ShipmentsAction::ToggleMarkAll));
                        },
                    }
                    "Mark All"
                }
            }

            div { class: "selection-bar",
                if is_loading {
                    span { "Loading shipments…" }
                } else {
                    button { class: "btn-link", onclick: on_refresh, "Refresh" }
                }
                if selected_count > 0 {
                    span { "{selected_count} selected" }
                    button {
                        class: "btn-link",
                        onclick: move |_| {
                            state.with_mut(|st| st.shipments.dispatch(ShipmentsAction::ClearSelection));
                        },
                        "Clear selection"
                    }
                }
            }

            ShipmentList {
                rows,
                on_toggle: move |id: String| {
                    state.with_mut(|st| st.shipments.dispatch(ShipmentsAction::ToggleSelection(id)));
                },
                on_open: move |id: String| {
                    nav.push(Route::ShipmentDetail { id });
                },
            }

            if show_filters() {
                FilterSheet {
                    active: active_filters.clone(),
                    on_toggle: move |status: FilterStatus| {
                        state.with_mut(|st| st.shipments.dispatch(ShipmentsAction::ToggleStatusFilter(status)));
                    },
                    on_clear: move |_| {
                        state.with_mut(|st| st.shipments.dispatch(ShipmentsAction::ClearStatusFilters));
                    },
                    on_close: move |_| show_filters.set(false),
                }
            }
        }
    }
}

use dioxus::prelude::*;

use super::status_badge::StatusBadge;
use crate::domain::{FilterStatus, Shipment};
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct ShipmentRow {
    pub id: String,
    pub tracking_number: String,
    pub route: String,
    pub status: FilterStatus,
    pub selected: bool,
}

impl ShipmentRow {
    pub fn new(shipment: &Shipment, selected: bool) -> Self {
        Self {
            id: shipment.id.clone(),
            tracking_number: shipment.tracking_number.clone(),
            route: shipment.route_label(),
            status: shipment.filter_status(),
            selected,
        }
    }
}

#[component]
pub fn ShipmentList(
    rows: Vec<ShipmentRow>,
    on_toggle: EventHandler<String>,
    on_open: EventHandler<String>,
) -> Element {
    if rows.is_empty() {
        return rsx! {
            div { class: "empty", "No shipments found" }
        };
    }

    rsx! {
        div {
            for row in rows {
                ShipmentRowView {
                    key: "{row.id}",
                    row,
                    on_toggle: on_toggle.clone(),
                    on_open: on_open.clone(),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ShipmentRowViewProps {
    row: ShipmentRow,
    on_toggle: EventHandler<String>,
    on_open: EventHandler<String>,
}

#[component]
fn ShipmentRowView(props: ShipmentRowViewProps) -> Element {
    let row = props.row;
    let toggle_id = row.id.clone();
    let checkbox_id = row.id.clone();
    let open_id = row.id.clone();
    rsx! {
        div {
            class: theme::row_class(row.selected),
            onclick: move |_| props.on_toggle.call(toggle_id.clone()),
            input {
                r#type: "checkbox",
                class: "checkbox",
                checked: row.selected,
                onclick: move |evt| {
                    evt.stop_propagation();
                    props.on_toggle.call(checkbox_id.clone());
                },
            }
            div {
                class: "shipment-body",
                div {
                    span { class: "shipment-awb", "AWB {row.tracking_number}" }
                    StatusBadge { status: row.status }
                }
                div { class: "shipment-route", "{row.route}" }
            }
            button {
                class: "btn-link",
                title: "Open shipment",
                onclick: move |evt| {
                    evt.stop_propagation();
                    props.on_open.call(open_id.clone());
                },
                "↗"
            }
        }
    }
}

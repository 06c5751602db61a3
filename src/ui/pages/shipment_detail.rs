use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    app::Route,
    domain::Shipment,
    infra::mock_api::ShipmentsApi,
    ui::components::status_badge::StatusBadge,
};

#[component]
pub fn ShipmentDetailPage(id: String) -> Element {
    let api = use_context::<ShipmentsApi>();
    let nav = use_navigator();

    let lookup_id = id.clone();
    let shipment = use_resource(move || {
        let api = api.clone();
        let id = lookup_id.clone();
        async move { api.get_shipment_by_id(&id).await }
    });

    let body = match &*shipment.read() {
        None => rsx! { p { class: "empty", "Loading shipment…" } },
        Some(Err(err)) => rsx! { div { class: "error-banner", "{err}" } },
        Some(Ok(None)) => rsx! { p { class: "empty", "Shipment {id} not found" } },
        Some(Ok(Some(found))) => rsx! { ShipmentDetails { shipment: found.clone() } },
    };

    rsx! {
        div {
            button {
                class: "btn-link",
                onclick: move |_| { nav.push(Route::Shipments {}); },
                "← Shipments"
            }
            {body}
        }
    }
}

#[component]
fn ShipmentDetails(shipment: Shipment) -> Element {
    let dims = &shipment.dimensions;
    let dimensions = format!("{} × {} × {} cm", dims.length, dims.width, dims.height);
    let delivered = shipment
        .actual_delivery
        .map(format_timestamp)
        .unwrap_or_else(|| "Not yet delivered".to_string());
    let created = format_timestamp(shipment.created_at);
    let updated = format_timestamp(shipment.updated_at);
    let declared = format!("{:.2}", shipment.declared_value());

    rsx! {
        div { class: "detail",
            div { class: "list-header",
                h2 { "AWB {shipment.tracking_number}" }
                StatusBadge { status: shipment.filter_status() }
            }
            p { class: "shipment-route", "{shipment.route_label()}" }
            dl {
                dt { "Carrier" } dd { "{shipment.carrier}" }
                dt { "Estimated delivery" } dd { "{shipment.estimated_delivery}" }
                dt { "Delivered" } dd { "{delivered}" }
                dt { "Weight" } dd { "{shipment.weight} kg" }
                dt { "Dimensions" } dd { "{dimensions}" }
                dt { "Sender" } dd { "{shipment.sender.name}, {shipment.sender.address}" }
                dt { "Recipient" } dd { "{shipment.recipient.name}, {shipment.recipient.address}" }
                dt { "Created" } dd { "{created}" }
                dt { "Updated" } dd { "{updated}" }
            }
            h3 { "Items" }
            ul {
                for (idx, item) in shipment.items.iter().enumerate() {
                    li { key: "{idx}", "{item.quantity} × {item.name} ({item.value:.2})" }
                }
            }
            p { "Declared value: {declared}" }
        }
    }
}

/// `YYYY-MM-DD HH:MM` in the timestamp's own offset.
fn format_timestamp(ts: OffsetDateTime) -> String {
    format!("{} {:02}:{:02}", ts.date(), ts.hour(), ts.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, Month, Time};

    #[test]
    fn timestamps_render_date_and_minutes() {
        let date = Date::from_calendar_date(2024, Month::December, 3).unwrap();
        let ts = date.with_time(Time::from_hms(9, 5, 42).unwrap()).assume_utc();
        assert_eq!(format_timestamp(ts), "2024-12-03 09:05");
    }
}

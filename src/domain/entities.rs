#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Identifier for shipments returned by the mock data source.
pub type ShipmentId = String;

/// Raw carrier-side shipment status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShipmentStatus {
    Pending,
    InTransit,
    Delivered,
    Cancelled,
    Rejected,
    Lost,
    OnHold,
    /// Anything the data source sends that we don't know about.
    #[serde(other)]
    Unknown,
}

impl ShipmentStatus {
    pub const KNOWN: [ShipmentStatus; 7] = [
        ShipmentStatus::Pending,
        ShipmentStatus::InTransit,
        ShipmentStatus::Delivered,
        ShipmentStatus::Cancelled,
        ShipmentStatus::Rejected,
        ShipmentStatus::Lost,
        ShipmentStatus::OnHold,
    ];

    pub fn filter_status(self) -> FilterStatus {
        FilterStatus::from(self)
    }
}

/// Coarse, user-facing status category shown on badges and in the filter sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterStatus {
    Received,
    Putaway,
    Delivered,
    Canceled,
    Rejected,
    Lost,
    OnHold,
}

impl FilterStatus {
    /// Order used by the filter sheet.
    pub const ALL: [FilterStatus; 7] = [
        FilterStatus::Received,
        FilterStatus::Putaway,
        FilterStatus::Delivered,
        FilterStatus::Canceled,
        FilterStatus::Rejected,
        FilterStatus::Lost,
        FilterStatus::OnHold,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterStatus::Received => "RECEIVED",
            FilterStatus::Putaway => "PUTAWAY",
            FilterStatus::Delivered => "DELIVERED",
            FilterStatus::Canceled => "CANCELED",
            FilterStatus::Rejected => "REJECTED",
            FilterStatus::Lost => "LOST",
            FilterStatus::OnHold => "ON HOLD",
        }
    }
}

impl From<ShipmentStatus> for FilterStatus {
    fn from(status: ShipmentStatus) -> Self {
        match status {
            ShipmentStatus::Pending => FilterStatus::Received,
            ShipmentStatus::InTransit => FilterStatus::Putaway,
            ShipmentStatus::Delivered => FilterStatus::Delivered,
            ShipmentStatus::Cancelled => FilterStatus::Canceled,
            ShipmentStatus::Rejected => FilterStatus::Rejected,
            ShipmentStatus::Lost => FilterStatus::Lost,
            ShipmentStatus::OnHold => FilterStatus::OnHold,
            ShipmentStatus::Unknown => FilterStatus::Received,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Sender or recipient of a shipment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: ShipmentId,
    pub tracking_number: String,
    pub status: ShipmentStatus,
    pub origin: String,
    pub destination: String,
    pub carrier: String,
    /// Calendar date (`YYYY-MM-DD`) as published by the carrier.
    pub estimated_delivery: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub actual_delivery: Option<OffsetDateTime>,
    pub weight: f64,
    pub dimensions: Dimensions,
    pub sender: Party,
    pub recipient: Party,
    pub items: Vec<LineItem>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Shipment {
    pub fn filter_status(&self) -> FilterStatus {
        self.status.filter_status()
    }

    /// Human-readable route, e.g. `Cairo → Alexandria`.
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }

    pub fn declared_value(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.value * item.quantity as f64)
            .sum()
    }

    /// Fields the free-text search looks at.
    pub(crate) fn searchable_fields(&self) -> [&str; 6] {
        [
            &self.tracking_number,
            &self.origin,
            &self.destination,
            &self.carrier,
            &self.sender.name,
            &self.recipient.name,
        ]
    }
}

/// Authenticated user for the current session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl User {
    /// Builds a user from an email address; the display name is the local part.
    pub fn from_email(id: impl Into<String>, email: &str, role: impl Into<String>) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: id.into(),
            email: email.to_string(),
            name,
            role: role.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_raw_status_maps_to_a_filter_status() {
        let mapped: Vec<FilterStatus> = ShipmentStatus::KNOWN
            .iter()
            .map(|status| status.filter_status())
            .collect();
        assert_eq!(mapped, FilterStatus::ALL.to_vec());
    }

    #[test]
    fn unknown_status_falls_back_to_received() {
        let status: ShipmentStatus = serde_json::from_str("\"returned\"").unwrap();
        assert_eq!(status, ShipmentStatus::Unknown);
        assert_eq!(status.filter_status(), FilterStatus::Received);
    }

    #[test]
    fn raw_status_uses_kebab_case() {
        let status: ShipmentStatus = serde_json::from_str("\"in-transit\"").unwrap();
        assert_eq!(status, ShipmentStatus::InTransit);
        assert_eq!(FilterStatus::OnHold.label(), "ON HOLD");
    }

    #[test]
    fn user_name_is_email_local_part() {
        let user = User::from_email("1", "admin@furforce.com", "admin");
        assert_eq!(user.name, "admin");
    }
}

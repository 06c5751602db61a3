//! Client-side search and status filtering for the shipment list.

use std::collections::BTreeSet;

use super::entities::{FilterStatus, Shipment};

/// Free-text search combined with the set of active status chips.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShipmentQuery {
    pub text: String,
    pub statuses: BTreeSet<FilterStatus>,
}

impl ShipmentQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            statuses: BTreeSet::new(),
        }
    }

    pub fn with_status(mut self, status: FilterStatus) -> Self {
        self.statuses.insert(status);
        self
    }

    /// Adds the status if absent, removes it if present.
    pub fn toggle_status(&mut self, status: FilterStatus) {
        if !self.statuses.remove(&status) {
            self.statuses.insert(status);
        }
    }

    pub fn clear_statuses(&mut self) {
        self.statuses.clear();
    }

    pub fn is_unrestricted(&self) -> bool {
        self.text.trim().is_empty() && self.statuses.is_empty()
    }

    pub fn matches(&self, shipment: &Shipment) -> bool {
        matches_text(shipment, &self.text) && self.matches_status(shipment)
    }

    fn matches_status(&self, shipment: &Shipment) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&shipment.filter_status())
    }
}

/// Case-insensitive substring match over tracking number, route, carrier and parties.
/// A blank needle matches everything; any other needle is matched as typed,
/// surrounding whitespace included.
pub fn matches_text(shipment: &Shipment, needle: &str) -> bool {
    if needle.trim().is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    shipment
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Returns the shipments matching `query`, preserving load order.
pub fn filter_shipments(shipments: &[Shipment], query: &ShipmentQuery) -> Vec<Shipment> {
    if query.is_unrestricted() {
        return shipments.to_vec();
    }
    shipments
        .iter()
        .filter(|shipment| query.matches(shipment))
        .cloned()
        .collect()
}

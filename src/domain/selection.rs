use std::collections::HashSet;

use super::entities::{Shipment, ShipmentId};

/// Multi-select state for the shipment list.
///
/// Mark-all is derived from the selection size, never stored: it holds exactly
/// when every loaded shipment is selected. Identifiers that are not part of the
/// loaded collection are never admitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<ShipmentId>,
}

impl Selection {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether the selection covers all `total` loaded shipments.
    pub fn is_all(&self, total: usize) -> bool {
        self.ids.len() == total
    }

    /// Flips membership of `id`. Returns `false` when the id is unknown.
    pub fn toggle(&mut self, id: &str, shipments: &[Shipment]) -> bool {
        if !self.ids.remove(id) {
            if !shipments.iter().any(|s| s.id == id) {
                return false;
            }
            self.ids.insert(id.to_string());
        }
        true
    }

    /// Clears the selection if everything is marked, otherwise selects every
    /// loaded shipment.
    pub fn toggle_mark_all(&mut self, shipments: &[Shipment]) {
        if self.is_all(shipments.len()) {
            self.ids.clear();
        } else {
            self.ids = shipments.iter().map(|s| s.id.clone()).collect();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops identifiers that are no longer loaded. Returns how many were removed.
    pub fn prune(&mut self, shipments: &[Shipment]) -> usize {
        let before = self.ids.len();
        let live: HashSet<&str> = shipments.iter().map(|s| s.id.as_str()).collect();
        self.ids.retain(|id| live.contains(id.as_str()));
        before - self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::mock_api::fixture_shipments;

    #[test]
    fn mark_all_selects_everything_then_nothing() {
        let shipments = fixture_shipments().unwrap();
        let mut selection = Selection::default();

        selection.toggle_mark_all(&shipments);
        assert!(selection.is_all(shipments.len()));
        assert_eq!(selection.len(), shipments.len());
        assert!(shipments.iter().all(|s| selection.contains(&s.id)));

        selection.toggle_mark_all(&shipments);
        assert!(!selection.is_all(shipments.len()));
        assert!(selection.is_empty());
    }

    #[test]
    fn select_then_deselect_is_a_no_op() {
        let shipments = fixture_shipments().unwrap();
        let mut selection = Selection::default();
        selection.toggle("3", &shipments);
        let before = selection.clone();

        assert!(selection.toggle("7", &shipments));
        assert!(selection.toggle("7", &shipments));
        assert_eq!(selection, before);
    }

    #[test]
    fn selecting_the_last_missing_shipment_sets_mark_all() {
        let shipments = fixture_shipments().unwrap();
        let mut selection = Selection::default();
        for shipment in &shipments[..shipments.len() - 1] {
            selection.toggle(&shipment.id, &shipments);
            assert!(!selection.is_all(shipments.len()));
        }
        selection.toggle(&shipments[shipments.len() - 1].id, &shipments);
        assert!(selection.is_all(shipments.len()));

        selection.toggle("1", &shipments);
        assert!(!selection.is_all(shipments.len()));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let shipments = fixture_shipments().unwrap();
        let mut selection = Selection::default();
        assert!(!selection.toggle("404", &shipments));
        assert!(selection.is_empty());
    }

    #[test]
    fn prune_drops_ids_missing_after_reload() {
        let shipments = fixture_shipments().unwrap();
        let mut selection = Selection::default();
        selection.toggle("1", &shipments);
        selection.toggle("9", &shipments);

        let reloaded: Vec<Shipment> = shipments.iter().take(5).cloned().collect();
        assert_eq!(selection.prune(&reloaded), 1);
        assert!(selection.contains("1"));
        assert!(!selection.contains("9"));
        assert!(!selection.is_all(reloaded.len()));
    }

    #[test]
    fn clear_resets_mark_all() {
        let shipments = fixture_shipments().unwrap();
        let mut selection = Selection::default();
        selection.toggle_mark_all(&shipments);
        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.is_all(shipments.len()));
    }

    #[test]
    fn empty_collection_is_always_fully_marked() {
        let mut selection = Selection::default();
        assert!(selection.is_all(0));
        selection.toggle_mark_all(&[]);
        assert!(selection.is_empty());
        assert!(selection.is_all(0));
    }
}

//! Load → filter → select state machine behind the shipments tab.
//!
//! Every mutation goes through [`ShipmentsState::dispatch`]; the filtered view
//! is recomputed synchronously whenever the collection or the query changes.

#![allow(dead_code)]

use tracing::debug;

use super::entities::{FilterStatus, Shipment};
use super::filter::{filter_shipments, ShipmentQuery};
use super::selection::Selection;

/// Message shown to the user whenever a load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load shipments";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Identifies one load invocation. Only the latest ticket may complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Whether a load completion was applied or discarded as stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShipmentsAction {
    SetSearchQuery(String),
    ToggleStatusFilter(FilterStatus),
    ClearStatusFilters,
    ToggleSelection(String),
    ToggleMarkAll,
    ClearSelection,
}

#[derive(Clone, Debug, Default)]
pub struct ShipmentsState {
    shipments: Vec<Shipment>,
    filtered: Vec<Shipment>,
    query: ShipmentQuery,
    selection: Selection,
    phase: LoadPhase,
    error: Option<String>,
    generation: u64,
}

impl ShipmentsState {
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    pub fn filtered(&self) -> &[Shipment] {
        &self.filtered
    }

    pub fn query(&self) -> &ShipmentQuery {
        &self.query
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// True exactly when every loaded shipment is selected.
    pub fn mark_all(&self) -> bool {
        self.selection.is_all(self.shipments.len())
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dispatch(&mut self, action: ShipmentsAction) {
        debug!(?action, "shipments action");
        match action {
            ShipmentsAction::SetSearchQuery(text) => {
                self.query.text = text;
                self.refilter();
            }
            ShipmentsAction::ToggleStatusFilter(status) => {
                self.query.toggle_status(status);
                self.refilter();
            }
            ShipmentsAction::ClearStatusFilters => {
                self.query.clear_statuses();
                self.refilter();
            }
            ShipmentsAction::ToggleSelection(id) => {
                if !self.selection.toggle(&id, &self.shipments) {
                    debug!(%id, "ignoring selection of unknown shipment");
                }
            }
            ShipmentsAction::ToggleMarkAll => self.selection.toggle_mark_all(&self.shipments),
            ShipmentsAction::ClearSelection => self.selection.clear(),
        }
    }

    /// Starts a load. Any load still in flight becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.error = None;
        LoadTicket(self.generation)
    }

    /// Applies the result of the load identified by `ticket`.
    ///
    /// On failure the previous collection and filtered view stay as they were.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Shipment>, String>,
    ) -> LoadOutcome {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale shipments load"
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(shipments) => {
                self.shipments = shipments;
                self.phase = LoadPhase::Loaded;
                self.error = None;
                let pruned = self.selection.prune(&self.shipments);
                if pruned > 0 {
                    debug!(pruned, "dropped selections missing from reload");
                }
                self.refilter();
            }
            Err(message) => {
                self.phase = LoadPhase::Failed;
                self.error = Some(message);
            }
        }
        LoadOutcome::Applied
    }

    fn refilter(&mut self) {
        self.filtered = filter_shipments(&self.shipments, &self.query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::mock_api::fixture_shipments;

    fn loaded() -> ShipmentsState {
        let mut state = ShipmentsState::default();
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(fixture_shipments().unwrap()));
        state
    }

    #[test]
    fn load_lifecycle_moves_through_phases() {
        let mut state = ShipmentsState::default();
        assert_eq!(state.phase(), LoadPhase::Idle);

        let ticket = state.begin_load();
        assert!(state.is_loading());

        let outcome = state.finish_load(ticket, Ok(fixture_shipments().unwrap()));
        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(state.phase(), LoadPhase::Loaded);
        assert_eq!(state.shipments().len(), 10);
        assert_eq!(state.filtered().len(), 10);
    }

    #[test]
    fn failed_load_keeps_previous_shipments() {
        let mut state = loaded();
        state.dispatch(ShipmentsAction::SetSearchQuery("cairo".into()));
        let shipments_before = state.shipments().to_vec();
        let filtered_before = state.filtered().to_vec();

        let ticket = state.begin_load();
        state.finish_load(ticket, Err(LOAD_FAILED_MESSAGE.to_string()));

        assert_eq!(state.phase(), LoadPhase::Failed);
        assert_eq!(state.error(), Some(LOAD_FAILED_MESSAGE));
        assert_eq!(state.shipments(), shipments_before.as_slice());
        assert_eq!(state.filtered(), filtered_before.as_slice());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = ShipmentsState::default();
        let first = state.begin_load();
        let second = state.begin_load();

        let all = fixture_shipments().unwrap();
        let latest: Vec<Shipment> = all.iter().take(3).cloned().collect();
        assert_eq!(state.finish_load(second, Ok(latest)), LoadOutcome::Applied);
        assert_eq!(state.finish_load(first, Ok(all)), LoadOutcome::Stale);
        assert_eq!(state.shipments().len(), 3);
        assert_eq!(state.phase(), LoadPhase::Loaded);
    }

    #[test]
    fn new_load_clears_previous_error() {
        let mut state = ShipmentsState::default();
        let ticket = state.begin_load();
        state.finish_load(ticket, Err(LOAD_FAILED_MESSAGE.to_string()));
        assert!(state.error().is_some());

        state.begin_load();
        assert!(state.error().is_none());
    }

    #[test]
    fn query_changes_recompute_the_filtered_view() {
        let mut state = loaded();
        state.dispatch(ShipmentsAction::SetSearchQuery("CAIRO".into()));
        assert_eq!(state.filtered().len(), 6);

        state.dispatch(ShipmentsAction::ToggleStatusFilter(FilterStatus::Delivered));
        let ids: Vec<&str> = state.filtered().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["8"]);

        state.dispatch(ShipmentsAction::ClearStatusFilters);
        state.dispatch(ShipmentsAction::SetSearchQuery(String::new()));
        assert_eq!(state.filtered(), state.shipments());
    }

    #[test]
    fn reload_recomputes_filter_and_prunes_selection() {
        let mut state = loaded();
        state.dispatch(ShipmentsAction::SetSearchQuery("ups".into()));
        state.dispatch(ShipmentsAction::ToggleSelection("10".into()));
        state.dispatch(ShipmentsAction::ToggleSelection("2".into()));

        let subset: Vec<Shipment> = fixture_shipments().unwrap().into_iter().take(4).collect();
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(subset));

        let ids: Vec<&str> = state.filtered().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
        assert!(state.is_selected("2"));
        assert!(!state.is_selected("10"));
        assert_eq!(state.selected_count(), 1);
    }

    #[test]
    fn mark_all_covers_loaded_shipments_not_just_filtered_ones() {
        let mut state = loaded();
        state.dispatch(ShipmentsAction::SetSearchQuery("cairo".into()));
        state.dispatch(ShipmentsAction::ToggleMarkAll);
        assert_eq!(state.selected_count(), 10);
        assert!(state.mark_all());

        state.dispatch(ShipmentsAction::ClearSelection);
        assert_eq!(state.selected_count(), 0);
        assert!(!state.mark_all());
    }

    #[test]
    fn mark_all_tracks_selection_size_for_an_empty_collection() {
        let mut state = ShipmentsState::default();
        assert_eq!(state.selected_count(), state.shipments().len());
        assert!(state.mark_all());

        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(Vec::new()));
        assert!(state.mark_all());

        state.dispatch(ShipmentsAction::ToggleMarkAll);
        assert_eq!(state.selected_count(), 0);
        assert!(state.mark_all());
    }
}

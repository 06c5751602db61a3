//! Shared style helpers.

use crate::domain::FilterStatus;

pub fn status_color(status: FilterStatus) -> &'static str {
    match status {
        FilterStatus::Received => "#2196F3",
        FilterStatus::Putaway => "#FF9800",
        FilterStatus::Delivered => "#4CAF50",
        FilterStatus::Canceled => "#9E9E9E",
        FilterStatus::Rejected => "#F44336",
        FilterStatus::Lost => "#FF5722",
        FilterStatus::OnHold => "#FFC107",
    }
}

pub fn tab_class(active: bool) -> &'static str {
    if active {
        "tab active"
    } else {
        "tab"
    }
}

pub fn chip_class(active: bool) -> &'static str {
    if active {
        "chip active"
    } else {
        "chip"
    }
}

pub fn row_class(selected: bool) -> &'static str {
    if selected {
        "shipment-row selected"
    } else {
        "shipment-row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_its_badge_color() {
        let colors: Vec<&str> = FilterStatus::ALL.iter().map(|s| status_color(*s)).collect();
        assert_eq!(
            colors,
            vec!["#2196F3", "#FF9800", "#4CAF50", "#9E9E9E", "#F44336", "#FF5722", "#FFC107"]
        );
    }
}

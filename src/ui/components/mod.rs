pub mod filter_sheet;
pub mod shipment_list;
pub mod status_badge;
pub mod toast;

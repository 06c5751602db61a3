//! Domain logic for shipment tracking lives here.

pub mod app_state;
pub mod auth;
pub mod entities;
pub mod filter;
pub mod selection;
pub mod shipments;

#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use auth::{AuthState, LoginError, LoginForm};
#[allow(unused_imports)]
pub use entities::{
    Dimensions, FilterStatus, LineItem, Party, Shipment, ShipmentId, ShipmentStatus, User,
};
#[allow(unused_imports)]
pub use filter::{filter_shipments, ShipmentQuery};
#[allow(unused_imports)]
pub use selection::Selection;
#[allow(unused_imports)]
pub use shipments::{
    LoadOutcome, LoadPhase, LoadTicket, ShipmentsAction, ShipmentsState, LOAD_FAILED_MESSAGE,
};

pub mod login;
pub mod placeholders;
pub mod profile;
pub mod scan;
pub mod shipment_detail;
pub mod shipments;
pub mod splash;

pub use login::LoginPage;
pub use placeholders::WalletPage;
pub use profile::ProfilePage;
pub use scan::ScanPage;
pub use shipment_detail::ShipmentDetailPage;
pub use shipments::ShipmentsPage;
pub use splash::SplashPage;

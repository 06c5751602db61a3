use super::auth::AuthState;
use super::shipments::ShipmentsState;

/// Root state container, created once by the app shell and handed to pages
/// through context.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub shipments: ShipmentsState,
}

impl AppState {
    /// Logs the user out and drops everything tied to the session.
    pub fn end_session(&mut self) {
        self.auth.logout();
        self.shipments = ShipmentsState::default();
    }
}

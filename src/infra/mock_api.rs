//! In-process stand-in for the shipments backend.
//!
//! - Serves the embedded shipment fixture with simulated latency.
//! - Mirrors the backend's own search, filters and pagination.
//! - Failures can be injected to exercise the error paths of the UI.

#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{filter::matches_text, Shipment, ShipmentStatus, User};
use crate::util::{assets, config::AppConfig};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("shipments service unavailable: {0}")]
    Unavailable(String),
    #[error("embedded shipment data is missing")]
    MissingFixture,
    #[error("embedded shipment data is invalid: {0}")]
    Fixture(#[from] serde_json::Error),
}

/// Parses the embedded shipment fixture.
pub fn fixture_shipments() -> Result<Vec<Shipment>, ApiError> {
    let raw = assets::shipments_fixture().ok_or(ApiError::MissingFixture)?;
    Ok(serde_json::from_slice(raw.as_ref())?)
}

/// Optional server-side filters accepted by [`ShipmentsApi::get_shipments`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchFilters {
    pub status: Option<ShipmentStatus>,
    pub carrier: Option<String>,
    pub date_from: Option<Date>,
    pub date_to: Option<Date>,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

impl SearchFilters {
    fn matches(&self, shipment: &Shipment) -> bool {
        if let Some(status) = self.status {
            if shipment.status != status {
                return false;
            }
        }
        if !contains_ignore_case(&shipment.carrier, self.carrier.as_deref()) {
            return false;
        }
        if !contains_ignore_case(&shipment.origin, self.origin.as_deref()) {
            return false;
        }
        if !contains_ignore_case(&shipment.destination, self.destination.as_deref()) {
            return false;
        }
        let created = shipment.created_at.date();
        if let Some(from) = self.date_from {
            if created < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if created > to {
                return false;
            }
        }
        true
    }
}

/// Empty or missing needles never exclude anything.
fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) if !needle.is_empty() => haystack
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        _ => true,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentsPage {
    pub shipments: Vec<Shipment>,
    /// Number of matches before pagination.
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

#[derive(Clone)]
pub struct ShipmentsApi {
    shipments: Arc<Vec<Shipment>>,
    latency: Duration,
    lookup_latency: Duration,
    failure: Arc<Mutex<Option<String>>>,
}

impl ShipmentsApi {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        Ok(Self::with_shipments(fixture_shipments()?)
            .with_latency(config.api_latency(), config.lookup_latency()))
    }

    pub fn with_shipments(shipments: Vec<Shipment>) -> Self {
        Self {
            shipments: Arc::new(shipments),
            latency: Duration::ZERO,
            lookup_latency: Duration::ZERO,
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// A source whose every call fails, for when the fixture cannot be read.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        let mut api = Self::with_shipments(Vec::new());
        api.failure = Arc::new(Mutex::new(Some(reason.into())));
        api
    }

    pub fn with_latency(mut self, list: Duration, lookup: Duration) -> Self {
        self.latency = list;
        self.lookup_latency = lookup;
        self
    }

    /// Makes every subsequent call fail with `reason` until cleared with `None`.
    pub async fn set_failure(&self, reason: Option<String>) {
        *self.failure.lock().await = reason;
    }

    pub async fn get_shipments(
        &self,
        page: usize,
        limit: usize,
        search: Option<&str>,
        filters: Option<&SearchFilters>,
    ) -> Result<ShipmentsPage, ApiError> {
        tokio::time::sleep(self.latency).await;
        self.check_available().await?;

        let matching: Vec<&Shipment> = self
            .shipments
            .iter()
            .filter(|shipment| search.map_or(true, |needle| matches_text(shipment, needle)))
            .filter(|shipment| filters.map_or(true, |filters| filters.matches(shipment)))
            .collect();

        let page = page.max(1);
        let start = (page - 1).saturating_mul(limit);
        let shipments: Vec<Shipment> = matching
            .iter()
            .skip(start)
            .take(limit)
            .map(|shipment| (*shipment).clone())
            .collect();

        info!(
            returned = shipments.len(),
            total = matching.len(),
            page,
            limit,
            "served shipments page"
        );

        Ok(ShipmentsPage {
            shipments,
            total: matching.len(),
            page,
            limit,
        })
    }

    pub async fn get_shipment_by_id(&self, id: &str) -> Result<Option<Shipment>, ApiError> {
        tokio::time::sleep(self.lookup_latency).await;
        self.check_available().await?;
        Ok(self.shipments.iter().find(|s| s.id == id).cloned())
    }

    /// Case-insensitive exact match on the tracking number.
    pub async fn get_shipment_by_tracking(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Shipment>, ApiError> {
        tokio::time::sleep(self.lookup_latency).await;
        self.check_available().await?;
        let needle = tracking_number.trim();
        let found = self
            .shipments
            .iter()
            .find(|s| s.tracking_number.eq_ignore_ascii_case(needle))
            .cloned();
        debug!(tracking_number = needle, found = found.is_some(), "tracking lookup");
        Ok(found)
    }

    async fn check_available(&self) -> Result<(), ApiError> {
        match self.failure.lock().await.as_ref() {
            Some(reason) => {
                warn!(%reason, "injected shipments failure");
                Err(ApiError::Unavailable(reason.clone()))
            }
            None => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

const DEMO_CREDENTIALS: [(&str, &str); 3] = [
    ("test@example.com", "password123"),
    ("admin@furforce.com", "admin123"),
    ("user@furforce.com", "user123"),
];

/// Credential check against the fixed demo accounts.
#[derive(Clone, Debug)]
pub struct AuthApi {
    latency: Duration,
}

impl AuthApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            latency: config.auth_latency(),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> LoginResponse {
        tokio::time::sleep(self.latency).await;

        let known = DEMO_CREDENTIALS
            .iter()
            .any(|(known_email, known_password)| *known_email == email && *known_password == password);

        if known {
            let role = if email.contains("admin") { "admin" } else { "user" };
            info!(%email, role, "login accepted");
            LoginResponse {
                success: true,
                message: "Login successful!".to_string(),
                user: Some(User::from_email("1", email, role)),
            }
        } else {
            info!(%email, "login rejected");
            LoginResponse {
                success: false,
                message: "Invalid email or password".to_string(),
                user: None,
            }
        }
    }

    pub async fn logout(&self) -> LogoutResponse {
        tokio::time::sleep(self.latency / 2).await;
        LogoutResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn api() -> ShipmentsApi {
        ShipmentsApi::with_shipments(fixture_shipments().unwrap())
    }

    fn ids(page: &ShipmentsPage) -> Vec<&str> {
        page.shipments.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn fixture_has_ten_shipments() {
        let shipments = fixture_shipments().unwrap();
        assert_eq!(shipments.len(), 10);
        assert_eq!(shipments[0].tracking_number, "FF123456789");
        assert_eq!(shipments[9].tracking_number, "41785691428");
        assert!(shipments[1].actual_delivery.is_some());
        assert!(shipments[0].actual_delivery.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn default_page_returns_everything() {
        let page = api().get_shipments(1, 10, None, None).await.unwrap();
        assert_eq!(page.total, 10);
        assert_eq!(page.shipments.len(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn pagination_reports_full_total() {
        let api = api();
        let second = api.get_shipments(2, 4, None, None).await.unwrap();
        assert_eq!(ids(&second), vec!["5", "6", "7", "8"]);
        assert_eq!(second.total, 10);

        let beyond = api.get_shipments(9, 4, None, None).await.unwrap();
        assert!(beyond.shipments.is_empty());
        assert_eq!(beyond.total, 10);

        let zeroth = api.get_shipments(0, 2, None, None).await.unwrap();
        assert_eq!(zeroth.page, 1);
        assert_eq!(ids(&zeroth), vec!["1", "2"]);
    }

    #[tokio::test(start_paused = true)]
    async fn search_text_is_not_trimmed() {
        let api = api();
        let padded = api.get_shipments(1, 10, Some("cairo "), None).await.unwrap();
        assert_eq!(padded.total, 0);
        let exact = api.get_shipments(1, 10, Some("cairo"), None).await.unwrap();
        assert_eq!(exact.total, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn server_side_filters_combine() {
        let api = api();
        let filters = SearchFilters {
            carrier: Some("ups".into()),
            origin: Some("cairo".into()),
            ..SearchFilters::default()
        };
        let page = api.get_shipments(1, 10, None, Some(&filters)).await.unwrap();
        assert_eq!(ids(&page), vec!["6", "10"]);

        let filters = SearchFilters {
            status: Some(ShipmentStatus::Pending),
            ..SearchFilters::default()
        };
        let page = api
            .get_shipments(1, 10, Some("dhl"), Some(&filters))
            .await
            .unwrap();
        assert_eq!(ids(&page), vec!["3", "5"]);
    }

    #[tokio::test(start_paused = true)]
    async fn date_range_is_inclusive() {
        let filters = SearchFilters {
            date_from: Some(Date::from_calendar_date(2024, Month::December, 2).unwrap()),
            date_to: Some(Date::from_calendar_date(2024, Month::December, 3).unwrap()),
            ..SearchFilters::default()
        };
        let page = api().get_shipments(1, 10, None, Some(&filters)).await.unwrap();
        assert_eq!(ids(&page), vec!["3", "4", "7", "10"]);
    }

    #[tokio::test(start_paused = true)]
    async fn lookups_by_id_and_tracking() {
        let api = api();
        let by_id = api.get_shipment_by_id("7").await.unwrap().unwrap();
        assert_eq!(by_id.tracking_number, "41785691425");
        assert!(api.get_shipment_by_id("77").await.unwrap().is_none());

        let by_tracking = api.get_shipment_by_tracking("ff555666777").await.unwrap();
        assert_eq!(by_tracking.map(|s| s.id), Some("3".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn injected_failure_applies_until_cleared() {
        let api = api();
        api.set_failure(Some("offline".into())).await;
        assert!(matches!(
            api.get_shipments(1, 10, None, None).await,
            Err(ApiError::Unavailable(reason)) if reason == "offline"
        ));
        assert!(api.get_shipment_by_id("1").await.is_err());

        api.set_failure(None).await;
        assert!(api.get_shipments(1, 10, None, None).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn login_checks_demo_credentials() {
        let auth = AuthApi::new(&AppConfig::default());

        let admin = auth.login("admin@furforce.com", "admin123").await;
        assert!(admin.success);
        let user = admin.user.unwrap();
        assert_eq!(user.role, "admin");
        assert_eq!(user.name, "admin");

        let regular = auth.login("test@example.com", "password123").await;
        assert_eq!(regular.user.map(|u| u.role), Some("user".to_string()));

        let rejected = auth.login("test@example.com", "nope").await;
        assert!(!rejected.success);
        assert_eq!(rejected.message, "Invalid email or password");

        assert!(auth.logout().await.success);
    }
}

//! Session state for the login flow.

use thiserror::Error;
use url::Url;
use uuid::Uuid;

use super::entities::User;
use crate::infra::mock_api::LoginResponse;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Authenticates without consulting the auth service.
    pub fn direct_login(&mut self, email: &str) {
        self.user = Some(User::from_email(Uuid::new_v4().to_string(), email, "user"));
        self.is_authenticated = true;
        self.error = None;
    }

    /// Applies a response from the auth service.
    pub fn apply_login(&mut self, response: LoginResponse) -> Result<(), LoginError> {
        match response.user {
            Some(user) if response.success => {
                self.user = Some(user);
                self.is_authenticated = true;
                self.error = None;
                Ok(())
            }
            _ => {
                self.error = Some(response.message.clone());
                Err(LoginError::Rejected(response.message))
            }
        }
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.error = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("invalid company URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("company URL must use http or https, not {0}")]
    UnsupportedScheme(String),
    #[error("{0}")]
    Rejected(String),
}

/// Raw input of the login form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub url: String,
    pub email: String,
    pub password: String,
}

/// A login form that passed local validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidLogin {
    pub url: Url,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_complete(&self) -> bool {
        [&self.url, &self.email, &self.password]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn validate(&self) -> Result<ValidLogin, LoginError> {
        if !self.is_complete() {
            return Err(LoginError::MissingFields);
        }
        let url = Url::parse(self.url.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LoginError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(ValidLogin {
            url,
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(url: &str, email: &str, password: &str) -> LoginForm {
        LoginForm {
            url: url.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn blank_fields_are_rejected() {
        let err = form("https://www.brandimic.com", "  ", "pw").validate().unwrap_err();
        assert!(matches!(err, LoginError::MissingFields));
        assert_eq!(err.to_string(), "Please fill in all fields");
    }

    #[test]
    fn url_must_be_http() {
        assert!(matches!(
            form("not a url", "a@b.c", "pw").validate(),
            Err(LoginError::InvalidUrl(_))
        ));
        assert!(matches!(
            form("ftp://brandimic.com", "a@b.c", "pw").validate(),
            Err(LoginError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
    }

    #[test]
    fn valid_form_trims_email() {
        let valid = form("https://www.brandimic.com", " ali@brandimic.com ", "password123")
            .validate()
            .unwrap();
        assert_eq!(valid.email, "ali@brandimic.com");
        assert_eq!(valid.url.host_str(), Some("www.brandimic.com"));
    }

    #[test]
    fn direct_login_and_logout() {
        let mut auth = AuthState::default();
        auth.direct_login("ali@brandimic.com");
        assert!(auth.is_authenticated);
        assert_eq!(auth.user.as_ref().map(|u| u.name.as_str()), Some("ali"));

        auth.logout();
        assert_eq!(auth, AuthState::default());
    }

    #[test]
    fn rejected_login_records_error() {
        let mut auth = AuthState::default();
        let response = LoginResponse {
            success: false,
            message: "Invalid email or password".into(),
            user: None,
        };
        assert!(auth.apply_login(response).is_err());
        assert!(!auth.is_authenticated);
        assert_eq!(auth.error.as_deref(), Some("Invalid email or password"));

        auth.clear_error();
        assert!(auth.error.is_none());
    }
}

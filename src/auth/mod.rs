//! Authentication for the iconik API.
//!
//! iconik authenticates every request with two static headers: `App-ID`
//! (an application UUID) and `Auth-Token` (a bearer token). The header set
//! is fixed for the life of a client; changing credentials requires a new
//! client.

use crate::errors::{IconikError, IconikErrorKind, IconikResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

/// Header carrying the application identifier.
pub const APP_ID_HEADER: &str = "App-ID";

/// Header carrying the bearer token.
pub const AUTH_TOKEN_HEADER: &str = "Auth-Token";

/// Credentials for the iconik API.
pub struct Credentials {
    app_id: String,
    auth_token: SecretString,
}

impl Credentials {
    /// Creates new credentials.
    pub fn new(app_id: impl Into<String>, auth_token: SecretString) -> Self {
        Self {
            app_id: app_id.into(),
            auth_token,
        }
    }

    /// Gets the application identifier.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Builds the default header set applied to every outgoing request.
    pub fn default_headers(&self, user_agent: &str) -> IconikResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            HeaderName::from_static("app-id"),
            header_value(&self.app_id, "App-ID")?,
        );

        let mut token = header_value(self.auth_token.expose_secret(), "Auth-Token")?;
        token.set_sensitive(true);
        headers.insert(HeaderName::from_static("auth-token"), token);

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, header_value(user_agent, "User-Agent")?);

        Ok(headers)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("auth_token", &"[REDACTED]")
            .finish()
    }
}

fn header_value(value: &str, name: &str) -> IconikResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| {
        IconikError::new(
            IconikErrorKind::InvalidConfiguration,
            format!("{} contains characters not valid in a header", name),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let creds = Credentials::new(
            "8b4e1c2a-0f3d-4a5b-9c6d-7e8f9a0b1c2d",
            SecretString::new("tok_secret".to_string()),
        );
        let headers = creds.default_headers("integrations-iconik/0.1.0").unwrap();

        assert_eq!(
            headers.get("app-id").unwrap(),
            "8b4e1c2a-0f3d-4a5b-9c6d-7e8f9a0b1c2d"
        );
        assert_eq!(headers.get("auth-token").unwrap(), "tok_secret");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert!(headers.get("auth-token").unwrap().is_sensitive());
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = Credentials::new("app", SecretString::new("tok_secret".to_string()));
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("tok_secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_invalid_header_value() {
        let creds = Credentials::new("bad\nid", SecretString::new("tok".to_string()));
        assert!(creds.default_headers("ua").is_err());
    }
}

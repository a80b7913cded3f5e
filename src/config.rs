use dotenv::dotenv;
use std::env;

use crate::error::ZoomError;

/// Default OAuth endpoint (authorize, token and revoke live under `/oauth`).
pub const DEFAULT_OAUTH_ENDPOINT: &str = "https://zoom.us";

/// Default REST API endpoint.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.zoom.us/v2";

/// Fixed credentials and endpoints for the Zoom client.
///
/// Loaded once at startup and immutable afterwards. The endpoints are
/// overridable so tests can point the client at a local mock server.
#[derive(Debug, Clone)]
pub struct ZoomConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub oauth_endpoint: String,
    pub api_endpoint: String,
}

impl ZoomConfig {
    /// Create a config from explicit credentials.
    ///
    /// Empty credentials are a fatal configuration error.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self, ZoomError> {
        let config = Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            oauth_endpoint: DEFAULT_OAUTH_ENDPOINT.to_string(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a config from environment variables.
    ///
    /// Required: `ZOOM_CLIENT_ID`, `ZOOM_CLIENT_SECRET`, `ZOOM_REDIRECT_URI`.
    /// Optional endpoint overrides: `ZOOM_OAUTH_ENDPOINT`, `ZOOM_API_ENDPOINT`.
    pub fn from_env() -> Result<Self, ZoomError> {
        dotenv().ok();

        let config = Self {
            client_id: env::var("ZOOM_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("ZOOM_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: env::var("ZOOM_REDIRECT_URI").unwrap_or_default(),
            oauth_endpoint: env::var("ZOOM_OAUTH_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_OAUTH_ENDPOINT.to_string()),
            api_endpoint: env::var("ZOOM_API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Override the OAuth endpoint, trimming any trailing slash.
    pub fn with_oauth_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.oauth_endpoint = trim_trailing_slash(endpoint.into());
        self
    }

    /// Override the REST API endpoint, trimming any trailing slash.
    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = trim_trailing_slash(endpoint.into());
        self
    }

    fn validate(&self) -> Result<(), ZoomError> {
        if self.client_id.is_empty() {
            return Err(ZoomError::Config("ZOOM_CLIENT_ID must be set".to_string()));
        }
        if self.client_secret.is_empty() {
            return Err(ZoomError::Config(
                "ZOOM_CLIENT_SECRET must be set".to_string(),
            ));
        }
        if self.redirect_uri.is_empty() {
            return Err(ZoomError::Config(
                "ZOOM_REDIRECT_URI must be set".to_string(),
            ));
        }
        Ok(())
    }
}

fn trim_trailing_slash(mut s: String) -> String {
    while s.ends_with('/') {
        s.pop();
    }
    s
}

use base64::engine::{general_purpose, Engine};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::ZoomConfig;
use crate::error::ZoomError;

/// Tokens returned by the token endpoint after code exchange or refresh.
///
/// The refresh token rotates on every refresh: the value returned here
/// supersedes the one that was sent, and the caller must persist the newest
/// value or subsequent refreshes will fail. Nothing is stored locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds (~1 hour).
    pub expires_in: u64,
    pub scope: Option<String>,
}

/// OAuth 2.0 Authorization Code client for Zoom.
///
/// Holds fixed credentials and the precomputed
/// `Basic base64(client_id:client_secret)` header used by the token and
/// revoke endpoints. Stateless beyond configuration, so a single instance
/// is safe to share across concurrent callers.
pub struct ZoomOAuth {
    client: Client,
    config: ZoomConfig,
    basic_auth: String,
}

impl ZoomOAuth {
    /// Create an OAuth client from the given configuration.
    pub fn new(config: ZoomConfig) -> Result<Self, ZoomError> {
        let encoded = general_purpose::STANDARD
            .encode(format!("{}:{}", config.client_id, config.client_secret));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            config,
            basic_auth: format!("Basic {}", encoded),
        })
    }

    /// Create an OAuth client from environment variables.
    pub fn from_env() -> Result<Self, ZoomError> {
        Self::new(ZoomConfig::from_env()?)
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Build the URL the end user's browser must be redirected to.
    ///
    /// After the user authorizes the app, Zoom redirects back to the
    /// configured redirect URI with the one-time code in the `code` query
    /// parameter. Passing a `state` value ties the callback to the request
    /// that initiated it; callers that skip it forgo CSRF protection on the
    /// callback.
    pub fn authorization_url(&self, state: Option<&str>) -> String {
        let mut params = vec![
            ("response_type", "code"),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];
        if let Some(state) = state {
            params.push(("state", state));
        }

        let url = Url::parse_with_params(
            &format!("{}/oauth/authorize", self.config.oauth_endpoint),
            &params,
        )
        .expect("oauth endpoint must be a valid base URL");

        url.to_string()
    }

    /// Exchange a one-time authorization code for a token set.
    ///
    /// Fails with `ZoomError::Auth` if the code is invalid, expired or
    /// already used; the raw provider body is preserved in the error.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenSet, ZoomError> {
        info!("Exchanging authorization code for tokens");
        self.token_request(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ])
        .await
    }

    /// Mint a fresh token set from a refresh token.
    ///
    /// The returned refresh token replaces the one passed in. Fails with
    /// `ZoomError::Auth` if the refresh token is invalid or revoked.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenSet, ZoomError> {
        debug!("Refreshing access token");
        self.token_request(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    /// Revoke an access token.
    ///
    /// Idempotent from the caller's perspective: a 4xx from the provider
    /// (token already revoked, token unknown) is not an error; the provider
    /// body is returned verbatim either way. Only transport failures error.
    pub async fn revoke_token(&self, access_token: &str) -> Result<serde_json::Value, ZoomError> {
        let url = format!("{}/oauth/revoke", self.config.oauth_endpoint);
        info!("Revoking access token");

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.basic_auth)
            .form(&[("token", access_token)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Revoke endpoint returned status {}", status);
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::Null))
    }

    async fn token_request(&self, form: &[(&str, &str)]) -> Result<TokenSet, ZoomError> {
        let url = format!("{}/oauth/token", self.config.oauth_endpoint);

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.basic_auth)
            .form(form)
            .send()
            .await?;

        let status = response.status();
        debug!("Token endpoint responded with status {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ZoomError::Auth { status, body });
        }

        let tokens = response.json::<TokenSet>().await?;
        Ok(tokens)
    }
}

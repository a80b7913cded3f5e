use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use crate::auth::ZoomOAuth;
use crate::config::ZoomConfig;
use crate::error::ZoomError;
use crate::models::meeting::{
    CreateMeetingRequest, MeetingInfo, MeetingListResponse, MeetingStatusAction,
    MeetingStatusRequest, UpdateMeetingRequest,
};
use crate::models::user::{EmailCheckResponse, UserInfo, UserListResponse, ZakResponse};

/// Client for the Zoom REST API (meetings and users).
///
/// Every operation follows the same pattern: exchange the caller-supplied
/// refresh token for a fresh bearer token, attach it as the Authorization
/// header, issue exactly one REST request, decode the result. No token is
/// cached or reused across calls; the newest refresh token returned by the
/// provider must be persisted by the caller.
pub struct ZoomApiClient {
    client: Client,
    oauth: ZoomOAuth,
    api_endpoint: String,
}

impl ZoomApiClient {
    /// Create an API client from the given configuration.
    pub fn new(config: ZoomConfig) -> Result<Self, ZoomError> {
        let api_endpoint = config.api_endpoint.clone();

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            oauth: ZoomOAuth::new(config)?,
            api_endpoint,
        })
    }

    /// Create an API client from environment variables.
    pub fn from_env() -> Result<Self, ZoomError> {
        Self::new(ZoomConfig::from_env()?)
    }

    /// The OAuth client backing this API client.
    pub fn oauth(&self) -> &ZoomOAuth {
        &self.oauth
    }

    /// Get the Zoom Access Key (ZAK) for the authorized user.
    pub async fn get_user_zak(&self, refresh_token: &str) -> Result<ZakResponse, ZoomError> {
        let url = format!("{}/users/me/zak", self.api_endpoint);
        let bearer = self.bearer_token(refresh_token).await?;

        info!("Requesting user ZAK token");
        let response = self
            .client
            .get(&url)
            .header("Authorization", bearer)
            .send()
            .await?;
        self.decode(response).await
    }

    /// Create a meeting for the authorized user.
    pub async fn create_meeting(
        &self,
        refresh_token: &str,
        request: &CreateMeetingRequest,
    ) -> Result<MeetingInfo, ZoomError> {
        let url = format!("{}/users/me/meetings", self.api_endpoint);
        let bearer = self.bearer_token(refresh_token).await?;

        info!("Creating meeting: {}", request.topic);
        let response = self
            .client
            .post(&url)
            .header("Authorization", bearer)
            .json(request)
            .send()
            .await?;
        self.decode(response).await
    }

    /// List the authorized user's meetings. Pagination is not handled; only
    /// the first page the provider returns is surfaced.
    pub async fn list_meetings(&self, refresh_token: &str) -> Result<MeetingListResponse, ZoomError> {
        let url = format!("{}/users/me/meetings", self.api_endpoint);
        let bearer = self.bearer_token(refresh_token).await?;

        info!("Listing meetings");
        let response = self
            .client
            .get(&url)
            .header("Authorization", bearer)
            .send()
            .await?;
        self.decode(response).await
    }

    /// Get the details of a meeting.
    pub async fn get_meeting(
        &self,
        refresh_token: &str,
        meeting_id: &str,
    ) -> Result<MeetingInfo, ZoomError> {
        let url = format!("{}/meetings/{}", self.api_endpoint, meeting_id);
        let bearer = self.bearer_token(refresh_token).await?;

        info!("Fetching meeting {}", meeting_id);
        let response = self
            .client
            .get(&url)
            .header("Authorization", bearer)
            .send()
            .await?;
        self.decode(response).await
    }

    /// Delete a meeting.
    pub async fn delete_meeting(
        &self,
        refresh_token: &str,
        meeting_id: &str,
    ) -> Result<(), ZoomError> {
        let url = format!("{}/meetings/{}", self.api_endpoint, meeting_id);
        let bearer = self.bearer_token(refresh_token).await?;

        info!("Deleting meeting {}", meeting_id);
        let response = self
            .client
            .delete(&url)
            .header("Authorization", bearer)
            .send()
            .await?;
        self.ensure_success(response).await
    }

    /// Replace a meeting's attributes. This is a full replace (PUT), not a
    /// patch: every field in the request body overwrites the stored value.
    pub async fn update_meeting(
        &self,
        refresh_token: &str,
        meeting_id: &str,
        request: &UpdateMeetingRequest,
    ) -> Result<(), ZoomError> {
        let url = format!("{}/meetings/{}", self.api_endpoint, meeting_id);
        let bearer = self.bearer_token(refresh_token).await?;

        info!("Updating meeting {}", meeting_id);
        let response = self
            .client
            .put(&url)
            .header("Authorization", bearer)
            .json(request)
            .send()
            .await?;
        self.ensure_success(response).await
    }

    /// Update only a meeting's status (end or recover). The request body
    /// carries the status field and nothing else.
    pub async fn update_meeting_status(
        &self,
        refresh_token: &str,
        meeting_id: &str,
        status: MeetingStatusAction,
    ) -> Result<(), ZoomError> {
        let url = format!("{}/meetings/{}", self.api_endpoint, meeting_id);
        let bearer = self.bearer_token(refresh_token).await?;

        info!("Updating status of meeting {} to {:?}", meeting_id, status);
        let response = self
            .client
            .put(&url)
            .header("Authorization", bearer)
            .json(&MeetingStatusRequest { status })
            .send()
            .await?;
        self.ensure_success(response).await
    }

    /// List the users in the account. Pagination is not handled.
    pub async fn list_users(&self, refresh_token: &str) -> Result<UserListResponse, ZoomError> {
        let url = format!("{}/users", self.api_endpoint);
        let bearer = self.bearer_token(refresh_token).await?;

        info!("Listing users");
        let response = self
            .client
            .get(&url)
            .header("Authorization", bearer)
            .send()
            .await?;
        self.decode(response).await
    }

    /// Get the details of a user by id or email.
    pub async fn get_user(&self, refresh_token: &str, user_id: &str) -> Result<UserInfo, ZoomError> {
        let url = format!("{}/users/{}", self.api_endpoint, user_id);
        let bearer = self.bearer_token(refresh_token).await?;

        info!("Fetching user {}", user_id);
        let response = self
            .client
            .get(&url)
            .header("Authorization", bearer)
            .send()
            .await?;
        self.decode(response).await
    }

    /// Check whether an email belongs to a registered user in this account.
    ///
    /// Account-scoped: `existed_email` is false for emails outside the
    /// account and for users who signed up through SSO, Google or Facebook,
    /// even when the email is a valid Zoom account elsewhere.
    pub async fn check_user_email(
        &self,
        refresh_token: &str,
        email: &str,
    ) -> Result<EmailCheckResponse, ZoomError> {
        let url = format!("{}/users/email", self.api_endpoint);
        let bearer = self.bearer_token(refresh_token).await?;

        info!("Checking email registration");
        let response = self
            .client
            .get(&url)
            .header("Authorization", bearer)
            .query(&[("email", email)])
            .send()
            .await?;
        self.decode(response).await
    }

    /// Mint a bearer header value from the caller's refresh token. One
    /// exchange per API call; the provider rotates the refresh token.
    async fn bearer_token(&self, refresh_token: &str) -> Result<String, ZoomError> {
        let tokens = self.oauth.refresh_access_token(refresh_token).await?;
        Ok(format!("Bearer {}", tokens.access_token))
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ZoomError> {
        let status = response.status();
        debug!("Response received with status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ZoomError::from_api_response(status, &body));
        }
        Ok(response.json::<T>().await?)
    }

    async fn ensure_success(&self, response: Response) -> Result<(), ZoomError> {
        let status = response.status();
        debug!("Response received with status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ZoomError::from_api_response(status, &body));
        }
        Ok(())
    }
}

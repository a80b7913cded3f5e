//! Zoom Meeting Client
//!
//! This library provides a Rust client for Zoom's OAuth 2.0 Authorization
//! Code flow and a subset of the Zoom REST API (meetings and users). It is
//! a thin, stateless layer: tokens are returned to the caller for external
//! storage and every API call independently mints a fresh bearer token from
//! a caller-supplied refresh token.
//!
//! # Modules
//!
//! - `auth`: ZoomOAuth for the authorization-code, refresh and revoke flows
//! - `client`: ZoomApiClient for meeting and user operations
//! - `config`: ZoomConfig credentials and endpoints
//! - `error`: ZoomError taxonomy
//! - `models`: request and response types for the REST surface
//!
//! # Authentication
//!
//! The OAuth endpoints authenticate with a `Basic base64(client_id:secret)`
//! header; the REST endpoints authenticate with a short-lived bearer token
//! minted from the refresh token on every call. The refresh token rotates on
//! each use, so callers must always persist the newest value.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;


// Re-export the main API types for ease of use
pub use auth::{TokenSet, ZoomOAuth};
pub use client::ZoomApiClient;
pub use config::ZoomConfig;
pub use error::ZoomError;
pub use models::meeting::{
    CreateMeetingRequest, MeetingInfo, MeetingListResponse, MeetingStatusAction, MeetingSummary,
    MeetingType, UpdateMeetingRequest,
};
pub use models::user::{EmailCheckResponse, UserInfo, UserListResponse, ZakResponse};

use serde::{Deserialize, Serialize};

/// A user as returned by get/list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(rename = "type", default)]
    pub user_type: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Response for `users`. Pagination fields are surfaced but the client does
/// not walk pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    #[serde(default)]
    pub page_size: Option<i32>,
    #[serde(default)]
    pub page_number: Option<i32>,
    #[serde(default)]
    pub total_records: Option<i32>,
    pub users: Vec<UserInfo>,
}

/// Response for `users/email`.
///
/// The check is account-scoped: `existed_email` is false for any email
/// outside the caller's account, and for accounts registered through SSO,
/// Google or Facebook sign-in, even when that email is a valid Zoom account
/// elsewhere. Provider limitation, not a defect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailCheckResponse {
    pub existed_email: bool,
}

/// Response for `users/me/zak` (Zoom Access Key, used by SDK operations).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZakResponse {
    pub token: String,
}

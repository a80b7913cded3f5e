use serde::{Deserialize, Serialize};

/// Zoom meeting type, serialized as the wire integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum MeetingType {
    Instant,
    Scheduled,
    RecurringNoFixedTime,
    RecurringFixedTime,
}

impl Default for MeetingType {
    fn default() -> Self {
        MeetingType::Scheduled
    }
}

impl From<MeetingType> for i32 {
    fn from(value: MeetingType) -> Self {
        match value {
            MeetingType::Instant => 1,
            MeetingType::Scheduled => 2,
            MeetingType::RecurringNoFixedTime => 3,
            MeetingType::RecurringFixedTime => 8,
        }
    }
}

impl TryFrom<i32> for MeetingType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MeetingType::Instant),
            2 => Ok(MeetingType::Scheduled),
            3 => Ok(MeetingType::RecurringNoFixedTime),
            8 => Ok(MeetingType::RecurringFixedTime),
            other => Err(format!("unknown meeting type: {}", other)),
        }
    }
}

/// Status transition for an existing meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatusAction {
    End,
    Recover,
}

/// Request body for creating a meeting under `users/me/meetings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMeetingRequest {
    pub topic: String,
    #[serde(rename = "type", default)]
    pub meeting_type: MeetingType,
    /// Start time in ISO 8601, e.g. `2024-01-01T09:00:00Z`.
    pub start_time: String,
    /// Duration in minutes.
    pub duration: i32,
    pub timezone: String,
    pub agenda: String,
    /// Settings bag forwarded to the provider as-is.
    pub settings: serde_json::Value,
}

/// Request body for a full-replace meeting update (PUT, not PATCH).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMeetingRequest {
    pub topic: String,
    #[serde(rename = "type", default)]
    pub meeting_type: MeetingType,
    pub start_time: String,
    pub duration: i32,
    pub timezone: String,
    pub agenda: String,
    /// Recurrence rule, forwarded to the provider as-is.
    pub recurrence: serde_json::Value,
    pub settings: serde_json::Value,
}

/// Body for `update_meeting_status`. Carries only the status field so the
/// request cannot accidentally replace other meeting attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingStatusRequest {
    pub status: MeetingStatusAction,
}

/// A meeting as returned by create/get.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingInfo {
    pub id: i64,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub host_id: Option<String>,
    pub topic: String,
    #[serde(rename = "type")]
    pub meeting_type: MeetingType,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub agenda: Option<String>,
    #[serde(default)]
    pub join_url: Option<String>,
    #[serde(default)]
    pub start_url: Option<String>,
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
}

/// One entry in a meeting listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingSummary {
    pub id: i64,
    pub topic: String,
    #[serde(rename = "type")]
    pub meeting_type: MeetingType,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub join_url: Option<String>,
}

/// Response for `users/me/meetings`. Pagination fields are surfaced but the
/// client does not walk pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingListResponse {
    #[serde(default)]
    pub page_size: Option<i32>,
    #[serde(default)]
    pub page_number: Option<i32>,
    #[serde(default)]
    pub total_records: Option<i32>,
    pub meetings: Vec<MeetingSummary>,
}

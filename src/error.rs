use reqwest::StatusCode;

/// Unified error type for the Zoom client.
#[derive(Debug, thiserror::Error)]
pub enum ZoomError {
    /// Missing or empty credentials at construction time.
    #[error("configuration error: {0}")]
    Config(String),

    /// The OAuth token endpoint rejected the request (invalid, expired or
    /// already-used code, revoked refresh token). The raw provider body is
    /// preserved so callers can inspect Zoom's `reason` field.
    #[error("token request rejected with status {status}: {body}")]
    Auth { status: StatusCode, body: String },

    /// A REST endpoint returned a non-2xx response. Zoom's error body
    /// (`{"code": ..., "message": ...}`) is decoded when present.
    #[error("api request failed with status {status} (code {code}): {message}")]
    Api {
        status: StatusCode,
        code: i64,
        message: String,
    },

    /// Transport-level failure: connection refused, DNS, timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ZoomError {
    /// Build an `Api` error from a non-2xx REST response body.
    ///
    /// Zoom error bodies look like `{"code": 3001, "message": "Meeting not
    /// found"}`; anything else is carried through with code 0.
    pub(crate) fn from_api_response(status: StatusCode, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ApiErrorBody {
            #[serde(default)]
            code: i64,
            #[serde(default)]
            message: String,
        }

        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => ZoomError::Api {
                status,
                code: parsed.code,
                message: if parsed.message.is_empty() {
                    body.to_string()
                } else {
                    parsed.message
                },
            },
            Err(_) => ZoomError::Api {
                status,
                code: 0,
                message: body.to_string(),
            },
        }
    }
}

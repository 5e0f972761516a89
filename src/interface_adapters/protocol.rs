use serde::Deserialize;

// Failure envelope the automation service returns alongside non-2xx statuses:
// `{ "success": false, "error": "<message>" }`.
#[derive(Debug, Deserialize)]
pub struct ServiceErrorResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

// Endpoint paths, relative to the configured service base URL.
pub const SEND_CONNECTION_REQUEST_PATH: &str = "send-connection-request";
pub const SEND_MESSAGE_PATH: &str = "send-message";
pub const CHECK_CONNECTION_STATUS_PATH: &str = "check-connection-status";

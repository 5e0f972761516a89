use serde::Serialize;

// The serialization within this layer is a dependency leak, but the payload keys
// are the wire contract of the automation service, so they live with the types.

// Payload sent to trigger a connection request on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequest {
    // Profile page the invite is sent from; passed through unvalidated.
    pub profile_url: String,
    // Note attached to the invite. Empty means no note, but the key is still sent.
    pub message_template: String,
}

impl ConnectionRequest {
    pub fn new(profile_url: impl Into<String>, message_template: impl Into<String>) -> Self {
        Self {
            profile_url: profile_url.into(),
            message_template: message_template.into(),
        }
    }
}

// Payload sent to message an existing connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub profile_url: String,
    pub message: String,
}

impl SendMessageRequest {
    pub fn new(profile_url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            profile_url: profile_url.into(),
            message: message.into(),
        }
    }
}

// Query for the connection state of a profile; sent as a query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatusQuery {
    pub profile_url: String,
}

impl ConnectionStatusQuery {
    pub fn new(profile_url: impl Into<String>) -> Self {
        Self {
            profile_url: profile_url.into(),
        }
    }
}

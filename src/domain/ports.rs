use async_trait::async_trait;
use serde_json::Value;

use crate::domain::automation::{ConnectionRequest, ConnectionStatusQuery, SendMessageRequest};
use crate::domain::errors::RequestError;

// Port for the automation service. The use case depends on this trait,
// not on the reqwest client.
#[async_trait]
pub trait AutomationService: Send + Sync {
    async fn send_connection_request(&self, req: ConnectionRequest)
    -> Result<Value, RequestError>;

    async fn send_message(&self, req: SendMessageRequest) -> Result<Value, RequestError>;

    async fn check_connection_status(
        &self,
        query: ConnectionStatusQuery,
    ) -> Result<Value, RequestError>;
}

// Port for the human-readable outcome line written after each call.
pub trait Reporter: Send + Sync {
    fn success(&self, response: &Value);
    fn failure(&self, error: &RequestError);
}

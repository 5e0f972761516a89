use crate::domain::{
    AutomationService, ConnectionRequest, ConnectionStatusQuery, Reporter, RequestError,
    SendMessageRequest,
};
use serde_json::Value;

// Requester use case with injected dependencies.
// Every call is one request, reported once, and never retried.
pub struct ConnectionRequester<S, R> {
    pub service: S,
    pub reporter: R,
}

impl<S, R> ConnectionRequester<S, R>
where
    S: AutomationService,
    R: Reporter,
{
    pub fn new(service: S, reporter: R) -> Self {
        Self { service, reporter }
    }

    // Returns the parsed response, or None when the call failed for any reason.
    pub async fn send_connection_request(&self, profile_url: &str, message: &str) -> Option<Value> {
        let result = self.try_send_connection_request(profile_url, message).await;
        self.report(result)
    }

    // Same exchange as `send_connection_request`, but the failure cause reaches the caller.
    pub async fn try_send_connection_request(
        &self,
        profile_url: &str,
        message: &str,
    ) -> Result<Value, RequestError> {
        tracing::info!(profile_url, "sending connection request");
        self.service
            .send_connection_request(ConnectionRequest::new(profile_url, message))
            .await
    }

    pub async fn send_message(&self, profile_url: &str, message: &str) -> Option<Value> {
        tracing::info!(profile_url, "sending message");
        let result = self
            .service
            .send_message(SendMessageRequest::new(profile_url, message))
            .await;
        self.report(result)
    }

    pub async fn check_connection_status(&self, profile_url: &str) -> Option<Value> {
        tracing::info!(profile_url, "checking connection status");
        let result = self
            .service
            .check_connection_status(ConnectionStatusQuery::new(profile_url))
            .await;
        self.report(result)
    }

    fn report(&self, result: Result<Value, RequestError>) -> Option<Value> {
        match result {
            Ok(response) => {
                tracing::info!("automation request succeeded");
                self.reporter.success(&response);
                Some(response)
            }
            Err(error) => {
                tracing::error!(%error, "automation request failed");
                self.reporter.failure(&error);
                None
            }
        }
    }
}

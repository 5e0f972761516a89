use crate::domain::{
    AutomationService, ConnectionRequest, ConnectionStatusQuery, RequestError, SendMessageRequest,
};
use crate::interface_adapters::protocol::{
    CHECK_CONNECTION_STATUS_PATH, SEND_CONNECTION_REQUEST_PATH, SEND_MESSAGE_PATH,
    ServiceErrorResponse,
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use url::Url;

// Thin wrapper around reqwest for the local automation service.
#[derive(Clone)]
pub struct AutomationClient {
    http: Client,
    base_url: Url,
}

impl AutomationClient {
    // `timeout` of None leaves reqwest's default (no per-request timeout).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, RequestError> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| RequestError::Transport(error_chain(&err)))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, RequestError> {
        self.base_url
            .join(path)
            .map_err(|err| RequestError::InvalidUrl(err.to_string()))
    }
}

#[async_trait]
impl AutomationService for AutomationClient {
    #[tracing::instrument(
        name = "send_connection_request",
        skip_all,
        fields(profile_url = %req.profile_url)
    )]
    async fn send_connection_request(
        &self,
        req: ConnectionRequest,
    ) -> Result<Value, RequestError> {
        // Compose the endpoint URL and POST the JSON payload.
        let url = self.endpoint(SEND_CONNECTION_REQUEST_PATH)?;
        let res = self
            .http
            .post(url)
            .json(&req)
            .send()
            .await
            .map_err(|err| RequestError::Transport(error_chain(&err)))?;

        read_json(res).await
    }

    #[tracing::instrument(
        name = "send_message",
        skip_all,
        fields(profile_url = %req.profile_url)
    )]
    async fn send_message(&self, req: SendMessageRequest) -> Result<Value, RequestError> {
        let url = self.endpoint(SEND_MESSAGE_PATH)?;
        let res = self
            .http
            .post(url)
            .json(&req)
            .send()
            .await
            .map_err(|err| RequestError::Transport(error_chain(&err)))?;

        read_json(res).await
    }

    #[tracing::instrument(
        name = "check_connection_status",
        skip_all,
        fields(profile_url = %query.profile_url)
    )]
    async fn check_connection_status(
        &self,
        query: ConnectionStatusQuery,
    ) -> Result<Value, RequestError> {
        let mut url = self.endpoint(CHECK_CONNECTION_STATUS_PATH)?;
        url.query_pairs_mut()
            .append_pair("profileUrl", &query.profile_url);

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| RequestError::Transport(error_chain(&err)))?;

        read_json(res).await
    }
}

// Map the response into the parsed body or a typed failure.
async fn read_json(res: Response) -> Result<Value, RequestError> {
    let status = res.status();
    tracing::debug!(status = status.as_u16(), "automation service responded");

    // Keep upstream status and its error message when the envelope carries one.
    if !status.is_success() {
        let message = res
            .json::<ServiceErrorResponse>()
            .await
            .ok()
            .and_then(|payload| payload.error);
        return Err(RequestError::Upstream {
            status: status.as_u16(),
            message,
        });
    }

    res.json::<Value>().await.map_err(|err| {
        if err.is_decode() {
            RequestError::Decode(error_chain(&err))
        } else {
            RequestError::Transport(error_chain(&err))
        }
    })
}

// Joining relative paths replaces the last segment unless the base ends with '/'.
fn normalize_base_url(raw: &str) -> Result<Url, RequestError> {
    let mut url = Url::parse(raw).map_err(|err| RequestError::InvalidUrl(err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(RequestError::InvalidUrl(format!(
            "{raw} cannot be used as a base url"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

// reqwest's top-level message hides the cause ("connection refused" etc.) in the source chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

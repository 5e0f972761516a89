// Framework bootstrap for the command-line entry point.

use crate::domain::{AutomationService, Reporter};
use crate::frameworks::config;
use crate::interface_adapters::clients::AutomationClient;
use crate::interface_adapters::reporter::StdoutReporter;
use crate::use_cases::ConnectionRequester;
use serde_json::Value;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Stdout carries the outcome line, so logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() -> Option<Value> {
    init_runtime();

    let base_url = config::automation_service_url();
    let timeout = config::request_timeout();
    let client = match AutomationClient::new(&base_url, timeout) {
        Ok(client) => client,
        Err(error) => {
            tracing::error!(%base_url, %error, "failed to initialize automation client");
            StdoutReporter.failure(&error);
            return None;
        }
    };
    tracing::debug!(
        base_url = %client.base_url(),
        timeout_ms = ?timeout.map(|t| t.as_millis()),
        "automation client configured"
    );

    let requester = ConnectionRequester::new(client, StdoutReporter);
    run_example(&requester).await
}

// Send the built-in example request through an already wired requester.
pub async fn run_example<S, R>(requester: &ConnectionRequester<S, R>) -> Option<Value>
where
    S: AutomationService,
    R: Reporter,
{
    requester
        .send_connection_request(config::EXAMPLE_PROFILE_URL, config::EXAMPLE_MESSAGE)
        .await
}

use std::{env, time::Duration};

// Runtime settings. With nothing set, the client talks to the local service
// on its default port and never times out on its own.

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:3000";

// Target of the no-argument entry point.
pub const EXAMPLE_PROFILE_URL: &str = "https://www.linkedin.com/in/rayen-haddad-8146121b7/";
pub const EXAMPLE_MESSAGE: &str = "";

pub fn automation_service_url() -> String {
    env::var("AUTOMATION_SERVICE_URL").unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string())
}

pub fn request_timeout() -> Option<Duration> {
    parse_timeout_ms(env::var("AUTOMATION_REQUEST_TIMEOUT_MS").ok().as_deref())
}

// Unparsable values and 0 both mean "no timeout".
fn parse_timeout_ms(raw: Option<&str>) -> Option<Duration> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .map(Duration::from_millis)
}

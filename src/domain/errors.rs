use std::fmt;

// Failure of a single exchange with the automation service.
// Causes are kept as text so the domain stays free of the HTTP client types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    // The configured service address cannot be turned into an endpoint URL.
    InvalidUrl(String),
    // Connection refused, DNS failure, timeout and friends.
    Transport(String),
    // The service answered with a non-2xx status.
    Upstream {
        status: u16,
        message: Option<String>,
    },
    // The service answered 2xx but the body was not JSON.
    Decode(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidUrl(cause) => write!(f, "invalid service url: {cause}"),
            RequestError::Transport(cause) => write!(f, "transport error: {cause}"),
            RequestError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "upstream error {status}: {message}")
                } else {
                    write!(f, "upstream error {status}")
                }
            }
            RequestError::Decode(cause) => write!(f, "response decode error: {cause}"),
        }
    }
}

impl std::error::Error for RequestError {}

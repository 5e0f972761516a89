mod automation;
pub mod errors;
pub mod ports;

// Re-export the domain boundary types and ports.
pub use automation::{ConnectionRequest, ConnectionStatusQuery, SendMessageRequest};
pub use errors::RequestError;
pub use ports::{AutomationService, Reporter};

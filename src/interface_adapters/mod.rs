// Interface adapters: the HTTP client for the automation service and stdout reporting.

pub mod clients;
pub mod protocol;
pub mod reporter;

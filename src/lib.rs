pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{AutomationService, Reporter, RequestError};
pub use frameworks::runner::{run, run_example};
pub use interface_adapters::clients::AutomationClient;
pub use interface_adapters::reporter::StdoutReporter;
pub use use_cases::ConnectionRequester;

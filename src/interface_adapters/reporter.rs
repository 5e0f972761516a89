use crate::domain::{Reporter, RequestError};
use serde_json::Value;

// Writes one outcome line per call to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn success(&self, response: &Value) {
        println!("{}", success_line(response));
    }

    fn failure(&self, error: &RequestError) {
        println!("{}", failure_line(error));
    }
}

pub fn success_line(response: &Value) -> String {
    format!("Success: {response}")
}

pub fn failure_line(error: &RequestError) -> String {
    format!("Error: {error}")
}

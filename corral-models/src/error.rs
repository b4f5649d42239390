use serde::{Deserialize, Serialize};

/// Error body the store attaches to non-success responses. The client
/// surfaces it through `Display` when building its own error message.
#[derive(Debug, Serialize, Deserialize)]
pub struct Error {
    pub error_msg: String,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.error_msg)
    }
}

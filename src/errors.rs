use serde_json::error::Category;
use std::error::Error;
use std::fmt;

/// The single failure kind of the crate: some precondition on a buffer or a
/// dimension did not hold. `details` says which one.
#[derive(Debug, Clone, PartialEq)]
pub struct LinalgError {
    details: String,
}

impl LinalgError {
    pub fn new(msg: &str) -> LinalgError {
        LinalgError {
            details: msg.to_string(),
        }
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Error for LinalgError {}

impl From<std::io::Error> for LinalgError {
    fn from(err: std::io::Error) -> Self {
        LinalgError::new(&format!("io error: {}", err))
    }
}

impl From<serde_json::Error> for LinalgError {
    fn from(err: serde_json::Error) -> Self {
        let kind = match err.classify() {
            Category::Data => "invalid data",
            Category::Syntax => "json syntax error",
            Category::Eof => "unexpected end of json",
            Category::Io => "json io error",
        };
        LinalgError::new(&format!("{}: {}", kind, err))
    }
}

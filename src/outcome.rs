use std::fmt;

use crate::config::{DOCS_URL, USAGE, VERSION};
use crate::http::TransportError;

/// Terminal result of one invocation: the line to print and the exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Help,
    Version,
    Usage,
    /// The single argument is not an absolute URL with a host.
    Unparseable(String),
    /// A 2xx status code.
    Success(u16),
    /// Any other status code.
    Failure(u16),
    /// No status code could be obtained.
    Error(String),
}

/// Map a status code onto success or failure.
///
/// Only 2xx counts as success; redirects and informational codes are failures.
pub fn classify(status: u16) -> Outcome {
    if (200..300).contains(&status) {
        Outcome::Success(status)
    } else {
        Outcome::Failure(status)
    }
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Help | Outcome::Version | Outcome::Success(_) => 0,
            Outcome::Failure(_) => 1,
            Outcome::Usage | Outcome::Unparseable(_) => 2,
            Outcome::Error(_) => 3,
        }
    }
}

impl From<TransportError> for Outcome {
    fn from(err: TransportError) -> Self {
        Outcome::Error(err.to_string())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Help => write!(f, "docs: {}", DOCS_URL),
            Outcome::Version => write!(f, "version: {}", VERSION),
            Outcome::Usage => write!(f, "usage: {}", USAGE),
            Outcome::Unparseable(arg) => write!(f, "unparseable: {}", arg),
            Outcome::Success(code) => write!(f, "success: {}", code),
            Outcome::Failure(code) => write!(f, "failure: {}", code),
            Outcome::Error(reason) => write!(f, "error: {}", reason),
        }
    }
}

use std::time::Duration;

/// Version string reported by `--version`, fixed at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Documentation link reported by `--help`.
pub const DOCS_URL: &str = "https://pixelatedlabs.com/headcheck";

/// Synopsis printed on a usage error.
pub const USAGE: &str = "headcheck <url>";

/// Timeouts applied to the single outbound connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(30),
            write_timeout: Duration::from_secs(10),
        }
    }
}

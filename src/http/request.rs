use std::fmt;

use crate::config::VERSION;
use crate::http::url::Target;

/// Request methods the checker sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Head,
    Get,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Head => "HEAD",
            Method::Get => "GET",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a bodiless HTTP/1.1 request for the given target.
///
/// # Arguments
///
/// * `target` - The validated URL to request.
/// * `method` - `HEAD` for the first attempt, `GET` for the fallback.
///
/// # Returns
///
/// * `Vec<u8>` - The request bytes, ready to be written to the connection.
pub fn build(target: &Target, method: Method) -> Vec<u8> {
    let request = format!(
        "{} {} HTTP/1.1\r\nHost: {}\r\nUser-Agent: headcheck/{}\r\nAccept: */*\r\nConnection: close\r\n\r\n",
        method,
        target.request_target(),
        target.host_header(),
        VERSION
    );

    request.into_bytes()
}

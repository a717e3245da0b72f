use std::io::{ErrorKind, Read};

use crate::http::error::TransportError;

/// Longest status line accepted before giving up on the response.
const MAX_STATUS_LINE: usize = 8 * 1024;

/// Read the first line of an HTTP response, leaving the rest unread.
///
/// # Arguments
///
/// * `stream` - Anything that implements `Read`, plain or TLS.
///
/// # Returns
///
/// * `Result<Vec<u8>, TransportError>` - The status line without its line
///   terminator, or the reason nothing usable arrived.
pub fn read_status_line<R: Read>(stream: &mut R) -> Result<Vec<u8>, TransportError> {
    let mut line = Vec::with_capacity(256);
    let mut buffer = [0u8; 512];

    loop {
        match stream.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                line.extend_from_slice(&buffer[..n]);
                if let Some(end) = line.iter().position(|&b| b == b'\n') {
                    line.truncate(end);
                    break;
                }
                if line.len() > MAX_STATUS_LINE {
                    return Err(TransportError::Malformed(format!(
                        "longer than {} bytes",
                        MAX_STATUS_LINE
                    )));
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(TransportError::Read(e)),
        }
    }

    if line.is_empty() {
        return Err(TransportError::NoResponse);
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }

    Ok(line)
}

/// Parse the status code out of a status line.
///
/// This function accepts `HTTP/<version> <code>` optionally followed by a
/// reason phrase, where the code is exactly three digits.
///
/// # Arguments
///
/// * `line` - The status line as returned by [`read_status_line`].
///
/// # Returns
///
/// * `Result<u16, TransportError>` - The status code, or `Malformed` carrying
///   the offending line.
pub fn parse_status_line(line: &[u8]) -> Result<u16, TransportError> {
    let malformed = || TransportError::Malformed(String::from_utf8_lossy(line).into_owned());

    let text = std::str::from_utf8(line).map_err(|_| malformed())?;
    let mut parts = text.split_whitespace();

    match parts.next() {
        Some(version) if version.starts_with("HTTP/") => {}
        _ => return Err(malformed()),
    }

    let code = parts.next().ok_or_else(malformed)?;
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    code.parse::<u16>().map_err(|_| malformed())
}

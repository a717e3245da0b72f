use native_tls::TlsConnector;
use std::{
    io::{Read, Write},
    net::TcpStream,
};
use tracing::debug;

use crate::config::CheckOptions;
use crate::http::{
    error::TransportError,
    request::{self, Method},
    response,
    url::Target,
};

/// Fetch the status code of the first response for `target`.
///
/// Redirects are reported as they are, never followed. A server that refuses
/// `HEAD` with 405 or 501 gets one `GET` on a fresh connection instead.
///
/// # Arguments
///
/// * `target` - The validated URL to check.
/// * `options` - Connection timeouts.
///
/// # Returns
///
/// * `Result<u16, TransportError>` - The status code, or the reason none was received.
pub fn fetch_status(target: &Target, options: &CheckOptions) -> Result<u16, TransportError> {
    match target.scheme() {
        "http" | "https" => {}
        other => return Err(TransportError::UnsupportedScheme(other.to_string())),
    }

    let status = request_status(target, Method::Head, options)?;
    if status == 405 || status == 501 {
        debug!(status, "HEAD refused, retrying with GET");
        return request_status(target, Method::Get, options);
    }

    Ok(status)
}

/// Run one request/response exchange on its own connection.
fn request_status(
    target: &Target,
    method: Method,
    options: &CheckOptions,
) -> Result<u16, TransportError> {
    let request_bytes = request::build(target, method);
    let mut stream = connect(target, options)?;

    debug!(%method, url = %target, "sending request");
    let line = if target.tls() {
        handle_https_request(stream, &request_bytes, target)?
    } else {
        exchange(&mut stream, &request_bytes)?
    };

    debug!(status_line = %String::from_utf8_lossy(&line), "received status line");
    response::parse_status_line(&line)
}

/// Connect to the first resolved address that accepts, with timeouts set.
pub fn connect(target: &Target, options: &CheckOptions) -> Result<TcpStream, TransportError> {
    let host = target.server_name();
    let addrs = target
        .socket_addrs()
        .map_err(|source| TransportError::Resolve {
            host: host.clone(),
            source,
        })?;
    debug!(?addrs, "resolved {}", host);

    let mut last_error = None;
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, options.connect_timeout) {
            Ok(stream) => {
                stream
                    .set_read_timeout(Some(options.read_timeout))
                    .and_then(|()| stream.set_write_timeout(Some(options.write_timeout)))
                    .map_err(|source| TransportError::Connect { addr, source })?;
                return Ok(stream);
            }
            Err(source) => {
                debug!(%addr, error = %source, "connect failed");
                last_error = Some(TransportError::Connect { addr, source });
            }
        }
    }

    Err(last_error.unwrap_or_else(|| TransportError::NoAddress(host)))
}

/// Wrap the connection in TLS and perform the exchange over it.
fn handle_https_request(
    stream: TcpStream,
    request_bytes: &[u8],
    target: &Target,
) -> Result<Vec<u8>, TransportError> {
    let connector = TlsConnector::builder()
        .min_protocol_version(Some(native_tls::Protocol::Tlsv12))
        .build()?;

    let host = target.server_name();
    let mut tls_stream =
        connector
            .connect(&host, stream)
            .map_err(|err| TransportError::Handshake {
                host: host.clone(),
                reason: err.to_string(),
            })?;

    exchange(&mut tls_stream, request_bytes)
}

/// Send the request and read back only the status line.
fn exchange<S: Read + Write>(stream: &mut S, request_bytes: &[u8]) -> Result<Vec<u8>, TransportError> {
    stream
        .write_all(request_bytes)
        .and_then(|()| stream.flush())
        .map_err(TransportError::Write)?;

    response::read_status_line(stream)
}

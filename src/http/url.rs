use std::{fmt, io, net::SocketAddr};

use thiserror::Error;
use url::{Host, Position, Url};

/// Reasons a candidate string is not an acceptable URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// Not an absolute URL at all (`baz`, `http://`, `:80`).
    #[error("invalid URL: {0}")]
    Invalid(#[from] url::ParseError),

    /// Well formed but without a host (`mailto:someone@example.com`).
    #[error("URL has no host")]
    MissingHost,
}

/// An absolute URL known to carry a scheme and a non-empty host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    url: Url,
}

/// Parse a candidate string into a [`Target`].
///
/// Bare words are rejected rather than coerced into `http://<word>`.
pub fn parse(candidate: &str) -> Result<Target, UrlError> {
    let url = Url::parse(candidate)?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(Target { url }),
        _ => Err(UrlError::MissingHost),
    }
}

impl Target {
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Whether the connection has to be wrapped in TLS.
    pub fn tls(&self) -> bool {
        self.url.scheme() == "https"
    }

    /// Value for the `Host` header: the host plus the port when it is not the
    /// scheme's default.
    pub fn host_header(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        match self.url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        }
    }

    /// Name presented to the TLS layer, without IPv6 brackets.
    pub fn server_name(&self) -> String {
        match self.url.host() {
            Some(Host::Domain(domain)) => domain.to_string(),
            Some(Host::Ipv4(addr)) => addr.to_string(),
            Some(Host::Ipv6(addr)) => addr.to_string(),
            None => String::new(),
        }
    }

    /// Path and query as sent on the request line. Fragments never leave the
    /// client.
    pub fn request_target(&self) -> String {
        let target = &self.url[Position::BeforePath..Position::AfterQuery];
        if target.starts_with('/') {
            target.to_string()
        } else {
            format!("/{}", target)
        }
    }

    /// Resolve the host, using the scheme's default port when none is given.
    pub fn socket_addrs(&self) -> io::Result<Vec<SocketAddr>> {
        self.url.socket_addrs(|| None)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

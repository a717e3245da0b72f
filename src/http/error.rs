//! Errors from the network exchange itself, as opposed to an unsuccessful
//! status code.
use std::{io, net::SocketAddr};

use thiserror::Error;

/// Everything that can stop a check from obtaining a status code.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The URL is valid but not something this client speaks.
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    /// DNS lookup failed.
    #[error("could not resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },

    /// DNS lookup succeeded but returned nothing.
    #[error("no addresses found for {0}")]
    NoAddress(String),

    /// Every resolved address refused or timed out. Carries the last attempt.
    #[error("could not connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("tls setup failed: {0}")]
    Tls(#[from] native_tls::Error),

    #[error("tls handshake with {host} failed: {reason}")]
    Handshake { host: String, reason: String },

    #[error("write failed: {0}")]
    Write(#[source] io::Error),

    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    /// The peer closed the connection without sending anything.
    #[error("connection closed before a status line was received")]
    NoResponse,

    /// The first line of the response is not an HTTP status line.
    #[error("malformed status line: {0:?}")]
    Malformed(String),
}

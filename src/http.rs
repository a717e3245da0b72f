pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod url;

pub use client::fetch_status;
pub use error::TransportError;
pub use url::{Target, UrlError};

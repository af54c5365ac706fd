//! Server capability probe.
//!
//! This module issues the metadata-only HEAD request that decides how a
//! resource will be fetched. The probe never transfers a body; it only
//! reports the advertised content length and whether the server accepts
//! byte-range requests.
//!
//! A non-success status is a routing signal (the caller falls back to
//! the single-stream path), not an error. Only transport-level failures
//! propagate.

use crate::error::Result;

use reqwest::{
    header::{ACCEPT_RANGES, CONTENT_LENGTH},
    StatusCode, Url,
};
use reqwest_middleware::ClientWithMiddleware;
use tracing::debug;

/// What the server reported about the resource.
///
/// Produced once per transfer and read-only thereafter.
#[derive(Debug, Clone, Copy)]
pub struct ContentDescriptor {
    /// Status of the probe response.
    pub status: StatusCode,
    /// Total length in bytes, if the server declared one.
    pub length: Option<u64>,
    /// Whether the server advertises `Accept-Ranges: bytes`.
    pub accepts_ranges: bool,
}

impl ContentDescriptor {
    /// Whether the resource can be fetched as concurrent ranged parts.
    ///
    /// Requires a success status, range support, and a known length;
    /// anything less routes the transfer to the single-stream path.
    pub fn supports_ranged_transfer(&self) -> bool {
        self.status.is_success() && self.accepts_ranges && self.length.is_some()
    }
}

/// Probe the resource with a HEAD request.
///
/// Fails only on transport-level errors (connection, DNS, proxy). A
/// missing `Content-Length`, an unparsable one, or a non-2xx status all
/// produce a descriptor steering the caller to the single-stream path.
pub async fn probe(client: &ClientWithMiddleware, url: &Url) -> Result<ContentDescriptor> {
    let res = client.head(url.clone()).send().await?;
    let headers = res.headers();

    let accepts_ranges = match headers.get(ACCEPT_RANGES) {
        None => false,
        Some(x) if x == "none" => false,
        Some(_) => true,
    };
    let length = headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok());

    let descriptor = ContentDescriptor {
        status: res.status(),
        length,
        accepts_ranges,
    };
    debug!(
        status = %descriptor.status,
        length = ?descriptor.length,
        accepts_ranges = descriptor.accepts_ranges,
        "Probed {}",
        url
    );
    Ok(descriptor)
}

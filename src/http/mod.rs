//! HTTP module containing client construction.
//!
//! Every request of a transfer (the capability probe, each ranged part
//! request, and the single-stream fallback) goes through the middleware
//! client built here.
//!
//! # Examples
//!
//! ```rust
//! use sunder::http::{create_http_client, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{create_http_client, HttpClientConfig};

//! Sunder is a crate aiming at providing a simple way to download a
//! file asynchronously via HTTP(S), splitting it into concurrent
//! ranged parts whenever the server supports byte ranges.
//!
//! A transfer starts with a metadata-only probe. When the server
//! advertises `Accept-Ranges: bytes` and a content length, the
//! resource is partitioned into contiguous ranges, each fetched
//! concurrently into a staged part file and finally merged, in order,
//! into the destination. Otherwise the whole body is streamed with one
//! request. Either way the call blocks until the file is fully on disk
//! or an error occurs.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use sunder::{download::Download, downloader::DownloaderBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let archive = "https://github.com/seanmonstar/reqwest/archive/refs/tags/v0.11.9.zip";
//! let download = Download::try_from(archive)?;
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("output"))
//!     .parallelism(8)
//!     .build();
//! downloader.download(&download).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`download`] - The transfer request and its completion summary
//! - [`downloader`] - The `Downloader` orchestrator and its builder
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`fetch`] - The ranged part fetcher and the single-stream fallback
//! - [`http`] - HTTP client construction and middleware
//! - [`merge`] - Ordered reassembly of part files
//! - [`plan`] - Range partitioning
//! - [`probe`] - Server capability probing
//! - [`progress`] - The shared byte sink and progress bar styling
//! - [`staging`] - Part file staging and naming

pub mod download;
pub mod downloader;
pub mod error;
pub mod fetch;
pub mod http;
pub mod merge;
pub mod plan;
pub mod probe;
pub mod progress;
pub mod staging;

pub use download::{Download, Summary, TransferKind};
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use plan::{plan_parts, PartSpec};
pub use probe::{probe, ContentDescriptor};
pub use progress::{ProgressBarOpts, ProgressSink};
pub use staging::{DefaultPartNaming, PartNaming, StagingArea};

//! Downloader module containing the orchestrator, builder, and
//! configuration.
//!
//! This module provides the main [`Downloader`] struct and its
//! associated builder. The downloader owns the routing decision
//! between the concurrent multi-part path and the single-stream
//! fallback, the fan-out of part fetchers, and the final merge.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sunder::downloader::DownloaderBuilder;
//! use sunder::download::Download;
//! use std::convert::TryFrom;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().build();
//! let download = Download::try_from("https://example.com/file.zip")?;
//! let summary = downloader.download(&download).await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod downloader;

pub use builder::DownloaderBuilder;
pub use config::{DownloaderConfig, DEFAULT_PARALLELISM};
pub use downloader::Downloader;

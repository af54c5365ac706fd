//! Configuration structure and defaults for the downloader.
//!
//! This module provides the configuration consumed by the
//! [`Downloader`](super::downloader::Downloader), normally assembled
//! through the [`DownloaderBuilder`](super::builder::DownloaderBuilder).

use crate::progress::ProgressBarOpts;
use crate::staging::{DefaultPartNaming, PartNaming};

use reqwest::{header::HeaderMap, Proxy};
use std::env::current_dir;
use std::sync::Arc;

/// Parallelism degree used when the caller does not set one.
///
/// Callers wanting one worker per logical CPU pass a detected count
/// through [`DownloaderBuilder::parallelism`](super::builder::DownloaderBuilder::parallelism).
pub const DEFAULT_PARALLELISM: usize = 4;

/// Configuration structure for the downloader.
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory where to store the downloaded file.
    pub directory: std::path::PathBuf,
    /// Number of concurrently fetched parts on the multi-part path.
    pub parallelism: usize,
    /// Number of transport-level retries per request (0 by default).
    pub retries: u32,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Progress bar style options.
    pub style: ProgressBarOpts,
    /// Naming strategy for the staging directory and part files.
    pub naming: Arc<dyn PartNaming>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("parallelism", &self.parallelism)
            .field("retries", &self.retries)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy)
            .field("style", &self.style)
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            parallelism: DEFAULT_PARALLELISM,
            retries: 0,
            headers: None,
            proxy: None,
            style: ProgressBarOpts::default(),
            naming: Arc::new(DefaultPartNaming),
        }
    }
}

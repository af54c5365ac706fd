//! Core downloader implementation with transfer orchestration.
//!
//! This module contains the main [`Downloader`] struct. One call to
//! [`Downloader::download`] probes the server, routes the transfer to
//! the multi-part or single-stream path, and blocks until the
//! destination file is fully materialized or an error occurs.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sunder::downloader::DownloaderBuilder;
//! use sunder::download::Download;
//! use std::convert::TryFrom;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().parallelism(8).build();
//! let download = Download::try_from("https://example.com/file.zip")?;
//!
//! let summary = downloader.download(&download).await?;
//! println!(
//!     "Downloaded {} ({} bytes, {:?})",
//!     summary.download().filename,
//!     summary.size(),
//!     summary.kind(),
//! );
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use crate::download::{Download, Summary, TransferKind};
use crate::error::{Error, Result};
use crate::fetch::{fetch_part, fetch_single};
use crate::http::{create_http_client, HttpClientConfig};
use crate::merge::merge_parts;
use crate::plan::{plan_parts, PartSpec};
use crate::probe::probe;
use crate::progress::ProgressSink;
use crate::staging::StagingArea;

use futures::stream::{self, StreamExt};
use reqwest::header::HeaderMap;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use sunder::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where the file will be downloaded.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the number of concurrently fetched parts.
    pub fn parallelism(&self) -> usize {
        self.config.parallelism
    }

    /// Gets the number of transport-level retries per request.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Download the file and block until it is fully on disk.
    ///
    /// Probes the server first: a success status together with
    /// `Accept-Ranges: bytes` and a known content length routes the
    /// transfer to the concurrent multi-part path; anything else falls
    /// back to one unranged request. Returns a [`Summary`] describing
    /// the route taken, or the first error encountered.
    pub async fn download(&self, download: &Download) -> Result<Summary> {
        let client = create_http_client(HttpClientConfig {
            retries: self.config.retries,
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
        })?;

        let destination = self.config.directory.join(&download.filename);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).await?;
        }

        let descriptor = probe(&client, &download.url).await?;
        if descriptor.supports_ranged_transfer() {
            if let Some(total) = descriptor.length {
                debug!("Routing {} to the multi-part path", download.filename);
                return self
                    .multi_part(&client, download, &destination, total)
                    .await;
            }
        }
        debug!("Routing {} to the single-stream path", download.filename);
        self.single_stream(&client, download, &destination).await
    }

    /// Fetch the resource as concurrent ranged parts and merge them.
    async fn multi_part(
        &self,
        client: &ClientWithMiddleware,
        download: &Download,
        destination: &Path,
        total: u64,
    ) -> Result<Summary> {
        let degree = self.config.parallelism.max(1);
        let plan = plan_parts(total, degree);
        let staging = StagingArea::create(destination, Arc::clone(&self.config.naming)).await?;
        let sink = ProgressSink::new(Some(total), &self.config.style);

        let result = self
            .fetch_and_merge(client, download, destination, &plan, &staging, &sink)
            .await;

        // The staging directory goes away on every exit path; a fetch
        // or merge error still takes precedence over a cleanup error.
        let cleanup = staging.cleanup().await;
        sink.finish();
        let size = result?;
        cleanup?;

        Ok(Summary::new(
            download.clone(),
            TransferKind::MultiPart,
            size,
            degree,
        ))
    }

    /// Launch one fetcher per part, wait for all of them, then merge.
    async fn fetch_and_merge(
        &self,
        client: &ClientWithMiddleware,
        download: &Download,
        destination: &Path,
        plan: &[PartSpec],
        staging: &StagingArea,
        sink: &ProgressSink,
    ) -> Result<u64> {
        debug!("Fetching {} parts of {}", plan.len(), download.url);
        let results: Vec<(usize, Result<()>)> = stream::iter(plan.iter().copied())
            .map(|spec| {
                let path = staging.part_path(spec.index);
                async move {
                    let result = fetch_part(client, &download.url, spec, &path, sink).await;
                    (spec.index, result)
                }
            })
            .buffer_unordered(plan.len())
            .collect()
            .await;

        // Full join barrier: every worker has returned by now. The
        // lowest part index breaks ties between failures.
        let mut failures: Vec<(usize, Error)> = results
            .into_iter()
            .filter_map(|(index, result)| result.err().map(|e| (index, e)))
            .collect();
        failures.sort_by_key(|(index, _)| *index);
        if let Some((index, error)) = failures.into_iter().next() {
            debug!("Part {} failed, aborting the transfer", index);
            return Err(error);
        }

        merge_parts(destination, staging, plan.len()).await
    }

    /// Fetch the resource with one unranged request.
    async fn single_stream(
        &self,
        client: &ClientWithMiddleware,
        download: &Download,
        destination: &Path,
    ) -> Result<Summary> {
        let sink = ProgressSink::new(None, &self.config.style);
        let result = fetch_single(client, &download.url, destination, &sink).await;
        sink.finish();
        let size = result?;

        Ok(Summary::new(
            download.clone(),
            TransferKind::SingleStream,
            size,
            1,
        ))
    }
}

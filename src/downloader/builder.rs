//! Builder pattern implementation for creating Downloader instances.
//!
//! This module provides the [`DownloaderBuilder`] struct for
//! configuring and creating [`Downloader`] instances.
//!
//! # Examples
//!
//! ```rust
//! use sunder::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//!
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .parallelism(8)
//!     .retries(3)
//!     .build();
//! ```
//!
//! ## Hidden progress bar
//!
//! ```rust
//! use sunder::downloader::DownloaderBuilder;
//!
//! // Create a downloader that renders nothing.
//! let downloader = DownloaderBuilder::hidden().build();
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::progress::ProgressBarOpts;
use crate::staging::PartNaming;

use reqwest::{
    header::{HeaderMap, HeaderValue, IntoHeaderName},
    Proxy,
};
use std::{path::PathBuf, sync::Arc};

/// A builder used to create a [`Downloader`].
///
/// ```rust
/// # fn main()  {
/// use sunder::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().retries(5).directory("downloads".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Convenience function to hide the progress bar.
    pub fn hidden() -> Self {
        let mut builder = DownloaderBuilder::default();
        builder.config.style = ProgressBarOpts::hidden();
        builder
    }

    /// Sets the directory where to store the downloaded file.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the number of concurrently fetched parts.
    ///
    /// Clamped to at least 1 when the downloader is built, so a count
    /// derived from detected parallelism can be passed through as-is.
    pub fn parallelism(mut self, parallelism: usize) -> Self {
        self.config.parallelism = parallelism;
        self
    }

    /// Set the number of transport-level retries per request.
    ///
    /// Defaults to 0: the transfer either completes or fails as a
    /// whole.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Set the downloader progress bar style.
    pub fn style(mut self, style: ProgressBarOpts) -> Self {
        self.config.style = style;
        self
    }

    /// Set the proxy for all requests.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set the naming strategy for the staging directory and part
    /// files.
    pub fn naming(mut self, naming: Arc<dyn PartNaming>) -> Self {
        self.config.naming = naming;
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You need to pass in a `HeaderMap`, not a `HeaderName`.
    /// `HeaderMap` is a set of http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap`
    /// will be merged into a single one.
    ///
    /// # Example
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue, HeaderMap};
    /// use sunder::downloader::DownloaderBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    ///
    /// let builder = DownloaderBuilder::new()
    ///     .headers(HeaderMap::from_iter([(header::USER_AGENT, ua)]))
    ///     .build();
    /// ```
    ///
    /// See also [`header()`].
    ///
    /// [`header()`]: DownloaderBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header
    ///
    /// # Example
    ///
    /// You can use the `.header()` chain to add multiple headers
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use sunder::downloader::DownloaderBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    /// let auth = HeaderValue::from_str("Basic aGk6MTIzNDU2Cg==").expect("Invalid auth");
    ///
    /// let builder = DownloaderBuilder::new()
    ///     .header(header::USER_AGENT, ua)
    ///     .header(header::AUTHORIZATION, auth)
    ///     .build();
    /// ```
    ///
    /// If you need to pass in a `HeaderMap`, instead of calling
    /// `.header()` multiple times. See also [`headers()`].
    ///
    /// [`headers()`]: DownloaderBuilder::headers
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Downloader`] with the specified options.
    pub fn build(mut self) -> Downloader {
        self.config.parallelism = self.config.parallelism.max(1);
        Downloader::new(self.config)
    }
}

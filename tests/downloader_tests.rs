//! Tests for the downloader module functionality.
//!
//! This file contains tests for the configuration surface: the core
//! Downloader getters and the DownloaderBuilder pattern.

use sunder::downloader::{DownloaderBuilder, DEFAULT_PARALLELISM};

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

mod common;
use common::helpers::*;

#[test]
fn test_builder_defaults() {
    let downloader = DownloaderBuilder::new().build();

    assert_eq!(downloader.parallelism(), DEFAULT_PARALLELISM);
    assert_eq!(downloader.retries(), 0);
    assert!(downloader.headers().is_none());
}

#[test]
fn test_builder_configuration() {
    let temp_dir = create_temp_dir();
    let downloader = DownloaderBuilder::new()
        .directory(temp_dir.path().to_path_buf())
        .parallelism(10)
        .retries(5)
        .build();

    assert_eq!(downloader.directory(), temp_dir.path());
    assert_eq!(downloader.parallelism(), 10);
    assert_eq!(downloader.retries(), 5);
}

#[test]
fn test_builder_clamps_parallelism() {
    let downloader = DownloaderBuilder::new().parallelism(0).build();
    assert_eq!(downloader.parallelism(), 1);
}

#[test]
fn test_builder_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("sunder-test-agent"));
    let downloader = DownloaderBuilder::new().headers(headers).build();

    assert!(downloader.headers().is_some());
    assert_eq!(
        downloader.headers().unwrap().get(USER_AGENT),
        Some(&HeaderValue::from_static("sunder-test-agent"))
    );
}

#[test]
fn test_builder_single_header() {
    let downloader = DownloaderBuilder::new()
        .header(USER_AGENT, HeaderValue::from_static("single-test-agent"))
        .build();

    assert!(downloader.headers().is_some());
    assert_eq!(
        downloader.headers().unwrap().get(USER_AGENT),
        Some(&HeaderValue::from_static("single-test-agent"))
    );
}

#[test]
fn test_builder_headers_merge() {
    let mut first = HeaderMap::new();
    first.insert(USER_AGENT, HeaderValue::from_static("first-agent"));
    let downloader = DownloaderBuilder::new()
        .headers(first)
        .header(USER_AGENT, HeaderValue::from_static("second-agent"))
        .build();

    assert_eq!(
        downloader.headers().unwrap().get(USER_AGENT),
        Some(&HeaderValue::from_static("second-agent"))
    );
}

#[test]
fn test_builder_hidden() {
    let downloader = DownloaderBuilder::hidden().build();

    assert_eq!(downloader.parallelism(), DEFAULT_PARALLELISM);
    assert_eq!(downloader.retries(), 0);
}

#[test]
fn test_downloader_debug() {
    let downloader = DownloaderBuilder::new().build();
    let debug_str = format!("{:?}", downloader);

    assert!(debug_str.contains("Downloader"));
    assert!(debug_str.contains("config"));
}

#[test]
fn test_downloader_clone() {
    let downloader = DownloaderBuilder::new().parallelism(6).build();
    let cloned = downloader.clone();

    assert_eq!(downloader.parallelism(), cloned.parallelism());
    assert_eq!(downloader.retries(), cloned.retries());
    assert_eq!(downloader.directory(), cloned.directory());
}

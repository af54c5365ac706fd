#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use std::fs;
use std::path::{Path, PathBuf};
use sunder::plan::plan_parts;
use sunder::{Downloader, DownloaderBuilder};
use tempfile::TempDir;

// Common test constants
pub const TEST_DOMAIN: &str = "http://domain.com/file.zip";
pub const TEST_FILENAME: &str = "file.bin";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Creates random test file content of specified size
pub fn create_random_content(size: usize) -> Vec<u8> {
    use rand::RngCore;
    let mut content = vec![0u8; size];
    rand::rng().fill_bytes(&mut content);
    content
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}

/// Asserts that no staging directory was left behind for `destination`
pub fn assert_no_staging_left(destination: &Path) {
    let staging = PathBuf::from(format!("{}.parts", destination.display()));
    assert!(
        !staging.exists(),
        "Staging directory should be gone: {:?}",
        staging
    );
}

/// Creates a downloader with hidden progress bars writing into `dir`
pub fn create_test_downloader(dir: &Path, parallelism: usize) -> Downloader {
    DownloaderBuilder::hidden()
        .directory(dir.to_path_buf())
        .parallelism(parallelism)
        .build()
}

/// Mocks the HEAD probe response for `path`
pub async fn mock_probe(
    server: &mut ServerGuard,
    path: &str,
    status: usize,
    length: Option<usize>,
    accepts_ranges: bool,
) -> Mock {
    let mut mock = server.mock("HEAD", path).with_status(status);
    if let Some(length) = length {
        mock = mock.with_header("content-length", &length.to_string());
    }
    if accepts_ranges {
        mock = mock.with_header("accept-ranges", "bytes");
    }
    mock.create_async().await
}

/// Mocks one ranged GET response per non-empty part of `content` split
/// `degree` ways, each serving its exact byte slice with a 206
pub async fn mock_ranged_parts(
    server: &mut ServerGuard,
    path: &str,
    content: &[u8],
    degree: usize,
) -> Vec<Mock> {
    let mut mocks = Vec::new();
    for spec in plan_parts(content.len() as u64, degree) {
        if spec.is_empty() {
            continue;
        }
        let body = &content[spec.start as usize..spec.end as usize];
        let mock = server
            .mock("GET", path)
            .match_header("range", Matcher::Exact(spec.range_header()))
            .with_status(206)
            .with_body(body)
            .create_async()
            .await;
        mocks.push(mock);
    }
    mocks
}

/// Mocks an unranged GET serving the whole of `content`
pub async fn mock_full_body(server: &mut ServerGuard, path: &str, content: &[u8]) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_body(content)
        .create_async()
        .await
}

//! Part reassembly.
//!
//! This module concatenates the staged part files into the destination
//! file. Ascending index order is the correctness-critical invariant:
//! any other order corrupts the reassembled content.

use crate::error::{Error, Result};
use crate::staging::StagingArea;

use std::io::ErrorKind;
use std::path::Path;
use tokio::{
    fs::{self, OpenOptions},
    io::AsyncWriteExt,
};
use tracing::debug;

/// Concatenate `count` part files, in ascending index order, into the
/// destination file, deleting each part as it is consumed.
///
/// A missing part file is a fatal inconsistency, not a skippable gap.
/// Removal of the staging directory itself is owned by the caller,
/// which must run it on the failure path as well. Returns the number of
/// bytes written to the destination.
pub async fn merge_parts(destination: &Path, staging: &StagingArea, count: usize) -> Result<u64> {
    debug!("Merging {} parts into {:?}", count, destination);
    let mut dest = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(destination)
        .await?;

    let mut size: u64 = 0;
    for index in 0..count {
        let path = staging.part_path(index);
        let mut part = match fs::File::open(&path).await {
            Ok(part) => part,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::MissingPart { index, path });
            }
            Err(e) => return Err(e.into()),
        };
        size += tokio::io::copy(&mut part, &mut dest).await?;
        fs::remove_file(&path).await?;
    }
    dest.flush().await?;

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staging::{DefaultPartNaming, StagingArea};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_merge_preserves_index_order() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("out.bin");
        let staging = StagingArea::create(&dest, Arc::new(DefaultPartNaming))
            .await
            .unwrap();

        // Write parts out of order; the merge must still read 0, 1, 2.
        fs::write(staging.part_path(2), b"!").await.unwrap();
        fs::write(staging.part_path(0), b"hello ").await.unwrap();
        fs::write(staging.part_path(1), b"world").await.unwrap();

        let size = merge_parts(&dest, &staging, 3).await.unwrap();
        assert_eq!(size, 12);
        assert_eq!(fs::read(&dest).await.unwrap(), b"hello world!");

        // Parts are consumed; only the empty directory remains.
        for index in 0..3 {
            assert!(!staging.part_path(index).exists());
        }
        staging.cleanup().await.unwrap();
    }

    #[tokio::test]
    async fn test_merge_fails_on_missing_part() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("out.bin");
        let staging = StagingArea::create(&dest, Arc::new(DefaultPartNaming))
            .await
            .unwrap();

        fs::write(staging.part_path(0), b"abc").await.unwrap();
        // Part 1 intentionally absent.
        let err = merge_parts(&dest, &staging, 2).await.unwrap_err();
        match err {
            Error::MissingPart { index, .. } => assert_eq!(index, 1),
            other => panic!("expected MissingPart, got {:?}", other),
        }
        staging.cleanup().await.unwrap();
    }

    #[tokio::test]
    async fn test_merge_tolerates_empty_parts() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("out.bin");
        let staging = StagingArea::create(&dest, Arc::new(DefaultPartNaming))
            .await
            .unwrap();

        fs::write(staging.part_path(0), b"abc").await.unwrap();
        fs::write(staging.part_path(1), b"").await.unwrap();
        fs::write(staging.part_path(2), b"").await.unwrap();

        let size = merge_parts(&dest, &staging, 3).await.unwrap();
        assert_eq!(size, 3);
        assert_eq!(fs::read(&dest).await.unwrap(), b"abc");
        staging.cleanup().await.unwrap();
    }
}

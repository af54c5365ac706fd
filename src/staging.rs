//! Part file staging.
//!
//! This module owns the transient directory that holds part files while
//! a multi-part transfer is in flight, and the naming policy that maps
//! a destination file and part index to a path inside it.
//!
//! Naming is an explicit, injectable strategy so pathological
//! destination names (no extension, multiple dots, dots in directory
//! components) follow a tested policy instead of incidental string
//! splitting.

use crate::error::Result;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

/// Maps a destination file to its staging directory and part files.
pub trait PartNaming: Send + Sync {
    /// Directory holding the part files for `destination`.
    fn staging_dir(&self, destination: &Path) -> PathBuf;

    /// Path of part `index` inside `staging_dir`.
    fn part_file(&self, staging_dir: &Path, index: usize) -> PathBuf;
}

/// Default naming policy.
///
/// Appends `.parts` to the full destination filename, so
/// `archive.tar.gz` stages under `archive.tar.gz.parts/` and an
/// extension-less `archive` under `archive.parts/`. Part files are
/// named `part-<index>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPartNaming;

impl PartNaming for DefaultPartNaming {
    fn staging_dir(&self, destination: &Path) -> PathBuf {
        let mut dir = destination.as_os_str().to_os_string();
        dir.push(".parts");
        PathBuf::from(dir)
    }

    fn part_file(&self, staging_dir: &Path, index: usize) -> PathBuf {
        staging_dir.join(format!("part-{}", index))
    }
}

/// The staging directory of one in-flight multi-part transfer.
///
/// Created before the part fetchers launch; removed by
/// [`StagingArea::cleanup`] on every exit path, success or error.
pub struct StagingArea {
    dir: PathBuf,
    naming: Arc<dyn PartNaming>,
}

impl StagingArea {
    /// Create the staging directory for `destination` on disk.
    pub async fn create(destination: &Path, naming: Arc<dyn PartNaming>) -> Result<Self> {
        let dir = naming.staging_dir(destination);
        debug!("Creating staging directory {:?}", dir);
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir, naming })
    }

    /// Path of the staging directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of part `index`.
    pub fn part_path(&self, index: usize) -> PathBuf {
        self.naming.part_file(&self.dir, index)
    }

    /// Remove the staging directory and anything left inside it.
    ///
    /// Called on both the success and the failure path; a directory
    /// already gone is not an error.
    pub async fn cleanup(&self) -> Result<()> {
        debug!("Removing staging directory {:?}", self.dir);
        match fs::remove_dir_all(&self.dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

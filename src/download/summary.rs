//! Transfer summary.
//!
//! This module contains the [`Summary`] struct and [`TransferKind`]
//! enum describing how a completed transfer was carried out. A summary
//! only exists for a successful transfer; failures propagate as
//! [`crate::Error`] instead.

use super::download::Download;

/// The route a transfer took after probing the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// The resource was fetched as concurrent ranged parts and merged.
    MultiPart,
    /// The resource was fetched with one unranged request.
    SingleStream,
}

/// Represents a completed [`Download`].
#[derive(Debug, Clone)]
pub struct Summary {
    /// The downloaded item.
    download: Download,
    /// The route taken.
    kind: TransferKind,
    /// Bytes written to the destination file.
    size: u64,
    /// Number of parts fetched (1 on the single-stream route).
    parts: usize,
}

impl Summary {
    /// Create a new [`Download`] [`Summary`].
    pub fn new(download: Download, kind: TransferKind, size: u64, parts: usize) -> Self {
        Self {
            download,
            kind,
            size,
            parts,
        }
    }

    /// Get a reference to the summary's download.
    pub fn download(&self) -> &Download {
        &self.download
    }

    /// Get the route the transfer took.
    pub fn kind(&self) -> TransferKind {
        self.kind
    }

    /// Get the number of bytes written to the destination.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the number of parts the resource was split into.
    pub fn parts(&self) -> usize {
        self.parts
    }
}

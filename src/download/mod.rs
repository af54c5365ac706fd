//! Download module containing the transfer request and its summary.
//!
//! This module provides the [`Download`] struct describing what to
//! retrieve, and the [`Summary`] returned once the destination file is
//! fully materialized.
//!
//! # Examples
//!
//! ```rust
//! use sunder::download::Download;
//! use std::convert::TryFrom;
//!
//! let download = Download::try_from("https://example.com/file.zip")?;
//! println!("Downloading: {}", download.filename);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod download;
pub mod summary;

pub use download::Download;
pub use summary::{Summary, TransferKind};

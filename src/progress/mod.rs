//! Progress module containing the byte sink and bar styling.
//!
//! The core only needs a concurrency-safe sink that accepts byte
//! counts; rendering is delegated to indicatif through the styling
//! options in [`style`].
//!
//! # Examples
//!
//! ```rust
//! use sunder::progress::{ProgressBarOpts, ProgressSink};
//!
//! let sink = ProgressSink::new(Some(1024), &ProgressBarOpts::hidden());
//! sink.record(512);
//! assert_eq!(sink.received(), 512);
//! ```

pub(crate) mod sink;
pub(crate) mod style;

pub use sink::ProgressSink;
pub use style::ProgressBarOpts;

//! Fetch module containing the two transfer paths.
//!
//! [`part::fetch_part`] retrieves one byte range into a staged part
//! file; [`single::fetch_single`] retrieves the whole resource into the
//! destination in one pass. Both stream the response body chunk by
//! chunk through a fixed-size buffer, so memory use is bounded
//! regardless of content length, and both report every chunk to the
//! shared [`crate::progress::ProgressSink`].

pub mod part;
pub mod single;

/// Size of the buffered writer between the response stream and disk.
pub(crate) const COPY_BUFFER_SIZE: usize = 32 * 1024;

pub use part::fetch_part;
pub use single::fetch_single;

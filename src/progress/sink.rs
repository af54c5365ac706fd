//! Shared progress accounting.
//!
//! This module provides the [`ProgressSink`], the one piece of state
//! mutated by every concurrent worker of a transfer. Each fetcher
//! reports the size of every chunk it writes; the sink accumulates the
//! total without lost updates and feeds the rendering side.
//!
//! The sink is passed explicitly (behind an [`std::sync::Arc`]) into
//! each worker at launch; there is no global progress state.

use crate::progress::style::ProgressBarOpts;

use indicatif::ProgressBar;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sentinel stored in the total slot while the extent is unknown.
const UNKNOWN_EXTENT: u64 = u64::MAX;

/// Concurrency-safe accumulator of bytes transferred.
pub struct ProgressSink {
    /// Bytes recorded so far across all workers.
    received: AtomicU64,
    /// Expected total, or [`UNKNOWN_EXTENT`].
    total: AtomicU64,
    /// The rendering collaborator.
    bar: ProgressBar,
    /// Clear the bar on completion.
    clear: bool,
}

impl ProgressSink {
    /// Create a sink sized to `total` (or unbounded when unknown),
    /// rendered according to `opts`.
    pub fn new(total: Option<u64>, opts: &ProgressBarOpts) -> Self {
        let bar = opts.clone().to_progress_bar(total);
        Self {
            received: AtomicU64::new(0),
            total: AtomicU64::new(total.unwrap_or(UNKNOWN_EXTENT)),
            bar,
            clear: opts.clear,
        }
    }

    /// Record `bytes` more transferred bytes.
    ///
    /// Safe to call from any number of workers concurrently; no
    /// ordering is required among their contributions.
    pub fn record(&self, bytes: u64) {
        self.received.fetch_add(bytes, Ordering::Relaxed);
        self.bar.inc(bytes);
    }

    /// Bytes recorded so far.
    pub fn received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    /// The expected total, if known.
    pub fn total(&self) -> Option<u64> {
        match self.total.load(Ordering::Relaxed) {
            UNKNOWN_EXTENT => None,
            total => Some(total),
        }
    }

    /// Size the sink once the extent becomes known.
    ///
    /// The single-stream fetcher only learns the length from the
    /// response it is about to stream.
    pub fn set_total(&self, total: Option<u64>) {
        self.total
            .store(total.unwrap_or(UNKNOWN_EXTENT), Ordering::Relaxed);
        if let Some(total) = total {
            self.bar.set_length(total);
        }
    }

    /// Finish the rendering side, clearing the bar if configured.
    pub fn finish(&self) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_accumulates() {
        let sink = ProgressSink::new(Some(100), &ProgressBarOpts::hidden());
        assert_eq!(sink.received(), 0);
        assert_eq!(sink.total(), Some(100));
        sink.record(40);
        sink.record(60);
        assert_eq!(sink.received(), 100);
    }

    #[test]
    fn test_sink_unknown_extent() {
        let sink = ProgressSink::new(None, &ProgressBarOpts::hidden());
        assert_eq!(sink.total(), None);
        sink.set_total(Some(512));
        assert_eq!(sink.total(), Some(512));
    }
}

//! Tests for the range partitioner.
//!
//! The partitioner's contract is exact coverage: for any total length
//! and any degree, the produced specs must tile `[0, total)` with no
//! gap, no overlap, and the final part ending at the total.

use sunder::plan::{plan_parts, PartSpec};

fn assert_exact_coverage(parts: &[PartSpec], total: u64) {
    assert_eq!(parts[0].start, 0);
    assert_eq!(parts[parts.len() - 1].end, total);
    for pair in parts.windows(2) {
        assert_eq!(
            pair[0].end, pair[1].start,
            "gap or overlap between parts {} and {}",
            pair[0].index, pair[1].index
        );
    }
    let covered: u64 = parts.iter().map(PartSpec::len).sum();
    assert_eq!(covered, total);
}

#[test]
fn test_exhaustive_small_grid() {
    for total in 0..=64u64 {
        for degree in 1..=16usize {
            let parts = plan_parts(total, degree);
            assert_eq!(parts.len(), degree);
            assert_exact_coverage(&parts, total);
        }
    }
}

#[test]
fn test_large_resource() {
    let parts = plan_parts(1_000_000, 4);
    assert_exact_coverage(&parts, 1_000_000);
    // Every part except the tail spans base + 1 bytes.
    assert_eq!(parts[0].len(), 250_001);
    assert_eq!(parts[1].len(), 250_001);
    assert_eq!(parts[2].len(), 250_001);
    assert_eq!(parts[3].len(), 249_997);
}

#[test]
fn test_indices_are_ascending() {
    let parts = plan_parts(123_456, 7);
    for (i, part) in parts.iter().enumerate() {
        assert_eq!(part.index, i);
    }
}

#[test]
fn test_degenerate_degree_produces_empty_parts() {
    let parts = plan_parts(5, 16);
    assert_eq!(parts.len(), 16);
    assert_exact_coverage(&parts, 5);
    let empty = parts.iter().filter(|p| p.is_empty()).count();
    assert_eq!(empty, 11);
    // Empty parts never start past the resource.
    for part in &parts {
        assert!(part.start <= 5);
        assert!(part.end <= 5);
    }
}

#[test]
fn test_range_headers_tile_the_resource() {
    let content_len = 1000u64;
    let parts = plan_parts(content_len, 3);
    assert_eq!(parts[0].range_header(), "bytes=0-333");
    assert_eq!(parts[1].range_header(), "bytes=334-667");
    assert_eq!(parts[2].range_header(), "bytes=668-999");
}

//! Read-only hit-testing against a path, for editor hosts that pick anchors
//! and segments under a cursor.

use crate::constants::HIT_TEST_SAMPLES;
use crate::data::{Path, Point};

/// Point index of the anchor closest to `position`, if any lies strictly
/// within `max_distance`.
pub fn closest_anchor(path: &Path, position: &Point, max_distance: f64) -> Option<usize> {
    path.anchor_positions()
        .enumerate()
        .map(|(k, anchor)| (k * 3, (anchor - position).norm()))
        .filter(|&(_, distance)| distance < max_distance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

/// Index of the segment whose curve passes closest to `position`, if any
/// passes strictly within `max_distance`.
pub fn closest_segment(path: &Path, position: &Point, max_distance: f64) -> Option<usize> {
    path.segments()
        .enumerate()
        .map(|(i, segment)| (i, segment.distance_to(position, HIT_TEST_SAMPLES)))
        .filter(|&(_, distance)| distance < max_distance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

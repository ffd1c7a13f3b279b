//! Auto-set control point solver.
//!
//! The rules work on a raw point sequence (anchors at every third index) so
//! that `Path` can apply them to its own storage after each edit.

use nalgebra::Vector3;

use crate::constants::{AUTO_TANGENT_SCALE, EPSILON};
use crate::data::Point;

fn loop_index(len: usize, i: isize) -> usize {
    i.rem_euclid(len as isize) as usize
}

/// Place both control points of the anchor at `anchor_index`.
///
/// The shared direction points from the next neighbour towards the previous
/// one; each arm is half the distance to the neighbour on its side. When the
/// two neighbours lie in the same direction (the two-anchor closed loop) the
/// arms run perpendicular to the neighbour offset instead.
pub fn auto_set_anchor_control_points(points: &mut [Point], anchor_index: usize, closed: bool) {
    let len = points.len();
    let anchor = points[anchor_index];
    let index = anchor_index as isize;
    let mut direction = Point::zeros();
    let mut distances = [0.0; 2];
    let mut neighbour_offset = None;

    if anchor_index >= 3 || closed {
        let offset = points[loop_index(len, index - 3)] - anchor;
        if let Some(unit) = offset.try_normalize(EPSILON) {
            direction += unit;
            neighbour_offset = Some(offset);
        }
        distances[0] = offset.norm();
    }
    if anchor_index + 3 < len || closed {
        let offset = points[loop_index(len, index + 3)] - anchor;
        if let Some(unit) = offset.try_normalize(EPSILON) {
            direction -= unit;
            neighbour_offset = neighbour_offset.or(Some(offset));
        }
        distances[1] = -offset.norm();
    }

    // Without any usable neighbour both arms have zero length and the
    // controls collapse onto the anchor.
    let direction = direction
        .try_normalize(EPSILON)
        .or_else(|| neighbour_offset.and_then(perpendicular))
        .unwrap_or_else(Point::zeros);

    for (side, distance) in distances.iter().enumerate() {
        let control = index + side as isize * 2 - 1;
        if (control >= 0 && (control as usize) < len) || closed {
            points[loop_index(len, control)] = anchor + direction * *distance * AUTO_TANGENT_SCALE;
        }
    }
}

/// Unit vector perpendicular to `offset`, preferring the XY plane.
fn perpendicular(offset: Point) -> Option<Point> {
    offset
        .cross(&Vector3::z())
        .try_normalize(EPSILON)
        .or_else(|| offset.cross(&Vector3::y()).try_normalize(EPSILON))
}

/// Open paths pin their outer control points to the midpoint of the first
/// and last anchor pairs.
pub fn auto_set_start_and_end_controls(points: &mut [Point], closed: bool) {
    let len = points.len();
    if closed || len < 4 {
        return;
    }
    points[1] = (points[0] + points[3]) * 0.5;
    points[len - 2] = (points[len - 1] + points[len - 4]) * 0.5;
}

/// Re-solve the anchors within one segment of `updated_anchor_index`.
pub fn auto_set_affected_control_points(
    points: &mut [Point],
    updated_anchor_index: usize,
    closed: bool,
) {
    let len = points.len() as isize;
    let centre = updated_anchor_index as isize;
    for i in (centre - 3..=centre + 3).step_by(3) {
        if (i >= 0 && i < len) || closed {
            auto_set_anchor_control_points(points, loop_index(points.len(), i), closed);
        }
    }
    auto_set_start_and_end_controls(points, closed);
}

/// Re-solve every anchor.
pub fn auto_set_all_control_points(points: &mut [Point], closed: bool) {
    for anchor_index in (0..points.len()).step_by(3) {
        auto_set_anchor_control_points(points, anchor_index, closed);
    }
    auto_set_start_and_end_controls(points, closed);
}

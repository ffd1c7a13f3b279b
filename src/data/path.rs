//! An editable sequence of cubic bezier segments.
//!
//! Points are stored flat: every index `i` with `i % 3 == 0` is an anchor and
//! its neighbours are control points. An open path holds `3 * S + 1` points,
//! a closed one `3 * S` where the last two points connect the final anchor
//! back to the first.
//!
//! # Example
//!
//! ```rust
//! use bezier_road::{pt, Path};
//!
//! let mut path = Path::new(pt!(0, 0));
//! path.add_segment(pt!(5, 0)).unwrap();
//!
//! assert_eq!(path.num_points(), 7);
//! assert_eq!(path.num_segments(), 2);
//! assert_eq!(path.point_at(6).unwrap(), pt!(5, 0));
//! ```

use std::f64::consts::FRAC_PI_2;

use log::debug;
use nalgebra::{Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;
use crate::data::{AnchorState, BezierSegment, Point};
use crate::error::{PathError, PathResult};
use crate::modules::{resample, tangent};

/// Bezier path with per-anchor orientation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PathData", into = "PathData")]
pub struct Path {
    points: Vec<Point>,
    anchors: Vec<AnchorState>,
    is_closed: bool,
    auto_set_control_points: bool,
    reference_axis: Unit<Vector3<f64>>,
}

/// Unchecked serialized form of a [`Path`].
#[derive(Serialize, Deserialize)]
struct PathData {
    points: Vec<Point>,
    anchors: Vec<AnchorState>,
    is_closed: bool,
    auto_set_control_points: bool,
    reference_axis: Unit<Vector3<f64>>,
}

impl TryFrom<PathData> for Path {
    type Error = PathError;

    fn try_from(data: PathData) -> PathResult<Self> {
        // Deserialized units are not renormalized.
        let reference_axis = Unit::try_new(data.reference_axis.into_inner(), EPSILON)
            .filter(|axis| axis.iter().all(|c| c.is_finite()))
            .ok_or(PathError::InvalidReferenceAxis)?;
        let path = Self {
            points: data.points,
            anchors: data.anchors,
            is_closed: data.is_closed,
            auto_set_control_points: data.auto_set_control_points,
            reference_axis,
        };
        path.validate()?;
        Ok(path)
    }
}

impl From<Path> for PathData {
    fn from(path: Path) -> Self {
        Self {
            points: path.points,
            anchors: path.anchors,
            is_closed: path.is_closed,
            auto_set_control_points: path.auto_set_control_points,
            reference_axis: path.reference_axis,
        }
    }
}

impl Path {
    /// A single open segment running from `origin - x` to `origin + x`.
    pub fn new(origin: Point) -> Self {
        Self {
            points: default_segment(origin),
            anchors: vec![AnchorState::default(); 2],
            is_closed: false,
            auto_set_control_points: false,
            reference_axis: Vector3::z_axis(),
        }
    }

    /// Replace the whole path by the default segment around `origin`.
    /// The reference axis is kept.
    pub fn reset(&mut self, origin: Point) {
        *self = Self {
            reference_axis: self.reference_axis,
            ..Self::new(origin)
        };
    }

    /// Use `axis` to sign the twist derived in [`Path::rotate_point`].
    pub fn with_reference_axis(mut self, axis: Unit<Vector3<f64>>) -> Self {
        self.reference_axis = axis;
        self
    }

    pub fn reference_axis(&self) -> Unit<Vector3<f64>> {
        self.reference_axis
    }

    /// Position of point `i`.
    pub fn point_at(&self, i: usize) -> PathResult<Point> {
        self.check_index(i)?;
        Ok(self.points[i])
    }

    /// Read-only view of the point sequence.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_segments(&self) -> usize {
        debug_assert!(self.validate().is_ok(), "path topology is corrupt");
        self.points.len() / 3
    }

    pub fn num_anchors(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_anchor(index: usize) -> bool {
        index % 3 == 0
    }

    /// Anchor positions in path order.
    pub fn anchor_positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().step_by(3).copied()
    }

    /// Orientation records, one per anchor, in path order.
    pub fn anchor_states(&self) -> &[AnchorState] {
        &self.anchors
    }

    /// Orientation record of the anchor at point index `anchor_index`.
    pub fn anchor_state(&self, anchor_index: usize) -> PathResult<&AnchorState> {
        self.check_anchor(anchor_index)?;
        Ok(&self.anchors[anchor_index / 3])
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Open or close the loop between the last and the first anchor.
    pub fn set_closed(&mut self, closed: bool) {
        if self.is_closed == closed {
            return;
        }
        self.is_closed = closed;

        let len = self.points.len();
        if closed {
            let outgoing = self.points[len - 1] * 2.0 - self.points[len - 2];
            let incoming = self.points[0] * 2.0 - self.points[1];
            self.points.push(outgoing);
            self.points.push(incoming);
            if self.auto_set_control_points {
                let last_anchor = self.points.len() - 3;
                tangent::auto_set_anchor_control_points(&mut self.points, 0, true);
                tangent::auto_set_anchor_control_points(&mut self.points, last_anchor, true);
            }
        } else {
            self.points.truncate(len - 2);
            if self.auto_set_control_points {
                tangent::auto_set_start_and_end_controls(&mut self.points, false);
            }
        }
    }

    pub fn toggle_closed(&mut self) {
        self.set_closed(!self.is_closed);
    }

    pub fn auto_set_control_points(&self) -> bool {
        self.auto_set_control_points
    }

    /// Enabling re-solves every control point; disabling freezes them.
    pub fn set_auto_set_control_points(&mut self, enabled: bool) {
        if self.auto_set_control_points == enabled {
            return;
        }
        self.auto_set_control_points = enabled;
        if enabled {
            tangent::auto_set_all_control_points(&mut self.points, self.is_closed);
        }
    }

    /// Append a segment ending at `anchor_pos`.
    pub fn add_segment(&mut self, anchor_pos: Point) -> PathResult<()> {
        if self.is_closed {
            return Err(PathError::ClosedPath);
        }

        let len = self.points.len();
        let last_anchor = self.points[len - 1];
        let mirrored = last_anchor * 2.0 - self.points[len - 2];
        self.points.push(mirrored);
        self.points.push((last_anchor + anchor_pos) * 0.5);
        self.points.push(anchor_pos);
        self.anchors.push(AnchorState::default());

        if self.auto_set_control_points {
            let new_anchor = self.points.len() - 1;
            tangent::auto_set_affected_control_points(&mut self.points, new_anchor, false);
        }
        Ok(())
    }

    /// Insert a new anchor at `anchor_pos` inside segment `segment_index`.
    ///
    /// The new anchor's orientation is blended halfway between the two anchors
    /// of the split segment.
    pub fn split_segment(&mut self, anchor_pos: Point, segment_index: usize) -> PathResult<()> {
        self.check_segment(segment_index)?;

        let insert_at = segment_index * 3 + 2;
        self.points
            .splice(insert_at..insert_at, [anchor_pos, anchor_pos, anchor_pos]);

        let start = self.anchors[segment_index];
        let end = self.anchors[(segment_index + 1) % self.anchors.len()];
        self.anchors.insert(segment_index + 1, start.lerp(&end, 0.5));

        let new_anchor = segment_index * 3 + 3;
        if self.auto_set_control_points {
            tangent::auto_set_affected_control_points(&mut self.points, new_anchor, self.is_closed);
        } else {
            tangent::auto_set_anchor_control_points(&mut self.points, new_anchor, self.is_closed);
        }
        Ok(())
    }

    /// Remove the anchor at point index `anchor_index` together with its
    /// control points.
    ///
    /// Returns `Ok(false)` without changing anything when the path is already
    /// at its minimum size: one segment when open, two when closed.
    pub fn delete_segment(&mut self, anchor_index: usize) -> PathResult<bool> {
        self.check_anchor(anchor_index)?;

        let segments = self.num_segments();
        if !(segments > 2 || (!self.is_closed && segments > 1)) {
            debug!(
                "refusing to delete anchor {anchor_index}: path has {segments} segments (closed: {})",
                self.is_closed
            );
            return Ok(false);
        }

        let len = self.points.len();
        if anchor_index == 0 {
            if self.is_closed {
                self.points[len - 1] = self.points[2];
            }
            self.points.drain(0..3);
        } else if anchor_index == len - 1 && !self.is_closed {
            self.points.drain(anchor_index - 2..=anchor_index);
        } else {
            self.points.drain(anchor_index - 1..=anchor_index + 1);
        }
        self.anchors.remove(anchor_index / 3);

        if self.auto_set_control_points {
            tangent::auto_set_all_control_points(&mut self.points, self.is_closed);
        }
        Ok(true)
    }

    /// The four points of segment `i`; the last one wraps to anchor 0 on the
    /// closing segment of a closed path.
    pub fn segment_points(&self, i: usize) -> PathResult<[Point; 4]> {
        self.check_segment(i)?;
        Ok(self.segment_points_unchecked(i))
    }

    pub fn segment(&self, i: usize) -> PathResult<BezierSegment> {
        Ok(BezierSegment::Cubic {
            points: self.segment_points(i)?,
        })
    }

    pub fn segments(&self) -> impl Iterator<Item = BezierSegment> + '_ {
        (0..self.num_segments()).map(|i| BezierSegment::Cubic {
            points: self.segment_points_unchecked(i),
        })
    }

    /// Move point `i` to `position`.
    ///
    /// Anchors drag their control points along, or re-solve them when
    /// auto-set is on. A manually moved control point keeps the opposite
    /// control point collinear through the anchor at its original distance.
    /// Control points cannot be moved while auto-set is on.
    pub fn move_point(&mut self, i: usize, position: Point) -> PathResult<()> {
        self.check_index(i)?;

        let is_anchor = Self::is_anchor(i);
        if !is_anchor && self.auto_set_control_points {
            debug!("ignoring move of control point {i}: control points are auto-set");
            return Ok(());
        }

        let delta = position - self.points[i];
        self.points[i] = position;

        let len = self.points.len();
        let index = i as isize;
        if self.auto_set_control_points {
            tangent::auto_set_affected_control_points(&mut self.points, i, self.is_closed);
        } else if is_anchor {
            if i + 1 < len || self.is_closed {
                let next = self.loop_index(index + 1);
                self.points[next] += delta;
            }
            if i >= 1 || self.is_closed {
                let previous = self.loop_index(index - 1);
                self.points[previous] += delta;
            }
        } else {
            let next_is_anchor = Self::is_anchor(i + 1);
            let (opposite, anchor) = if next_is_anchor {
                (index + 2, index + 1)
            } else {
                (index - 2, index - 1)
            };
            if (opposite >= 0 && (opposite as usize) < len) || self.is_closed {
                let anchor = self.points[self.loop_index(anchor)];
                let opposite = self.loop_index(opposite);
                let distance = (anchor - self.points[opposite]).norm();
                if let Some(direction) = (anchor - position).try_normalize(EPSILON) {
                    self.points[opposite] = anchor + direction * distance;
                }
            }
        }
        Ok(())
    }

    /// Assign a new orientation to the anchor at point index `anchor_index`.
    ///
    /// The rotation from the old to the new orientation is added to the
    /// anchor's twist angle. Its sign is positive when the rotation axis lies
    /// within 90 degrees of the reference axis.
    pub fn rotate_point(
        &mut self,
        anchor_index: usize,
        orientation: UnitQuaternion<f64>,
    ) -> PathResult<()> {
        self.check_anchor(anchor_index)?;

        let reference = self.reference_axis.into_inner();
        let state = &mut self.anchors[anchor_index / 3];
        let delta = orientation * state.rotation.inverse();
        state.rotation = orientation;

        if let Some((axis, angle)) = delta.axis_angle() {
            let signed = if axis.into_inner().angle(&reference) > FRAC_PI_2 {
                -angle
            } else {
                angle
            };
            state.angle += signed.to_degrees();
        }
        Ok(())
    }

    /// Resample the whole path into points `spacing` apart along the curve.
    /// See [`resample::evenly_spaced_points`].
    pub fn calculate_evenly_spaced_points(
        &self,
        spacing: f64,
        resolution: f64,
    ) -> PathResult<Vec<Point>> {
        resample::evenly_spaced_points(self, spacing, resolution)
    }

    /// Check the point-count and anchor-count invariants.
    pub fn validate(&self) -> PathResult<()> {
        let len = self.points.len();
        let (well_formed, expected_anchors) = if self.is_closed {
            (len >= 6 && len % 3 == 0, len / 3)
        } else {
            (len >= 4 && len % 3 == 1, len / 3 + 1)
        };
        if !well_formed || self.anchors.len() != expected_anchors {
            return Err(PathError::CorruptTopology {
                points: len,
                anchors: self.anchors.len(),
                closed: self.is_closed,
            });
        }
        Ok(())
    }

    fn segment_points_unchecked(&self, i: usize) -> [Point; 4] {
        [
            self.points[i * 3],
            self.points[i * 3 + 1],
            self.points[i * 3 + 2],
            self.points[self.loop_index(i as isize * 3 + 3)],
        ]
    }

    fn loop_index(&self, i: isize) -> usize {
        i.rem_euclid(self.points.len() as isize) as usize
    }

    fn check_index(&self, index: usize) -> PathResult<()> {
        if index >= self.points.len() {
            return Err(PathError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        Ok(())
    }

    fn check_anchor(&self, index: usize) -> PathResult<()> {
        self.check_index(index)?;
        if !Self::is_anchor(index) {
            return Err(PathError::NotAnAnchor(index));
        }
        Ok(())
    }

    fn check_segment(&self, index: usize) -> PathResult<()> {
        let count = self.num_segments();
        if index >= count {
            return Err(PathError::SegmentOutOfRange { index, count });
        }
        Ok(())
    }
}

fn default_segment(origin: Point) -> Vec<Point> {
    let left = -Vector3::x();
    let right = Vector3::x();
    let up = Vector3::y();
    let down = -Vector3::y();
    vec![
        origin + left,
        origin + (left + up) * 0.5,
        origin + (right + down) * 0.5,
        origin + right,
    ]
}

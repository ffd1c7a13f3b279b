//! Arc-length resampling of a path into an evenly spaced polyline.
//!
//! Each segment is walked in `ceil(estimated_length * resolution * 10)`
//! equal parameter steps. Whenever the distance travelled since the last
//! emitted point reaches the spacing, a new point is emitted on the chord
//! between the two latest samples, pulled back by the overshoot. The result
//! approximates true arc length; higher resolution walks finer steps, up to
//! [`MAX_DIVISIONS_PER_SEGMENT`] steps per segment.

use log::trace;

use crate::constants::{DIVISIONS_PER_UNIT, EPSILON, MAX_DIVISIONS_PER_SEGMENT};
use crate::data::{Path, Point};
use crate::error::{PathError, PathResult};

/// Points `spacing` apart along `path`, starting at its first point.
///
/// Closed paths include the closing segment.
pub fn evenly_spaced_points(path: &Path, spacing: f64, resolution: f64) -> PathResult<Vec<Point>> {
    if !spacing.is_finite() || spacing <= EPSILON {
        return Err(PathError::InvalidSpacing(spacing));
    }
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(PathError::InvalidResolution(resolution));
    }

    let first = path.point_at(0)?;
    let mut evenly_spaced = vec![first];
    let mut previous = first;
    let mut since_last_point = 0.0;

    for segment in path.segments() {
        let divisions = subdivisions(segment.estimated_length(), resolution);
        for step in 1..=divisions {
            let t = step as f64 / divisions as f64;
            let on_curve = segment.point_at(t);
            since_last_point += (on_curve - previous).norm();

            // Accumulated float error must not swallow a point that lands exactly on the spacing.
            while since_last_point + EPSILON >= spacing {
                let overshoot = (since_last_point - spacing).max(0.0);
                let back = (previous - on_curve)
                    .try_normalize(EPSILON)
                    .unwrap_or_else(Point::zeros);
                let point = on_curve + back * overshoot;
                evenly_spaced.push(point);
                since_last_point = overshoot;
                previous = point;
            }
            previous = on_curve;
        }
    }

    trace!(
        "resampled {} segments at spacing {spacing} into {} points",
        path.num_segments(),
        evenly_spaced.len()
    );
    Ok(evenly_spaced)
}

fn subdivisions(estimated_length: f64, resolution: f64) -> usize {
    // Float to int casts saturate, so huge products land on the cap.
    ((estimated_length * resolution * DIVISIONS_PER_UNIT).ceil() as usize)
        .clamp(1, MAX_DIVISIONS_PER_SEGMENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_RESOLUTION;
    use crate::pt;
    use approx::assert_abs_diff_eq;

    /// Straight open path from the origin to `(length, 0)`.
    fn straight(length: f64) -> Path {
        let mut path = Path::new(pt!(0, 0));
        path.set_auto_set_control_points(true);
        path.move_point(0, pt!(0, 0)).unwrap();
        path.move_point(3, pt!(length, 0)).unwrap();
        path
    }

    #[test]
    fn test_straight_path_point_count() {
        let points = straight(4.0)
            .calculate_evenly_spaced_points(1.0, DEFAULT_RESOLUTION)
            .unwrap();
        assert_eq!(points.len(), 5);
        for (i, point) in points.iter().enumerate() {
            assert_abs_diff_eq!(*point, pt!(i as f64, 0), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_spacing_is_uniform() {
        let points = straight(10.0)
            .calculate_evenly_spaced_points(3.0, DEFAULT_RESOLUTION)
            .unwrap();
        assert_eq!(points.len(), 4);
        for pair in points.windows(2) {
            assert_abs_diff_eq!((pair[1] - pair[0]).norm(), 3.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_first_point_is_path_start() {
        let mut path = Path::new(pt!(3, 1));
        path.add_segment(pt!(6, 4)).unwrap();
        let points = path.calculate_evenly_spaced_points(0.25, 2.0).unwrap();
        assert_eq!(points[0], path.point_at(0).unwrap());
        assert!(points.len() > 2);
    }

    #[test]
    fn test_closed_path_walks_closing_segment() {
        let mut path = Path::new(pt!(0, 0));
        path.add_segment(pt!(0, 4)).unwrap();
        let open = path.calculate_evenly_spaced_points(0.5, 1.0).unwrap();
        path.set_closed(true);
        let closed = path.calculate_evenly_spaced_points(0.5, 1.0).unwrap();
        assert!(closed.len() > open.len());
    }

    #[test]
    fn test_spacing_longer_than_path() {
        let points = straight(2.0).calculate_evenly_spaced_points(5.0, 1.0).unwrap();
        assert_eq!(points, vec![pt!(0, 0)]);
    }

    #[test]
    fn test_invalid_arguments() {
        let path = straight(2.0);
        assert_eq!(
            path.calculate_evenly_spaced_points(0.0, 1.0),
            Err(PathError::InvalidSpacing(0.0))
        );
        assert!(matches!(
            path.calculate_evenly_spaced_points(f64::NAN, 1.0),
            Err(PathError::InvalidSpacing(_))
        ));
        assert_eq!(
            path.calculate_evenly_spaced_points(1.0, -1.0),
            Err(PathError::InvalidResolution(-1.0))
        );
    }

    #[test]
    fn test_degenerate_segment_has_one_division() {
        let mut path = Path::new(pt!(0, 0));
        // Anchors first: moving an anchor drags its control points along.
        for i in [0, 3, 1, 2] {
            path.move_point(i, pt!(1, 1)).unwrap();
        }
        let points = path.calculate_evenly_spaced_points(1.0, 1.0).unwrap();
        assert_eq!(points, vec![pt!(1, 1)]);
        assert_eq!(subdivisions(0.0, 1.0), 1);
    }

    #[test]
    fn test_huge_resolution_is_capped() {
        assert_eq!(subdivisions(4.5, 1e300), MAX_DIVISIONS_PER_SEGMENT);
        assert_eq!(subdivisions(f64::MAX, f64::MAX), MAX_DIVISIONS_PER_SEGMENT);

        let points = straight(4.0).calculate_evenly_spaced_points(1.0, 1e300).unwrap();
        assert_eq!(points.len(), 5);
        assert_abs_diff_eq!(points[4], pt!(4, 0), epsilon = 1e-6);
    }
}

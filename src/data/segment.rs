//! Bezier segment: quadratic or cubic bezier curve segment

use crate::data::point::Point;
use crate::modules::bezier::{evaluate_cubic, evaluate_quadratic};

/// A bezier segment, either cubic or quadratic
#[derive(Debug, Clone, PartialEq)]
pub enum BezierSegment {
    /// Cubic bezier with 4 control points
    Cubic {
        /// Control points: start anchor, control1, control2, end anchor
        points: [Point; 4],
    },
    /// Quadratic bezier with 3 control points
    Quadratic {
        /// Control points: start anchor, control point, end anchor
        points: [Point; 3],
    },
}

impl BezierSegment {
    /// Create a cubic segment with 4 control points
    pub fn cubic(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self::Cubic {
            points: [p1, p2, p3, p4],
        }
    }

    /// Create a quadratic segment with 3 control points
    pub fn quadratic(p1: Point, p2: Point, p3: Point) -> Self {
        Self::Quadratic {
            points: [p1, p2, p3],
        }
    }

    /// Get all control points for this segment
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Cubic { points } => points.as_slice(),
            Self::Quadratic { points } => points.as_slice(),
        }
    }

    pub fn start(&self) -> Point {
        self.points()[0]
    }

    pub fn end(&self) -> Point {
        let points = self.points();
        points[points.len() - 1]
    }

    /// Get a point on the bezier curve at parameter t.
    ///
    /// Values outside `[0, 1]` extrapolate the curve polynomial.
    pub fn point_at(&self, t: f64) -> Point {
        match self {
            Self::Cubic { points } => {
                evaluate_cubic(points[0], points[1], points[2], points[3], t)
            }
            Self::Quadratic { points } => evaluate_quadratic(points[0], points[1], points[2], t),
        }
    }

    /// Generate a series of points along the bezier curve, both ends included
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => Vec::new(),
            1 => vec![self.start()],
            _ => (0..num_points)
                .map(|i| self.point_at(i as f64 / (num_points - 1) as f64))
                .collect(),
        }
    }

    /// Total length of the control polygon
    pub fn control_net_length(&self) -> f64 {
        self.points().windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    /// Cheap curve length estimate: chord plus half the control net.
    pub fn estimated_length(&self) -> f64 {
        (self.end() - self.start()).norm() + self.control_net_length() / 2.0
    }

    /// Distance from `position` to the curve, measured against a polyline of
    /// `samples` spans.
    pub fn distance_to(&self, position: &Point, samples: usize) -> f64 {
        let polyline = self.sample_points(samples.max(1) + 1);
        polyline
            .windows(2)
            .map(|w| distance_to_line_segment(position, &w[0], &w[1]))
            .fold(f64::INFINITY, f64::min)
    }
}

fn distance_to_line_segment(p: &Point, a: &Point, b: &Point) -> f64 {
    let ab = b - a;
    let length_squared = ab.norm_squared();
    if length_squared == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / length_squared).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

//! SVG path data export for paths, segments and resampled polylines
//!
//! Coordinates are projected onto the XY plane.
//!
//! # Examples
//!
//! ## Exporting a path
//!
//! ```rust
//! use bezier_road::{modules::export::svg_path::ToSvgPath, pt, Path};
//!
//! let path = Path::new(pt!(0, 0));
//! assert_eq!(path.to_svg_path(), "M-1,0 C-0.5,0.5,0.5,-0.5,1,0");
//! ```
//!
//! ## Exporting a resampled polyline
//!
//! ```rust
//! use bezier_road::{modules::export::svg_path::ToSvgPath, pt};
//!
//! let points = vec![pt!(0, 0), pt!(1, 0), pt!(2, 1)];
//! assert_eq!(points.as_slice().to_svg_path(), "M0,0 L1,0 L2,1");
//! ```

use crate::data::{BezierSegment, Path, Point};

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string
    fn to_svg_path(&self) -> String;
}

fn push_segment(result: &mut String, segment: &BezierSegment, first: bool) {
    let points = segment.points();
    if first {
        result.push_str(&format!("M{},{}", points[0].x, points[0].y));
    }
    match segment {
        BezierSegment::Cubic { points } => {
            result.push_str(&format!(
                " C{},{},{},{},{},{}",
                points[1].x, points[1].y, points[2].x, points[2].y, points[3].x, points[3].y
            ));
        }
        BezierSegment::Quadratic { points } => {
            result.push_str(&format!(
                " Q{},{},{},{}",
                points[1].x, points[1].y, points[2].x, points[2].y
            ));
        }
    }
}

impl ToSvgPath for BezierSegment {
    fn to_svg_path(&self) -> String {
        let mut result = String::new();
        push_segment(&mut result, self, true);
        result
    }
}

impl ToSvgPath for Path {
    fn to_svg_path(&self) -> String {
        let mut result = String::new();
        for (i, segment) in self.segments().enumerate() {
            push_segment(&mut result, &segment, i == 0);
        }

        // Add closing command for closed paths
        if self.is_closed() {
            result.push_str(" Z");
        }

        result
    }
}

impl ToSvgPath for [Point] {
    fn to_svg_path(&self) -> String {
        self.iter()
            .enumerate()
            .map(|(i, p)| format!("{}{},{}", if i == 0 { "M" } else { "L" }, p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

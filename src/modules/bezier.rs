//! Stateless evaluation of quadratic and cubic bezier curves by de Casteljau
//! interpolation.
//!
//! `t` is not clamped: values outside `[0, 1]` extrapolate linearly through
//! each interpolation level, the same way `lerp` does.

use crate::data::Point;

/// Point on the quadratic curve `a, b, c` at parameter `t`.
pub fn evaluate_quadratic(a: Point, b: Point, c: Point, t: f64) -> Point {
    let p0 = a.lerp(&b, t);
    let p1 = b.lerp(&c, t);
    p0.lerp(&p1, t)
}

/// Point on the cubic curve `a, b, c, d` at parameter `t`.
pub fn evaluate_cubic(a: Point, b: Point, c: Point, d: Point, t: f64) -> Point {
    let p0 = evaluate_quadratic(a, b, c, t);
    let p1 = evaluate_quadratic(b, c, d, t);
    p0.lerp(&p1, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pt;
    use approx::assert_relative_eq;

    #[test]
    fn test_quadratic_midpoint() {
        let p = evaluate_quadratic(pt!(0, 0), pt!(50, 100), pt!(100, 0), 0.5);
        assert_relative_eq!(p, pt!(50, 50));
    }

    #[test]
    fn test_cubic_endpoints() {
        let (a, b, c, d) = (pt!(0, 0, 1), pt!(1, 2, 1), pt!(2, 2, 1), pt!(3, 0, 1));
        assert_eq!(evaluate_cubic(a, b, c, d, 0.0), a);
        assert_eq!(evaluate_cubic(a, b, c, d, 1.0), d);
    }

    #[test]
    fn test_cubic_out_of_range_extrapolates() {
        // Evenly spaced collinear control points parametrise the line linearly.
        let (a, b, c, d) = (pt!(0, 0), pt!(1, 0), pt!(2, 0), pt!(3, 0));
        assert_relative_eq!(evaluate_cubic(a, b, c, d, 2.0), pt!(6, 0), epsilon = 1e-12);
        assert_relative_eq!(evaluate_cubic(a, b, c, d, -1.0), pt!(-3, 0), epsilon = 1e-12);
    }
}

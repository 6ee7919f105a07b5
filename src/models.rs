//! Geometric primitives recovered from edge points.
//!
//! Each model is the minimal descriptor produced by its estimator together
//! with a point-to-model distance used for inlier scoring.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Smallest height, in pixels, a circle sample may rise above its longest
/// side. Flatter triples fit a straight edge within rasterisation error.
pub const MIN_SAMPLE_HEIGHT: f64 = 1.0;

/// Largest circumradius accepted, as a multiple of the sample's longest side.
pub const MAX_RADIUS_TO_SPAN: f64 = 10.0;

/// A model that can measure how far a point lies from it.
pub trait Primitive {
    /// Unsigned distance in pixels. Degenerate models report `f64::INFINITY`.
    fn distance(&self, p: &Point) -> f64;
}

/// Infinite line through two defining points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// A line whose defining points coincide has no direction.
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Direction vector `b - a` in floating point.
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(
            f64::from(self.b.x - self.a.x),
            f64::from(self.b.y - self.a.y),
        )
    }
}

impl Primitive for Line {
    fn distance(&self, p: &Point) -> f64 {
        let (x0, y0) = (f64::from(p.x), f64::from(p.y));
        let (x1, y1) = (f64::from(self.a.x), f64::from(self.a.y));
        let (x2, y2) = (f64::from(self.b.x), f64::from(self.b.y));

        let denominator = self.direction().norm();
        if denominator == 0.0 {
            return f64::INFINITY;
        }
        let numerator = ((y2 - y1) * x0 - (x2 - x1) * y0 + x2 * y1 - y2 * x1).abs();
        numerator / denominator
    }
}

/// Circle given by a real-valued center and a non-negative radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circumscribed circle of three points.
    ///
    /// Returns `None` when the points are (nearly) collinear, where the
    /// circumcircle is undefined or absurdly large. Both tests scale with
    /// the sample: the triangle must stand at least [`MIN_SAMPLE_HEIGHT`]
    /// above its longest side, and the radius may not exceed
    /// [`MAX_RADIUS_TO_SPAN`] times that side.
    pub fn from_points(p1: &Point, p2: &Point, p3: &Point) -> Option<Self> {
        let (x1, y1) = (f64::from(p1.x), f64::from(p1.y));
        let (x2, y2) = (f64::from(p2.x), f64::from(p2.y));
        let (x3, y3) = (f64::from(p3.x), f64::from(p3.y));

        let span = (x1 - x2)
            .hypot(y1 - y2)
            .max((x2 - x3).hypot(y2 - y3))
            .max((x1 - x3).hypot(y1 - y3));
        if span == 0.0 {
            return None;
        }

        // |A| is twice the triangle area, so |A| / span is its height.
        let a = x1 * (y2 - y3) - y1 * (x2 - x3) + x2 * y3 - x3 * y2;
        if a.abs() / span < MIN_SAMPLE_HEIGHT {
            return None;
        }

        let s1 = x1 * x1 + y1 * y1;
        let s2 = x2 * x2 + y2 * y2;
        let s3 = x3 * x3 + y3 * y3;
        let b = s1 * (y3 - y2) + s2 * (y1 - y3) + s3 * (y2 - y1);
        let c = s1 * (x2 - x3) + s2 * (x3 - x1) + s3 * (x1 - x2);

        let center = Point2::new(-b / (2.0 * a), -c / (2.0 * a));
        let radius = nalgebra::distance(&center, &Point2::new(x1, y1));
        if radius > MAX_RADIUS_TO_SPAN * span {
            return None;
        }
        Some(Self { center, radius })
    }

    pub fn is_finite(&self) -> bool {
        self.center.x.is_finite() && self.center.y.is_finite() && self.radius.is_finite()
    }
}

impl Primitive for Circle {
    fn distance(&self, p: &Point) -> f64 {
        let p = Point2::new(f64::from(p.x), f64::from(p.y));
        (nalgebra::distance(&self.center, &p) - self.radius).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn line_distance_is_perpendicular() {
        let line = Line::new(Point::new(0, 0), Point::new(10, 0));
        assert_relative_eq!(line.distance(&Point::new(5, 3)), 3.0);
        assert_relative_eq!(line.distance(&Point::new(-40, -2)), 2.0);

        let diagonal = Line::new(Point::new(0, 0), Point::new(1, 1));
        assert_relative_eq!(
            diagonal.distance(&Point::new(1, 0)),
            std::f64::consts::FRAC_1_SQRT_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn line_distance_ignores_defining_point_order() {
        let ab = Line::new(Point::new(3, -7), Point::new(12, 5));
        let ba = Line::new(Point::new(12, 5), Point::new(3, -7));
        for p in [Point::new(0, 0), Point::new(100, -3), Point::new(7, 1)] {
            assert_relative_eq!(ab.distance(&p), ba.distance(&p), epsilon = 1e-12);
        }
    }

    #[test]
    fn degenerate_line_is_infinitely_far_from_everything() {
        let line = Line::new(Point::new(4, 4), Point::new(4, 4));
        assert!(line.is_degenerate());
        assert_eq!(line.distance(&Point::new(4, 4)), f64::INFINITY);
    }

    #[test]
    fn circumcircle_of_known_triangle() {
        // Center (3, 4), radius 5.
        let circle =
            Circle::from_points(&Point::new(0, 0), &Point::new(6, 0), &Point::new(3, 9)).unwrap();
        assert_relative_eq!(circle.center.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(circle.center.y, 4.0, epsilon = 1e-12);
        assert_relative_eq!(circle.radius, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn defining_points_lie_on_the_circle() {
        let pts = [Point::new(17, -4), Point::new(-9, 22), Point::new(40, 31)];
        let circle = Circle::from_points(&pts[0], &pts[1], &pts[2]).unwrap();
        for p in &pts {
            assert!(circle.distance(p) < 1e-9, "distance {}", circle.distance(p));
        }
    }

    #[test]
    fn collinear_points_have_no_circumcircle() {
        let circle = Circle::from_points(&Point::new(0, 0), &Point::new(5, 5), &Point::new(-3, -3));
        assert!(circle.is_none());
    }

    #[test]
    fn nearly_collinear_points_have_no_circumcircle() {
        // One pixel of lift over a 1000 px base.
        let flat = Circle::from_points(&Point::new(0, 0), &Point::new(1, 0), &Point::new(1000, 1));
        assert!(flat.is_none());

        // Tall enough, but the radius would be ~62500 for a 1000 px sample.
        let stretched =
            Circle::from_points(&Point::new(0, 0), &Point::new(500, 0), &Point::new(1000, 4));
        assert!(stretched.is_none());

        // The same lift over a short base is a genuine arc.
        let arc = Circle::from_points(&Point::new(0, 0), &Point::new(3, 2), &Point::new(6, 0));
        assert!(arc.is_some());
    }

    #[test]
    fn triples_from_a_rasterised_line_have_no_circumcircle() {
        // Nearest-pixel rendering of y = x / 7.
        let edge: Vec<Point> = (0..400).map(|x| Point::new(x, (x + 3) / 7)).collect();
        for i in (0..edge.len()).step_by(37) {
            for j in (i + 1..edge.len()).step_by(23) {
                for k in (j + 1..edge.len()).step_by(11) {
                    assert!(
                        Circle::from_points(&edge[i], &edge[j], &edge[k]).is_none(),
                        "{:?} {:?} {:?}",
                        edge[i],
                        edge[j],
                        edge[k]
                    );
                }
            }
        }
    }

    #[test]
    fn circle_distance_is_unsigned() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 10.0);
        assert_relative_eq!(circle.distance(&Point::new(0, 0)), 10.0);
        assert_relative_eq!(circle.distance(&Point::new(0, 13)), 3.0);
        assert_relative_eq!(circle.distance(&Point::new(6, 8)), 0.0);
    }
}

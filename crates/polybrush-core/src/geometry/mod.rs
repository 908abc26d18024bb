//! Ring geometry and the boolean-operations capability.
//!
//! The brush core never clips polygons itself. It consumes overlap,
//! containment, and union through the [`BooleanGeometry`] trait;
//! [`GeoBackend`] is the stock implementation.

mod boolean;

pub use boolean::GeoBackend;

use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geometry backend errors.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("ring has only {0} coordinates, need at least 4 (closed triangle)")]
    DegenerateRing(usize),
    #[error("union produced no output ring")]
    EmptyUnion,
}

/// A closed linear ring of map coordinates (first point == last point).
///
/// Rings are stored closed; [`Ring::new`] appends the closing coordinate if
/// the input omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring(Vec<Point>);

impl Ring {
    /// Build a ring from coordinates, closing it if necessary.
    pub fn new(mut points: Vec<Point>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
        Self(points)
    }

    /// The ring's coordinates, closed.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Number of stored coordinates, including the closing one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the ring holds no coordinates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if first and last coordinates coincide.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Unsigned area enclosed by the ring (shoelace formula).
    pub fn area(&self) -> f64 {
        if self.0.len() < 4 {
            return 0.0;
        }
        let mut twice_area = 0.0;
        for pair in self.0.windows(2) {
            twice_area += pair[0].x * pair[1].y - pair[1].x * pair[0].y;
        }
        (twice_area / 2.0).abs()
    }

    /// Consume the ring and return its coordinates.
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

/// Boolean polygon operations consumed by the brush core.
///
/// Predicates follow the backend's boundary-inclusive conventions; the core
/// applies no additional tolerance. Implementations are assumed to succeed
/// on well-formed rings; failures surface as [`GeometryError`] and propagate
/// to the host.
pub trait BooleanGeometry {
    /// Approximate a circle as a closed ring.
    fn circle_to_ring(&self, center: Point, radius: f64) -> Ring;

    /// True if `a` and `b` share any area.
    fn overlaps(&self, a: &Ring, b: &Ring) -> bool;

    /// True if `a` fully contains `b`.
    fn contains(&self, a: &Ring, b: &Ring) -> bool;

    /// Boolean union of `a` and `b`, returned as a single exterior ring.
    fn union(&self, a: &Ring, b: &Ring) -> Result<Ring, GeometryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Ring {
        Ring::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_new_closes_open_ring() {
        let ring = unit_square();
        assert!(ring.is_closed());
        assert_eq!(ring.len(), 5);
    }

    #[test]
    fn test_new_keeps_closed_ring() {
        let ring = Ring::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 0.0),
        ]);
        assert!(ring.is_closed());
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn test_square_area() {
        assert!((unit_square().area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_area_orientation_independent() {
        let cw = Ring::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ]);
        assert!((cw.area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_ring_has_zero_area() {
        let ring = Ring::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(ring.area().abs() < f64::EPSILON);
    }

    #[test]
    fn test_ring_serde_round_trip() {
        let ring = unit_square();
        let json = serde_json::to_string(&ring).unwrap();
        let back: Ring = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ring);
    }
}

//! geo-crate backend for the boolean-operations capability.

use geo::{Area, BooleanOps, Contains, Intersects, LineString, Polygon};
use kurbo::Point;

use super::{BooleanGeometry, GeometryError, Ring};
use crate::config::DEFAULT_CIRCLE_SIDES;

/// Boolean geometry backed by the `geo` crate.
///
/// `overlaps` maps to `Intersects` (true for any shared point, containment
/// included), `contains` to `Contains`, `union` to `BooleanOps::union`.
#[derive(Debug, Clone)]
pub struct GeoBackend {
    /// Segment count for circle approximation.
    sides: usize,
}

impl Default for GeoBackend {
    fn default() -> Self {
        Self {
            sides: DEFAULT_CIRCLE_SIDES,
        }
    }
}

impl GeoBackend {
    /// Create a backend approximating circles with `sides` segments.
    pub fn new(sides: usize) -> Self {
        Self { sides: sides.max(3) }
    }

    fn to_polygon(ring: &Ring) -> Polygon<f64> {
        let coords: Vec<(f64, f64)> = ring.points().iter().map(|p| (p.x, p.y)).collect();
        Polygon::new(LineString::from(coords), vec![])
    }

    fn check_ring(ring: &Ring) -> Result<(), GeometryError> {
        if ring.len() < 4 {
            return Err(GeometryError::DegenerateRing(ring.len()));
        }
        Ok(())
    }
}

impl BooleanGeometry for GeoBackend {
    fn circle_to_ring(&self, center: Point, radius: f64) -> Ring {
        let step = std::f64::consts::TAU / self.sides as f64;
        let points = (0..self.sides)
            .map(|i| {
                let angle = step * i as f64;
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        Ring::new(points)
    }

    fn overlaps(&self, a: &Ring, b: &Ring) -> bool {
        Self::to_polygon(a).intersects(&Self::to_polygon(b))
    }

    fn contains(&self, a: &Ring, b: &Ring) -> bool {
        Self::to_polygon(a).contains(&Self::to_polygon(b))
    }

    fn union(&self, a: &Ring, b: &Ring) -> Result<Ring, GeometryError> {
        Self::check_ring(a)?;
        Self::check_ring(b)?;

        let merged = Self::to_polygon(a).union(&Self::to_polygon(b));

        // The inputs touch whenever the merger calls us, so the union is a
        // single polygon; keep the largest exterior if the backend ever
        // returns more.
        let largest = merged
            .into_iter()
            .max_by(|p, q| {
                p.unsigned_area()
                    .partial_cmp(&q.unsigned_area())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .ok_or(GeometryError::EmptyUnion)?;

        let points = largest
            .exterior()
            .coords()
            .map(|c| Point::new(c.x, c.y))
            .collect();
        Ok(Ring::new(points))
    }
}

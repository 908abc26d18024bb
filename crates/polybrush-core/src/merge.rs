//! Incremental merge of the brush region into the sketch polygon.

use crate::brush::BrushRegion;
use crate::geometry::{BooleanGeometry, GeometryError};
use crate::session::SketchPolygon;

/// Merges the live brush region into the accumulated sketch polygon.
///
/// A merge fires when the brush ring touches the sketch: it overlaps, the
/// sketch contains it, or it swallows the sketch whole. A brush that has
/// jumped to a disjoint location leaves the sketch untouched for that move;
/// the returned flag lets hosts layer their own policy on top.
#[derive(Debug, Clone)]
pub struct RegionMerger<G: BooleanGeometry> {
    geometry: G,
}

impl<G: BooleanGeometry> RegionMerger<G> {
    /// Create a merger over the given geometry backend.
    pub fn new(geometry: G) -> Self {
        Self { geometry }
    }

    /// The underlying geometry backend.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Merge `brush` into `sketch` in place.
    ///
    /// Returns `Ok(true)` when the sketch ring was replaced by the union,
    /// `Ok(false)` when the brush was disjoint. Backend failures on
    /// malformed rings propagate.
    pub fn merge(
        &self,
        brush: &BrushRegion,
        sketch: &mut SketchPolygon,
    ) -> Result<bool, GeometryError> {
        let brush_ring = self.geometry.circle_to_ring(brush.center(), brush.radius());

        let touches = self.geometry.overlaps(&brush_ring, sketch.ring())
            || self.geometry.contains(sketch.ring(), &brush_ring)
            || self.geometry.contains(&brush_ring, sketch.ring());
        if !touches {
            return Ok(false);
        }

        let merged = self.geometry.union(&brush_ring, sketch.ring())?;
        sketch.set_ring(merged);
        Ok(true)
    }
}

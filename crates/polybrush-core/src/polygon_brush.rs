//! The polygon brush drawing strategy.
//!
//! A pointer-down starts a session with the brush circle as the initial
//! sketch polygon; every move repositions the brush and unions it into the
//! sketch while they touch; release finishes the session and yields the
//! accumulated ring. Wheel ticks (under the resize condition) and pen
//! pressure (under the freehand condition) resize the brush.

use crate::brush::{BrushRegion, RadiusController};
use crate::config::BrushConfig;
use crate::geometry::{BooleanGeometry, GeoBackend, Ring};
use crate::input::InputEvent;
use crate::interaction::{BrushError, BrushStrategy};
use crate::merge::RegionMerger;
use crate::session::{DrawEvent, DrawSession, SketchPolygon};

/// Brush-drawing strategy over a boolean-geometry backend.
///
/// The *logical* radius is resolution-independent; the brush region carries
/// the *displayed* radius (`logical * view_resolution`), so the brush stays
/// visually constant-sized across zoom levels. Wheel resizing mutates the
/// logical radius; pressure scaling is transient and never writes back.
pub struct PolygonBrush<G: BooleanGeometry> {
    config: BrushConfig,
    radius_controller: RadiusController,
    merger: RegionMerger<G>,
    session: DrawSession,
    /// Live brush cursor; created lazily on the first qualifying event.
    brush: Option<BrushRegion>,
    /// Logical brush radius in resolution-independent units.
    radius: f64,
    /// Last observed view resolution.
    view_resolution: f64,
}

impl PolygonBrush<GeoBackend> {
    /// Create a brush with the stock geo-crate backend.
    pub fn new(config: BrushConfig) -> Self {
        let backend = GeoBackend::new(config.circle_sides);
        Self::with_geometry(config, backend)
    }
}

impl Default for PolygonBrush<GeoBackend> {
    fn default() -> Self {
        Self::new(BrushConfig::default())
    }
}

impl<G: BooleanGeometry> PolygonBrush<G> {
    /// Create a brush over a custom geometry backend.
    pub fn with_geometry(config: BrushConfig, geometry: G) -> Self {
        Self {
            radius_controller: RadiusController::new(&config),
            merger: RegionMerger::new(geometry),
            session: DrawSession::new(),
            brush: None,
            radius: config.initial_radius,
            view_resolution: 1.0,
            config,
        }
    }

    /// Register a draw-start/draw-end observer.
    pub fn add_observer(&mut self, observer: impl FnMut(&DrawEvent) + 'static) {
        self.session.add_observer(observer);
    }

    /// The session state machine.
    pub fn session(&self) -> &DrawSession {
        &self.session
    }

    /// The live brush region, if one exists yet.
    pub fn brush_region(&self) -> Option<&BrushRegion> {
        self.brush.as_ref()
    }

    /// Reposition the brush under the pointer, creating it on first use.
    ///
    /// The displayed radius is refreshed from the logical radius on every
    /// event; a pressing pen then overrides it for this event only.
    fn create_or_update_brush(&mut self, event: &InputEvent) {
        self.view_resolution = event.view_resolution;
        let displayed = self.radius * event.view_resolution;

        match &mut self.brush {
            Some(brush) => {
                brush.set_center(event.coordinate);
                brush.set_radius(displayed);
            }
            None => {
                self.brush = Some(BrushRegion::new(
                    event.coordinate,
                    displayed,
                    self.config.min_radius,
                ));
            }
        }

        if (self.config.freehand_condition)(event) && event.pressure != 0.0 {
            let scaled = self.radius_controller.adjust_by_pressure(event, self.radius);
            if let Some(brush) = &mut self.brush {
                brush.set_radius(scaled);
            }
        }
    }

    /// Ring approximation of the current brush region.
    fn brush_ring(&self) -> Option<Ring> {
        self.brush
            .as_ref()
            .map(|b| self.merger.geometry().circle_to_ring(b.center(), b.radius()))
    }
}

impl<G: BooleanGeometry> BrushStrategy for PolygonBrush<G> {
    /// Start a session if idle and the start condition holds.
    fn on_start(&mut self, event: &InputEvent) -> Result<bool, BrushError> {
        if self.session.is_drawing() {
            return Ok(false);
        }
        if !(self.config.start_condition)(event) {
            return Ok(false);
        }

        self.create_or_update_brush(event);
        let ring = match self.brush_ring() {
            Some(ring) => ring,
            None => return Ok(false),
        };
        Ok(self.session.begin(event.coordinate, SketchPolygon::new(ring)))
    }

    /// Move the brush; while drawing, merge it into the sketch.
    fn on_move(&mut self, event: &InputEvent) -> Result<(), BrushError> {
        self.create_or_update_brush(event);

        if self.session.is_drawing() {
            if let Some(brush) = self.brush.as_ref() {
                if let Some(sketch) = self.session.sketch_mut() {
                    self.merger.merge(brush, sketch)?;
                }
            }
        }
        Ok(())
    }

    /// Resize the brush if the resize condition holds.
    ///
    /// Consumed resize gestures are exclusive with move handling; the wheel
    /// tick adjusts the logical radius and never repositions the brush. A
    /// wheel event before the brush exists is consumed without effect.
    fn on_wheel(&mut self, event: &InputEvent) -> bool {
        if !(self.config.resize_condition)(event) {
            return false;
        }

        if let Some(brush) = &mut self.brush {
            self.radius = self.radius_controller.adjust_by_wheel(event, self.radius);
            self.view_resolution = event.view_resolution;
            brush.set_radius(self.radius * event.view_resolution);
            log::trace!("brush resized to {}", self.radius);
        }
        true
    }

    /// Finish the session, emitting draw-end and yielding the final ring.
    fn on_release(&mut self, _event: &InputEvent) -> Option<Ring> {
        let ring = self.session.finish()?;
        self.brush = None;
        Some(ring)
    }

    /// Discard the sketch and the brush region without notifications.
    fn on_abort(&mut self) {
        self.session.abort();
        self.brush = None;
    }

    /// Recompute the displayed radius; the logical radius is untouched.
    fn resolution_changed(&mut self, resolution: f64) {
        self.view_resolution = resolution;
        if let Some(brush) = &mut self.brush {
            brush.set_radius(self.radius * resolution);
        }
    }

    fn is_drawing(&self) -> bool {
        self.session.is_drawing()
    }

    fn brush_radius(&self) -> f64 {
        self.radius
    }
}

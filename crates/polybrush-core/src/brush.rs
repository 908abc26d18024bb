//! Brush region and radius control.

use kurbo::Point;

use crate::config::BrushConfig;
use crate::input::InputEvent;

/// The live circular sketch area following the pointer.
///
/// The center moves on every pointer move; radius writes go through
/// [`BrushRegion::set_radius`], which clamps to the configured minimum.
/// Radius *decisions* live in [`RadiusController`] so the region has a
/// single writer for sizing.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushRegion {
    center: Point,
    radius: f64,
    min_radius: f64,
}

impl BrushRegion {
    /// Create a region, clamping the radius to `min_radius`.
    pub fn new(center: Point, radius: f64, min_radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(min_radius),
            min_radius,
        }
    }

    /// Current center in map coordinates.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Move the region.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Current displayed radius in map units.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the displayed radius, clamped to the minimum.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(self.min_radius);
    }
}

/// Computes brush radii from wheel and pressure signals.
///
/// Pure: both adjustments are functions of the event and the given radius,
/// with no internal state.
#[derive(Debug, Clone)]
pub struct RadiusController {
    resize_step: f64,
    min_radius: f64,
}

impl RadiusController {
    /// Create a controller from the interaction's configuration.
    pub fn new(config: &BrushConfig) -> Self {
        Self {
            resize_step: config.resize_step,
            min_radius: config.min_radius,
        }
    }

    /// Apply a wheel tick to `current` and return the new radius.
    ///
    /// The vertical axis wins; if it is zero the horizontal axis is used
    /// instead (some platforms remap scroll axes under modifier keys). Small
    /// brushes (radius at most five resize steps) resize by 1 unit per tick
    /// so fine control survives near the minimum.
    pub fn adjust_by_wheel(&self, event: &InputEvent, current: f64) -> f64 {
        let mut delta = event.wheel_delta.y;
        if delta == 0.0 {
            delta = event.wheel_delta.x;
        }

        let step = if current <= self.resize_step * 5.0 {
            1.0
        } else {
            self.resize_step
        };

        if delta > 0.0 {
            current + step
        } else if delta < 0.0 {
            (current - step).max(self.min_radius)
        } else {
            current
        }
    }

    /// Scale `base` by pen pressure, in map units at the event's resolution.
    ///
    /// Pressure 0 means a hovering pen: the unscaled base radius is returned
    /// as-is. Otherwise any wheel delta on the event is applied first, then
    /// `max(radius * pressure, min_radius) * view_resolution`.
    pub fn adjust_by_pressure(&self, event: &InputEvent, base: f64) -> f64 {
        if event.pressure == 0.0 {
            return base;
        }

        let radius = self.adjust_by_wheel(event, base);
        (radius * event.pressure).max(self.min_radius) * event.view_resolution
    }
}

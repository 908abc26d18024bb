//! Brush interaction configuration.

use crate::conditions::{self, Condition};

/// Default logical brush radius, in resolution-independent units.
pub const DEFAULT_BRUSH_RADIUS: f64 = 100.0;

/// Smallest allowed brush radius, in map units at native resolution.
pub const MIN_BRUSH_SIZE: f64 = 5.0;

/// Radius change per wheel tick once the brush is larger than
/// `5 * BRUSH_RESIZE_STEP`; below that, ticks resize by 1 unit.
pub const BRUSH_RESIZE_STEP: f64 = 5.0;

/// Number of segments used to approximate the brush circle as a ring.
pub const DEFAULT_CIRCLE_SIDES: usize = 32;

/// Configuration for a brush interaction, fixed at construction time.
#[derive(Debug, Clone)]
pub struct BrushConfig {
    /// Logical brush radius at session start.
    pub initial_radius: f64,
    /// Radius change per wheel tick for large brushes.
    pub resize_step: f64,
    /// Lower clamp for the brush radius.
    pub min_radius: f64,
    /// Segment count for the circle-to-ring approximation.
    pub circle_sides: usize,
    /// Decides whether a pointer-down starts a session.
    pub start_condition: Condition,
    /// Decides whether a wheel event is a resize gesture.
    pub resize_condition: Condition,
    /// Decides whether an event gets pressure-scaled drawing.
    pub freehand_condition: Condition,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            initial_radius: DEFAULT_BRUSH_RADIUS,
            resize_step: BRUSH_RESIZE_STEP,
            min_radius: MIN_BRUSH_SIZE,
            circle_sides: DEFAULT_CIRCLE_SIDES,
            start_condition: conditions::always,
            resize_condition: conditions::shift_key_only,
            freehand_condition: conditions::pen_only,
        }
    }
}

impl BrushConfig {
    /// Create a configuration with the stock defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial logical radius.
    pub fn with_initial_radius(mut self, radius: f64) -> Self {
        self.initial_radius = radius.max(self.min_radius);
        self
    }

    /// Set the start condition.
    pub fn with_start_condition(mut self, condition: Condition) -> Self {
        self.start_condition = condition;
        self
    }

    /// Set the resize condition.
    pub fn with_resize_condition(mut self, condition: Condition) -> Self {
        self.resize_condition = condition;
        self
    }

    /// Set the freehand condition.
    pub fn with_freehand_condition(mut self, condition: Condition) -> Self {
        self.freehand_condition = condition;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use kurbo::Point;

    #[test]
    fn test_defaults() {
        let config = BrushConfig::default();
        assert!((config.initial_radius - 100.0).abs() < f64::EPSILON);
        assert!((config.resize_step - 5.0).abs() < f64::EPSILON);
        assert!((config.min_radius - 5.0).abs() < f64::EPSILON);
        assert_eq!(config.circle_sides, 32);

        let event = InputEvent::pointer_down(Point::ZERO);
        assert!((config.start_condition)(&event));
        assert!(!(config.resize_condition)(&event));
        assert!(!(config.freehand_condition)(&event));
    }

    #[test]
    fn test_initial_radius_floor() {
        let config = BrushConfig::new().with_initial_radius(1.0);
        assert!((config.initial_radius - MIN_BRUSH_SIZE).abs() < f64::EPSILON);
    }
}

//! Normalized input events for the brush interaction.
//!
//! The hosting map converts raw device events into [`InputEvent`] records;
//! nothing in this crate touches platform event types directly.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Kind of pointing device an event originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// True if no modifier key is held.
    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt || self.meta)
    }
}

/// What happened on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    Wheel,
}

/// A single normalized input event.
///
/// Events are ephemeral: they are fully processed in arrival order and never
/// retained. Fields the device does not report keep their defaults (zero
/// wheel delta, zero pressure, resolution 1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    /// What kind of event this is.
    pub kind: EventKind,
    /// Pointer position in map coordinates.
    pub coordinate: Point,
    /// Originating device kind.
    pub pointer: PointerKind,
    /// Pen pressure in `[0, 1]`; 0.0 for mouse input or a hovering pen.
    pub pressure: f64,
    /// Scroll delta; positive y grows the brush.
    pub wheel_delta: Vec2,
    /// Modifier keys held when the event fired.
    pub modifiers: Modifiers,
    /// Current view resolution (map units per pixel).
    pub view_resolution: f64,
}

impl InputEvent {
    /// Create an event with default device fields.
    pub fn new(kind: EventKind, coordinate: Point) -> Self {
        Self {
            kind,
            coordinate,
            pointer: PointerKind::default(),
            pressure: 0.0,
            wheel_delta: Vec2::ZERO,
            modifiers: Modifiers::default(),
            view_resolution: 1.0,
        }
    }

    /// Shorthand for a pointer-down event.
    pub fn pointer_down(coordinate: Point) -> Self {
        Self::new(EventKind::PointerDown, coordinate)
    }

    /// Shorthand for a pointer-move event.
    pub fn pointer_move(coordinate: Point) -> Self {
        Self::new(EventKind::PointerMove, coordinate)
    }

    /// Shorthand for a pointer-up event.
    pub fn pointer_up(coordinate: Point) -> Self {
        Self::new(EventKind::PointerUp, coordinate)
    }

    /// Shorthand for a wheel event at the given position.
    pub fn wheel(coordinate: Point, delta: Vec2) -> Self {
        Self::new(EventKind::Wheel, coordinate).with_wheel_delta(delta)
    }

    /// Set the device kind.
    pub fn with_pointer(mut self, pointer: PointerKind) -> Self {
        self.pointer = pointer;
        self
    }

    /// Set the pen pressure.
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = pressure;
        self
    }

    /// Set the wheel delta.
    pub fn with_wheel_delta(mut self, delta: Vec2) -> Self {
        self.wheel_delta = delta;
        self
    }

    /// Set the modifier keys.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the view resolution the event was observed at.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.view_resolution = resolution;
        self
    }

    /// True if the coordinate is usable for geometry.
    ///
    /// Events with a non-finite coordinate are dropped as no-ops rather than
    /// raised as faults.
    pub fn has_finite_coordinate(&self) -> bool {
        self.coordinate.x.is_finite() && self.coordinate.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let event = InputEvent::pointer_move(Point::new(1.0, 2.0));
        assert_eq!(event.kind, EventKind::PointerMove);
        assert_eq!(event.pointer, PointerKind::Mouse);
        assert_eq!(event.wheel_delta, Vec2::ZERO);
        assert!((event.pressure).abs() < f64::EPSILON);
        assert!((event.view_resolution - 1.0).abs() < f64::EPSILON);
        assert!(event.modifiers.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let event = InputEvent::pointer_move(Point::new(0.0, 0.0))
            .with_pointer(PointerKind::Pen)
            .with_pressure(0.5)
            .with_resolution(2.0);
        assert_eq!(event.pointer, PointerKind::Pen);
        assert!((event.pressure - 0.5).abs() < f64::EPSILON);
        assert!((event.view_resolution - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_coordinate_detected() {
        let event = InputEvent::pointer_move(Point::new(f64::NAN, 0.0));
        assert!(!event.has_finite_coordinate());

        let event = InputEvent::pointer_move(Point::new(0.0, f64::INFINITY));
        assert!(!event.has_finite_coordinate());

        let event = InputEvent::pointer_move(Point::new(3.0, 4.0));
        assert!(event.has_finite_coordinate());
    }

    #[test]
    fn test_event_round_trips_through_json() {
        let event = InputEvent::wheel(Point::new(10.0, -4.0), Vec2::new(0.0, 1.0))
            .with_modifiers(Modifiers {
                shift: true,
                ..Modifiers::default()
            });
        let json = serde_json::to_string(&event).unwrap();
        let back: InputEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}

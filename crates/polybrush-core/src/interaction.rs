//! Strategy seam and event dispatch.
//!
//! [`SketchInteraction`] drives an injected [`BrushStrategy`] with
//! normalized events and commits finished polygons to a [`FeatureSink`].
//! Alternate drawing modes are alternate strategies, not subclasses.

use std::fmt;

use thiserror::Error;

use crate::features::FeatureSink;
use crate::geometry::{GeometryError, Ring};
use crate::input::{EventKind, InputEvent};

/// Errors surfaced while handling brush input.
///
/// Only geometry-backend failures reach the host; malformed input is
/// handled as silent no-ops.
#[derive(Debug, Error)]
pub enum BrushError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// A drawing mode driven by [`SketchInteraction`].
pub trait BrushStrategy {
    /// Handle a pointer-down. Returns true if a session started.
    fn on_start(&mut self, event: &InputEvent) -> Result<bool, BrushError>;

    /// Handle a pointer move.
    fn on_move(&mut self, event: &InputEvent) -> Result<(), BrushError>;

    /// Handle a wheel event. Returns true if it was consumed as a resize
    /// gesture; a consumed wheel event is never also treated as a move.
    fn on_wheel(&mut self, event: &InputEvent) -> bool;

    /// Handle a pointer-up. Returns the finished ring if a session ended.
    fn on_release(&mut self, event: &InputEvent) -> Option<Ring>;

    /// Discard any in-progress sketch without committing.
    fn on_abort(&mut self);

    /// React to the hosting view changing resolution.
    fn resolution_changed(&mut self, resolution: f64);

    /// True while a session is active.
    fn is_drawing(&self) -> bool;

    /// Current logical brush radius.
    fn brush_radius(&self) -> f64;
}

/// Drives one brush strategy and commits its output.
///
/// Events are processed synchronously in arrival order; each event is fully
/// handled (state update, merge, notifications, commit) before the next one
/// is accepted.
pub struct SketchInteraction<K: FeatureSink> {
    strategy: Box<dyn BrushStrategy>,
    sink: K,
}

impl<K: FeatureSink> fmt::Debug for SketchInteraction<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SketchInteraction")
            .field("drawing", &self.strategy.is_drawing())
            .field("brush_radius", &self.strategy.brush_radius())
            .finish()
    }
}

impl<K: FeatureSink> SketchInteraction<K> {
    /// Pair a strategy with the sink receiving finished polygons.
    pub fn new(strategy: Box<dyn BrushStrategy>, sink: K) -> Self {
        Self { strategy, sink }
    }

    /// Process one normalized event.
    ///
    /// Returns whether the event was consumed by the interaction. Events
    /// with non-finite coordinates are dropped. A finished session commits
    /// its polygon to the sink, exactly once, after draw-end was emitted.
    pub fn handle_event(&mut self, event: &InputEvent) -> Result<bool, BrushError> {
        if !event.has_finite_coordinate() {
            log::debug!("dropping event with non-finite coordinate");
            return Ok(false);
        }

        match event.kind {
            EventKind::PointerDown => self.strategy.on_start(event),
            EventKind::PointerMove => {
                self.strategy.on_move(event)?;
                Ok(true)
            }
            EventKind::Wheel => Ok(self.strategy.on_wheel(event)),
            EventKind::PointerUp => match self.strategy.on_release(event) {
                Some(ring) => {
                    self.sink.add_feature(ring);
                    Ok(true)
                }
                None => Ok(false),
            },
        }
    }

    /// Discard any in-progress sketch. The only way to cancel a session.
    pub fn abort(&mut self) {
        self.strategy.on_abort();
    }

    /// Forward a view-resolution change to the strategy.
    pub fn resolution_changed(&mut self, resolution: f64) {
        self.strategy.resolution_changed(resolution);
    }

    /// True while a session is active.
    pub fn is_drawing(&self) -> bool {
        self.strategy.is_drawing()
    }

    /// Current logical brush radius.
    pub fn brush_radius(&self) -> f64 {
        self.strategy.brush_radius()
    }

    /// The sink receiving committed polygons.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Mutable access to the sink.
    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureCollection;
    use kurbo::Point;

    /// Minimal strategy recording which hooks fired.
    #[derive(Default)]
    struct ProbeStrategy {
        started: usize,
        moved: usize,
        released: usize,
        aborted: usize,
        drawing: bool,
    }

    impl BrushStrategy for ProbeStrategy {
        fn on_start(&mut self, _event: &InputEvent) -> Result<bool, BrushError> {
            self.started += 1;
            self.drawing = true;
            Ok(true)
        }

        fn on_move(&mut self, _event: &InputEvent) -> Result<(), BrushError> {
            self.moved += 1;
            Ok(())
        }

        fn on_wheel(&mut self, _event: &InputEvent) -> bool {
            false
        }

        fn on_release(&mut self, _event: &InputEvent) -> Option<Ring> {
            self.released += 1;
            if !self.drawing {
                return None;
            }
            self.drawing = false;
            Some(Ring::new(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
            ]))
        }

        fn on_abort(&mut self) {
            self.aborted += 1;
            self.drawing = false;
        }

        fn resolution_changed(&mut self, _resolution: f64) {}

        fn is_drawing(&self) -> bool {
            self.drawing
        }

        fn brush_radius(&self) -> f64 {
            100.0
        }
    }

    #[test]
    fn test_release_commits_exactly_once() {
        let mut interaction = SketchInteraction::new(
            Box::new(ProbeStrategy::default()),
            FeatureCollection::new(),
        );

        interaction
            .handle_event(&InputEvent::pointer_down(Point::ZERO))
            .unwrap();
        interaction
            .handle_event(&InputEvent::pointer_up(Point::ZERO))
            .unwrap();
        assert_eq!(interaction.sink().len(), 1);

        // A spurious second release has no session to commit.
        let consumed = interaction
            .handle_event(&InputEvent::pointer_up(Point::ZERO))
            .unwrap();
        assert!(!consumed);
        assert_eq!(interaction.sink().len(), 1);
    }

    #[test]
    fn test_non_finite_coordinate_dropped() {
        let mut interaction = SketchInteraction::new(
            Box::new(ProbeStrategy::default()),
            FeatureCollection::new(),
        );

        let event = InputEvent::pointer_move(Point::new(f64::NAN, 0.0));
        let consumed = interaction.handle_event(&event).unwrap();
        assert!(!consumed);
        assert!(!interaction.is_drawing());
    }

    #[test]
    fn test_abort_does_not_commit() {
        let mut interaction = SketchInteraction::new(
            Box::new(ProbeStrategy::default()),
            FeatureCollection::new(),
        );

        interaction
            .handle_event(&InputEvent::pointer_down(Point::ZERO))
            .unwrap();
        assert!(interaction.is_drawing());

        interaction.abort();
        assert!(!interaction.is_drawing());
        assert!(interaction.sink().is_empty());
    }
}

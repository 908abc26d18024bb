//! Drawing session lifecycle and draw notifications.

use std::fmt;

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::geometry::Ring;

/// Lifecycle state of a drawing session.
///
/// Finishing and aborting are transition outcomes, not states; both return
/// the session to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for a qualifying pointer-down.
    #[default]
    Idle,
    /// Accepting moves and accumulating the sketch polygon.
    Drawing,
}

impl SessionState {
    /// True while a sketch is being accumulated.
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing)
    }
}

/// The polygon accumulated so far in the current session.
///
/// Initialized from the brush region's ring at draw-start, replaced by the
/// union ring on each successful merge, handed off at draw-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchPolygon {
    ring: Ring,
}

impl SketchPolygon {
    /// Wrap an initial ring.
    pub fn new(ring: Ring) -> Self {
        Self { ring }
    }

    /// The accumulated ring.
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Replace the accumulated ring (after a merge).
    pub fn set_ring(&mut self, ring: Ring) {
        self.ring = ring;
    }

    /// Area enclosed by the accumulated ring.
    pub fn area(&self) -> f64 {
        self.ring.area()
    }

    /// Consume the sketch and return its ring.
    pub fn into_ring(self) -> Ring {
        self.ring
    }
}

/// Draw lifecycle notification kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawEventKind {
    /// Fired once per session, at session creation.
    Start,
    /// Fired once per session, before the polygon is committed.
    End,
}

/// A draw lifecycle notification carrying the session's polygon.
#[derive(Debug, Clone)]
pub struct DrawEvent {
    pub kind: DrawEventKind,
    pub ring: Ring,
}

type Observer = Box<dyn FnMut(&DrawEvent)>;

/// Owns one drawing session's lifecycle: state, start coordinate, the
/// accumulated sketch, and the observers notified on start and end.
///
/// Delivery is synchronous and in registration order; there is no buffering
/// and no suspension point between an event and its observers.
pub struct DrawSession {
    state: SessionState,
    start_coordinate: Option<Point>,
    sketch: Option<SketchPolygon>,
    observers: Vec<Observer>,
}

impl fmt::Debug for DrawSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawSession")
            .field("state", &self.state)
            .field("start_coordinate", &self.start_coordinate)
            .field("sketch", &self.sketch)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for DrawSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSession {
    /// Create an idle session with no observers.
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            start_coordinate: None,
            sketch: None,
            observers: Vec::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True while a sketch is being accumulated.
    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    /// Coordinate the active session started at, if any.
    pub fn start_coordinate(&self) -> Option<Point> {
        self.start_coordinate
    }

    /// The in-progress sketch, if any.
    pub fn sketch(&self) -> Option<&SketchPolygon> {
        self.sketch.as_ref()
    }

    /// Mutable access for the merger.
    pub fn sketch_mut(&mut self) -> Option<&mut SketchPolygon> {
        self.sketch.as_mut()
    }

    /// Register a draw observer. Observers persist across sessions.
    pub fn add_observer(&mut self, observer: impl FnMut(&DrawEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Deliver an event to all observers, in registration order.
    fn notify(&mut self, event: &DrawEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }

    /// Enter `Drawing` with an initial sketch and emit draw-start.
    ///
    /// Returns false without side effects if a session is already active:
    /// at most one session may be drawing per interaction instance.
    pub fn begin(&mut self, start: Point, sketch: SketchPolygon) -> bool {
        if self.state.is_drawing() {
            log::debug!("start rejected: session already drawing");
            return false;
        }

        log::debug!("draw session started at ({}, {})", start.x, start.y);
        let ring = sketch.ring().clone();
        self.state = SessionState::Drawing;
        self.start_coordinate = Some(start);
        self.sketch = Some(sketch);
        self.notify(&DrawEvent {
            kind: DrawEventKind::Start,
            ring,
        });
        true
    }

    /// Finish the session: emit draw-end and hand back the final ring.
    ///
    /// A no-op returning `None` when no sketch exists, so spurious release
    /// events are harmless.
    pub fn finish(&mut self) -> Option<Ring> {
        let sketch = self.sketch.take()?;
        self.state = SessionState::Idle;
        self.start_coordinate = None;

        let ring = sketch.into_ring();
        log::debug!("draw session finished with {} coordinates", ring.len());
        self.notify(&DrawEvent {
            kind: DrawEventKind::End,
            ring: ring.clone(),
        });
        Some(ring)
    }

    /// Discard the session without emitting draw-end.
    pub fn abort(&mut self) {
        if self.sketch.is_some() || self.state.is_drawing() {
            log::debug!("draw session aborted");
        }
        self.state = SessionState::Idle;
        self.start_coordinate = None;
        self.sketch = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn triangle() -> Ring {
        Ring::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
        ])
    }

    fn recording_session() -> (DrawSession, Rc<RefCell<Vec<DrawEventKind>>>) {
        let mut session = DrawSession::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.add_observer(move |event| sink.borrow_mut().push(event.kind));
        (session, seen)
    }

    #[test]
    fn test_begin_emits_start_once() {
        let (mut session, seen) = recording_session();
        assert!(session.begin(Point::ZERO, SketchPolygon::new(triangle())));
        assert!(session.is_drawing());
        assert_eq!(*seen.borrow(), vec![DrawEventKind::Start]);
        assert_eq!(session.start_coordinate(), Some(Point::ZERO));
    }

    #[test]
    fn test_begin_while_drawing_rejected() {
        let (mut session, seen) = recording_session();
        assert!(session.begin(Point::ZERO, SketchPolygon::new(triangle())));
        assert!(!session.begin(Point::new(1.0, 1.0), SketchPolygon::new(triangle())));
        // Still the first session: one start event, original start coordinate.
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(session.start_coordinate(), Some(Point::ZERO));
    }

    #[test]
    fn test_finish_emits_end_and_returns_ring() {
        let (mut session, seen) = recording_session();
        session.begin(Point::ZERO, SketchPolygon::new(triangle()));
        let ring = session.finish().unwrap();
        assert_eq!(ring, triangle());
        assert!(!session.is_drawing());
        assert_eq!(
            *seen.borrow(),
            vec![DrawEventKind::Start, DrawEventKind::End]
        );
    }

    #[test]
    fn test_finish_without_sketch_is_noop() {
        let (mut session, seen) = recording_session();
        assert!(session.finish().is_none());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_abort_discards_without_end_event() {
        let (mut session, seen) = recording_session();
        session.begin(Point::ZERO, SketchPolygon::new(triangle()));
        session.abort();
        assert!(!session.is_drawing());
        assert!(session.sketch().is_none());
        assert_eq!(*seen.borrow(), vec![DrawEventKind::Start]);
        // Abort after the session ended stays a no-op.
        session.abort();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_observers_notified_in_registration_order() {
        let mut session = DrawSession::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            session.add_observer(move |_| sink.borrow_mut().push(tag));
        }
        session.begin(Point::ZERO, SketchPolygon::new(triangle()));
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }
}

//! Event predicates for gating interaction behavior.
//!
//! A [`Condition`] decides whether an event should trigger a start, a resize
//! gesture, or pressure-modulated drawing. Hosts inject their own policies
//! through [`crate::config::BrushConfig`]; the functions here are the stock
//! policies.

use crate::input::{InputEvent, PointerKind};

/// A predicate over normalized input events.
pub type Condition = fn(&InputEvent) -> bool;

/// Always satisfied. Default start condition.
pub fn always(_event: &InputEvent) -> bool {
    true
}

/// Never satisfied.
pub fn never(_event: &InputEvent) -> bool {
    false
}

/// Satisfied when shift is the only modifier held. Default resize condition.
pub fn shift_key_only(event: &InputEvent) -> bool {
    let m = event.modifiers;
    m.shift && !m.ctrl && !m.alt && !m.meta
}

/// Satisfied when the event originates from a digital pen.
///
/// Default freehand condition: pen input gets pressure-scaled brush radius.
pub fn pen_only(event: &InputEvent) -> bool {
    event.pointer == PointerKind::Pen
}

/// Satisfied when the event originates from a mouse.
pub fn mouse_only(event: &InputEvent) -> bool {
    event.pointer == PointerKind::Mouse
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;
    use kurbo::Point;

    #[test]
    fn test_shift_key_only() {
        let mut event = InputEvent::pointer_move(Point::ZERO);
        assert!(!shift_key_only(&event));

        event.modifiers.shift = true;
        assert!(shift_key_only(&event));

        event.modifiers.ctrl = true;
        assert!(!shift_key_only(&event));
    }

    #[test]
    fn test_pen_only() {
        let event = InputEvent::pointer_move(Point::ZERO);
        assert!(!pen_only(&event));
        assert!(mouse_only(&event));

        let event = event.with_pointer(PointerKind::Pen);
        assert!(pen_only(&event));
        assert!(!mouse_only(&event));
    }

    #[test]
    fn test_always_and_never() {
        let event = InputEvent::pointer_down(Point::ZERO).with_modifiers(Modifiers {
            meta: true,
            ..Modifiers::default()
        });
        assert!(always(&event));
        assert!(!never(&event));
    }
}

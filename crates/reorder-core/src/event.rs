#![forbid(unsafe_code)]

//! Pointer events pushed into the engine by the host.
//!
//! The engine is event-driven: the host forwards its pointer stream
//! (mouse or single-touch) as [`PointerEvent`]s with screen coordinates.
//! Coordinates use the same space as [`crate::geometry`].

use crate::geometry::Point;
use bitflags::bitflags;

bitflags! {
    /// Keyboard modifiers held while a pointer event fired.
    ///
    /// The engine itself ignores modifiers; they are carried so hosts can
    /// route modified interactions (e.g. shift-click selection) before or
    /// after the engine sees the event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const CTRL = 0b0000_0010;
        const ALT = 0b0000_0100;
    }
}

/// What a pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Primary button or touch pressed down.
    Down,
    /// Pointer moved while pressed.
    Moved,
    /// Primary button or touch released.
    Up,
}

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event with no modifiers.
    #[inline]
    pub const fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a press event at the given coordinates.
    #[inline]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    /// Create a move event at the given coordinates.
    #[inline]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Moved, Point::new(x, y))
    }

    /// Create a release event at the given coordinates.
    #[inline]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    /// Attach modifiers to the event.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind_and_position() {
        let down = PointerEvent::down(3.0, 4.0);
        assert_eq!(down.kind, PointerEventKind::Down);
        assert_eq!(down.position, Point::new(3.0, 4.0));

        let moved = PointerEvent::moved(1.0, 2.0);
        assert_eq!(moved.kind, PointerEventKind::Moved);

        let up = PointerEvent::up(0.0, 0.0);
        assert_eq!(up.kind, PointerEventKind::Up);
    }

    #[test]
    fn default_modifiers_are_empty() {
        assert!(PointerEvent::down(0.0, 0.0).modifiers.is_empty());
    }

    #[test]
    fn with_modifiers_attaches() {
        let event = PointerEvent::moved(5.0, 5.0).with_modifiers(Modifiers::SHIFT | Modifiers::ALT);
        assert!(event.modifiers.contains(Modifiers::SHIFT));
        assert!(event.modifiers.contains(Modifiers::ALT));
        assert!(!event.modifiers.contains(Modifiers::CTRL));
    }
}

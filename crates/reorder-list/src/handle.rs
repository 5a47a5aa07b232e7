#![forbid(unsafe_code)]

//! Drag handle.
//!
//! The grabbable hit-region on each row. Pressing it tags the session
//! with the owning item's identity; everything after that is the
//! container's business.

use crate::session::Session;
use reorder_core::geometry::{Point, Rect};

/// Width of the handle hit-region, anchored to the right edge of a row.
pub const HANDLE_WIDTH: f32 = 40.0;

/// The grabbable region of one row.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragHandle {
    bounds: Rect,
}

impl DragHandle {
    /// Current hit-region in screen coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Anchor the hit-region to the trailing edge of a row.
    pub(crate) fn layout(&mut self, row: Rect) {
        let width = HANDLE_WIDTH.min(row.width);
        self.bounds = Rect::new(row.right() - width, row.y, width, row.height);
    }

    /// Handle a pointer press. Inside the hit-region the press tags the
    /// session with `owner` (the item's original index) and is consumed;
    /// otherwise it passes through.
    pub(crate) fn on_pointer_down(&self, point: Point, session: &mut Session, owner: usize) -> bool {
        if self.bounds.contains(point) {
            session.dragged = Some(owner);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_anchors_to_trailing_edge() {
        let mut handle = DragHandle::default();
        handle.layout(Rect::new(0.0, 100.0, 200.0, 40.0));
        assert_eq!(handle.bounds(), Rect::new(160.0, 100.0, 40.0, 40.0));
    }

    #[test]
    fn layout_clamps_to_narrow_rows() {
        let mut handle = DragHandle::default();
        handle.layout(Rect::new(0.0, 0.0, 24.0, 40.0));
        assert_eq!(handle.bounds().width, 24.0);
        assert_eq!(handle.bounds().x, 0.0);
    }

    #[test]
    fn press_inside_tags_session_and_consumes() {
        let mut handle = DragHandle::default();
        handle.layout(Rect::new(0.0, 0.0, 200.0, 40.0));
        let mut session = Session::default();

        assert!(handle.on_pointer_down(Point::new(180.0, 20.0), &mut session, 7));
        assert_eq!(session.dragged(), Some(7));
    }

    #[test]
    fn press_outside_passes_through() {
        let mut handle = DragHandle::default();
        handle.layout(Rect::new(0.0, 0.0, 200.0, 40.0));
        let mut session = Session::default();

        assert!(!handle.on_pointer_down(Point::new(100.0, 20.0), &mut session, 7));
        assert_eq!(session.dragged(), None);
    }
}

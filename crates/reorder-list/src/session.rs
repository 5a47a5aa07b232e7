#![forbid(unsafe_code)]

//! Drag session bookkeeping.
//!
//! One session exists at a time. It is created when a pointer goes down
//! on a drag handle and cleared on release or when an inconsistency is
//! detected. The session holds the dragged item's *identity* (its
//! original index), never a reference; the container owns the items.

use reorder_core::geometry::{Point, Rect};

/// State of the active (or idle) drag session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Original index of the grabbed item, if any.
    pub(crate) dragged: Option<usize>,
    /// True once pointer movement has been recognized as an actual drag.
    pub(crate) dragging: bool,
    /// True while auto-scroll is running because the pointer left the
    /// dead zone.
    pub(crate) scrolling: bool,
    /// Upper bound of the dead zone, frozen at drag start. Pointer y
    /// values above this (smaller y) trigger upward scrolling.
    pub(crate) touch_top_limit: f32,
    /// Lower bound of the dead zone, frozen at drag start.
    pub(crate) touch_bottom_limit: f32,
}

impl Session {
    /// Original index of the item tagged by a handle press, if any.
    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    /// Whether a drag is in progress (pointer moved after the press).
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Whether auto-scroll is currently running.
    pub fn scrolling(&self) -> bool {
        self.scrolling
    }

    /// Whether the pointer is inside the dead zone where no auto-scroll
    /// occurs.
    pub(crate) fn in_dead_zone(&self, point: Point) -> bool {
        point.y >= self.touch_top_limit && point.y <= self.touch_bottom_limit
    }

    /// Reset everything back to idle.
    pub(crate) fn clear(&mut self) {
        *self = Session::default();
    }
}

/// Per-event context handed to each item during move dispatch.
///
/// Carries the session facts an item needs without giving it access to
/// its siblings: the dragged item's identity, whether the list is
/// auto-scrolling, and where the dragged item currently sits on screen.
#[derive(Debug, Clone, Copy)]
pub struct DragContext {
    /// Original index of the dragged item, or `None` outside a session.
    pub dragged: Option<usize>,
    /// Whether auto-scroll is running (suspends drop-target tracking).
    pub scrolling: bool,
    /// The dragged item's current bounds.
    pub dragged_bounds: Rect,
}

impl DragContext {
    /// Context for dispatch outside any drag session.
    pub fn idle() -> Self {
        Self {
            dragged: None,
            scrolling: false,
            dragged_bounds: Rect::default(),
        }
    }
}

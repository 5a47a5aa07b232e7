#![forbid(unsafe_code)]

//! Draggable list item.
//!
//! Wraps one caller-owned record together with its host-rendered row.
//! An item knows its identity (`original_index`), its place in the
//! current visual order (`current_index`), and reacts to move dispatch
//! either by following the pointer (when it is the dragged item) or by
//! offering itself as the drop target (when another item passes over it).

use crate::handle::DragHandle;
use crate::session::{DragContext, Session};
use reorder_core::geometry::{Point, Rect};

/// Host-rendered row for one record.
///
/// The engine never draws; it only needs the row's rendered height, which
/// is unknown until the host's first layout pass. Return `None` until the
/// row has been measured.
pub trait ItemView {
    /// Rendered height in device-independent pixels, once known.
    fn measured_height(&self) -> Option<f32>;
}

/// One entry of the reorder list.
pub struct DraggableItem<R> {
    original_index: usize,
    current_index: usize,
    record: R,
    view: Box<dyn ItemView>,
    handle: DragHandle,
    bounds: Rect,
    dragged: bool,
    expanded: bool,
    floating: bool,
}

impl<R> std::fmt::Debug for DraggableItem<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraggableItem")
            .field("original_index", &self.original_index)
            .field("current_index", &self.current_index)
            .field("bounds", &self.bounds)
            .field("dragged", &self.dragged)
            .field("expanded", &self.expanded)
            .field("floating", &self.floating)
            .finish()
    }
}

impl<R> DraggableItem<R> {
    /// Build an item for `record` at list position `original_index`.
    pub(crate) fn new(original_index: usize, record: R, view: Box<dyn ItemView>) -> Self {
        Self {
            original_index,
            current_index: original_index,
            record,
            view,
            handle: DragHandle::default(),
            bounds: Rect::default(),
            dragged: false,
            expanded: false,
            floating: false,
        }
    }

    /// Permanent identity: position at list construction.
    pub fn original_index(&self) -> usize {
        self.original_index
    }

    /// Position in the current visual order at stable moments.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The caller's record.
    pub fn record(&self) -> &R {
        &self.record
    }

    /// Full bounds, including the expansion spacer when expanded.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Bounds of the visible row: the bottom portion of [`Self::bounds`],
    /// below the expansion spacer.
    pub fn row_bounds(&self) -> Rect {
        if self.expanded {
            let row_height = self.bounds.height / 2.0;
            Rect::new(
                self.bounds.x,
                self.bounds.y + row_height,
                self.bounds.width,
                row_height,
            )
        } else {
            self.bounds
        }
    }

    /// The handle hit-region for this row.
    pub fn handle(&self) -> &DragHandle {
        &self.handle
    }

    /// True only while this item is the one following the pointer.
    pub fn is_dragged(&self) -> bool {
        self.dragged
    }

    /// True while this item is the current drop-target candidate. The
    /// reserved space sits directly above the row.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// True while detached from the list flow as a pointer overlay.
    pub fn is_floating(&self) -> bool {
        self.floating
    }

    pub(crate) fn into_record(self) -> R {
        self.record
    }

    pub(crate) fn set_current_index(&mut self, index: usize) {
        self.current_index = index;
    }

    pub(crate) fn set_floating(&mut self, floating: bool) {
        self.floating = floating;
    }

    pub(crate) fn clear_drag_flags(&mut self) {
        self.dragged = false;
        self.expanded = false;
    }

    pub(crate) fn measured_height(&self) -> Option<f32> {
        self.view.measured_height()
    }

    /// Place this item in the list flow. Returns the vertical extent
    /// consumed: one item height, doubled while expanded to reserve the
    /// drop space.
    pub(crate) fn layout(&mut self, x: f32, y: f32, width: f32, item_height: f32) -> f32 {
        let extent = if self.expanded {
            item_height * 2.0
        } else {
            item_height
        };
        self.bounds = Rect::new(x, y, width, extent);
        self.handle.layout(self.row_bounds());
        extent
    }

    /// Handle a pointer press: delegate to the handle, tagging the
    /// session with this item's identity on a hit.
    pub(crate) fn on_pointer_down(&self, point: Point, session: &mut Session) -> bool {
        self.handle.on_pointer_down(point, session, self.original_index)
    }

    /// Handle a pointer move. Never consumes; siblings and the container
    /// see every move.
    pub(crate) fn on_pointer_move(&mut self, point: Point, ctx: &DragContext) -> bool {
        self.dragged = false;

        let Some(dragged_id) = ctx.dragged else {
            return false;
        };

        if dragged_id == self.original_index {
            if ctx.scrolling {
                // Scrolling takes precedence over pointer tracking.
                return false;
            }
            self.dragged = true;
            self.bounds.y = point.y - self.bounds.height / 2.0;
        } else if !ctx.scrolling {
            self.expanded = self.bounds.contains(ctx.dragged_bounds.origin());
        } else {
            self.expanded = false;
        }

        false
    }
}

#![forbid(unsafe_code)]

//! Reorder container.
//!
//! Owns the ordered item collection, the drag session, and the
//! auto-scroll ticker, and orchestrates the full drag lifecycle: press
//! on a handle, move (with auto-scroll beyond the touch limits), drop or
//! cancel. The host pushes pointer events in, drives time through
//! [`ReorderList::tick`], and reads item bounds back out for rendering.
//!
//! # Invariants
//!
//! 1. At any moment with no drag in progress, `current_index` over all
//!    items is the contiguous permutation `[0, N)` matching visual
//!    top-to-bottom order (storage order is visual order).
//! 2. `original_index` values are a permutation of `[0, N)` fixed at
//!    construction and identify records across arbitrary reorders.
//! 3. At most one auto-scroll ticker is live; every transition that ends
//!    a drag drops it before the session is cleared.
//! 4. Scrolling and free dragging are mutually exclusive.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Invalid permutation | `set_order` input not a bijection | Rejected, order unchanged |
//! | Session references a missing item | items replaced mid-drag, lost release | Cancel, restore original order |
//! | Release while auto-scrolling | pointer held beyond the limits | Cancel, restore original order |
//! | Item height not yet measured | first layout pass pending | Limits use zero height until measured |

use crate::error::{PermutationDefect, ReorderError};
use crate::item::{DraggableItem, ItemView};
use crate::session::{DragContext, Session};
use crate::ticker::{ScrollDirection, ScrollTicker};
use reorder_core::event::{PointerEvent, PointerEventKind};
use reorder_core::geometry::{Point, Rect};
use reorder_core::viewport::Viewport;
use std::time::Duration;
use tracing::{debug, warn};

/// Pixels scrolled per ticker firing.
pub const SCROLL_STEP: f32 = 20.0;

/// Period of the auto-scroll ticker.
pub const SCROLL_PERIOD: Duration = Duration::from_millis(100);

/// Padding above the list; the bottom also reserves one item height so a
/// dragged item can be dropped past the last row.
const LIST_PADDING: f32 = 8.0;

/// Builds a host row for a record.
pub type ItemFactory<R> = Box<dyn Fn(&R) -> Box<dyn ItemView>>;

/// A scrollable vertical list whose rows can be reordered by dragging
/// their handles.
pub struct ReorderList<R, V> {
    viewport: V,
    factory: ItemFactory<R>,
    items: Vec<DraggableItem<R>>,
    session: Session,
    ticker: Option<ScrollTicker>,
    item_height: Option<f32>,
}

impl<R, V: Viewport> ReorderList<R, V> {
    /// Create an empty list over the host's `viewport`; `factory` maps
    /// each record to its host-rendered row.
    pub fn new(viewport: V, factory: ItemFactory<R>) -> Self {
        Self {
            viewport,
            factory,
            items: Vec::new(),
            session: Session::default(),
            ticker: None,
            item_height: None,
        }
    }

    // ------------------------------------------------------------------
    // Data ops
    // ------------------------------------------------------------------

    /// Replace the list contents. Each record's `original_index` is its
    /// position in `records`. Row height measurement is deferred to the
    /// next layout pass.
    pub fn set_items(&mut self, records: Vec<R>) {
        if self.session.dragged().is_some() {
            self.cancel_drag("items replaced mid-drag");
        }
        self.items = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let view = (self.factory)(&record);
                DraggableItem::new(index, record, view)
            })
            .collect();
        self.item_height = None;
        self.layout();
    }

    /// Records in current visual order, top to bottom.
    pub fn items(&self) -> impl Iterator<Item = &R> {
        self.items.iter().map(|item| item.record())
    }

    /// Consume the list and return the records in current visual order.
    pub fn into_items(self) -> Vec<R> {
        self.items.into_iter().map(|item| item.into_record()).collect()
    }

    /// Original indices in current visual order: a permutation of
    /// `[0, N)`.
    pub fn order(&self) -> Vec<usize> {
        self.items.iter().map(|item| item.original_index()).collect()
    }

    /// Rebuild the visual order so that position `i` holds the record
    /// with original index `order[i]`. Rejects anything that is not a
    /// bijection on `[0, N)`, leaving the current order untouched.
    pub fn set_order(&mut self, order: &[usize]) -> Result<(), ReorderError> {
        let n = self.items.len();
        if order.len() != n {
            return Err(ReorderError::InvalidPermutation {
                expected_len: n,
                defect: PermutationDefect::LengthMismatch { got: order.len() },
            });
        }
        let mut seen = vec![false; n];
        for (position, &value) in order.iter().enumerate() {
            if value >= n {
                return Err(ReorderError::InvalidPermutation {
                    expected_len: n,
                    defect: PermutationDefect::OutOfRange { position, value },
                });
            }
            if seen[value] {
                return Err(ReorderError::InvalidPermutation {
                    expected_len: n,
                    defect: PermutationDefect::Duplicate { position, value },
                });
            }
            seen[value] = true;
        }

        if self.session.dragged().is_some() {
            self.cancel_drag("order rewritten mid-drag");
        }

        let mut slots: Vec<Option<DraggableItem<R>>> = (0..n).map(|_| None).collect();
        for item in self.items.drain(..) {
            let original = item.original_index();
            slots[original] = Some(item);
        }
        for (position, &original) in order.iter().enumerate() {
            if let Some(mut item) = slots[original].take() {
                item.set_current_index(position);
                self.items.push(item);
            }
        }
        self.layout();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `position` in current visual order.
    pub fn draggable(&self, position: usize) -> Option<&DraggableItem<R>> {
        self.items.get(position)
    }

    /// All items in current visual order, for host rendering.
    pub fn draggables(&self) -> impl Iterator<Item = &DraggableItem<R>> {
        self.items.iter()
    }

    /// The drag session, for host feedback (cursor shape, highlights).
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The host viewport.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access to the host viewport (resize, external scroll).
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Whether the deferred row-height measurement has landed.
    pub fn measured(&self) -> bool {
        self.item_height.is_some()
    }

    /// Measured row height, or `0.0` until the first layout pass reports
    /// one.
    pub fn item_height(&self) -> f32 {
        self.item_height.unwrap_or(0.0)
    }

    /// Height the list flow occupies: padding plus every in-flow extent.
    /// Hosts feeding a scroll container can mirror this into its content
    /// height.
    pub fn flow_height(&self) -> f32 {
        let h = self.item_height();
        let rows: f32 = self
            .items
            .iter()
            .filter(|item| !item.is_floating())
            .map(|item| if item.is_expanded() { h * 2.0 } else { h })
            .sum();
        LIST_PADDING + rows + h + LIST_PADDING
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Recompute item bounds from the viewport frame, scroll offset, and
    /// measured row height. The floating (dragged) item keeps its
    /// pointer-tracked bounds; expanded items reserve one extra row of
    /// space above themselves.
    pub fn layout(&mut self) {
        self.measure();
        let frame = self.viewport.frame();
        let item_height = self.item_height();
        let mut y = frame.y + LIST_PADDING - self.viewport.scroll_pixels();
        for item in &mut self.items {
            if item.is_floating() {
                continue;
            }
            y += item.layout(frame.x, y, frame.width, item_height);
        }
    }

    fn measure(&mut self) {
        if self.item_height.is_none() {
            self.item_height = self.items.first().and_then(|item| item.measured_height());
        }
    }

    // ------------------------------------------------------------------
    // Pointer lifecycle
    // ------------------------------------------------------------------

    /// Route a host pointer event to the press/move/release paths.
    /// Returns whether the event was consumed.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_pointer_down(event.position),
            PointerEventKind::Moved => self.on_pointer_move(event.position),
            PointerEventKind::Up => self.on_pointer_up(event.position),
        }
    }

    /// Pointer press: offered to each row's handle in visual order.
    pub fn on_pointer_down(&mut self, point: Point) -> bool {
        if self.session.dragged().is_some() {
            // A lost release left the session live; recover before the
            // new press is honoured.
            warn!("pointer press with a live session");
            self.cancel_drag("stale session at press");
        }
        for position in 0..self.items.len() {
            if self.items[position].on_pointer_down(point, &mut self.session) {
                debug!(
                    item = self.items[position].original_index(),
                    "handle grabbed"
                );
                return true;
            }
        }
        false
    }

    /// Pointer move: recognizes drag start, evaluates auto-scroll, and
    /// dispatches to the items.
    pub fn on_pointer_move(&mut self, point: Point) -> bool {
        let Some(dragged_id) = self.session.dragged() else {
            return false;
        };
        if self.position_of(dragged_id).is_none() {
            warn!(dragged_id, "move references an item the list no longer holds");
            self.cancel_drag("inconsistent session at move");
            return false;
        }

        if !self.session.dragging() {
            self.start_drag(dragged_id);
            self.dispatch_move(point);
            return false;
        }

        if self.session.in_dead_zone(point) {
            self.session.scrolling = false;
            self.dispatch_move(point);
            return false;
        }

        if self.viewport.content_height() <= self.viewport.frame().height {
            // Nothing to scroll when the content fits the viewport.
            return false;
        }

        if self.session.scrolling() {
            // Already scrolling; the ticker is doing the work.
            return true;
        }

        if point.y < self.session.touch_top_limit {
            if !self.viewport.at_top() {
                self.session.scrolling = true;
                self.start_scroll(ScrollDirection::Up);
                self.dispatch_move(point);
                return false;
            }
            return true;
        }

        if point.y > self.session.touch_bottom_limit {
            if !self.viewport.at_bottom() {
                self.session.scrolling = true;
                self.start_scroll(ScrollDirection::Down);
                self.dispatch_move(point);
                return false;
            }
            return true;
        }

        false
    }

    /// Pointer release: commit the reorder, or cancel back to the
    /// original placement.
    pub fn on_pointer_up(&mut self, point: Point) -> bool {
        let Some(dragged_id) = self.session.dragged() else {
            return false;
        };
        let Some(dragged_position) = self.position_of(dragged_id) else {
            warn!(dragged_id, "release references an item the list no longer holds");
            self.cancel_drag("inconsistent session at release");
            return false;
        };

        if !self.session.dragging() {
            // A press that never moved; nothing to restore.
            self.finish_drag();
            return false;
        }

        if self.session.scrolling() {
            // A scroll-interrupted release never commits.
            self.cancel_drag("released while scrolling");
            return true;
        }

        if !self.viewport.frame().contains(point) {
            self.cancel_drag("released outside the container");
            return false;
        }

        self.commit_drop(dragged_position);
        true
    }

    // ------------------------------------------------------------------
    // Auto-scroll
    // ------------------------------------------------------------------

    /// Advance the auto-scroll ticker by elapsed wall time. Each
    /// completed period re-checks the scroll conditions and either steps
    /// the offset or cancels the ticker.
    pub fn tick(&mut self, delta: Duration) {
        let Some(mut ticker) = self.ticker.take() else {
            return;
        };
        let fires = ticker.tick(delta);
        let direction = ticker.direction();
        self.ticker = Some(ticker);
        for _ in 0..fires {
            if !self.scroll_step(direction) {
                self.cancel_scroll();
                break;
            }
        }
    }

    fn start_scroll(&mut self, direction: ScrollDirection) {
        debug!(?direction, "auto-scroll started");
        // Replacing the handle cancels any prior ticker.
        self.ticker = Some(ScrollTicker::new(direction, SCROLL_PERIOD));
        if !self.scroll_step(direction) {
            self.cancel_scroll();
        }
    }

    fn scroll_step(&mut self, direction: ScrollDirection) -> bool {
        if !self.scroll_condition(direction) {
            return false;
        }
        let delta = self.viewport.distance_to_scroll(SCROLL_STEP);
        let offset = self.viewport.scroll_offset();
        let next = match direction {
            ScrollDirection::Up => (offset - delta).max(0.0),
            ScrollDirection::Down => (offset + delta).min(1.0),
        };
        self.viewport.set_scroll_offset(next);
        self.layout();
        true
    }

    fn scroll_condition(&self, direction: ScrollDirection) -> bool {
        self.session.dragged().is_some()
            && self.session.scrolling()
            && match direction {
                ScrollDirection::Up => !self.viewport.at_top(),
                ScrollDirection::Down => !self.viewport.at_bottom(),
            }
    }

    fn cancel_scroll(&mut self) {
        self.ticker = None;
        self.session.scrolling = false;
    }

    // ------------------------------------------------------------------
    // Drag internals
    // ------------------------------------------------------------------

    fn start_drag(&mut self, dragged_id: usize) {
        debug!(dragged_id, "drag started");
        self.freeze_touch_limits();
        if let Some(position) = self.position_of(dragged_id) {
            // Detach from the flow; bounds stay put so the overlay
            // starts at the item's current screen position.
            self.items[position].set_floating(true);
        }
        self.session.dragging = true;
        self.layout();
    }

    /// Freeze the dead-zone bounds for this drag. Anchored to the list
    /// when it fits the viewport, to the viewport otherwise.
    fn freeze_touch_limits(&mut self) {
        let frame = self.viewport.frame();
        let h = self.item_height();
        let content = self.viewport.content_height();
        if content <= frame.height {
            self.session.touch_top_limit = frame.y + h * 1.5;
            self.session.touch_bottom_limit = frame.y + content - h / 2.0 - LIST_PADDING;
        } else {
            self.session.touch_top_limit = frame.y + h * 1.5;
            self.session.touch_bottom_limit = frame.bottom() + h / 2.0 - LIST_PADDING * 2.0;
        }
    }

    /// Dispatch a move to every item: the dragged item first so drop
    /// targets evaluate against its fresh position, then the rest.
    fn dispatch_move(&mut self, point: Point) {
        let Some(dragged_id) = self.session.dragged() else {
            return;
        };
        let Some(dragged_position) = self.position_of(dragged_id) else {
            return;
        };
        let ctx = DragContext {
            dragged: Some(dragged_id),
            scrolling: self.session.scrolling(),
            dragged_bounds: Rect::default(),
        };
        self.items[dragged_position].on_pointer_move(point, &ctx);
        let ctx = DragContext {
            dragged_bounds: self.items[dragged_position].bounds(),
            ..ctx
        };
        for (position, item) in self.items.iter_mut().enumerate() {
            if position != dragged_position {
                item.on_pointer_move(point, &ctx);
            }
        }
        // Expansion may have moved; reflow the remaining rows.
        self.layout();
    }

    /// Re-insert the dragged item at the drop target and renumber.
    fn commit_drop(&mut self, dragged_position: usize) {
        let past_end = self.items.len() + 1;
        let target = self
            .items
            .iter()
            .find(|item| item.is_expanded())
            .map(|item| item.current_index())
            .unwrap_or(past_end);

        let dragged = self.items.remove(dragged_position);
        let dragged_index = dragged.current_index();
        // Tie-break on the stale (pre-removal) indices: a target below
        // the dragged slot has already shifted up by one, so `target`
        // itself is the slot just after it; a target above kept its
        // index, and inserting at `target` lands just before it.
        let insert_at = if target > dragged_index {
            target.min(self.items.len())
        } else {
            target
        };
        debug!(
            dragged = dragged.original_index(),
            target, insert_at, "drop committed"
        );
        self.items.insert(insert_at, dragged);
        self.renumber();

        if self.viewport.at_top() {
            // Pinned to the top: nudge by one row so the landed item
            // stays visible.
            let nudge = self.viewport.distance_to_scroll(self.item_height());
            self.viewport.set_scroll_offset(nudge);
        }

        self.finish_drag();
    }

    fn cancel_drag(&mut self, reason: &str) {
        debug!(reason, "drag cancelled, original order restored");
        self.finish_drag();
    }

    /// Shared teardown: drop the ticker, clear every visual flag, clear
    /// the session, reflow.
    fn finish_drag(&mut self) {
        self.cancel_scroll();
        for item in &mut self.items {
            item.clear_drag_flags();
            item.set_floating(false);
        }
        self.session.clear();
        self.layout();
    }

    fn renumber(&mut self) {
        for (position, item) in self.items.iter_mut().enumerate() {
            item.set_current_index(position);
        }
    }

    fn position_of(&self, original_index: usize) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.original_index() == original_index)
    }
}

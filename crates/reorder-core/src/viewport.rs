#![forbid(unsafe_code)]

//! The viewport seam.
//!
//! The engine does not own a scrollable container; the host does. This
//! module defines the [`Viewport`] trait the engine queries for geometry
//! and drives for auto-scroll, plus [`BasicViewport`], a plain
//! implementation for hosts with simple geometry and for tests.
//!
//! Scroll offsets are normalized: `0.0` is scrolled to the top of the
//! content, `1.0` to the bottom. A viewport whose content fits entirely
//! has an empty scroll range and stays at `0.0`.

use crate::geometry::Rect;

/// Host-provided scrollable container.
pub trait Viewport {
    /// The viewport rectangle in screen coordinates.
    fn frame(&self) -> Rect;

    /// Total height of the scrollable content in pixels.
    fn content_height(&self) -> f32;

    /// Current scroll offset, normalized to `0.0..=1.0`.
    fn scroll_offset(&self) -> f32;

    /// Set the scroll offset. Implementations must clamp to `0.0..=1.0`.
    fn set_scroll_offset(&mut self, offset: f32);

    /// Scrollable range in pixels (content beyond the viewport).
    fn scroll_range(&self) -> f32 {
        (self.content_height() - self.frame().height).max(0.0)
    }

    /// Convert a pixel distance on the scroll axis into a normalized
    /// offset delta. Zero when there is nothing to scroll.
    fn distance_to_scroll(&self, pixels: f32) -> f32 {
        let range = self.scroll_range();
        if range > 0.0 { pixels / range } else { 0.0 }
    }

    /// Current scroll position in pixels from the top of the content.
    fn scroll_pixels(&self) -> f32 {
        self.scroll_offset() * self.scroll_range()
    }

    /// Whether the viewport is scrolled to the very top.
    fn at_top(&self) -> bool {
        self.scroll_offset() <= 0.0
    }

    /// Whether the viewport is scrolled to the very bottom.
    fn at_bottom(&self) -> bool {
        self.scroll_offset() >= 1.0
    }
}

/// A [`Viewport`] backed by plain fields.
///
/// Hosts with an external scroll container should implement [`Viewport`]
/// directly; hosts that let the engine own the scroll position can use
/// this and mirror it when rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BasicViewport {
    frame: Rect,
    content_height: f32,
    offset: f32,
}

impl BasicViewport {
    /// Create a viewport with the given screen rectangle.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            content_height: 0.0,
            offset: 0.0,
        }
    }

    /// Update the viewport rectangle (host resize).
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Update the content height (host layout).
    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height.max(0.0);
    }
}

impl Viewport for BasicViewport {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn content_height(&self) -> f32 {
        self.content_height
    }

    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, 1.0);
    }
}

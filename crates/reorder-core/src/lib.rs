#![forbid(unsafe_code)]

//! Host-facing primitives for the reorder engine.
//!
//! Geometry, pointer events, and the [`Viewport`] seam through which the
//! engine observes and drives the host's scrollable container.

pub mod event;
pub mod geometry;
pub mod viewport;

pub use event::{Modifiers, PointerEvent, PointerEventKind};
pub use geometry::{Point, Rect};
pub use viewport::{BasicViewport, Viewport};

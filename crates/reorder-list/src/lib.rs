#![forbid(unsafe_code)]

//! Drag-and-drop reordering for scrollable vertical lists.
//!
//! The engine is headless: the host renders rows and forwards its
//! pointer stream; the engine tracks the drag, auto-scrolls near the
//! viewport edges, maintains the drop target, and rewrites the order on
//! release. Geometry and the viewport seam live in [`reorder_core`].
//!
//! # Lifecycle
//!
//! A drag begins with a press on a row's [`DragHandle`] and is
//! recognized on the first subsequent move. While dragging, the item
//! floats under the pointer and the row beneath it expands to preview
//! the drop slot. Holding the pointer past the frozen touch limits
//! auto-scrolls the viewport instead; a release during auto-scroll, or
//! outside the container, cancels and restores the original order.
//!
//! ```no_run
//! use reorder_core::{BasicViewport, PointerEvent, Rect};
//! use reorder_list::{ItemView, ReorderList};
//! use std::time::Duration;
//!
//! struct Row;
//! impl ItemView for Row {
//!     fn measured_height(&self) -> Option<f32> {
//!         Some(48.0)
//!     }
//! }
//!
//! let viewport = BasicViewport::new(Rect::from_size(320.0, 480.0));
//! let mut list = ReorderList::new(viewport, Box::new(|_: &String| Box::new(Row)));
//! list.set_items(vec!["a".into(), "b".into(), "c".into()]);
//!
//! // Per host frame:
//! list.on_pointer_event(PointerEvent::moved(160.0, 200.0));
//! list.tick(Duration::from_millis(16));
//! ```

pub mod container;
pub mod error;
pub mod handle;
pub mod item;
pub mod session;
pub mod ticker;

pub use container::{ItemFactory, ReorderList, SCROLL_PERIOD, SCROLL_STEP};
pub use error::{PermutationDefect, ReorderError};
pub use handle::{DragHandle, HANDLE_WIDTH};
pub use item::{DraggableItem, ItemView};
pub use session::{DragContext, Session};
pub use ticker::{ScrollDirection, ScrollTicker};

#![forbid(unsafe_code)]

//! Repeating auto-scroll trigger.
//!
//! Models the recurring timer that advances the scroll offset while a
//! dragged item is held beyond the touch limits. Time is injected: the
//! host calls [`crate::ReorderList::tick`] with elapsed wall time and the
//! ticker reports how many periods have completed. Dropping the ticker is
//! cancellation; a dropped ticker can never fire again.

use std::time::Duration;

/// Direction the viewport scrolls while the ticker runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Toward the start of the content (offset decreases to 0.0).
    Up,
    /// Toward the end of the content (offset increases to 1.0).
    Down,
}

/// A repeating trigger with a fixed period.
#[derive(Debug, Clone)]
pub struct ScrollTicker {
    direction: ScrollDirection,
    period: Duration,
    elapsed: Duration,
}

impl ScrollTicker {
    /// Create a ticker that fires once per `period`.
    pub fn new(direction: ScrollDirection, period: Duration) -> Self {
        Self {
            direction,
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// The scroll direction this ticker drives.
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Advance by `delta` and return the number of completed periods.
    ///
    /// Left-over time carries into the next call, so firing cadence is
    /// independent of how the host slices its frames.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.elapsed += delta;
        let fires = (self.elapsed.as_nanos() / self.period.as_nanos()) as u32;
        self.elapsed -= self.period * fires;
        fires
    }
}

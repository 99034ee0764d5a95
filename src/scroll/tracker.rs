use crate::foundation::math::clamp01;

/// One scroll sample: raw offset, scrollable extent and normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollState {
    /// Current vertical scroll offset in pixels.
    pub offset: f64,
    /// Scrollable extent (`content_height - viewport_height`, never negative).
    pub max: f64,
    /// `offset / max(max, 1)` clamped to `[0, 1]`.
    pub progress: f64,
}

/// Samples the page scroll position once per frame.
///
/// The tracker keeps no history; it exists so the frame driver has a single place where the
/// scroll sample for a frame is taken.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    last: ScrollState,
}

impl ScrollTracker {
    /// Create a tracker positioned at the top of an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the sample for this frame.
    pub fn sample(&mut self, offset: f64, content_height: f64, viewport_height: f64) -> ScrollState {
        self.last = compute_scroll_state(offset, content_height, viewport_height);
        self.last
    }

    /// Most recent sample.
    pub fn last(&self) -> ScrollState {
        self.last
    }
}

/// Pure normalization used by [`ScrollTracker::sample`].
///
/// The denominator is clamped to at least one pixel so content shorter than the viewport maps
/// to progress 0 instead of dividing by zero.
pub fn compute_scroll_state(offset: f64, content_height: f64, viewport_height: f64) -> ScrollState {
    let offset = if offset.is_finite() { offset } else { 0.0 };
    let max = finite_or_zero(content_height - viewport_height).max(0.0);
    let progress = clamp01(offset / max.max(1.0));
    ScrollState {
        offset,
        max,
        progress,
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;

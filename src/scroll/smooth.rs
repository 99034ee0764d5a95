use crate::animation::ease::Ease;

/// Tuning for [`SmoothScroller`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SmoothScrollConfig {
    /// Fraction of the remaining distance covered per 60 Hz frame.
    #[serde(default = "default_lerp")]
    pub lerp: f64,
    /// Default duration of programmatic scrolls in seconds.
    #[serde(default = "default_scroll_to_secs")]
    pub scroll_to_secs: f64,
    /// Ease of programmatic scrolls.
    #[serde(default = "default_scroll_to_ease")]
    pub scroll_to_ease: Ease,
}

fn default_lerp() -> f64 {
    0.1
}

fn default_scroll_to_secs() -> f64 {
    1.5
}

fn default_scroll_to_ease() -> Ease {
    Ease::OutExpo
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            lerp: default_lerp(),
            scroll_to_secs: default_scroll_to_secs(),
            scroll_to_ease: default_scroll_to_ease(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ScrollTween {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

const SNAP_PX: f64 = 0.5;

/// Inertial scroll position.
///
/// Wheel input moves a target offset; the rendered offset chases it every frame. Programmatic
/// scrolls run an eased tween instead and are cancelled by the next wheel input.
#[derive(Clone, Debug)]
pub struct SmoothScroller {
    current: f64,
    target: f64,
    extent: f64,
    cfg: SmoothScrollConfig,
    tween: Option<ScrollTween>,
}

impl SmoothScroller {
    /// Scroller at the top of a page with the given scrollable extent.
    pub fn new(cfg: SmoothScrollConfig, extent: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            extent: extent.max(0.0),
            cfg,
            tween: None,
        }
    }

    /// Rendered offset.
    pub fn offset(&self) -> f64 {
        self.current
    }

    /// Offset the scroller is heading to.
    pub fn target(&self) -> f64 {
        self.tween.map(|t| t.to).unwrap_or(self.target)
    }

    /// True while the rendered offset has not reached its target.
    pub fn is_moving(&self) -> bool {
        self.tween.is_some() || (self.target - self.current).abs() > 0.0
    }

    /// Update the scrollable extent, re-clamping offsets.
    pub fn set_extent(&mut self, extent: f64) {
        self.extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
        self.current = self.clamp(self.current);
        self.target = self.clamp(self.target);
        if let Some(t) = self.tween.as_mut() {
            t.to = t.to.clamp(0.0, self.extent);
        }
    }

    /// Apply user wheel/touch input.
    pub fn wheel(&mut self, delta_px: f64) {
        if !delta_px.is_finite() {
            return;
        }
        if let Some(t) = self.tween.take() {
            tracing::trace!(to = t.to, "wheel input cancels programmatic scroll");
            self.target = self.current;
        }
        self.target = self.clamp(self.target + delta_px);
    }

    /// Start an eased programmatic scroll with the configured duration and ease.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_to_with(offset, self.cfg.scroll_to_secs, self.cfg.scroll_to_ease);
    }

    /// Start an eased programmatic scroll.
    pub fn scroll_to_with(&mut self, offset: f64, duration_secs: f64, ease: Ease) {
        let to = self.clamp(offset);
        if duration_secs <= 0.0 || !duration_secs.is_finite() {
            self.jump_to(to);
            return;
        }
        self.tween = Some(ScrollTween {
            from: self.current,
            to,
            elapsed: 0.0,
            duration: duration_secs,
            ease,
        });
    }

    /// Move immediately, cancelling any motion.
    pub fn jump_to(&mut self, offset: f64) {
        let y = self.clamp(offset);
        self.tween = None;
        self.current = y;
        self.target = y;
    }

    /// Advance by `dt` seconds and return the rendered offset.
    pub fn step(&mut self, dt: f64) -> f64 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        if let Some(mut t) = self.tween {
            t.elapsed += dt;
            let p = (t.elapsed / t.duration).min(1.0);
            self.current = t.from + (t.to - t.from) * t.ease.apply(p);
            if p >= 1.0 {
                self.current = t.to;
                self.target = t.to;
                self.tween = None;
            } else {
                self.tween = Some(t);
            }
            return self.current;
        }

        let lerp = self.cfg.lerp.clamp(0.0, 1.0);
        let alpha = 1.0 - (1.0 - lerp).powf(dt * 60.0);
        self.current += (self.target - self.current) * alpha;
        if (self.target - self.current).abs() < SNAP_PX {
            self.current = self.target;
        }
        self.current
    }

    fn clamp(&self, y: f64) -> f64 {
        if y.is_finite() {
            y.clamp(0.0, self.extent)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;

use std::collections::BTreeMap;

use crate::foundation::{
    core::{Rect, RegionId, Size},
    error::{ScrollweaveError, ScrollweaveResult},
    math::Fnv1a64,
};

/// Measured page geometry in document coordinates (before pin spacing).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layout {
    /// Viewport size.
    pub viewport: Size,
    /// Document height without pin spacing.
    pub content_height: f64,
    /// Mounted regions.
    #[serde(default)]
    pub regions: BTreeMap<RegionId, Rect>,
}

impl Layout {
    /// Layout with no mounted regions.
    pub fn new(viewport: Size, content_height: f64) -> Self {
        Self {
            viewport,
            content_height,
            regions: BTreeMap::new(),
        }
    }

    /// Add or replace a region.
    pub fn with_region(mut self, id: impl Into<RegionId>, rect: Rect) -> Self {
        self.regions.insert(id.into(), rect);
        self
    }

    /// Geometry of a mounted region.
    pub fn region(&self, id: &RegionId) -> Option<Rect> {
        self.regions.get(id).copied()
    }

    /// Same layout under a different viewport.
    pub fn resized(&self, viewport: Size) -> Self {
        Self {
            viewport,
            ..self.clone()
        }
    }

    /// Check that every dimension is finite and non-negative.
    pub fn validate(&self) -> ScrollweaveResult<()> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if !ok(self.viewport.width) || !ok(self.viewport.height) {
            return Err(ScrollweaveError::validation(
                "viewport size must be finite and >= 0",
            ));
        }
        if !ok(self.content_height) {
            return Err(ScrollweaveError::validation(
                "content_height must be finite and >= 0",
            ));
        }
        for (id, r) in &self.regions {
            let finite = [r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite());
            if !finite || r.x1 < r.x0 || r.y1 < r.y0 {
                return Err(ScrollweaveError::validation(format!(
                    "region '{id}' has an invalid rectangle"
                )));
            }
        }
        Ok(())
    }

    /// Stable hash of every measurement; changes whenever windows need recomputing.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_f64(self.viewport.width);
        h.write_f64(self.viewport.height);
        h.write_f64(self.content_height);
        h.write_u64(self.regions.len() as u64);
        for (id, r) in &self.regions {
            h.write_str(id.as_str());
            for v in [r.x0, r.y0, r.x1, r.y1] {
                h.write_f64(v);
            }
        }
        h.finish()
    }
}

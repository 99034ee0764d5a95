use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        core::{Rect, RegionId, Size},
        error::{ScrollweaveError, ScrollweaveResult},
    },
    navigation::{page::PageId, transition::TransitionConfig},
    scroll::smooth::SmoothScrollConfig,
    site::{
        chrome::SCROLL_TO_TOP_THRESHOLD,
        pages::{MOBILE_BREAKPOINT, default_layout},
    },
    trigger::layout::Layout,
};

/// Measured geometry of one page, as reported by the host.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageGeometry {
    /// Document height without pin spacing.
    pub content_height: f64,
    /// Region rectangles in document coordinates.
    #[serde(default)]
    pub regions: BTreeMap<RegionId, Rect>,
}

/// Everything a [`crate::Stage`] needs to start.
///
/// Every field has a default, so `{}` is a valid configuration: a 1440x900 desktop viewport on
/// the home page, with generated geometry for every page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageConfig {
    /// Initial viewport size.
    #[serde(default = "default_viewport")]
    pub viewport: Size,
    /// Force the mobile layout on or off; derived from the viewport width when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<bool>,
    /// Inertial scrolling.
    #[serde(default)]
    pub smooth_scroll: SmoothScrollConfig,
    /// Offset above which the scroll-to-top button shows.
    #[serde(default = "default_threshold")]
    pub scroll_to_top_threshold: f64,
    /// Curtain timing.
    #[serde(default)]
    pub transition: TransitionConfig,
    /// Page mounted first.
    #[serde(default)]
    pub start_page: PageId,
    /// Play the intro loader.
    #[serde(default = "default_true")]
    pub show_loader: bool,
    /// Host-measured geometry per page; missing pages use generated geometry.
    #[serde(default)]
    pub pages: BTreeMap<PageId, PageGeometry>,
}

fn default_viewport() -> Size {
    Size::new(1440.0, 900.0)
}

fn default_threshold() -> f64 {
    SCROLL_TO_TOP_THRESHOLD
}

fn default_true() -> bool {
    true
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            mobile: None,
            smooth_scroll: SmoothScrollConfig::default(),
            scroll_to_top_threshold: default_threshold(),
            transition: TransitionConfig::default(),
            start_page: PageId::default(),
            show_loader: true,
            pages: BTreeMap::new(),
        }
    }
}

impl StageConfig {
    /// Parse and validate JSON.
    pub fn from_reader(r: impl std::io::Read) -> ScrollweaveResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ScrollweaveError::serde(format!("stage config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollweaveResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollweaveError::Other(anyhow::anyhow!(
                "open stage config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every number and every supplied page layout.
    pub fn validate(&self) -> ScrollweaveResult<()> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if !ok(self.viewport.width) || !ok(self.viewport.height) {
            return Err(ScrollweaveError::validation(
                "viewport size must be finite and >= 0",
            ));
        }
        if !ok(self.scroll_to_top_threshold) {
            return Err(ScrollweaveError::validation(
                "scroll_to_top_threshold must be finite and >= 0",
            ));
        }
        let s = &self.smooth_scroll;
        if !s.lerp.is_finite() || s.lerp <= 0.0 || s.lerp > 1.0 {
            return Err(ScrollweaveError::validation(
                "smooth_scroll.lerp must be in (0, 1]",
            ));
        }
        if !ok(s.scroll_to_secs) {
            return Err(ScrollweaveError::validation(
                "smooth_scroll.scroll_to_secs must be finite and >= 0",
            ));
        }
        self.transition.validate()?;
        for page in self.pages.keys() {
            self.layout_for(*page, self.viewport)
                .validate()
                .map_err(|e| ScrollweaveError::validation(format!("page '{page}': {e}")))?;
        }
        Ok(())
    }

    /// Whether the mobile layout applies at `viewport`.
    pub fn is_mobile(&self, viewport: Size) -> bool {
        self.mobile.unwrap_or(viewport.width < MOBILE_BREAKPOINT)
    }

    /// Geometry of `page` under `viewport`: the supplied one, else a generated one.
    pub fn layout_for(&self, page: PageId, viewport: Size) -> Layout {
        match self.pages.get(&page) {
            Some(g) => Layout {
                viewport,
                content_height: g.content_height,
                regions: g.regions.clone(),
            },
            None => default_layout(page, viewport),
        }
    }
}

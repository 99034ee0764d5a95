use crate::{
    foundation::{core::RegionId, error::ScrollweaveResult},
    navigation::{
        page::PageId,
        transition::{
            NavigateOutcome, NavigationState, TransitionConfig, TransitionController,
            TransitionEvent,
        },
    },
    trigger::{layout::Layout, registry::TriggerRegistry},
};

/// Navigation surface of the site.
///
/// Owns the curtain controller and gates programmatic scrolling: scroll commands are refused
/// while a transition is in flight so they cannot race the transition's own scroll reset.
#[derive(Clone, Debug)]
pub struct Router {
    transition: TransitionController,
}

impl Router {
    /// Router showing `start`.
    pub fn new(cfg: TransitionConfig, start: PageId) -> ScrollweaveResult<Self> {
        Ok(Self {
            transition: TransitionController::new(cfg, start)?,
        })
    }

    /// Page currently mounted.
    pub fn current_page(&self) -> PageId {
        self.transition.current_page()
    }

    /// Navigation snapshot.
    pub fn state(&self) -> NavigationState {
        self.transition.state()
    }

    /// Curtain offset in percent.
    pub fn curtain_y_percent(&self) -> f64 {
        self.transition.curtain_y_percent()
    }

    /// Curtain controller.
    pub fn transition(&self) -> &TransitionController {
        &self.transition
    }

    /// Request navigation.
    pub fn navigate(&mut self, page: PageId) -> NavigateOutcome {
        self.transition.navigate(page)
    }

    /// Advance the curtain.
    pub fn tick(&mut self, dt: f64) -> Vec<TransitionEvent> {
        self.transition.tick(dt)
    }

    /// Abandon any transition (unmount).
    pub fn cancel(&mut self) {
        self.transition.cancel();
    }

    /// Scroll target for "back to top", or `None` while transitioning.
    pub fn scroll_to_top(&self) -> Option<f64> {
        if self.transition.is_transitioning() {
            tracing::debug!("scroll_to_top ignored during page transition");
            return None;
        }
        Some(0.0)
    }

    /// Scroll target bringing `region`'s top to the viewport top.
    ///
    /// `None` while transitioning or when the region is not mounted. The target includes the
    /// spacing of pins above the region.
    pub fn scroll_to_region(
        &self,
        region: &RegionId,
        layout: &Layout,
        triggers: &TriggerRegistry,
    ) -> Option<f64> {
        if self.transition.is_transitioning() {
            tracing::debug!(region = %region, "scroll_to_region ignored during page transition");
            return None;
        }
        let Some(rect) = layout.region(region) else {
            tracing::debug!(region = %region, "scroll_to_region target not mounted");
            return None;
        };
        Some(triggers.document_y(rect.y0))
    }
}

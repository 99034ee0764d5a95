use crate::{
    animation::props::PropertyState,
    foundation::{
        core::{RegionId, Size},
        error::ScrollweaveResult,
    },
    navigation::{
        page::PageId,
        router::Router,
        transition::{CURTAIN, NavigateOutcome, NavigationState, TransitionEvent},
    },
    scene::{centerpiece::Centerpiece, graph::SceneGraph, params::ParameterSet},
    scroll::{
        phase::PhaseHit,
        smooth::SmoothScroller,
        tracker::{ScrollState, ScrollTracker},
    },
    session::{
        config::StageConfig,
        scope::{AnimationScope, ScopeEvent},
    },
    site::{
        chrome::Chrome,
        pages::{hover_marquee, mount_page},
    },
    trigger::{
        layout::Layout,
        registry::{TriggerEvent, TriggerRegistry},
    },
};

/// Everything a renderer needs for one frame, derived from a single scroll sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    /// Zero-based frame counter.
    pub frame: u64,
    /// The scroll sample of this frame.
    pub scroll: ScrollState,
    /// Centerpiece journey phase.
    pub phase: PhaseHit,
    /// Rendered centerpiece pose.
    pub params: ParameterSet,
    /// Every animated property: page scope, chrome, curtain (`yPercent`) and pins (`pinY`).
    pub properties: PropertyState,
    /// Navigation state after this frame.
    pub navigation: NavigationState,
    /// Curtain position in percent of the viewport height.
    pub curtain_y_percent: f64,
    /// Whether the scroll-to-top button is shown.
    pub scroll_to_top_visible: bool,
    /// True while the intro loader covers the page.
    pub loading: bool,
    /// Trigger crossings of this frame.
    pub trigger_events: Vec<TriggerEvent>,
    /// Timeline callbacks and completions of this frame.
    pub timeline_events: Vec<ScopeEvent>,
    /// Transition milestones of this frame.
    pub transition_events: Vec<TransitionEvent>,
}

/// Per-frame driver of the whole site.
///
/// The host feeds input ([`Stage::wheel`], [`Stage::navigate`], [`Stage::resize`], ...) at any
/// time and calls [`Stage::frame`] once per animation frame. A frame runs, in order: curtain
/// tick (which may reset the scroll and swap the page scope), trigger reconcile and refresh,
/// smooth-scroll step, the scroll sample, the centerpiece, trigger update, timeline playback and
/// the scene graph update.
#[derive(Clone, Debug)]
pub struct Stage {
    cfg: StageConfig,
    viewport: Size,
    layout: Layout,
    generated_layout: bool,
    router: Router,
    scroller: SmoothScroller,
    tracker: ScrollTracker,
    centerpiece: Centerpiece,
    scene: SceneGraph,
    triggers: TriggerRegistry,
    scope: AnimationScope,
    chrome: Chrome,
    frame: u64,
}

impl Stage {
    /// Validate `cfg`, check every page's animation setup and mount the start page.
    pub fn new(cfg: StageConfig) -> ScrollweaveResult<Self> {
        cfg.validate()?;
        let viewport = cfg.viewport;
        for page in PageId::ALL {
            mount_page(page, &cfg.layout_for(page, viewport))?;
        }

        let mobile = cfg.is_mobile(viewport);
        let page = cfg.start_page;
        let layout = cfg.layout_for(page, viewport);
        let scope = mount_page(page, &layout)?;
        let mut triggers = TriggerRegistry::new();
        triggers.reconcile(&scope.descriptors());
        triggers.refresh(&layout);
        let extent = scroll_extent(triggers.content_height(), viewport.height);

        tracing::debug!(%page, mobile, triggers = triggers.len(), "stage ready");
        Ok(Self {
            viewport,
            generated_layout: !cfg.pages.contains_key(&page),
            layout,
            router: Router::new(cfg.transition, page)?,
            scroller: SmoothScroller::new(cfg.smooth_scroll, extent),
            tracker: ScrollTracker::new(),
            centerpiece: Centerpiece::new(mobile)?,
            scene: SceneGraph::centerpiece(mobile),
            triggers,
            scope,
            chrome: Chrome::new(cfg.show_loader, cfg.scroll_to_top_threshold)?,
            frame: 0,
            cfg,
        })
    }

    /// Configuration the stage was built from.
    pub fn config(&self) -> &StageConfig {
        &self.cfg
    }

    /// Page currently mounted.
    pub fn page(&self) -> PageId {
        self.router.current_page()
    }

    /// Navigation state.
    pub fn navigation(&self) -> NavigationState {
        self.router.state()
    }

    /// Current viewport.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Geometry of the mounted page.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Registered triggers.
    pub fn triggers(&self) -> &TriggerRegistry {
        &self.triggers
    }

    /// Animation scope of the mounted page.
    pub fn scope(&self) -> &AnimationScope {
        &self.scope
    }

    /// Scene description with the latest pose applied.
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// Loader, scroll-to-top button and menu.
    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    /// Rendered scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.scroller.offset()
    }

    /// Most recent scroll sample.
    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.last()
    }

    /// Number of frames run.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// User wheel or touch input in pixels.
    pub fn wheel(&mut self, delta_px: f64) {
        self.scroller.wheel(delta_px);
    }

    /// Request a page change. Closes the mobile menu either way.
    pub fn navigate(&mut self, page: PageId) -> NavigateOutcome {
        self.chrome.close_menu();
        let outcome = self.router.navigate(page);
        tracing::debug!(%page, ?outcome, "navigate");
        outcome
    }

    /// Scroll smoothly to the top; false while a transition is in flight.
    pub fn scroll_to_top(&mut self) -> bool {
        match self.router.scroll_to_top() {
            Some(y) => {
                self.scroller.scroll_to(y);
                true
            }
            None => false,
        }
    }

    /// Scroll smoothly to a region; false while transitioning or when it is not mounted.
    pub fn scroll_to_region(&mut self, region: &RegionId) -> bool {
        match self
            .router
            .scroll_to_region(region, &self.layout, &self.triggers)
        {
            Some(y) => {
                self.scroller.scroll_to(y);
                true
            }
            None => false,
        }
    }

    /// Pointer entered or left a region. Testimonial rows slow down while hovered; returns
    /// whether anything on the mounted page reacted.
    pub fn hover(&mut self, region: &RegionId, hovered: bool) -> bool {
        let reacted = hover_marquee(&mut self.scope, region.as_str(), hovered);
        tracing::trace!(%region, hovered, reacted, "hover");
        reacted
    }

    /// Open or close the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.chrome.toggle_menu();
    }

    /// New viewport size. Trigger windows are recomputed on the next frame.
    pub fn resize(&mut self, viewport: Size) {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if !ok(viewport.width) || !ok(viewport.height) {
            tracing::debug!(?viewport, "resize ignored: invalid size");
            return;
        }
        self.viewport = viewport;
        self.layout = if self.generated_layout {
            self.cfg.layout_for(self.page(), viewport)
        } else {
            self.layout.resized(viewport)
        };
    }

    /// Replace the mounted page's geometry with a host measurement.
    pub fn set_layout(&mut self, layout: Layout) -> ScrollweaveResult<()> {
        layout.validate()?;
        self.viewport = layout.viewport;
        self.layout = layout;
        self.generated_layout = false;
        Ok(())
    }

    /// Run one frame of `dt` seconds.
    #[tracing::instrument(skip(self), fields(frame = self.frame, page = %self.router.current_page()))]
    pub fn frame(&mut self, dt: f64) -> FrameOutput {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let transition_events = self.router.tick(dt);
        for ev in &transition_events {
            match *ev {
                TransitionEvent::PageSwapped { from, to } => self.swap_page(from, to),
                TransitionEvent::ScrollReset => self.scroller.jump_to(0.0),
                TransitionEvent::CurtainCovered | TransitionEvent::Completed => {}
            }
        }

        let diff = self.triggers.reconcile(&self.scope.descriptors());
        if !diff.is_empty() {
            tracing::trace!(
                added = diff.added.len(),
                removed = diff.removed.len(),
                changed = diff.changed.len(),
                "triggers reconciled"
            );
        }
        if self.triggers.needs_refresh(&self.layout) {
            self.triggers.refresh(&self.layout);
            self.scroller.set_extent(scroll_extent(
                self.triggers.content_height(),
                self.viewport.height,
            ));
        }

        let offset = self.scroller.step(dt);
        let scroll = self.tracker.sample(
            offset,
            self.triggers.content_height(),
            self.viewport.height,
        );
        let (phase, params) = self.centerpiece.step(scroll.progress, dt);

        let trigger_events = self.triggers.update(scroll.offset);
        for ev in &trigger_events {
            self.scope.handle_event(ev);
        }
        let mut timeline_events = self.scope.advance(dt);
        self.chrome.update(scroll.offset);
        timeline_events.extend(self.chrome.advance(dt));

        self.scene.apply(&params);

        let out = FrameOutput {
            frame: self.frame,
            scroll,
            phase,
            params,
            properties: self.properties(),
            navigation: self.router.state(),
            curtain_y_percent: self.router.curtain_y_percent(),
            scroll_to_top_visible: self.chrome.scroll_to_top().is_visible(),
            loading: self.chrome.is_loading(),
            trigger_events,
            timeline_events,
            transition_events,
        };
        self.frame += 1;
        out
    }

    /// Every animated property as of the last frame.
    pub fn properties(&self) -> PropertyState {
        let mut out = self.scope.values();
        out.merge(&self.chrome.values());
        out.set(CURTAIN, "yPercent", self.router.curtain_y_percent());
        for (region, y) in self.triggers.pin_offsets() {
            out.set(region.as_str(), "pinY", y);
        }
        out
    }

    fn swap_page(&mut self, from: PageId, to: PageId) {
        self.scope.dispose();
        self.generated_layout = !self.cfg.pages.contains_key(&to);
        self.layout = self.cfg.layout_for(to, self.viewport);
        self.scope = match mount_page(to, &self.layout) {
            Ok(scope) => scope,
            Err(err) => {
                tracing::error!(page = %to, error = %err, "page setup failed; mounting it without animation");
                AnimationScope::new(to.as_str())
            }
        };
        tracing::debug!(%from, %to, "page swapped");
    }
}

fn scroll_extent(content_height: f64, viewport_height: f64) -> f64 {
    (content_height - viewport_height).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/session/stage.rs"]
mod tests;

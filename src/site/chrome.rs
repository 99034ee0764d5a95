use crate::{
    animation::{ease::Ease, props::PropertyState},
    foundation::error::ScrollweaveResult,
    session::scope::ScopeEvent,
    timeline::{
        model::{Position, Step, Timeline},
        player::{TimelineEvent, TimelinePlayer},
    },
};

/// Loader overlay.
pub const LOADER: &str = "loader";
/// Loader brand word.
pub const LOADER_WORD: &str = "loader-word";
/// Loader flash line.
pub const LOADER_FLASH: &str = "loader-flash";
/// Loader percentage counter (`count` property).
pub const LOADER_COUNTER: &str = "loader-counter";
/// Marker fired when the brand word swaps.
pub const WORD_SWAP: &str = "loader:word-swap";
/// Marker fired when the exit sequence begins.
pub const LOADER_EXIT: &str = "loader:exit";

/// Scroll-to-top button.
pub const SCROLL_TO_TOP: &str = "scroll-to-top";
/// Default offset above which the button shows.
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 400.0;

/// Mobile menu backdrop.
pub const MENU_BG: &str = "menu-bg";
/// Mobile menu links, in display order.
pub const MENU_LINKS: [&str; 3] = ["menu-link-work", "menu-link-agency", "menu-link-contact"];

/// The intro sequence: counter, word fade and the clip reveal.
pub fn loader_timeline() -> Timeline {
    Timeline::new()
        .with_base(LOADER_FLASH, "scaleX", 0.0)
        .with_base(LOADER, "clipBottom", 0.0)
        .with_base(LOADER, "visible", 1.0)
        .then(
            Step::from_to(
                &[LOADER_WORD],
                [("y", 20.0), ("opacity", 0.0)],
                [("y", 0.0), ("opacity", 1.0)],
            )
            .duration(0.8)
            .ease(Ease::OutQuart),
        )
        .then(
            Step::to(&[LOADER_WORD], [("opacity", 0.0), ("y", -20.0)])
                .duration(0.4)
                .at(Position::AfterEnd(1.2)),
        )
        .then(Step::call(WORD_SWAP))
        .then(
            Step::to(&[LOADER_WORD], [("opacity", 1.0), ("y", 0.0)])
                .duration(0.8)
                .ease(Ease::OutExpo),
        )
        .then(Step::call(LOADER_EXIT).at(Position::AfterEnd(0.5)))
        .then(
            Step::to(&[LOADER_FLASH], [("scaleX", 1.0)])
                .duration(0.6)
                .ease(Ease::InOutExpo)
                .at(Position::AfterEnd(0.2)),
        )
        .then(
            Step::to(&[LOADER_FLASH], [("scaleX", 0.0)])
                .duration(0.6)
                .ease(Ease::InOutExpo),
        )
        .then(
            Step::to(&[LOADER], [("clipBottom", 100.0)])
                .duration(1.4)
                .ease(Ease::InOutExpo)
                .at(Position::AfterEnd(-0.4)),
        )
        .then(Step::set(&[LOADER], [("visible", 0.0)]))
        // Counter runs on its own clock; declared last so it does not shift the steps above.
        .then(
            Step::from_to(&[LOADER_COUNTER], [("count", 0.0)], [("count", 90.0)])
                .duration(2.2)
                .ease(Ease::InOutCubic)
                .at(Position::At(0.0)),
        )
        .then(
            Step::to(&[LOADER_COUNTER], [("count", 100.0)])
                .duration(0.8)
                .ease(Ease::OutQuint)
                .at(Position::At(2.2)),
        )
}

/// Intro overlay played once on first load.
#[derive(Clone, Debug)]
pub struct Loader {
    player: TimelinePlayer,
    done: bool,
}

impl Loader {
    /// Compile the intro and start playing it.
    pub fn new() -> ScrollweaveResult<Self> {
        let mut player = TimelinePlayer::new(loader_timeline().compile()?);
        player.play();
        Ok(Self {
            player,
            done: false,
        })
    }

    /// Advance the intro.
    pub fn advance(&mut self, dt: f64) -> Vec<TimelineEvent> {
        let events = self.player.advance(dt);
        if events.contains(&TimelineEvent::Completed) {
            tracing::debug!("loader finished");
            self.done = true;
        }
        events
    }

    /// True once the overlay has been hidden.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Displayed percentage, rounded down.
    pub fn counter(&self) -> u32 {
        self.player
            .values()
            .get(LOADER_COUNTER, "count")
            .map_or(0, |c| c.floor().clamp(0.0, 100.0) as u32)
    }

    /// Current overlay values.
    pub fn values(&self) -> PropertyState {
        self.player.values()
    }
}

/// Overlay that tweens from wherever it currently is toward a show or hide state.
#[derive(Clone, Debug)]
struct Overlay {
    rest: PropertyState,
    player: Option<TimelinePlayer>,
}

impl Overlay {
    fn new(rest: PropertyState) -> Self {
        Self { rest, player: None }
    }

    fn values(&self) -> PropertyState {
        let mut out = self.rest.clone();
        if let Some(p) = &self.player {
            out.merge(&p.values());
        }
        out
    }

    fn retarget(&mut self, mut timeline: Timeline, what: &str) {
        let current = self.values();
        timeline.base = current.clone();
        match timeline.compile() {
            Ok(compiled) => {
                let mut player = TimelinePlayer::new(compiled);
                player.play();
                self.rest = current;
                self.player = Some(player);
            }
            Err(err) => tracing::error!(overlay = what, error = %err, "overlay timeline rejected"),
        }
    }

    fn advance(&mut self, dt: f64) -> Vec<TimelineEvent> {
        self.player
            .as_mut()
            .map(|p| p.advance(dt))
            .unwrap_or_default()
    }
}

/// Floating button that appears once the page is scrolled past a threshold.
#[derive(Clone, Debug)]
pub struct ScrollToTop {
    threshold: f64,
    visible: bool,
    overlay: Overlay,
}

impl ScrollToTop {
    /// Hidden button showing above `threshold` pixels.
    pub fn new(threshold: f64) -> Self {
        let mut rest = PropertyState::new();
        rest.set(SCROLL_TO_TOP, "opacity", 0.0);
        rest.set(SCROLL_TO_TOP, "y", 30.0);
        rest.set(SCROLL_TO_TOP, "scale", 0.8);
        Self {
            threshold,
            visible: false,
            overlay: Overlay::new(rest),
        }
    }

    /// Offset above which the button shows.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the button is (becoming) visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed the current scroll offset; returns the new visibility when it flips.
    pub fn update(&mut self, offset: f64) -> Option<bool> {
        let visible = offset > self.threshold;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        let tl = if visible {
            Timeline::new().then(
                Step::to(&[SCROLL_TO_TOP], [("opacity", 1.0), ("y", 0.0), ("scale", 1.0)])
                    .duration(0.6)
                    .ease(Ease::OutQuart),
            )
        } else {
            Timeline::new().then(
                Step::to(&[SCROLL_TO_TOP], [("opacity", 0.0), ("y", 30.0), ("scale", 0.8)])
                    .duration(0.5)
                    .ease(Ease::InQuart),
            )
        };
        self.overlay.retarget(tl, SCROLL_TO_TOP);
        Some(visible)
    }

    /// Advance the show/hide tween.
    pub fn advance(&mut self, dt: f64) -> Vec<TimelineEvent> {
        self.overlay.advance(dt)
    }

    /// Current button values.
    pub fn values(&self) -> PropertyState {
        self.overlay.values()
    }
}

/// Full-screen navigation menu used on narrow viewports.
#[derive(Clone, Debug)]
pub struct MobileMenu {
    open: bool,
    overlay: Overlay,
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MobileMenu {
    /// Closed menu.
    pub fn new() -> Self {
        let mut rest = PropertyState::new();
        rest.set(MENU_BG, "yPercent", -100.0);
        rest.set(MENU_BG, "visible", 0.0);
        for link in MENU_LINKS {
            rest.set(link, "y", 150.0);
            rest.set(link, "opacity", 0.0);
        }
        Self {
            open: false,
            overlay: Overlay::new(rest),
        }
    }

    /// Whether the menu is open (or opening).
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open when closed, close when open.
    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    /// Open or close; a no-op when already in that state.
    pub fn set_open(&mut self, open: bool) {
        if open == self.open {
            return;
        }
        self.open = open;
        let tl = if open {
            Timeline::new()
                .then(Step::set(&[MENU_BG], [("visible", 1.0)]))
                .then(
                    Step::from_to(&[MENU_BG], [("yPercent", -100.0)], [("yPercent", 0.0)])
                        .duration(1.0)
                        .ease(Ease::InOutQuint),
                )
                .then(
                    Step::from_to(
                        &MENU_LINKS,
                        [("y", 150.0), ("opacity", 0.0)],
                        [("y", 0.0), ("opacity", 1.0)],
                    )
                    .duration(1.0)
                    .stagger(0.1)
                    .ease(Ease::OutQuint)
                    .at(Position::At(0.4)),
                )
        } else {
            Timeline::new()
                .then(
                    Step::to(&MENU_LINKS, [("y", -50.0), ("opacity", 0.0)])
                        .duration(0.5)
                        .stagger(0.05)
                        .ease(Ease::InCubic),
                )
                .then(
                    Step::to(&[MENU_BG], [("yPercent", -100.0)])
                        .duration(0.8)
                        .ease(Ease::InOutQuint)
                        .at(Position::AfterEnd(-0.2)),
                )
                .then(Step::set(&[MENU_BG], [("visible", 0.0)]))
        };
        self.overlay.retarget(tl, MENU_BG);
    }

    /// Advance the open/close sequence.
    pub fn advance(&mut self, dt: f64) -> Vec<TimelineEvent> {
        self.overlay.advance(dt)
    }

    /// Current menu values.
    pub fn values(&self) -> PropertyState {
        self.overlay.values()
    }
}

/// Page-independent overlays: loader, scroll-to-top button and mobile menu.
#[derive(Clone, Debug)]
pub struct Chrome {
    loader: Option<Loader>,
    scroll_to_top: ScrollToTop,
    menu: MobileMenu,
}

impl Chrome {
    /// Chrome with an optional intro loader.
    pub fn new(show_loader: bool, scroll_to_top_threshold: f64) -> ScrollweaveResult<Self> {
        Ok(Self {
            loader: if show_loader { Some(Loader::new()?) } else { None },
            scroll_to_top: ScrollToTop::new(scroll_to_top_threshold),
            menu: MobileMenu::new(),
        })
    }

    /// Intro loader, if one was requested.
    pub fn loader(&self) -> Option<&Loader> {
        self.loader.as_ref()
    }

    /// True while the loader still covers the page.
    pub fn is_loading(&self) -> bool {
        self.loader.as_ref().is_some_and(|l| !l.is_done())
    }

    /// Scroll-to-top button.
    pub fn scroll_to_top(&self) -> &ScrollToTop {
        &self.scroll_to_top
    }

    /// Mobile menu.
    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    /// Open or close the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Close the mobile menu if it is open.
    pub fn close_menu(&mut self) {
        self.menu.set_open(false);
    }

    /// Feed the scroll offset sampled this frame.
    pub fn update(&mut self, offset: f64) {
        if let Some(visible) = self.scroll_to_top.update(offset) {
            tracing::trace!(visible, "scroll-to-top toggled");
        }
    }

    /// Advance every overlay.
    pub fn advance(&mut self, dt: f64) -> Vec<ScopeEvent> {
        let mut out = Vec::new();
        let mut tag = |scope: &str, events: Vec<TimelineEvent>| {
            out.extend(events.into_iter().map(|event| ScopeEvent {
                scope: scope.to_string(),
                slot: 0,
                event,
            }));
        };
        if let Some(loader) = &mut self.loader {
            tag(LOADER, loader.advance(dt));
        }
        tag(SCROLL_TO_TOP, self.scroll_to_top.advance(dt));
        tag(MENU_BG, self.menu.advance(dt));
        out
    }

    /// Values of every overlay.
    pub fn values(&self) -> PropertyState {
        let mut out = PropertyState::new();
        if let Some(loader) = &self.loader {
            out.merge(&loader.values());
        }
        out.merge(&self.scroll_to_top.values());
        out.merge(&self.menu.values());
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/chrome.rs"]
mod tests;

use crate::{
    animation::ease::Ease,
    foundation::error::{ScrollweaveError, ScrollweaveResult},
    navigation::page::PageId,
    timeline::{
        model::{Step, Timeline},
        player::{TimelineEvent, TimelinePlayer},
    },
};

/// Target name of the curtain in property snapshots.
pub const CURTAIN: &str = "curtain";

/// Curtain position (`yPercent`) while parked below the viewport.
pub const CURTAIN_PARKED: f64 = 100.0;

/// Curtain timing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionConfig {
    /// Seconds for the curtain to cover the page.
    #[serde(default = "default_secs")]
    pub enter_secs: f64,
    /// Seconds for the curtain to uncover the new page.
    #[serde(default = "default_secs")]
    pub exit_secs: f64,
    /// Ease of both curtain moves.
    #[serde(default = "default_ease")]
    pub ease: Ease,
}

fn default_secs() -> f64 {
    0.8
}

fn default_ease() -> Ease {
    Ease::InOutQuint
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enter_secs: default_secs(),
            exit_secs: default_secs(),
            ease: default_ease(),
        }
    }
}

impl TransitionConfig {
    /// Check durations.
    pub fn validate(&self) -> ScrollweaveResult<()> {
        for (name, v) in [("enter_secs", self.enter_secs), ("exit_secs", self.exit_secs)] {
            if !v.is_finite() || v < 0.0 {
                return Err(ScrollweaveError::validation(format!(
                    "transition {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Where the controller is in the curtain sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPhase {
    /// No transition in flight.
    #[default]
    Idle,
    /// Curtain moving up over the page.
    Entering,
    /// Curtain covers the viewport; the page swaps on the next tick.
    Swapping,
    /// Curtain moving up off the new page.
    Exiting,
}

/// Answer to a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigateOutcome {
    /// A transition started.
    Started,
    /// Already on that page; nothing happens.
    SamePage,
    /// Another transition is in flight; the request is dropped.
    Busy,
}

/// Milestones of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionEvent {
    /// The curtain fully covers the viewport.
    CurtainCovered,
    /// The visible page changed.
    PageSwapped {
        /// Page unmounted.
        from: PageId,
        /// Page mounted.
        to: PageId,
    },
    /// Scroll position must jump to the top.
    ScrollReset,
    /// The curtain is parked again and navigation is accepted.
    Completed,
}

/// Observable navigation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NavigationState {
    /// Page currently mounted.
    pub current_page: PageId,
    /// True from a started navigation until its `Completed` event.
    pub transitioning: bool,
}

/// Curtain state machine: `Idle → Entering → Swapping → Exiting → Idle`.
#[derive(Clone, Debug)]
pub struct TransitionController {
    current: PageId,
    pending: Option<PageId>,
    phase: TransitionPhase,
    enter: TimelinePlayer,
    exit: TimelinePlayer,
}

impl TransitionController {
    /// Idle controller showing `start`.
    pub fn new(cfg: TransitionConfig, start: PageId) -> ScrollweaveResult<Self> {
        cfg.validate()?;
        let enter = Timeline::new()
            .then(
                Step::from_to(&[CURTAIN], [("yPercent", CURTAIN_PARKED)], [("yPercent", 0.0)])
                    .duration(cfg.enter_secs)
                    .ease(cfg.ease),
            )
            .compile()?;
        let exit = Timeline::new()
            .then(
                Step::from_to(&[CURTAIN], [("yPercent", 0.0)], [("yPercent", -100.0)])
                    .duration(cfg.exit_secs)
                    .ease(cfg.ease),
            )
            .compile()?;
        Ok(Self {
            current: start,
            pending: None,
            phase: TransitionPhase::Idle,
            enter: TimelinePlayer::new(enter),
            exit: TimelinePlayer::new(exit),
        })
    }

    /// Page currently mounted.
    pub fn current_page(&self) -> PageId {
        self.current
    }

    /// Page being navigated to, if any.
    pub fn pending_page(&self) -> Option<PageId> {
        self.pending
    }

    /// Current phase.
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// True while a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    /// Snapshot for consumers.
    pub fn state(&self) -> NavigationState {
        NavigationState {
            current_page: self.current,
            transitioning: self.is_transitioning(),
        }
    }

    /// Request navigation to `page`.
    ///
    /// Requests for the page currently shown are ignored in every state. Any other request while
    /// a transition is in flight is dropped as busy, including one for the page being loaded.
    pub fn navigate(&mut self, page: PageId) -> NavigateOutcome {
        if page == self.current {
            tracing::debug!(page = %page, "navigation to current page ignored");
            return NavigateOutcome::SamePage;
        }
        if self.is_transitioning() {
            tracing::debug!(page = %page, phase = ?self.phase, "navigation dropped, transition in flight");
            return NavigateOutcome::Busy;
        }
        tracing::debug!(from = %self.current, to = %page, "page transition started");
        self.pending = Some(page);
        self.phase = TransitionPhase::Entering;
        self.enter.restart();
        NavigateOutcome::Started
    }

    /// Advance the curtain by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> Vec<TransitionEvent> {
        let mut events = Vec::new();
        match self.phase {
            TransitionPhase::Idle => {}
            TransitionPhase::Entering => {
                if self.enter.advance(dt).contains(&TimelineEvent::Completed) {
                    self.phase = TransitionPhase::Swapping;
                    events.push(TransitionEvent::CurtainCovered);
                }
            }
            TransitionPhase::Swapping => {
                let from = self.current;
                let to = self.pending.take().unwrap_or(from);
                self.current = to;
                events.push(TransitionEvent::PageSwapped { from, to });
                events.push(TransitionEvent::ScrollReset);
                self.phase = TransitionPhase::Exiting;
                self.exit.restart();
            }
            TransitionPhase::Exiting => {
                if self.exit.advance(dt).contains(&TimelineEvent::Completed) {
                    self.park();
                    tracing::debug!(page = %self.current, "page transition completed");
                    events.push(TransitionEvent::Completed);
                }
            }
        }
        events
    }

    /// Drop the in-flight transition without further events.
    pub fn cancel(&mut self) {
        if self.is_transitioning() {
            tracing::debug!(phase = ?self.phase, "page transition cancelled");
        }
        self.pending = None;
        self.park();
    }

    /// Curtain offset in percent of the viewport height (100 parked below, 0 covering).
    pub fn curtain_y_percent(&self) -> f64 {
        let sample = |p: &TimelinePlayer, fallback| {
            p.values().get(CURTAIN, "yPercent").unwrap_or(fallback)
        };
        match self.phase {
            TransitionPhase::Idle => CURTAIN_PARKED,
            TransitionPhase::Entering => sample(&self.enter, CURTAIN_PARKED),
            TransitionPhase::Swapping => 0.0,
            TransitionPhase::Exiting => sample(&self.exit, 0.0),
        }
    }

    fn park(&mut self) {
        self.phase = TransitionPhase::Idle;
        self.enter.reset();
        self.exit.reset();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/transition.rs"]
mod tests;

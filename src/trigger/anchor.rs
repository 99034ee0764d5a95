use std::str::FromStr;

use crate::foundation::{
    core::{Rect, RegionId},
    error::{ScrollweaveError, ScrollweaveResult},
};

/// A point along an element or along the viewport, measured from its top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    /// Top edge.
    Top,
    /// Vertical middle.
    Center,
    /// Bottom edge.
    Bottom,
    /// Percentage of the height (`"80%"`).
    Percent(f64),
    /// Pixels from the top (`"120px"` or `"120"`).
    Px(f64),
}

impl Edge {
    /// Distance from the top for a box of the given height.
    pub fn offset(self, height: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => height * 0.5,
            Self::Bottom => height,
            Self::Percent(p) => height * p / 100.0,
            Self::Px(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = ScrollweaveError;

    fn from_str(s: &str) -> ScrollweaveResult<Self> {
        let s = s.trim();
        let bad = || ScrollweaveError::validation(format!("invalid anchor edge '{s}'"));
        let number = |v: &str| -> ScrollweaveResult<f64> {
            let n: f64 = v.parse().map_err(|_| bad())?;
            if n.is_finite() { Ok(n) } else { Err(bad()) }
        };
        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => {
                if let Some(p) = s.strip_suffix('%') {
                    Ok(Self::Percent(number(p)?))
                } else if let Some(px) = s.strip_suffix("px") {
                    Ok(Self::Px(number(px)?))
                } else {
                    Ok(Self::Px(number(s)?))
                }
            }
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Center => f.write_str("center"),
            Self::Bottom => f.write_str("bottom"),
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Px(px) => write!(f, "{px}px"),
        }
    }
}

/// `"<element edge> <viewport edge>"`: the scroll offset at which the element edge meets the
/// viewport edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Anchor {
    /// Point on the element.
    pub element: Edge,
    /// Point on the viewport.
    pub viewport: Edge,
}

impl Anchor {
    /// Build an anchor from its two edges.
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which the anchor is reached for an element at `rect`.
    pub fn resolve(self, rect: Rect, viewport_height: f64) -> f64 {
        rect.y0 + self.element.offset(rect.height()) - self.viewport.offset(viewport_height)
    }
}

impl FromStr for Anchor {
    type Err = ScrollweaveError;

    fn from_str(s: &str) -> ScrollweaveResult<Self> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(el), Some(vp), None) => Ok(Self::new(el.parse()?, vp.parse()?)),
            _ => Err(ScrollweaveError::validation(format!(
                "anchor '{s}' must be '<element edge> <viewport edge>'"
            ))),
        }
    }
}

impl TryFrom<String> for Anchor {
    type Error = ScrollweaveError;

    fn try_from(value: String) -> ScrollweaveResult<Self> {
        value.parse()
    }
}

impl From<Anchor> for String {
    fn from(value: Anchor) -> Self {
        format!("{} {}", value.element, value.viewport)
    }
}

/// End of a trigger window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EndAnchor {
    /// Anchored to the element like a start anchor.
    Absolute(Anchor),
    /// Pixels after the resolved start (`"+=1200"`).
    Relative(f64),
}

impl Default for EndAnchor {
    fn default() -> Self {
        Self::Absolute(Anchor::new(Edge::Bottom, Edge::Top))
    }
}

impl FromStr for EndAnchor {
    type Err = ScrollweaveError;

    fn from_str(s: &str) -> ScrollweaveResult<Self> {
        let t = s.trim();
        if let Some(rest) = t.strip_prefix("+=") {
            let rest = rest.trim();
            let rest = rest.strip_suffix("px").unwrap_or(rest);
            let px: f64 = rest.parse().map_err(|_| {
                ScrollweaveError::validation(format!("invalid relative end '{s}'"))
            })?;
            if !px.is_finite() || px < 0.0 {
                return Err(ScrollweaveError::validation(format!(
                    "relative end '{s}' must be finite and >= 0"
                )));
            }
            return Ok(Self::Relative(px));
        }
        Ok(Self::Absolute(t.parse()?))
    }
}

impl TryFrom<String> for EndAnchor {
    type Error = ScrollweaveError;

    fn try_from(value: String) -> ScrollweaveResult<Self> {
        value.parse()
    }
}

impl From<EndAnchor> for String {
    fn from(value: EndAnchor) -> Self {
        match value {
            EndAnchor::Absolute(a) => a.into(),
            EndAnchor::Relative(px) => format!("+={px}"),
        }
    }
}

/// What a toggle trigger does to its timeline at one boundary crossing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleAction {
    /// Play forward.
    Play,
    /// Pause in place.
    Pause,
    /// Continue in the current direction.
    Resume,
    /// Play backward.
    Reverse,
    /// Jump to the start and play.
    Restart,
    /// Jump to the start and pause.
    Reset,
    /// Jump to the end.
    Complete,
    /// Do nothing.
    #[default]
    None,
}

impl FromStr for ToggleAction {
    type Err = ScrollweaveError;

    fn from_str(s: &str) -> ScrollweaveResult<Self> {
        Ok(match s {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "reverse" => Self::Reverse,
            "restart" => Self::Restart,
            "reset" => Self::Reset,
            "complete" => Self::Complete,
            "none" => Self::None,
            other => {
                return Err(ScrollweaveError::validation(format!(
                    "unknown toggle action '{other}'"
                )));
            }
        })
    }
}

impl ToggleAction {
    fn name(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Reverse => "reverse",
            Self::Restart => "restart",
            Self::Reset => "reset",
            Self::Complete => "complete",
            Self::None => "none",
        }
    }
}

/// Actions for the four boundary crossings, written `"onEnter onLeave onEnterBack onLeaveBack"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToggleActions {
    /// Scrolling down into the window.
    pub on_enter: ToggleAction,
    /// Scrolling down past the window.
    pub on_leave: ToggleAction,
    /// Scrolling up back into the window.
    pub on_enter_back: ToggleAction,
    /// Scrolling up above the window.
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    /// Play once on first entry.
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }
}

impl ToggleActions {
    /// `play reverse play reverse`: visible only while inside the window.
    pub fn mirrored() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::Reverse,
            on_enter_back: ToggleAction::Play,
            on_leave_back: ToggleAction::Reverse,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = ScrollweaveError;

    fn from_str(s: &str) -> ScrollweaveResult<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [enter, leave, enter_back, leave_back] = parts.as_slice() else {
            return Err(ScrollweaveError::validation(format!(
                "toggle actions '{s}' must list four actions"
            )));
        };
        Ok(Self {
            on_enter: enter.parse()?,
            on_leave: leave.parse()?,
            on_enter_back: enter_back.parse()?,
            on_leave_back: leave_back.parse()?,
        })
    }
}

impl TryFrom<String> for ToggleActions {
    type Error = ScrollweaveError;

    fn try_from(value: String) -> ScrollweaveResult<Self> {
        value.parse()
    }
}

impl From<ToggleActions> for String {
    fn from(v: ToggleActions) -> Self {
        format!(
            "{} {} {} {}",
            v.on_enter.name(),
            v.on_leave.name(),
            v.on_enter_back.name(),
            v.on_leave_back.name()
        )
    }
}

/// How a trigger drives its timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    /// Timeline progress follows window progress, smoothed over `lag` seconds.
    Scrub {
        /// Smoothing time; 0 follows immediately.
        #[serde(default)]
        lag: f64,
    },
    /// Boundary crossings apply playback actions.
    Toggle(ToggleActions),
}

impl Default for TriggerMode {
    fn default() -> Self {
        Self::Toggle(ToggleActions::default())
    }
}

/// Declarative viewport trigger bound to a page region.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerSpec {
    /// Region whose geometry anchors the window.
    pub region: RegionId,
    /// Window start.
    pub start: Anchor,
    /// Window end; `"bottom top"` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EndAnchor>,
    /// Scrub or toggle.
    #[serde(default)]
    pub mode: TriggerMode,
    /// Hold the region in place while the window is active.
    #[serde(default)]
    pub pin: bool,
}

impl TriggerSpec {
    /// Toggle trigger with the default play-once actions.
    pub fn toggle(region: impl Into<RegionId>, start: &str) -> ScrollweaveResult<Self> {
        Ok(Self {
            region: region.into(),
            start: start.parse()?,
            end: None,
            mode: TriggerMode::default(),
            pin: false,
        })
    }

    /// Scrub trigger between two anchors.
    pub fn scrub(
        region: impl Into<RegionId>,
        start: &str,
        end: &str,
        lag: f64,
    ) -> ScrollweaveResult<Self> {
        if !lag.is_finite() || lag < 0.0 {
            return Err(ScrollweaveError::validation("scrub lag must be finite and >= 0"));
        }
        Ok(Self {
            region: region.into(),
            start: start.parse()?,
            end: Some(end.parse()?),
            mode: TriggerMode::Scrub { lag },
            pin: false,
        })
    }

    /// Replace the toggle actions (turns a scrub trigger into a toggle trigger).
    pub fn actions(mut self, actions: ToggleActions) -> Self {
        self.mode = TriggerMode::Toggle(actions);
        self
    }

    /// Set an explicit end anchor.
    pub fn ending(mut self, end: &str) -> ScrollweaveResult<Self> {
        self.end = Some(end.parse()?);
        Ok(self)
    }

    /// Pin the region while active.
    pub fn pinned(mut self) -> Self {
        self.pin = true;
        self
    }

    /// Effective end anchor.
    pub fn end_anchor(&self) -> EndAnchor {
        self.end.unwrap_or_default()
    }

    /// Scroll window `(start, end)` for a region at `rect`; an end before the start clamps to it.
    pub fn window(&self, rect: Rect, viewport_height: f64) -> (f64, f64) {
        let start = self.start.resolve(rect, viewport_height);
        let end = match self.end_anchor() {
            EndAnchor::Absolute(a) => a.resolve(rect, viewport_height),
            EndAnchor::Relative(px) => start + px,
        };
        (start, end.max(start))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/anchor.rs"]
mod tests;

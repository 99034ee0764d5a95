//! Scrollweave is a scroll-synchronized animation sequencing layer.
//!
//! It turns continuous scroll input into declarative animation playback: staggered reveals,
//! scrubbed parallax, pinned horizontal sections, a curtain page transition and the pose of a
//! decorative 3D centerpiece. It draws nothing; a host feeds it input and renders the values it
//! returns.
//!
//! # Frame overview
//!
//! 1. **Transition**: the curtain state machine advances and may swap the mounted page.
//! 2. **Refresh**: trigger windows are recomputed when the trigger list or the geometry changed.
//! 3. **Sample**: the smooth scroller steps and one [`ScrollState`] is taken for the frame.
//! 4. **Map**: scroll progress selects a journey [`Phase`] and the centerpiece follows it.
//! 5. **Play**: trigger crossings drive toggle and scrubbed timelines; everything advances.
//! 6. **Output**: a [`FrameOutput`] snapshot with every animated property.
//!
//! [`Stage`] runs the whole loop. The pieces are usable on their own: [`PhaseMap`] for
//! progress-to-parameter mapping, [`Timeline`] + [`TimelinePlayer`] for sequencing,
//! [`TriggerRegistry`] for viewport windows and [`TransitionController`] for the curtain.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: timelines are sampled as pure functions of time, so scrubbing backwards
//!   replays them exactly.
//! - **Infallible frames**: only construction fails; unmounted regions and busy transitions are
//!   ignored at runtime.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod navigation;
mod scene;
mod scroll;
mod session;
mod site;
mod timeline;
mod trigger;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use animation::props::{PropMap, PropertyState};
pub use foundation::core::{Fps, Rect, RegionId, Size, Vec2, Vec3};
pub use foundation::error::{ScrollweaveError, ScrollweaveResult};
pub use navigation::page::PageId;
pub use navigation::router::Router;
pub use navigation::transition::{
    CURTAIN, CURTAIN_PARKED, NavigateOutcome, NavigationState, TransitionConfig,
    TransitionController, TransitionEvent, TransitionPhase,
};
pub use scene::centerpiece::{Centerpiece, DESKTOP_X_OFFSET, FOLLOW_FACTOR, SPIN_RATE, journey};
pub use scene::graph::{
    Camera, Geometry, Group, INNER_CORE, Light, Material, Mesh, SHELL, SceneGraph, Sparkles,
};
pub use scene::params::ParameterSet;
pub use scroll::phase::{Phase, PhaseHit, PhaseMap};
pub use scroll::smooth::{SmoothScrollConfig, SmoothScroller};
pub use scroll::tracker::{ScrollState, ScrollTracker, compute_scroll_state};
pub use session::config::{PageGeometry, StageConfig};
pub use session::scope::{AnimationScope, ScopeEvent};
pub use session::stage::{FrameOutput, Stage};
pub use site::chrome::{
    Chrome, LOADER, LOADER_COUNTER, LOADER_EXIT, LOADER_FLASH, LOADER_WORD, Loader, MENU_BG,
    MENU_LINKS, MobileMenu, SCROLL_TO_TOP, SCROLL_TO_TOP_THRESHOLD, ScrollToTop, WORD_SWAP,
    loader_timeline,
};
pub use site::contact::{ContactField, ContactForm, FormStatus};
pub use site::content::{
    CAREERS_EMAIL, METRICS, Metric, NEW_BUSINESS_EMAIL, PROJECTS, Project, REVIEWS,
    ROADMAP_PHASES, Review, RoadmapPhase, SERVICES, Service, SiteContent, TEAM_MEMBERS,
    TeamMember, parse_metric, site_content,
};
pub use site::pages::{
    MARQUEE_HOVER_SCALE, MARQUEE_LOOP_SECS, MARQUEE_ROWS, MOBILE_BREAKPOINT, default_layout,
    hover_marquee, marquee_row_width, mount_page, services_scroll_amount, setup_page,
};
pub use timeline::model::{Position, Repeat, Step, StepKind, Timeline};
pub use timeline::player::{Direction, TimelineEvent, TimelinePlayer};
pub use timeline::schedule::{CompiledTimeline, Marker, ScheduledTween, default_property_value};
pub use trigger::anchor::{
    Anchor, Edge, EndAnchor, ToggleAction, ToggleActions, TriggerMode, TriggerSpec,
};
pub use trigger::layout::Layout;
pub use trigger::registry::{
    ReconcileDiff, TriggerDescriptor, TriggerEvent, TriggerEventKind, TriggerKey, TriggerRegistry,
    TriggerState, Zone,
};

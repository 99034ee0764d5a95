//! Declarative timelines.
//!
//! A [`model::Timeline`] is a list of steps. Compiling it resolves every position, stagger and
//! implicit start value into a [`schedule::CompiledTimeline`], which is sampled as a pure function
//! of time. [`player::TimelinePlayer`] moves a playhead over it for wall-clock or scrubbed playback.

pub(crate) mod model;
pub(crate) mod player;
pub(crate) mod schedule;

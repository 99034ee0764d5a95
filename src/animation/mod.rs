//! Easing curves, interpolation and animated property snapshots.

pub(crate) mod ease;
pub(crate) mod lerp;
pub(crate) mod props;

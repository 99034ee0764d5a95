//! Scroll input: raw offset normalization, inertial smoothing and phase mapping.

pub(crate) mod phase;
pub(crate) mod smooth;
pub(crate) mod tracker;

//! The decorative 3D centerpiece: its pose, its scroll journey and the scene it lives in.

pub(crate) mod centerpiece;
pub(crate) mod graph;
pub(crate) mod params;

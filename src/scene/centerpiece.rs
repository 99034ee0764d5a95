use crate::{
    animation::lerp::Lerp,
    foundation::{core::Vec3, error::ScrollweaveResult},
    scene::params::ParameterSet,
    scroll::phase::{Phase, PhaseHit, PhaseMap},
};

/// Horizontal swing of the centerpiece on wide viewports.
pub const DESKTOP_X_OFFSET: f64 = 2.5;
/// Fraction of the remaining distance the rendered pose closes per 60 Hz frame.
pub const FOLLOW_FACTOR: f64 = 0.05;
/// Base spin in radians per second of elapsed time.
pub const SPIN_RATE: f64 = 0.3;

fn pose(x: f64, z: f64, scale: f64, spin: f64, emissive: f64) -> ParameterSet {
    ParameterSet::new(Vec3::new(x, 0.0, z), scale, spin, emissive)
}

fn phase(range: (f64, f64), from: ParameterSet, to: ParameterSet) -> Phase<ParameterSet> {
    Phase {
        range_start: range.0,
        range_end: range.1,
        from,
        to,
        ease: Default::default(),
    }
}

/// The four scroll phases of the centerpiece.
///
/// `rotation_y` in the payload is the spin bonus added on top of the time-based spin. `x_offset`
/// is [`DESKTOP_X_OFFSET`] on desktop and 0 on mobile.
pub fn journey(x_offset: f64) -> ScrollweaveResult<PhaseMap<ParameterSet>> {
    PhaseMap::new(vec![
        phase(
            (0.0, 0.2),
            pose(0.0, 0.0, 1.8, 0.0, 0.5),
            pose(0.0, 0.0, 1.5, 0.0, 0.5),
        ),
        phase(
            (0.2, 0.5),
            pose(0.0, 0.0, 1.5, 0.0, 0.5),
            pose(x_offset, 0.0, 1.2, 2.0, 0.5),
        ),
        phase(
            (0.5, 0.8),
            pose(x_offset, 0.0, 1.2, 2.0, 0.5),
            pose(0.0, -5.0, 0.8, 7.0, 0.5),
        ),
        phase(
            (0.8, 1.0),
            pose(0.0, -5.0, 0.8, 0.0, 0.5),
            pose(0.0, 0.0, 2.2, 0.0, 5.0),
        ),
    ])
}

/// Scroll-driven pose of the decorative 3D object.
///
/// [`Centerpiece::target`] is a pure function of progress and elapsed time. [`Centerpiece::step`]
/// eases the rendered pose toward it; emissive intensity is applied without easing.
#[derive(Clone, Debug)]
pub struct Centerpiece {
    journey: PhaseMap<ParameterSet>,
    pose: ParameterSet,
    elapsed: f64,
}

impl Centerpiece {
    /// Centerpiece for a desktop or mobile viewport.
    pub fn new(is_mobile: bool) -> ScrollweaveResult<Self> {
        let x = if is_mobile { 0.0 } else { DESKTOP_X_OFFSET };
        Ok(Self::with_journey(journey(x)?))
    }

    /// Centerpiece following custom phases.
    pub fn with_journey(journey: PhaseMap<ParameterSet>) -> Self {
        Self {
            journey,
            pose: ParameterSet::default(),
            elapsed: 0.0,
        }
    }

    /// Phases in use.
    pub fn journey(&self) -> &PhaseMap<ParameterSet> {
        &self.journey
    }

    /// Rendered pose.
    pub fn pose(&self) -> ParameterSet {
        self.pose
    }

    /// Seconds since creation.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Target pose for `progress` at `elapsed` seconds.
    pub fn target(&self, progress: f64, elapsed: f64) -> (PhaseHit, ParameterSet) {
        let (hit, mut p) = self.journey.sample(progress);
        p.rotation_y += elapsed * SPIN_RATE;
        (hit, p)
    }

    /// Advance time by `dt`, ease toward the target and return the rendered pose.
    pub fn step(&mut self, progress: f64, dt: f64) -> (PhaseHit, ParameterSet) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += dt;
        let (hit, target) = self.target(progress, self.elapsed);
        let alpha = 1.0 - (1.0 - FOLLOW_FACTOR).powf(dt * 60.0);
        let emissive = target.emissive_intensity;
        self.pose = ParameterSet::lerp(&self.pose, &target, alpha);
        self.pose.emissive_intensity = emissive;
        (hit, self.pose)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/centerpiece.rs"]
mod tests;

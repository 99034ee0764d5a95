use crate::{
    animation::{ease::Ease, lerp::Lerp},
    foundation::error::{ScrollweaveError, ScrollweaveResult},
    foundation::math::clamp01,
};

const CONTIGUITY_EPS: f64 = 1e-9;

/// A contiguous sub-range of scroll progress with its own interpolation targets.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Phase<T> {
    /// Inclusive lower bound in `[0, 1]`.
    pub range_start: f64,
    /// Upper bound in `[0, 1]`; exclusive except for the final phase.
    pub range_end: f64,
    /// Payload at local progress 0.
    pub from: T,
    /// Payload at local progress 1.
    pub to: T,
    /// Curve applied to local progress before interpolating.
    #[serde(default)]
    pub ease: Ease,
}

impl<T: Lerp> Phase<T> {
    /// Interpolated payload at `local` progress inside this phase.
    pub fn params_at(&self, local: f64) -> T {
        T::lerp(&self.from, &self.to, self.ease.apply(local))
    }
}

/// Which phase a progress value fell into and where inside it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseHit {
    /// Zero-based phase index.
    pub index: usize,
    /// Progress renormalized to `[0, 1]` within the phase.
    pub local: f64,
}

/// Ordered phases partitioning `[0, 1]` without gaps or overlaps.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PhaseMap<T> {
    phases: Vec<Phase<T>>,
}

impl<T> PhaseMap<T> {
    /// Validate and build a phase map.
    pub fn new(phases: Vec<Phase<T>>) -> ScrollweaveResult<Self> {
        let Some(first) = phases.first() else {
            return Err(ScrollweaveError::validation(
                "phase map needs at least one phase",
            ));
        };
        if first.range_start.abs() > CONTIGUITY_EPS {
            return Err(ScrollweaveError::validation("first phase must start at 0"));
        }
        for (i, ph) in phases.iter().enumerate() {
            if !ph.range_start.is_finite() || !ph.range_end.is_finite() {
                return Err(ScrollweaveError::validation(format!(
                    "phase {i} bounds must be finite"
                )));
            }
            if ph.range_start >= ph.range_end {
                return Err(ScrollweaveError::validation(format!(
                    "phase {i} must satisfy range_start < range_end"
                )));
            }
        }
        for (i, w) in phases.windows(2).enumerate() {
            if (w[0].range_end - w[1].range_start).abs() > CONTIGUITY_EPS {
                return Err(ScrollweaveError::validation(format!(
                    "phases {i} and {} are not contiguous",
                    i + 1
                )));
            }
        }
        let last = &phases[phases.len() - 1];
        if (last.range_end - 1.0).abs() > CONTIGUITY_EPS {
            return Err(ScrollweaveError::validation("last phase must end at 1"));
        }
        Ok(Self { phases })
    }

    /// Phases in order.
    pub fn phases(&self) -> &[Phase<T>] {
        &self.phases
    }

    /// Select the phase for `progress`.
    ///
    /// Lower bounds are inclusive and upper bounds exclusive, except for the final phase which
    /// is closed, so `1.0` lands in the last phase at local progress 1.
    pub fn locate(&self, progress: f64) -> PhaseHit {
        let p = clamp01(progress);
        let index = self
            .phases
            .partition_point(|ph| ph.range_end <= p)
            .min(self.phases.len() - 1);
        let ph = &self.phases[index];
        let local = clamp01((p - ph.range_start) / (ph.range_end - ph.range_start));
        PhaseHit { index, local }
    }
}

impl<T: Lerp> PhaseMap<T> {
    /// Locate `progress` and interpolate the phase payload.
    pub fn sample(&self, progress: f64) -> (PhaseHit, T) {
        let hit = self.locate(progress);
        let value = self.phases[hit.index].params_at(hit.local);
        (hit, value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/phase.rs"]
mod tests;

use crate::{
    animation::{ease::Ease, props::PropertyState},
    foundation::math::{clamp01, lerp},
    timeline::{model::Repeat, schedule::CompiledTimeline},
};

/// Playback direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Time increases.
    Forward,
    /// Time decreases.
    Reverse,
}

/// Something the playhead crossed or reached.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum TimelineEvent {
    /// A `call` marker was crossed.
    Callback(String),
    /// A repeating timeline wrapped around; carries the loop index now playing.
    Repeated(u32),
    /// Forward playback reached the end.
    Completed,
    /// Reverse playback reached the start.
    ReverseCompleted,
}

#[derive(Clone, Copy, Debug)]
struct ScaleTween {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

/// Playhead over a [`CompiledTimeline`].
///
/// Wall-clock playback goes through [`TimelinePlayer::advance`]; scrubbing goes through
/// [`TimelinePlayer::set_progress`]. Both report the same events for the same movement, and only
/// for movement: a playhead resting on a boundary reports nothing. Jumps (`restart`, `reset`,
/// `complete`) are silent.
#[derive(Clone, Debug)]
pub struct TimelinePlayer {
    timeline: CompiledTimeline,
    time: f64,
    iteration: u32,
    direction: Direction,
    playing: bool,
    time_scale: f64,
    scale_tween: Option<ScaleTween>,
}

impl TimelinePlayer {
    /// Paused playhead at time 0.
    pub fn new(timeline: CompiledTimeline) -> Self {
        Self {
            timeline,
            time: 0.0,
            iteration: 0,
            direction: Direction::Forward,
            playing: false,
            time_scale: 1.0,
            scale_tween: None,
        }
    }

    /// Compiled timeline being played.
    pub fn timeline(&self) -> &CompiledTimeline {
        &self.timeline
    }

    /// Current time in seconds inside the current loop.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Zero-based loop index.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Current time as a fraction of the duration (0 for empty timelines).
    pub fn progress(&self) -> f64 {
        let d = self.timeline.duration();
        if d <= 0.0 {
            return 0.0;
        }
        clamp01(self.time / d)
    }

    /// Current direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True while wall-clock playback is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Multiplier applied to wall-clock time.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Set the time multiplier immediately. Negative or non-finite values are ignored.
    pub fn set_time_scale(&mut self, scale: f64) {
        if !scale.is_finite() || scale < 0.0 {
            tracing::debug!(scale, "time scale ignored");
            return;
        }
        self.scale_tween = None;
        self.time_scale = scale;
    }

    /// Ease the time multiplier toward `scale` over `secs` of unscaled time.
    pub fn ease_time_scale(&mut self, scale: f64, secs: f64, ease: Ease) {
        if !secs.is_finite() || secs <= 0.0 {
            self.set_time_scale(scale);
            return;
        }
        if !scale.is_finite() || scale < 0.0 {
            tracing::debug!(scale, "time scale ignored");
            return;
        }
        self.scale_tween = Some(ScaleTween {
            from: self.time_scale,
            to: scale,
            elapsed: 0.0,
            duration: secs,
            ease,
        });
    }

    /// Play forward from the current time.
    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.playing = true;
    }

    /// Play backward from the current time.
    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.playing = true;
    }

    /// Stop wall-clock playback, keeping the time.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Continue in the current direction.
    pub fn resume(&mut self) {
        self.playing = true;
    }

    /// Jump to the first loop's start and play forward.
    pub fn restart(&mut self) {
        self.jump(0.0, 0);
        self.play();
    }

    /// Jump to the first loop's start and pause.
    pub fn reset(&mut self) {
        self.jump(0.0, 0);
        self.direction = Direction::Forward;
        self.playing = false;
    }

    /// Jump to the end of the last loop (the current one for endless loops) and pause.
    pub fn complete(&mut self) {
        let last = match self.timeline.repeat() {
            Repeat::Times(n) => n,
            Repeat::Forever => self.iteration,
        };
        self.jump(self.timeline.duration(), last);
        self.playing = false;
    }

    /// Move the playhead inside the current loop to `time` (clamped), reporting what was crossed.
    pub fn seek(&mut self, time: f64) -> Vec<TimelineEvent> {
        let d = self.timeline.duration();
        let target = if time.is_finite() {
            time.clamp(0.0, d)
        } else {
            0.0
        };
        self.move_to(target)
    }

    /// Scrub to a fraction of the duration.
    pub fn set_progress(&mut self, progress: f64) -> Vec<TimelineEvent> {
        self.seek(clamp01(progress) * self.timeline.duration())
    }

    /// Advance wall-clock playback by `dt` seconds, scaled by the time multiplier.
    ///
    /// A repeating timeline wraps at its boundary with a [`TimelineEvent::Repeated`] instead of
    /// completing. A zero-length timeline completes on the first advance after it is played.
    pub fn advance(&mut self, dt: f64) -> Vec<TimelineEvent> {
        if !dt.is_finite() || dt < 0.0 {
            return Vec::new();
        }
        self.step_time_scale(dt);
        if !self.playing {
            return Vec::new();
        }

        let d = self.timeline.duration();
        if d <= 0.0 {
            self.playing = false;
            return vec![match self.direction {
                Direction::Forward => TimelineEvent::Completed,
                Direction::Reverse => TimelineEvent::ReverseCompleted,
            }];
        }

        let mut left = dt * self.time_scale;
        let mut events = Vec::new();
        loop {
            let (edge, room) = match self.direction {
                Direction::Forward => (d, d - self.time),
                Direction::Reverse => (0.0, self.time),
            };
            if left < room || !self.wraps() {
                let target = match self.direction {
                    Direction::Forward => (self.time + left).min(d),
                    Direction::Reverse => (self.time - left).max(0.0),
                };
                events.extend(self.move_to(target));
                if target == edge {
                    self.playing = false;
                }
                return events;
            }

            left -= room;
            events.extend(self.callbacks(self.time, edge));
            match self.direction {
                Direction::Forward => {
                    if self.timeline.repeat() == Repeat::Forever && left >= 2.0 * d {
                        let skipped = (left / d).floor() - 1.0;
                        left -= skipped * d;
                        self.iteration = self.iteration.saturating_add(skipped as u32);
                    }
                    self.iteration = self.iteration.saturating_add(1);
                    self.time = 0.0;
                }
                Direction::Reverse => {
                    self.iteration -= 1;
                    self.time = d;
                }
            }
            events.push(TimelineEvent::Repeated(self.iteration));
        }
    }

    /// Property values at the current time.
    pub fn values(&self) -> PropertyState {
        self.timeline.values_at(self.time)
    }

    fn wraps(&self) -> bool {
        match self.direction {
            Direction::Forward => match self.timeline.repeat() {
                Repeat::Times(n) => self.iteration < n,
                Repeat::Forever => true,
            },
            Direction::Reverse => self.iteration > 0,
        }
    }

    fn step_time_scale(&mut self, dt: f64) {
        let Some(tw) = self.scale_tween.as_mut() else {
            return;
        };
        tw.elapsed += dt;
        let p = (tw.elapsed / tw.duration).min(1.0);
        self.time_scale = lerp(tw.from, tw.to, tw.ease.apply(p));
        if p >= 1.0 {
            self.scale_tween = None;
        }
    }

    fn jump(&mut self, time: f64, iteration: u32) {
        self.time = time;
        self.iteration = iteration;
    }

    fn callbacks(&self, from: f64, to: f64) -> Vec<TimelineEvent> {
        self.timeline
            .markers_crossed(from, to)
            .into_iter()
            .map(|l| TimelineEvent::Callback(l.to_string()))
            .collect()
    }

    fn move_to(&mut self, target: f64) -> Vec<TimelineEvent> {
        let prev = self.time;
        let d = self.timeline.duration();
        let mut events = self.callbacks(prev, target);
        self.time = target;

        if d > 0.0 {
            if prev < d && target >= d {
                events.push(TimelineEvent::Completed);
            } else if prev > 0.0 && target <= 0.0 {
                events.push(TimelineEvent::ReverseCompleted);
            }
        }
        events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/player.rs"]
mod tests;

#![forbid(unsafe_code)]

//! Detent transition animation state.
//!
//! A [`DetentAnimation`] tracks one in-flight transition between detents.
//! The tree does not drive a clock; the embedding application samples
//! [`DetentAnimation::eased_progress`] from its own frame loop and decides
//! how to render the intermediate heights.

use web_time::Instant;

use std::time::Duration;

use super::Detent;

/// Default transition duration.
const DEFAULT_DURATION: Duration = Duration::from_millis(250);

/// An in-flight transition between two detent selections.
#[derive(Debug, Clone)]
pub struct DetentAnimation {
    from: Option<Detent>,
    to: Option<Detent>,
    started: Instant,
    duration: Duration,
}

impl DetentAnimation {
    /// Start a transition now, with the default duration.
    pub(crate) fn start(from: Option<Detent>, to: Option<Detent>) -> Self {
        Self {
            from,
            to,
            started: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    /// Override the transition duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// The detent selection the transition started from.
    pub fn from(&self) -> Option<Detent> {
        self.from
    }

    /// The detent selection the transition is heading to.
    pub fn to(&self) -> Option<Detent> {
        self.to
    }

    /// Linear progress in `[0.0, 1.0]`.
    ///
    /// A zero duration reports completion immediately.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = self.started.elapsed().as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Progress shaped by an ease-in-out cubic curve, in `[0.0, 1.0]`.
    pub fn eased_progress(&self) -> f32 {
        ease_in_out_cubic(self.progress())
    }

    /// Check if the transition has run its full duration.
    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

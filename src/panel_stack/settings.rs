// SPDX-License-Identifier: MPL-2.0
//! Immutable visual settings shared by every transition of a stack.

use super::transition::Easing;
use crate::config::{
    DEFAULT_DISTANCE, DEFAULT_DURATION_MS, DEFAULT_SCALE, MAX_DISTANCE, MAX_DURATION_MS,
    MAX_SCALE, MIN_SCALE,
};
use std::time::Duration;

/// Duration, scale and slide distance of a panel transition.
///
/// Each of the two steps of a transition (leave, then enter) lasts
/// `duration`, so a full transition takes twice as long.
///
/// # Example
///
/// ```
/// use panel_stack::TransitionSettings;
/// use std::time::Duration;
///
/// let settings = TransitionSettings::default();
/// assert_eq!(settings.duration(), Duration::from_millis(300));
/// assert_eq!(settings.scale(), 0.8);
/// assert_eq!(settings.distance(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSettings {
    duration: Duration,
    scale: f32,
    distance: f32,
    easing: Easing,
}

impl TransitionSettings {
    /// Creates settings, clamping every value to its supported range.
    #[must_use]
    pub fn new(duration: Duration, scale: f32, distance: f32, easing: Easing) -> Self {
        let max_duration = Duration::from_millis(MAX_DURATION_MS);
        Self {
            duration: duration.min(max_duration),
            scale: if scale.is_finite() {
                scale.clamp(MIN_SCALE, MAX_SCALE)
            } else {
                DEFAULT_SCALE
            },
            distance: if distance.is_finite() {
                distance.clamp(0.0, MAX_DISTANCE)
            } else {
                DEFAULT_DISTANCE
            },
            easing,
        }
    }

    #[must_use]
    pub fn with_duration(self, duration: Duration) -> Self {
        Self::new(duration, self.scale, self.distance, self.easing)
    }

    #[must_use]
    pub fn with_easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    /// Length of one step of a transition.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Length of a whole transition (leave step plus enter step).
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.duration * 2
    }

    /// Scale factor applied to the departing and arriving panel.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Slide distance in logical pixels.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            scale: DEFAULT_SCALE,
            distance: DEFAULT_DISTANCE,
            easing: Easing::default(),
        }
    }
}

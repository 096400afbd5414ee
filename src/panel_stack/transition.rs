// SPDX-License-Identifier: MPL-2.0
//! Timed transition between two panels.
//!
//! A transition is two independent sequences sharing one duration and one
//! easing curve:
//!
//! - [`FadeSequence`]: fade the outgoing panel out, hide it, then reveal the
//!   incoming panel and fade it in.
//! - [`SlideSequence`]: move and shrink the outgoing panel away along the
//!   slide direction, then snap the incoming panel to the opposite offset and
//!   bring it back to identity.
//!
//! Both are pure functions of elapsed time, so the host frame clock is the
//! only scheduler.

use super::direction::Direction;
use super::settings::TransitionSettings;
use iced::Vector;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Easing curve applied to each step of a transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `0.0..=1.0` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Translation followed by a scale about the panel centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelTransform {
    pub translation: Vector,
    pub scale: f32,
}

impl PanelTransform {
    pub const IDENTITY: Self = Self {
        translation: Vector::ZERO,
        scale: 1.0,
    };

    /// Off-screen transform for a panel pushed towards `direction`.
    #[must_use]
    pub fn displaced(direction: Direction, settings: &TransitionSettings) -> Self {
        Self {
            translation: direction.offset(settings.distance()),
            scale: settings.scale(),
        }
    }

    /// Interpolates between two transforms, `t` in `0.0..=1.0`.
    #[must_use]
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            translation: Vector::new(
                from.translation.x + (to.translation.x - from.translation.x) * t,
                from.translation.y + (to.translation.y - from.translation.y) * t,
            ),
            scale: from.scale + (to.scale - from.scale) * t,
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for PanelTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Everything the renderer needs to draw one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelVisual {
    pub opacity: f32,
    pub hidden: bool,
    pub transform: PanelTransform,
}

impl PanelVisual {
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        hidden: false,
        transform: PanelTransform::IDENTITY,
    };

    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        hidden: true,
        transform: PanelTransform::IDENTITY,
    };

    /// Whether the panel is fully visible at rest.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        !self.hidden && self.opacity >= 1.0
    }
}

/// Which step of a two-step sequence a given instant falls into.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    /// Outgoing panel animating, linear progress.
    Leave(f32),
    /// Incoming panel animating, linear progress.
    Enter(f32),
    Done,
}

fn step_at(elapsed: Duration, duration: Duration) -> Step {
    if duration.is_zero() || elapsed >= duration * 2 {
        return Step::Done;
    }
    let step = duration.as_secs_f32();
    if elapsed < duration {
        Step::Leave(elapsed.as_secs_f32() / step)
    } else {
        Step::Enter((elapsed - duration).as_secs_f32() / step)
    }
}

/// Opacity and hidden flag for one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub opacity: f32,
    pub hidden: bool,
}

/// Fade state of both panels at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeFrame {
    pub outgoing: Fade,
    pub incoming: Fade,
}

/// Cross-fade: outgoing 1 → 0, then incoming 0 → 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeSequence {
    duration: Duration,
    easing: Easing,
}

impl FadeSequence {
    #[must_use]
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> FadeFrame {
        match step_at(elapsed, self.duration) {
            Step::Leave(t) => FadeFrame {
                outgoing: Fade {
                    opacity: 1.0 - self.easing.apply(t),
                    hidden: false,
                },
                incoming: Fade {
                    opacity: 0.0,
                    hidden: true,
                },
            },
            Step::Enter(t) => FadeFrame {
                outgoing: Fade {
                    opacity: 0.0,
                    hidden: true,
                },
                incoming: Fade {
                    opacity: self.easing.apply(t),
                    hidden: false,
                },
            },
            Step::Done => FadeFrame {
                outgoing: Fade {
                    opacity: 0.0,
                    hidden: true,
                },
                incoming: Fade {
                    opacity: 1.0,
                    hidden: false,
                },
            },
        }
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        step_at(elapsed, self.duration) == Step::Done
    }
}

/// Transform state of both panels at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    pub outgoing: PanelTransform,
    pub incoming: PanelTransform,
}

/// Slide and scale: outgoing leaves along the direction, incoming arrives
/// from the opposite side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideSequence {
    duration: Duration,
    easing: Easing,
    leave: PanelTransform,
    enter: PanelTransform,
}

impl SlideSequence {
    #[must_use]
    pub fn new(direction: Direction, settings: &TransitionSettings) -> Self {
        Self {
            duration: settings.duration(),
            easing: settings.easing(),
            leave: PanelTransform::displaced(direction, settings),
            enter: PanelTransform::displaced(direction.reverse(), settings),
        }
    }

    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> SlideFrame {
        match step_at(elapsed, self.duration) {
            Step::Leave(t) => SlideFrame {
                outgoing: PanelTransform::lerp(
                    PanelTransform::IDENTITY,
                    self.leave,
                    self.easing.apply(t),
                ),
                incoming: PanelTransform::IDENTITY,
            },
            Step::Enter(t) => SlideFrame {
                outgoing: self.leave,
                incoming: PanelTransform::lerp(
                    self.enter,
                    PanelTransform::IDENTITY,
                    self.easing.apply(t),
                ),
            },
            Step::Done => SlideFrame {
                outgoing: PanelTransform::IDENTITY,
                incoming: PanelTransform::IDENTITY,
            },
        }
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        step_at(elapsed, self.duration) == Step::Done
    }
}

/// An in-flight transition from one panel index to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: usize,
    to: usize,
    direction: Direction,
    fade: FadeSequence,
    slide: SlideSequence,
    started_at: Option<Instant>,
}

impl Transition {
    #[must_use]
    pub fn new(from: usize, to: usize, direction: Direction, settings: &TransitionSettings) -> Self {
        Self {
            from,
            to,
            direction,
            fade: FadeSequence::new(settings.duration(), settings.easing()),
            slide: SlideSequence::new(direction, settings),
            started_at: None,
        }
    }

    #[must_use]
    pub fn from_index(&self) -> usize {
        self.from
    }

    #[must_use]
    pub fn to_index(&self) -> usize {
        self.to
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Time since the first frame of this transition.
    ///
    /// The first call stamps the start time, so a transition begins on the
    /// first frame after it was requested.
    pub fn elapsed(&mut self, now: Instant) -> Duration {
        let started_at = *self.started_at.get_or_insert(now);
        now.saturating_duration_since(started_at)
    }

    /// Outgoing and incoming visuals at `elapsed`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> (PanelVisual, PanelVisual) {
        let fade = self.fade.sample(elapsed);
        let slide = self.slide.sample(elapsed);
        (
            PanelVisual {
                opacity: fade.outgoing.opacity,
                hidden: fade.outgoing.hidden,
                transform: slide.outgoing,
            },
            PanelVisual {
                opacity: fade.incoming.opacity,
                hidden: fade.incoming.hidden,
                transform: slide.incoming,
            },
        )
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.fade.is_finished(elapsed) && self.slide.is_finished(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(300);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!(approx(easing.apply(0.0), 0.0));
            assert!(approx(easing.apply(1.0), 1.0));
            assert!(approx(easing.apply(-3.0), 0.0));
            assert!(approx(easing.apply(7.0), 1.0));
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.5) > Easing::Linear.apply(0.5));
        assert!(Easing::EaseIn.apply(0.5) < Easing::Linear.apply(0.5));
    }

    #[test]
    fn lerp_hits_both_ends() {
        let to = PanelTransform {
            translation: Vector::new(-100.0, 0.0),
            scale: 0.8,
        };
        assert_eq!(
            PanelTransform::lerp(PanelTransform::IDENTITY, to, 0.0),
            PanelTransform::IDENTITY
        );
        assert_eq!(PanelTransform::lerp(PanelTransform::IDENTITY, to, 1.0), to);
        let mid = PanelTransform::lerp(PanelTransform::IDENTITY, to, 0.5);
        assert!(approx(mid.translation.x, -50.0));
        assert!(approx(mid.scale, 0.9));
    }

    #[test]
    fn fade_leave_step_keeps_incoming_hidden() {
        let fade = FadeSequence::new(STEP, Easing::Linear);
        let frame = fade.sample(STEP / 2);
        assert!(approx(frame.outgoing.opacity, 0.5));
        assert!(!frame.outgoing.hidden);
        assert!(frame.incoming.hidden);
        assert!(approx(frame.incoming.opacity, 0.0));
    }

    #[test]
    fn fade_enter_step_hides_outgoing() {
        let fade = FadeSequence::new(STEP, Easing::Linear);
        let frame = fade.sample(STEP + STEP / 4);
        assert!(frame.outgoing.hidden);
        assert!(!frame.incoming.hidden);
        assert!(approx(frame.incoming.opacity, 0.25));
    }

    #[test]
    fn fade_finishes_after_two_steps() {
        let fade = FadeSequence::new(STEP, Easing::EaseOut);
        assert!(!fade.is_finished(STEP));
        assert!(fade.is_finished(STEP * 2));
        let frame = fade.sample(STEP * 2);
        assert!(approx(frame.incoming.opacity, 1.0));
        assert!(frame.outgoing.hidden);
    }

    #[test]
    fn slide_moves_outgoing_along_direction_then_incoming_from_reverse() {
        let settings = TransitionSettings::default().with_easing(Easing::Linear);
        let slide = SlideSequence::new(Direction::Left, &settings);

        let leaving = slide.sample(STEP / 2);
        assert!(approx(leaving.outgoing.translation.x, -50.0));
        assert!(approx(leaving.outgoing.scale, 0.9));
        assert!(leaving.incoming.is_identity());

        let entering = slide.sample(STEP);
        assert!(approx(entering.incoming.translation.x, 100.0));
        assert!(approx(entering.incoming.scale, 0.8));
        assert!(approx(entering.outgoing.translation.x, -100.0));

        let done = slide.sample(STEP * 3);
        assert!(done.outgoing.is_identity());
        assert!(done.incoming.is_identity());
    }

    #[test]
    fn zero_duration_is_finished_immediately() {
        let settings = TransitionSettings::default().with_duration(Duration::ZERO);
        let transition = Transition::new(0, 1, Direction::Down, &settings);
        assert!(transition.is_finished(Duration::ZERO));
        let (outgoing, incoming) = transition.sample(Duration::ZERO);
        assert_eq!(outgoing, PanelVisual::HIDDEN);
        assert_eq!(incoming, PanelVisual::SHOWN);
    }

    #[test]
    fn elapsed_is_measured_from_first_frame() {
        let settings = TransitionSettings::default();
        let mut transition = Transition::new(0, 1, Direction::Up, &settings);
        let start = Instant::now();
        assert_eq!(transition.elapsed(start), Duration::ZERO);
        assert_eq!(
            transition.elapsed(start + Duration::from_millis(120)),
            Duration::from_millis(120)
        );
    }

    #[test]
    fn transition_combines_both_sequences() {
        let settings = TransitionSettings::default();
        let transition = Transition::new(2, 1, Direction::Up, &settings);
        let (outgoing, incoming) = transition.sample(Duration::from_millis(100));
        assert!(outgoing.opacity < 1.0 && outgoing.opacity > 0.0);
        assert!(outgoing.transform.translation.y > 0.0);
        assert!(incoming.hidden);
        assert_eq!(transition.from_index(), 2);
        assert_eq!(transition.to_index(), 1);
        assert_eq!(transition.direction(), Direction::Up);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Single-selection panel container with animated transitions.
//!
//! `PanelStack` owns the selection state and the per-panel visual state
//! (opacity, hidden flag, transform). It does not own the panels' widgets:
//! each panel is an opaque handle `P`, and the host turns handles into
//! `Element`s at view time (see [`crate::widget::view`]).
//!
//! Selections are applied immediately. Animated selections start a
//! [`Transition`] that the host advances by calling [`PanelStack::tick`]
//! once per frame.
//!
//! # Overlapping selections
//!
//! Selecting while a transition is in flight snaps that transition to its
//! settled end state first, then starts the new one. At every transition
//! boundary exactly one panel is visible.
//!
//! # Example
//!
//! ```
//! use panel_stack::{Axis, PanelStack, TickOutcome};
//! use std::time::{Duration, Instant};
//!
//! let mut stack = PanelStack::new(Axis::Horizontal);
//! stack.append_panel("inbox");
//! stack.append_panel("outbox");
//! assert_eq!(stack.selected_index(), Some(1));
//!
//! stack.select_previous(true);
//! assert_eq!(stack.selected(), Some(&"inbox"));
//!
//! let start = Instant::now();
//! stack.tick(start);
//! let outcome = stack.tick(start + Duration::from_secs(1));
//! assert_eq!(outcome, TickOutcome::Finished { from: 1, to: 0 });
//! assert!(stack.visual(0).is_some_and(|v| v.is_shown()));
//! ```

mod direction;
mod settings;
mod transition;

pub use direction::{Axis, Direction};
pub use settings::TransitionSettings;
pub use transition::{
    Easing, Fade, FadeFrame, FadeSequence, PanelTransform, PanelVisual, SlideFrame,
    SlideSequence, Transition,
};

use std::time::Instant;

/// Result of advancing the stack by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No transition in flight.
    Idle,
    /// A transition is in flight and needs more frames.
    Running,
    /// A transition settled on this frame.
    Finished { from: usize, to: usize },
}

/// Ordered panels with exactly one selected at rest.
#[derive(Debug, Clone)]
pub struct PanelStack<P> {
    panels: Vec<P>,
    visuals: Vec<PanelVisual>,
    selected: Option<usize>,
    axis: Axis,
    settings: TransitionSettings,
    transition: Option<Transition>,
}

impl<P> Default for PanelStack<P> {
    fn default() -> Self {
        Self::new(Axis::default())
    }
}

impl<P> PanelStack<P> {
    /// Creates an empty stack with default transition settings.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self::with_settings(axis, TransitionSettings::default())
    }

    /// Creates an empty stack with explicit transition settings.
    #[must_use]
    pub fn with_settings(axis: Axis, settings: TransitionSettings) -> Self {
        Self {
            panels: Vec::new(),
            visuals: Vec::new(),
            selected: None,
            axis,
            settings,
            transition: None,
        }
    }

    /// Appends a panel and selects it without animation.
    ///
    /// Returns the index of the new panel.
    pub fn append_panel(&mut self, panel: P) -> usize {
        self.panels.push(panel);
        self.visuals.push(PanelVisual::HIDDEN);
        let index = self.panels.len() - 1;
        tracing::debug!(index, "panel appended");
        self.select(index, false);
        index
    }

    /// Selects the panel after the current one.
    pub fn select_next(&mut self, animated: bool) -> bool {
        match self.selected {
            Some(current) => self.select(current + 1, animated),
            None => false,
        }
    }

    /// Selects the panel before the current one.
    pub fn select_previous(&mut self, animated: bool) -> bool {
        match self.selected.and_then(|current| current.checked_sub(1)) {
            Some(index) => self.select(index, animated),
            None => {
                tracing::trace!("select_previous ignored at first panel");
                false
            }
        }
    }

    /// Selects the panel at `index`.
    ///
    /// Out-of-range indices and the current index are ignored and return
    /// `false`. Otherwise the selection changes immediately and, when
    /// `animated`, a transition is started that [`tick`](Self::tick) drives
    /// to completion.
    pub fn select(&mut self, index: usize, animated: bool) -> bool {
        if index >= self.panels.len() {
            tracing::trace!(index, len = self.panels.len(), "select ignored: out of range");
            return false;
        }
        if self.selected == Some(index) {
            tracing::trace!(index, "select ignored: already selected");
            return false;
        }

        self.finish_transition();

        let previous = self.selected;
        self.selected = Some(index);

        let Some(from) = previous else {
            self.visuals[index] = PanelVisual::SHOWN;
            tracing::debug!(index, "first panel selected");
            return true;
        };

        if animated {
            let direction = self.axis.direction(index > from);
            tracing::debug!(from, to = index, ?direction, "transition started");
            self.transition = Some(Transition::new(from, index, direction, &self.settings));
        } else {
            self.visuals[from] = PanelVisual::HIDDEN;
            self.visuals[index] = PanelVisual::SHOWN;
            tracing::debug!(from, to = index, "selection changed");
        }
        true
    }

    /// Slide direction for a move from the current selection to `target`.
    ///
    /// Returns `None` when nothing is selected.
    #[must_use]
    pub fn direction_for(&self, target: usize) -> Option<Direction> {
        self.selected
            .map(|current| self.axis.direction(target > current))
    }

    /// Advances the in-flight transition to `now`.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let Some(transition) = self.transition.as_mut() else {
            return TickOutcome::Idle;
        };

        let elapsed = transition.elapsed(now);
        let (from, to) = (transition.from_index(), transition.to_index());

        if transition.is_finished(elapsed) {
            self.settle(from, to);
            self.transition = None;
            tracing::debug!(from, to, "transition finished");
            return TickOutcome::Finished { from, to };
        }

        let (outgoing, incoming) = transition.sample(elapsed);
        self.visuals[from] = outgoing;
        self.visuals[to] = incoming;
        TickOutcome::Running
    }

    /// Snaps an in-flight transition to its settled end state.
    pub fn finish_transition(&mut self) {
        if let Some(transition) = self.transition.take() {
            let (from, to) = (transition.from_index(), transition.to_index());
            tracing::debug!(from, to, "transition cut short");
            self.settle(from, to);
        }
    }

    fn settle(&mut self, from: usize, to: usize) {
        self.visuals[from] = PanelVisual::HIDDEN;
        self.visuals[to] = PanelVisual::SHOWN;
    }

    /// Changes the layout axis used by later transitions.
    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn settings(&self) -> &TransitionSettings {
        &self.settings
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Handle of the selected panel.
    #[must_use]
    pub fn selected(&self) -> Option<&P> {
        self.selected.and_then(|index| self.panels.get(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&P> {
        self.panels.get(index)
    }

    #[must_use]
    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    #[must_use]
    pub fn visual(&self, index: usize) -> Option<PanelVisual> {
        self.visuals.get(index).copied()
    }

    /// Visual state of every panel, in index order.
    #[must_use]
    pub fn visuals(&self) -> &[PanelVisual] {
        &self.visuals
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Direction of the in-flight transition, if any.
    #[must_use]
    pub fn transition_direction(&self) -> Option<Direction> {
        self.transition.as_ref().map(Transition::direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn stack_with(count: usize, axis: Axis) -> PanelStack<usize> {
        let mut stack = PanelStack::new(axis);
        for panel in 0..count {
            stack.append_panel(panel);
        }
        stack
    }

    fn assert_settled_on(stack: &PanelStack<usize>, selected: usize) {
        assert_eq!(stack.selected_index(), Some(selected));
        for (index, visual) in stack.visuals().iter().enumerate() {
            if index == selected {
                assert_eq!(*visual, PanelVisual::SHOWN, "panel {index} should be shown");
            } else {
                assert_eq!(*visual, PanelVisual::HIDDEN, "panel {index} should be hidden");
            }
        }
    }

    fn run_to_end(stack: &mut PanelStack<usize>) -> TickOutcome {
        let start = Instant::now();
        stack.tick(start);
        stack.tick(start + stack.settings().total_duration())
    }

    #[test]
    fn new_stack_is_empty() {
        let stack: PanelStack<usize> = PanelStack::new(Axis::Vertical);
        assert!(stack.is_empty());
        assert_eq!(stack.selected_index(), None);
        assert!(stack.selected().is_none());
        assert!(!stack.is_animating());
    }

    #[test]
    fn append_on_empty_stack_selects_without_animation() {
        let mut stack = PanelStack::new(Axis::Horizontal);
        assert_eq!(stack.append_panel(7_usize), 0);
        assert_eq!(stack.selected(), Some(&7));
        assert!(!stack.is_animating());
        assert_settled_on(&stack, 0);
    }

    #[test]
    fn append_selects_the_new_panel() {
        let stack = stack_with(3, Axis::Horizontal);
        assert!(!stack.is_animating());
        assert_settled_on(&stack, 2);
    }

    #[test]
    fn unanimated_select_settles_every_index() {
        let mut stack = stack_with(4, Axis::Vertical);
        for index in [0, 3, 1, 2] {
            assert!(stack.select(index, false));
            assert_settled_on(&stack, index);
        }
    }

    #[test]
    fn selecting_current_index_is_a_noop() {
        let mut stack = stack_with(3, Axis::Vertical);
        let before = stack.visuals().to_vec();
        assert!(!stack.select(2, true));
        assert!(!stack.is_animating());
        assert_eq!(stack.visuals(), before.as_slice());
    }

    #[test]
    fn out_of_range_selections_are_noops() {
        let mut stack = stack_with(3, Axis::Vertical);
        stack.select(0, false);
        assert!(!stack.select(3, true));
        assert!(!stack.select(usize::MAX, false));
        assert!(!stack.select_previous(true));
        assert_settled_on(&stack, 0);
    }

    #[test]
    fn select_next_stops_at_last_panel() {
        let mut stack = stack_with(2, Axis::Horizontal);
        assert!(!stack.select_next(false));
        assert!(stack.select_previous(false));
        assert!(stack.select_next(false));
        assert_settled_on(&stack, 1);
    }

    #[test]
    fn select_on_empty_stack_is_ignored() {
        let mut stack: PanelStack<usize> = PanelStack::default();
        assert!(!stack.select(0, true));
        assert!(!stack.select_next(true));
        assert!(!stack.select_previous(true));
        assert_eq!(stack.tick(Instant::now()), TickOutcome::Idle);
    }

    #[test]
    fn animated_select_updates_index_before_any_frame() {
        let mut stack = stack_with(3, Axis::Horizontal);
        assert!(stack.select(0, true));
        assert_eq!(stack.selected_index(), Some(0));
        assert!(stack.is_animating());
        assert_eq!(stack.transition_direction(), Some(Direction::Right));
    }

    #[test]
    fn animated_select_ends_in_unanimated_state() {
        let mut animated = stack_with(3, Axis::Vertical);
        let mut instant = stack_with(3, Axis::Vertical);

        animated.select(0, true);
        instant.select(0, false);

        assert_eq!(run_to_end(&mut animated), TickOutcome::Finished { from: 2, to: 0 });
        assert!(!animated.is_animating());
        assert_eq!(animated.visuals(), instant.visuals());
        assert!(animated.visuals().iter().all(|v| v.transform.is_identity()));
    }

    #[test]
    fn tick_reports_running_mid_transition() {
        let mut stack = stack_with(2, Axis::Horizontal);
        stack.select(0, true);
        let start = Instant::now();
        assert_eq!(stack.tick(start), TickOutcome::Running);
        assert_eq!(
            stack.tick(start + Duration::from_millis(150)),
            TickOutcome::Running
        );
        assert_eq!(
            stack.tick(start + Duration::from_millis(600)),
            TickOutcome::Finished { from: 1, to: 0 }
        );
        assert_eq!(stack.tick(start + Duration::from_secs(5)), TickOutcome::Idle);
    }

    #[test]
    fn leave_step_moves_outgoing_panel_along_direction() {
        let mut stack = stack_with(2, Axis::Vertical);
        stack.select(0, false);
        stack.select(1, true);
        assert_eq!(stack.transition_direction(), Some(Direction::Down));

        let start = Instant::now();
        stack.tick(start);
        stack.tick(start + Duration::from_millis(150));

        let outgoing = stack.visual(0).unwrap();
        let incoming = stack.visual(1).unwrap();
        assert!(!outgoing.hidden);
        assert!(outgoing.opacity > 0.0 && outgoing.opacity < 1.0);
        assert!(outgoing.transform.translation.y < 0.0);
        assert!(outgoing.transform.scale < 1.0);
        assert!(incoming.hidden);
    }

    #[test]
    fn enter_step_brings_incoming_panel_from_reverse_side() {
        let mut stack = stack_with(2, Axis::Horizontal);
        stack.select(0, true);
        assert_eq!(stack.transition_direction(), Some(Direction::Right));

        let start = Instant::now();
        stack.tick(start);
        stack.tick(start + Duration::from_millis(450));

        let outgoing = stack.visual(1).unwrap();
        let incoming = stack.visual(0).unwrap();
        assert!(outgoing.hidden);
        assert!(!incoming.hidden);
        assert!(incoming.opacity > 0.0 && incoming.opacity < 1.0);
        // arriving from the left, moving right towards identity
        assert!(incoming.transform.translation.x < 0.0);
        assert!(incoming.transform.scale < 1.0);
    }

    #[test]
    fn select_during_transition_settles_previous_one() {
        let mut stack = stack_with(3, Axis::Horizontal);
        stack.select(1, true);
        let start = Instant::now();
        stack.tick(start);
        stack.tick(start + Duration::from_millis(100));

        assert!(stack.select(0, true));
        // 2 -> 1 was cut short: 2 hidden, 1 fully shown, now leaving
        assert_eq!(stack.visual(2), Some(PanelVisual::HIDDEN));
        assert_eq!(stack.visual(1), Some(PanelVisual::SHOWN));

        assert_eq!(run_to_end(&mut stack), TickOutcome::Finished { from: 1, to: 0 });
        assert_settled_on(&stack, 0);
    }

    #[test]
    fn append_during_transition_settles_and_selects_new_panel() {
        let mut stack = stack_with(2, Axis::Vertical);
        stack.select(0, true);
        stack.append_panel(2);
        assert!(!stack.is_animating());
        assert_settled_on(&stack, 2);
    }

    #[test]
    fn direction_for_follows_axis_table() {
        let mut stack = stack_with(3, Axis::Vertical);
        stack.select(1, false);
        assert_eq!(stack.direction_for(2), Some(Direction::Down));
        assert_eq!(stack.direction_for(0), Some(Direction::Up));

        stack.set_axis(Axis::Horizontal);
        assert_eq!(stack.direction_for(2), Some(Direction::Left));
        assert_eq!(stack.direction_for(0), Some(Direction::Right));
    }

    #[test]
    fn direction_for_empty_stack_is_none() {
        let stack: PanelStack<usize> = PanelStack::new(Axis::Vertical);
        assert_eq!(stack.direction_for(0), None);
    }

    #[test]
    fn finish_transition_without_transition_is_harmless() {
        let mut stack = stack_with(2, Axis::Vertical);
        stack.finish_transition();
        assert_settled_on(&stack, 1);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! `panel_stack` is a single-selection panel container for the Iced GUI
//! framework.
//!
//! It shows exactly one of several panels at a time and animates the switch
//! between panels along the stack's axis: the outgoing panel fades, slides and
//! shrinks away in the direction of navigation, then the incoming panel
//! arrives from the opposite side.
//!
//! - [`PanelStack`]: selection state and per-panel visuals.
//! - [`widget::view`]: renders a stack as an Iced element.
//! - [`config`]: `settings.toml` loading for transition settings.

pub mod app;
pub mod config;
pub mod error;
pub mod panel_stack;
pub mod paths;
pub mod widget;

pub use panel_stack::{
    Axis, Direction, Easing, PanelStack, PanelTransform, PanelVisual, TickOutcome,
    TransitionSettings,
};

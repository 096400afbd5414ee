// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::panel_stack::Axis;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    Select(usize),
    AppendPanel,
    ToggleAxis,
    ToggleAnimated(bool),
    /// Frame tick while a transition is in flight.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Axis override; takes precedence over `settings.toml`.
    pub axis: Option<Axis>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PANEL_STACK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Number of sample panels to start with.
    pub panels: Option<usize>,
}

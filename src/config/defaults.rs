// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and bounds for the transition settings.

// ==========================================================================
// Duration
// ==========================================================================

/// Default length of one transition step (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 300;

/// Maximum length of one transition step (in milliseconds).
pub const MAX_DURATION_MS: u64 = 5_000;

// ==========================================================================
// Scale
// ==========================================================================

/// Default scale factor of the departing and arriving panel.
pub const DEFAULT_SCALE: f32 = 0.8;

/// Minimum allowed scale factor.
pub const MIN_SCALE: f32 = 0.1;

/// Maximum allowed scale factor.
pub const MAX_SCALE: f32 = 2.0;

// ==========================================================================
// Distance
// ==========================================================================

/// Default slide distance (in logical pixels).
pub const DEFAULT_DISTANCE: f32 = 100.0;

/// Maximum slide distance (in logical pixels).
pub const MAX_DISTANCE: f32 = 10_000.0;

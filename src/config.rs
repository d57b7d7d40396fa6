//! Application-level configuration constants.

use crate::scoring::ScoringPreset;

// Stopwatch ticking
pub const TICK_PERIOD_MS: u32 = 10;
pub const TICK_STEP_MS: u32 = 10;

// Scoring
pub const DEFAULT_PRESET: ScoringPreset = ScoringPreset::Extended;

// UI text
pub const APP_TITLE: &str = "RACE TIMER";
pub const FASTEST_MARKER: &str = "⭐";

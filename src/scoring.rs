//! Converts elapsed time into points.
//!
//! A preset is an ordered list of half-open bands `[previous upper, upper)`.
//! The first band whose upper bound exceeds the elapsed time wins; anything
//! past the last band scores zero. A time exactly on a boundary therefore
//! belongs to the slower, lower-scoring band (1.000 s scores 18, not 25).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One scoring band: times strictly below `upper_ms` (and at or above the
/// previous band's bound) earn `points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub upper_ms: u32,
    pub points: u32,
}

const fn band(upper_secs: u32, points: u32) -> Band {
    Band {
        upper_ms: upper_secs * 1000,
        points,
    }
}

const EXTENDED_BANDS: [Band; 10] = [
    band(1, 25),
    band(2, 18),
    band(4, 15),
    band(6, 12),
    band(8, 10),
    band(10, 8),
    band(12, 6),
    band(15, 4),
    band(18, 2),
    band(25, 1),
];

const SPRINT_BANDS: [Band; 10] = [
    band(1, 25),
    band(2, 18),
    band(3, 15),
    band(4, 12),
    band(5, 10),
    band(6, 8),
    band(7, 6),
    band(8, 4),
    band(9, 2),
    band(10, 1),
];

/// The two points tables the timer knows about.
///
/// `Extended` spreads points over 25 seconds, `Sprint` over 10 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScoringPreset {
    #[default]
    Extended,
    Sprint,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown scoring preset '{0}'")]
pub struct ParsePresetError(pub String);

impl ScoringPreset {
    pub const ALL: [ScoringPreset; 2] = [ScoringPreset::Extended, ScoringPreset::Sprint];

    pub fn name(self) -> &'static str {
        match self {
            ScoringPreset::Extended => "Extended",
            ScoringPreset::Sprint => "Sprint",
        }
    }

    pub fn bands(self) -> &'static [Band] {
        match self {
            ScoringPreset::Extended => &EXTENDED_BANDS,
            ScoringPreset::Sprint => &SPRINT_BANDS,
        }
    }

    /// Elapsed time from which this preset awards nothing.
    pub fn zero_points_from_ms(self) -> u32 {
        self.bands().last().map(|b| b.upper_ms).unwrap_or(0)
    }
}

impl fmt::Display for ScoringPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoringPreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ScoringPreset::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParsePresetError(trimmed.to_string()))
    }
}

/// Base points for `elapsed_ms` under `preset`.
pub fn points_for(elapsed_ms: u32, preset: ScoringPreset) -> u32 {
    preset
        .bands()
        .iter()
        .find(|b| elapsed_ms < b.upper_ms)
        .map(|b| b.points)
        .unwrap_or(0)
}

/// Double the points when the double-points modifier is on. Saturates at `u32::MAX`.
#[inline]
pub fn apply_modifier(base_points: u32, doubled: bool) -> u32 {
    if doubled {
        base_points.saturating_mul(2)
    } else {
        base_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn extended_preset_values() {
        let p = ScoringPreset::Extended;
        assert_eq!(points_for(0, p), 25);
        assert_eq!(points_for(950, p), 25);
        assert_eq!(points_for(1_500, p), 18);
        assert_eq!(points_for(3_990, p), 15);
        assert_eq!(points_for(5_000, p), 12);
        assert_eq!(points_for(7_000, p), 10);
        assert_eq!(points_for(9_000, p), 8);
        assert_eq!(points_for(11_000, p), 6);
        assert_eq!(points_for(14_990, p), 4);
        assert_eq!(points_for(17_000, p), 2);
        assert_eq!(points_for(24_990, p), 1);
        assert_eq!(points_for(25_000, p), 0);
        assert_eq!(points_for(u32::MAX, p), 0);
    }

    #[test]
    fn sprint_preset_values() {
        let p = ScoringPreset::Sprint;
        assert_eq!(points_for(950, p), 25);
        assert_eq!(points_for(2_500, p), 15);
        assert_eq!(points_for(3_500, p), 12);
        assert_eq!(points_for(4_500, p), 10);
        assert_eq!(points_for(5_500, p), 8);
        assert_eq!(points_for(6_500, p), 6);
        assert_eq!(points_for(7_500, p), 4);
        assert_eq!(points_for(8_500, p), 2);
        assert_eq!(points_for(9_990, p), 1);
        assert_eq!(points_for(10_000, p), 0);
    }

    #[test]
    fn boundary_belongs_to_lower_band() {
        assert_eq!(points_for(999, ScoringPreset::Extended), 25);
        assert_eq!(points_for(1_000, ScoringPreset::Extended), 18);
        assert_eq!(points_for(4_000, ScoringPreset::Extended), 12);
        assert_eq!(points_for(3_000, ScoringPreset::Sprint), 12);
    }

    #[test]
    fn presets_diverge_after_three_seconds() {
        assert_eq!(points_for(3_000, ScoringPreset::Extended), 15);
        assert_eq!(points_for(3_000, ScoringPreset::Sprint), 12);
    }

    #[test]
    fn zero_points_threshold() {
        assert_eq!(ScoringPreset::Extended.zero_points_from_ms(), 25_000);
        assert_eq!(ScoringPreset::Sprint.zero_points_from_ms(), 10_000);
    }

    #[test]
    fn modifier_doubles() {
        assert_eq!(apply_modifier(25, true), 50);
        assert_eq!(apply_modifier(25, false), 25);
        assert_eq!(apply_modifier(0, true), 0);
        assert_eq!(apply_modifier(u32::MAX / 2, true), u32::MAX - 1);
        assert_eq!(apply_modifier(u32::MAX / 2 + 1, true), u32::MAX);
        assert_eq!(apply_modifier(u32::MAX, true), u32::MAX);
        assert_eq!(apply_modifier(u32::MAX, false), u32::MAX);
    }

    #[test]
    fn preset_names_round_trip() {
        for preset in ScoringPreset::ALL {
            assert_eq!(preset.to_string().parse::<ScoringPreset>(), Ok(preset));
        }
        assert!("classic".parse::<ScoringPreset>().is_err());
        assert_eq!(
            serde_json::to_string(&ScoringPreset::Sprint).unwrap(),
            "\"Sprint\""
        );
    }

    fn any_preset() -> impl Strategy<Value = ScoringPreset> {
        prop_oneof![Just(ScoringPreset::Extended), Just(ScoringPreset::Sprint)]
    }

    proptest! {
        #[test]
        fn points_never_increase_with_time(
            preset in any_preset(),
            a in 0u32..40_000,
            b in 0u32..40_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(points_for(lo, preset) >= points_for(hi, preset));
        }

        #[test]
        fn nothing_past_final_band(preset in any_preset(), extra in 0u32..1_000_000) {
            let ms = preset.zero_points_from_ms() + extra;
            prop_assert_eq!(points_for(ms, preset), 0);
        }

        #[test]
        fn doubled_is_twice_plain(p in any::<u32>()) {
            let expected = (2 * u64::from(apply_modifier(p, false))).min(u64::from(u32::MAX));
            prop_assert_eq!(u64::from(apply_modifier(p, true)), expected);
        }

        #[test]
        fn band_bounds_score_next_band(preset in any_preset(), idx in 0usize..10) {
            let bands = preset.bands();
            let bound = bands[idx].upper_ms;
            let expected = bands.get(idx + 1).map(|b| b.points).unwrap_or(0);
            prop_assert_eq!(points_for(bound, preset), expected);
        }
    }
}

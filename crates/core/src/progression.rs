//! Experience curve for player leveling.

use crate::config::GameConfig;

/// Experience required to advance from `level` to the next.
///
/// Pure and deterministic: `FACTOR * exp(EXPONENT * level) - OFFSET`.
/// With the configured constants the exponent saturates `f64` from level 1
/// onward, so every threshold after the first is `+inf` and progression
/// effectively freezes after the first level-up.
#[must_use]
pub fn required_experience(level: u16) -> f64 {
    GameConfig::EXP_CURVE_FACTOR * (GameConfig::EXP_CURVE_EXPONENT * f64::from(level)).exp()
        - GameConfig::EXP_CURVE_OFFSET
}

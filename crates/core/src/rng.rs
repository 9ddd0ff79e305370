//! Injected randomness for combat rolls.
//!
//! Combat never touches a process-global generator: every resolver call
//! receives a [`CombatRng`] handle, so a fixed seed (or a scripted
//! sequence) reproduces a whole fight roll for roll.

use std::collections::VecDeque;

use crate::config::GameConfig;

/// Source of uniform combat rolls in `[0.0, 2.0)`.
///
/// Implementations must be deterministic: the same starting state must
/// produce the same roll sequence.
pub trait CombatRng {
    /// Draw the next roll, advancing the generator.
    fn next_roll(&mut self) -> f64;
}

/// PCG random number generator (PCG-XSH-RR variant).
///
/// Small state, fast, and fully determined by its seed. Good statistical
/// quality for damage variance; not cryptographic.
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator from a seed.
    ///
    /// One warm-up step keeps low-entropy seeds from leaking into the
    /// first output.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            state: seed.wrapping_add(Self::INCREMENT),
        };
        rng.step();
        rng
    }

    /// Advance the LCG state by one step.
    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// XSH-RR output function: xorshift the high bits, then rotate by the
    /// top bits of the state.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u32(&mut self) -> u32 {
        let state = self.state;
        self.step();
        Self::output(state)
    }
}

impl CombatRng for PcgRng {
    fn next_roll(&mut self) -> f64 {
        // 32 bits of entropy scaled into [0, 2).
        f64::from(self.next_u32()) / ((u64::from(u32::MAX) + 1) as f64)
            * GameConfig::ROLL_UPPER_BOUND
    }
}

/// Replays a fixed sequence of rolls.
///
/// Intended for tests and replays.
///
/// # Panics
///
/// Drawing past the end of the script panics; in a test that is exactly
/// the failure you want to see.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<f64>,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Rolls left in the script.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl CombatRng for ScriptedRolls {
    fn next_roll(&mut self) -> f64 {
        self.rolls
            .pop_front()
            .expect("scripted roll sequence exhausted")
    }
}

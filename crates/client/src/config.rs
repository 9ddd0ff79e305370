//! Shell configuration sourced from environment variables.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

/// Interactive shell configuration.
///
/// Separate from the core's balance constants: these only shape the
/// session the shell runs, never the combat rules.
#[derive(Clone, Debug)]
pub struct ShellConfig {
    /// RNG seed for the session; a fixed seed replays every fight.
    pub seed: u64,
    /// Health given to spawned enemies.
    pub enemy_health: f64,
    /// Strength given to spawned enemies.
    pub enemy_strength: f64,
    /// Experience granted per defeated enemy.
    pub victory_experience: f64,
}

impl ShellConfig {
    /// Construct shell configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SEED` - session RNG seed (default: derived from the clock)
    /// - `ARENA_ENEMY_HEALTH` - enemy health (default: 100)
    /// - `ARENA_ENEMY_STRENGTH` - enemy strength (default: 15)
    /// - `ARENA_VICTORY_EXP` - experience per kill (default: 50)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("ARENA_SEED") {
            config.seed = seed;
        }
        if let Some(health) = read_env::<f64>("ARENA_ENEMY_HEALTH") {
            config.enemy_health = health;
        }
        if let Some(strength) = read_env::<f64>("ARENA_ENEMY_STRENGTH") {
            config.enemy_strength = strength;
        }
        if let Some(experience) = read_env::<f64>("ARENA_VICTORY_EXP") {
            config.victory_experience = experience;
        }

        config
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            enemy_health: 100.0,
            enemy_strength: 15.0,
            victory_experience: 50.0,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = ShellConfig::default();
        assert_eq!(config.enemy_health, 100.0);
        assert_eq!(config.enemy_strength, 15.0);
        assert_eq!(config.victory_experience, 50.0);
    }
}

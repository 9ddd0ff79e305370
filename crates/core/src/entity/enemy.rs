//! The opposing enemy.

use super::Vitals;

/// An enemy combatant: vitals and a strength value. No leveling, no
/// inventory, no name.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    vitals: Vitals,
    strength: f64,
}

impl Enemy {
    /// Create an enemy at full health with the given maximum.
    pub fn new(health: f64, strength: f64) -> Self {
        Self {
            vitals: Vitals::new(health),
            strength,
        }
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    // ===== vitals surface, exposed directly =====

    pub fn health(&self) -> f64 {
        self.vitals.health()
    }

    pub fn max_health(&self) -> f64 {
        self.vitals.max_health()
    }

    pub fn is_dead(&self) -> bool {
        self.vitals.is_dead()
    }

    pub fn apply_damage(&mut self, amount: f64) {
        self.vitals.apply_damage(amount);
    }
}

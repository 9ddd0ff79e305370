//! Shared health model for living entities.

/// Current and maximum health for one living entity.
///
/// Damage is unclamped: health may go negative, and a negative amount
/// heals. `Vitals` only answers whether the entity is dead; callers decide
/// what that means for the fight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    max_health: f64,
    health: f64,
}

impl Vitals {
    /// Create vitals at full health. The maximum is fixed for the
    /// entity's lifetime.
    pub fn new(max_health: f64) -> Self {
        Self {
            max_health,
            health: max_health,
        }
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    /// Subtract `amount` from current health. No clamping, no validation.
    pub fn apply_damage(&mut self, amount: f64) {
        self.health -= amount;
    }

    /// Dead iff health is at or below zero.
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

//! The player character.

use crate::config::GameConfig;
use crate::inventory::Inventory;
use crate::progression::required_experience;

use super::Vitals;

/// The player: vitals, leveling state, strength, a name, and an
/// exclusively owned inventory.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    vitals: Vitals,
    level: u16,
    experience: f64,
    experience_to_next_level: f64,
    strength: f64,
    name: String,
    inventory: Inventory,
}

impl Player {
    /// Create a level-0 player with the default starting stats and an
    /// empty inventory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            vitals: Vitals::new(GameConfig::PLAYER_STARTING_MAX_HEALTH),
            level: GameConfig::PLAYER_STARTING_LEVEL,
            experience: GameConfig::PLAYER_STARTING_EXPERIENCE,
            experience_to_next_level: GameConfig::PLAYER_STARTING_EXP_THRESHOLD,
            strength: GameConfig::PLAYER_STARTING_STRENGTH,
            name: name.into(),
            inventory: Inventory::new(),
        }
    }

    /// Override the starting strength (builder pattern).
    #[must_use]
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    /// Grant experience, applying as many level-ups as the grant covers.
    ///
    /// Invariant on return: `experience < experience_to_next_level`.
    pub fn add_experience(&mut self, amount: f64) {
        self.experience += amount;
        while self.experience >= self.experience_to_next_level {
            self.level += 1;
            self.experience -= self.experience_to_next_level;
            self.experience_to_next_level = required_experience(self.level);
        }
    }

    pub fn level(&self) -> u16 {
        self.level
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    pub fn experience_to_next_level(&self) -> f64 {
        self.experience_to_next_level
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// No validation: the empty name is permitted.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Exclusive access to the owned inventory; the borrow cannot outlive
    /// the player.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
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

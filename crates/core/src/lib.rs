//! Deterministic turn-based combat core.
//!
//! `arena-core` defines the canonical rules (entities, inventory, combat
//! resolution) and exposes pure APIs that any front end can drive. All
//! randomness is injected through [`rng::CombatRng`], so a fight replays
//! exactly from a seed. The crate does no I/O and never logs; user-facing
//! text belongs to the shell built on top.
pub mod combat;
pub mod config;
pub mod entity;
pub mod inventory;
pub mod progression;
pub mod rng;

pub use combat::{CombatAction, CombatError, RoundOutcome, RoundReport, resolve_round};
pub use config::GameConfig;
pub use entity::{Enemy, Player, Vitals};
pub use inventory::{Inventory, InventoryError};
pub use progression::required_experience;
pub use rng::{CombatRng, PcgRng, ScriptedRolls};

//! Living entities: the shared vitals model plus the player and enemy.
//!
//! Player and Enemy each hold a [`Vitals`] value and expose its operations
//! directly; there is no entity trait and no polymorphic collection.

mod enemy;
mod player;
mod vitals;

pub use enemy::Enemy;
pub use player::Player;
pub use vitals::Vitals;

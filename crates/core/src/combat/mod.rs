//! Combat resolution: actions, the per-round algorithm, and outcome
//! reporting.

mod action;
mod resolver;
mod result;

pub use action::{CombatAction, CombatError};
pub use resolver::resolve_round;
pub use result::{RoundOutcome, RoundReport};

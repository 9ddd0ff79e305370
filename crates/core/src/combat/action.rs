//! Player combat choices and their parsing boundary.

use std::str::FromStr;

/// One combat choice for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatAction {
    /// Strike the enemy for strength-scaled damage.
    Attack,
    /// Brace for the counter-attack, quartering its damage this round.
    Block,
    /// Attempt to escape the fight.
    Flee,
}

impl CombatAction {
    /// 1-based index shown by interactive menus.
    pub const fn menu_index(self) -> u8 {
        match self {
            Self::Attack => 1,
            Self::Block => 2,
            Self::Flee => 3,
        }
    }
}

/// Errors produced at the combat input boundary.
///
/// Rejected input never reaches the resolver: no roll is drawn, no
/// counter-attack happens, and the round is not consumed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// Input that names no combat action.
    #[error("invalid combat action: {input:?}")]
    InvalidAction { input: String },
}

impl TryFrom<u8> for CombatAction {
    type Error = CombatError;

    fn try_from(choice: u8) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(Self::Attack),
            2 => Ok(Self::Block),
            3 => Ok(Self::Flee),
            other => Err(CombatError::InvalidAction {
                input: other.to_string(),
            }),
        }
    }
}

impl FromStr for CombatAction {
    type Err = CombatError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "attack" => Ok(Self::Attack),
            "2" | "block" => Ok(Self::Block),
            "3" | "flee" => Ok(Self::Flee),
            _ => Err(CombatError::InvalidAction {
                input: input.to_string(),
            }),
        }
    }
}

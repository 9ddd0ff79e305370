//! Round outcome reporting.

/// Where the fight stands after a resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    /// The enemy died this round. Checked before player death, so a
    /// mutual kill counts as a victory.
    PlayerVictory,
    /// The player died this round.
    PlayerDefeat,
    /// A flee attempt succeeded; the enemy got no counter-attack.
    PlayerFled,
    /// Both sides still stand.
    RoundContinues,
}

impl RoundOutcome {
    /// True when the fight is over (victory, defeat, or escape).
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::RoundContinues)
    }
}

/// Full account of one resolved round, for display by the shell.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    /// Damage the player dealt (`None` unless the player attacked).
    pub damage_dealt: Option<f64>,
    /// Damage the counter-attack dealt (`None` if no counter happened).
    pub damage_taken: Option<f64>,
}

impl RoundReport {
    /// A report with no damage on either side.
    pub(crate) const fn quiet(outcome: RoundOutcome) -> Self {
        Self {
            outcome,
            damage_dealt: None,
            damage_taken: None,
        }
    }
}

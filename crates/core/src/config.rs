/// Game configuration constants and tunable parameters.
///
/// The resolver and progression formulas read their balance values from
/// here so tests and tools share a single source.
pub struct GameConfig;

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of inventory slots each player owns.
    pub const INVENTORY_CAPACITY: usize = 27;

    // ===== experience curve =====
    pub const EXP_CURVE_FACTOR: f64 = 1200.0;
    /// Configured equal to the factor; the curve saturates `f64` from
    /// level 1 onward (see the progression tests).
    pub const EXP_CURVE_EXPONENT: f64 = 1200.0;
    pub const EXP_CURVE_OFFSET: f64 = Self::EXP_CURVE_FACTOR - 100.0;

    // ===== starting player stats =====
    pub const PLAYER_STARTING_LEVEL: u16 = 0;
    pub const PLAYER_STARTING_EXPERIENCE: f64 = 0.0;
    pub const PLAYER_STARTING_EXP_THRESHOLD: f64 = 100.0;
    pub const PLAYER_STARTING_MAX_HEALTH: f64 = 100.0;
    pub const PLAYER_STARTING_STRENGTH: f64 = 1.0;

    // ===== combat tunables =====
    /// Upper bound (exclusive) of one combat roll.
    pub const ROLL_UPPER_BOUND: f64 = 2.0;
    /// Incoming damage multiplier while blocking.
    pub const BLOCK_DAMAGE_FACTOR: f64 = 0.25;
    /// A flee roll below this value escapes combat.
    ///
    /// Compared against the raw `[0, 2)` roll, so the effective escape
    /// rate is 10%, not 20%.
    pub const FLEE_SUCCESS_THRESHOLD: f64 = 0.2;
}

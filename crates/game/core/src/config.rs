use crate::targeting::OccupantPrecedence;

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Edge length of one grid tile in world units.
    pub tile_size: i32,

    /// Which occupant wins when an actor and a map object overlap the same
    /// adjacent tile.
    pub occupant_precedence: OccupantPrecedence,
}

impl BattleConfig {
    pub const DEFAULT_TILE_SIZE: i32 = 16;

    pub fn new() -> Self {
        Self {
            tile_size: Self::DEFAULT_TILE_SIZE,
            occupant_precedence: OccupantPrecedence::default(),
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

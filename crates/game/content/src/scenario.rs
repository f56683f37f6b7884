//! Initial battle setup.

use battle_core::{
    Action, ActorId, ActorKind, BattleEngine, BattleState, CardinalDirection, EffectPayload,
    ExecuteError, MapObject, Position,
};

/// One combatant to add at setup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSpec {
    pub id: ActorId,
    pub kind: ActorKind,
    pub health: i32,
    pub x: i32,
    pub y: i32,
}

impl ActorSpec {
    pub fn new(id: impl Into<ActorId>, kind: ActorKind, health: i32, x: i32, y: i32) -> Self {
        Self {
            id: id.into(),
            kind,
            health,
            x,
            y,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Everything needed to start a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// Added in order, which also fixes the initial turn order.
    pub actors: Vec<ActorSpec>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub map_objects: Vec<MapObject>,

    /// Played on the target when an attack begins.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hit_effect: EffectPayload,

    /// Directional inputs replayed by a headless driver, one per turn.
    #[cfg_attr(feature = "serde", serde(default))]
    pub script: Vec<CardinalDirection>,
}

impl Scenario {
    const DUEL_TILE: i32 = 16;

    /// The built-in two-actor duel.
    ///
    /// The opponent starts one tile above the player, so the player's first
    /// upward input is an attack.
    pub fn duel() -> Self {
        let tile = Self::DUEL_TILE;
        Self {
            actors: vec![
                ActorSpec::new("player-1", ActorKind::Boy, 5, tile * 22, tile * 16),
                ActorSpec::new(
                    "player-2",
                    ActorKind::CamouflageGreen,
                    1,
                    tile * 22,
                    tile * 15,
                ),
            ],
            map_objects: Vec::new(),
            hit_effect: EffectPayload::hit(),
            script: vec![CardinalDirection::Up],
        }
    }

    /// Builds the initial state by executing one `AddActor` per spec.
    pub fn into_state(self) -> Result<BattleState, ExecuteError> {
        let mut state = BattleState::with_map_objects(self.map_objects);
        let mut engine = BattleEngine::new(&mut state);
        for spec in &self.actors {
            engine.execute(&Action::add_actor(
                spec.id.clone(),
                spec.kind,
                spec.health,
                spec.position(),
            ))?;
        }
        Ok(state)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::duel()
    }
}

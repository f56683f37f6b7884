//! Authoritative battle state representation.
//!
//! [`BattleState`] owns the turn queue, the actor map, the static map objects
//! and the transient effect slot. Callers read it freely but mutate it only
//! through [`BattleEngine`](crate::engine::BattleEngine).
pub mod delta;
pub mod error;
pub mod types;

use std::collections::{BTreeMap, BTreeSet};

pub use delta::{ActorChanges, ActorFields, ActorsChanges, StateDelta, TurnChanges};
pub use error::StateInvariantError;
pub use types::{
    ActorId, ActorKind, ActorState, CardinalDirection, EffectPayload, EffectState, MapObject,
    Position, SoundCue, TurnQueue,
};

use crate::config::BattleConfig;
use crate::targeting::{self, Adjacency, TargetingError};

/// Canonical snapshot of a battle.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub(crate) turn: TurnQueue,
    pub(crate) actors: BTreeMap<ActorId, ActorState>,
    pub(crate) map_objects: Vec<MapObject>,
    pub(crate) effect: Option<EffectState>,
}

impl BattleState {
    /// Empty battle with no scenery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty battle over a fixed set of map objects.
    pub fn with_map_objects(map_objects: Vec<MapObject>) -> Self {
        Self {
            map_objects,
            ..Self::default()
        }
    }

    pub fn turn(&self) -> &TurnQueue {
        &self.turn
    }

    pub fn actors(&self) -> &BTreeMap<ActorId, ActorState> {
        &self.actors
    }

    pub fn actor(&self, id: &ActorId) -> Option<&ActorState> {
        self.actors.get(id)
    }

    pub fn map_objects(&self) -> &[MapObject] {
        &self.map_objects
    }

    pub fn effect(&self) -> Option<&EffectState> {
        self.effect.as_ref()
    }

    /// The actor at the head of the turn queue.
    pub fn active_actor(&self) -> Option<&ActorState> {
        self.turn.head().and_then(|id| self.actors.get(id))
    }

    /// True once at most one actor is left standing.
    pub fn is_decided(&self) -> bool {
        self.actors.len() <= 1
    }

    pub(crate) fn actor_mut(&mut self, id: &ActorId) -> Option<&mut ActorState> {
        self.actors.get_mut(id)
    }

    /// Removes an actor from both the map and the queue.
    pub(crate) fn eliminate(&mut self, id: &ActorId) -> Option<ActorState> {
        self.turn.remove(id);
        self.actors.remove(id)
    }

    /// Classifies the four tiles around the active actor.
    pub fn adjacency(&self, config: &BattleConfig) -> Result<Adjacency, TargetingError> {
        let active = self.turn.head().ok_or(TargetingError::NoActiveActor)?;
        targeting::resolve_adjacency(
            active,
            &self.actors,
            &self.map_objects,
            config.tile_size,
            config.occupant_precedence,
        )
    }

    /// Checks that the queue holds exactly the live actor ids, once each.
    pub fn check_invariants(&self) -> Result<(), StateInvariantError> {
        let mut seen = BTreeSet::new();
        for id in &self.turn {
            if !seen.insert(id) {
                return Err(StateInvariantError::DuplicateQueueEntry { id: id.clone() });
            }
            if !self.actors.contains_key(id) {
                return Err(StateInvariantError::QueuedWithoutActor { id: id.clone() });
            }
        }

        for (key, actor) in &self.actors {
            if &actor.id != key {
                return Err(StateInvariantError::KeyMismatch {
                    key: key.clone(),
                    id: actor.id.clone(),
                });
            }
            if !seen.contains(key) {
                return Err(StateInvariantError::ActorNotQueued { id: key.clone() });
            }
            if !actor.is_alive() {
                return Err(StateInvariantError::EliminatedActorPresent {
                    id: key.clone(),
                    health: actor.health,
                });
            }
        }

        Ok(())
    }
}

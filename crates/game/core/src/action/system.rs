//! Battle setup actions.

use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActorId, ActorKind, ActorState, BattleState, Position, StateInvariantError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddActorError {
    #[error("actor {id} must start with positive health (got {health})")]
    NonPositiveHealth { id: ActorId, health: i32 },

    #[error(transparent)]
    Invariant(#[from] StateInvariantError),
}

impl GameError for AddActorError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NonPositiveHealth { .. } => ErrorSeverity::Validation,
            Self::Invariant(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveHealth { .. } => "ADD_ACTOR_NON_POSITIVE_HEALTH",
            Self::Invariant(error) => error.error_code(),
        }
    }
}

/// Whether an `AddActor` inserted anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddActorOutcome {
    Added,
    /// The id was already present; the state is unchanged.
    DuplicateIgnored,
}

/// Inserts a combatant facing down and appends it to the turn queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddActorAction {
    pub id: ActorId,
    pub kind: ActorKind,
    pub health: i32,
    pub position: Position,
}

impl AddActorAction {
    pub fn new(id: impl Into<ActorId>, kind: ActorKind, health: i32, position: Position) -> Self {
        Self {
            id: id.into(),
            kind,
            health,
            position,
        }
    }
}

impl ActionTransition for AddActorAction {
    type Error = AddActorError;
    type Result = AddActorOutcome;

    fn pre_validate(&self, _state: &BattleState) -> Result<(), Self::Error> {
        if self.health <= 0 {
            return Err(AddActorError::NonPositiveHealth {
                id: self.id.clone(),
                health: self.health,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut BattleState) -> Result<Self::Result, Self::Error> {
        if state.actors.contains_key(&self.id) {
            return Ok(AddActorOutcome::DuplicateIgnored);
        }

        state.actors.insert(
            self.id.clone(),
            ActorState::new(self.id.clone(), self.kind, self.health, self.position),
        );
        state.turn.push(self.id.clone());
        Ok(AddActorOutcome::Added)
    }

    fn post_validate(&self, state: &BattleState) -> Result<(), Self::Error> {
        state.check_invariants().map_err(AddActorError::from)
    }
}

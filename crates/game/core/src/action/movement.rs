use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActorId, BattleState, CardinalDirection, Position, StateInvariantError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("actor {0} not found")]
    ActorNotFound(ActorId),

    #[error(transparent)]
    Invariant(#[from] StateInvariantError),
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotFound(_) => ErrorSeverity::Validation,
            Self::Invariant(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "MOVE_ACTOR_NOT_FOUND",
            Self::Invariant(error) => error.error_code(),
        }
    }
}

/// Where an actor went, as reported back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    pub from: Position,
    pub to: Position,
    pub facing: CardinalDirection,
}

impl MoveOutcome {
    /// True when the actor stayed put and only gave up its turn.
    pub fn is_pass(&self) -> bool {
        self.from == self.to
    }
}

/// Moves the active actor to an explicit destination and ends its turn.
///
/// Legality of the destination is established upstream through the
/// adjacency resolver; this action does not look at occupancy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: ActorId,
    pub destination: Position,
}

impl MoveAction {
    pub fn new(actor: impl Into<ActorId>, destination: Position) -> Self {
        Self {
            actor: actor.into(),
            destination,
        }
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = MoveOutcome;

    fn pre_validate(&self, state: &BattleState) -> Result<(), Self::Error> {
        state
            .actor(&self.actor)
            .ok_or_else(|| MoveError::ActorNotFound(self.actor.clone()))?;
        Ok(())
    }

    fn apply(&self, state: &mut BattleState) -> Result<Self::Result, Self::Error> {
        let actor = state
            .actor_mut(&self.actor)
            .ok_or_else(|| MoveError::ActorNotFound(self.actor.clone()))?;

        let from = actor.position;
        actor.face_toward(self.destination);
        actor.position = self.destination;
        let facing = actor.facing;

        state.turn.rotate();

        Ok(MoveOutcome {
            from,
            to: self.destination,
            facing,
        })
    }

    fn post_validate(&self, state: &BattleState) -> Result<(), Self::Error> {
        state.check_invariants().map_err(MoveError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::AddActorAction;
    use crate::state::ActorKind;

    fn duel() -> BattleState {
        let mut state = BattleState::new();
        for action in [
            AddActorAction::new("a", ActorKind::Boy, 5, Position::new(0, 0)),
            AddActorAction::new("b", ActorKind::CamouflageGreen, 1, Position::new(16, 0)),
        ] {
            action.apply(&mut state).unwrap();
        }
        state
    }

    fn run(state: &mut BattleState, action: &MoveAction) -> MoveOutcome {
        action.pre_validate(state).unwrap();
        let outcome = action.apply(state).unwrap();
        action.post_validate(state).unwrap();
        outcome
    }

    #[test]
    fn move_down_updates_facing_and_rotates_turn() {
        let mut state = duel();
        let outcome = run(&mut state, &MoveAction::new("a", Position::new(0, 16)));

        assert_eq!(outcome.facing, CardinalDirection::Down);
        let a = state.actor(&"a".into()).unwrap();
        assert_eq!(a.position, Position::new(0, 16));
        assert_eq!(a.facing, CardinalDirection::Down);

        let order: Vec<_> = state.turn().iter().map(ActorId::as_str).collect();
        assert_eq!(order, ["b", "a"]);
    }

    #[test]
    fn move_to_own_tile_passes_turn() {
        let mut state = duel();
        state.actor_mut(&"a".into()).unwrap().facing = CardinalDirection::Left;

        let outcome = run(&mut state, &MoveAction::new("a", Position::new(0, 0)));

        assert!(outcome.is_pass());
        let a = state.actor(&"a".into()).unwrap();
        assert_eq!(a.facing, CardinalDirection::Left);
        assert_eq!(state.turn().head(), Some(&"b".into()));
    }

    #[test]
    fn reverse_move_restores_position_not_facing() {
        let mut state = duel();
        run(&mut state, &MoveAction::new("a", Position::new(0, 16)));
        // b passes so a is head again.
        run(&mut state, &MoveAction::new("b", Position::new(16, 0)));
        run(&mut state, &MoveAction::new("a", Position::new(0, 0)));

        let a = state.actor(&"a".into()).unwrap();
        assert_eq!(a.position, Position::new(0, 0));
        assert_eq!(a.facing, CardinalDirection::Up);
    }

    #[test]
    fn unknown_actor_is_rejected_before_mutation() {
        let state = duel();
        let error = MoveAction::new("nobody", Position::new(0, 16))
            .pre_validate(&state)
            .unwrap_err();
        assert_eq!(error, MoveError::ActorNotFound("nobody".into()));
        assert_eq!(error.error_code(), "MOVE_ACTOR_NOT_FOUND");
    }
}

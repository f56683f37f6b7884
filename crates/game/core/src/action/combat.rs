use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActorId, BattleState, StateInvariantError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    #[error("attacker {0} not found")]
    AttackerNotFound(ActorId),

    #[error("target {0} not found")]
    TargetNotFound(ActorId),

    #[error("actor {0} cannot attack itself")]
    SelfTarget(ActorId),

    #[error(transparent)]
    Invariant(#[from] StateInvariantError),
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AttackerNotFound(_) | Self::TargetNotFound(_) | Self::SelfTarget(_) => {
                ErrorSeverity::Validation
            }
            Self::Invariant(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AttackerNotFound(_) => "ATTACK_ATTACKER_NOT_FOUND",
            Self::TargetNotFound(_) => "ATTACK_TARGET_NOT_FOUND",
            Self::SelfTarget(_) => "ATTACK_SELF_TARGET",
            Self::Invariant(error) => error.error_code(),
        }
    }
}

/// Result of a landed attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub target: ActorId,
    pub remaining_health: i32,
    /// The target dropped to zero and was removed from the battle.
    pub eliminated: bool,
}

/// Deals one point of damage to an adjacent opponent and ends the turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub actor: ActorId,
    pub target: ActorId,
}

impl AttackAction {
    pub const DAMAGE: i32 = 1;

    pub fn new(actor: impl Into<ActorId>, target: impl Into<ActorId>) -> Self {
        Self {
            actor: actor.into(),
            target: target.into(),
        }
    }
}

impl ActionTransition for AttackAction {
    type Error = AttackError;
    type Result = AttackOutcome;

    fn pre_validate(&self, state: &BattleState) -> Result<(), Self::Error> {
        if self.actor == self.target {
            return Err(AttackError::SelfTarget(self.actor.clone()));
        }
        state
            .actor(&self.actor)
            .ok_or_else(|| AttackError::AttackerNotFound(self.actor.clone()))?;
        state
            .actor(&self.target)
            .ok_or_else(|| AttackError::TargetNotFound(self.target.clone()))?;
        Ok(())
    }

    fn apply(&self, state: &mut BattleState) -> Result<Self::Result, Self::Error> {
        let target = state
            .actor_mut(&self.target)
            .ok_or_else(|| AttackError::TargetNotFound(self.target.clone()))?;
        target.health -= Self::DAMAGE;
        let target_position = target.position;
        let remaining_health = target.health;

        state
            .actor_mut(&self.actor)
            .ok_or_else(|| AttackError::AttackerNotFound(self.actor.clone()))?
            .face_toward(target_position);

        state.turn.rotate();

        let eliminated = remaining_health <= 0;
        if eliminated {
            state.eliminate(&self.target);
        }

        Ok(AttackOutcome {
            target: self.target.clone(),
            remaining_health,
            eliminated,
        })
    }

    fn post_validate(&self, state: &BattleState) -> Result<(), Self::Error> {
        state.check_invariants().map_err(AttackError::from)
    }
}

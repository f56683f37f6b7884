//! Error types for action execution pipeline.

use crate::action::{
    ActionTransition, AddActorAction, AttackAction, MoveAction, PlayEffectAction, StopEffectAction,
};
use crate::error::{ErrorSeverity, GameError};
use crate::state::ActorId;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the battle engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("add actor action failed: {0}")]
    AddActor(TransitionPhaseError<<AddActorAction as ActionTransition>::Error>),

    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("attack action failed: {0}")]
    Attack(TransitionPhaseError<<AttackAction as ActionTransition>::Error>),

    #[error("play effect action failed: {0}")]
    PlayEffect(TransitionPhaseError<<PlayEffectAction as ActionTransition>::Error>),

    #[error("stop effect action failed: {0}")]
    StopEffect(TransitionPhaseError<<StopEffectAction as ActionTransition>::Error>),

    #[error("invalid actor: {actor} acted but the current turn belongs to {current_actor:?}")]
    ActorNotCurrent {
        actor: ActorId,
        current_actor: Option<ActorId>,
    },
}

impl ExecuteError {
    pub fn actor_not_current(actor: ActorId, current_actor: Option<ActorId>) -> Self {
        Self::ActorNotCurrent {
            actor,
            current_actor,
        }
    }

    /// Phase of the pipeline that failed, `None` for pre-dispatch checks.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            Self::AddActor(e) => Some(e.phase),
            Self::Move(e) => Some(e.phase),
            Self::Attack(e) => Some(e.phase),
            Self::PlayEffect(e) => Some(e.phase),
            Self::StopEffect(e) => Some(e.phase),
            Self::ActorNotCurrent { .. } => None,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AddActor(e) => e.error.severity(),
            Self::Move(e) => e.error.severity(),
            Self::Attack(e) => e.error.severity(),
            Self::PlayEffect(e) => e.error.severity(),
            Self::StopEffect(e) => e.error.severity(),
            Self::ActorNotCurrent { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AddActor(e) => e.error.error_code(),
            Self::Move(e) => e.error.error_code(),
            Self::Attack(e) => e.error.error_code(),
            Self::PlayEffect(e) => e.error.error_code(),
            Self::StopEffect(e) => e.error.error_code(),
            Self::ActorNotCurrent { .. } => "EXECUTE_ACTOR_NOT_CURRENT",
        }
    }
}

//! State consistency errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ActorId;

/// Violations of the lockstep between the turn queue and the actor map.
///
/// Reachable states never produce these. Seeing one means an action broke the
/// bookkeeping, so they are all classified as fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateInvariantError {
    #[error("actor {id} is queued but has no actor entry")]
    QueuedWithoutActor { id: ActorId },

    #[error("actor {id} is live but missing from the turn queue")]
    ActorNotQueued { id: ActorId },

    #[error("actor {id} appears more than once in the turn queue")]
    DuplicateQueueEntry { id: ActorId },

    #[error("actor map key {key} holds actor {id}")]
    KeyMismatch { key: ActorId, id: ActorId },

    #[error("actor {id} is still present with health {health}")]
    EliminatedActorPresent { id: ActorId, health: i32 },
}

impl GameError for StateInvariantError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::QueuedWithoutActor { .. } => "STATE_QUEUED_WITHOUT_ACTOR",
            Self::ActorNotQueued { .. } => "STATE_ACTOR_NOT_QUEUED",
            Self::DuplicateQueueEntry { .. } => "STATE_DUPLICATE_QUEUE_ENTRY",
            Self::KeyMismatch { .. } => "STATE_KEY_MISMATCH",
            Self::EliminatedActorPresent { .. } => "STATE_ELIMINATED_ACTOR_PRESENT",
        }
    }
}

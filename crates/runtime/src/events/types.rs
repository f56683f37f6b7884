//! Event types for different topics.

use battle_core::{
    Action, ActionResult, ActorId, EffectPayload, Position, StateDelta, TransitionPhase,
};
use serde::{Deserialize, Serialize};

/// Events related to battle state changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BattleEvent {
    /// An action was executed with resulting state changes
    ActionExecuted {
        nonce: u64,
        action: Action,
        delta: Box<StateDelta>,
        result: ActionResult,
    },

    /// An action was rejected; the state is unchanged
    ActionFailed {
        action: Action,
        /// `None` when rejected before the pipeline ran (wrong turn).
        phase: Option<TransitionPhase>,
        error: String,
    },

    /// An actor dropped to zero health and left the battle
    ActorEliminated { actor: ActorId },

    /// At most one actor is left
    BattleDecided { winner: Option<ActorId> },
}

/// Turn hand-over (lightweight)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnEvent {
    /// Actor whose turn it now is
    pub actor: Option<ActorId>,
    /// Nonce of the action that handed over the turn
    pub nonce: u64,
}

/// Transient effect lifecycle, consumed by renderers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EffectEvent {
    Started {
        position: Position,
        payload: EffectPayload,
    },
    Stopped,
}

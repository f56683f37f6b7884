//! Deterministic battle rules and data types.
//!
//! `battle-core` defines the turn queue, the five battle actions, the engine
//! that applies them, and the adjacency resolver that tells a presentation
//! layer what each direction around the active actor means. All state
//! mutation flows through [`engine::BattleEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod targeting;
pub use action::{
    Action, ActionResult, ActionTransition, AddActorAction, AddActorError, AddActorOutcome,
    AttackAction, AttackError, AttackOutcome, CharacterAction, MoveAction, MoveError, MoveOutcome,
    PlayEffectAction, StopEffectAction, SystemAction,
};
pub use config::BattleConfig;
pub use engine::{
    BattleEngine, ExecuteError, ExecutionOutcome, PendingAttack, TransitionPhase,
    TransitionPhaseError,
};
pub use error::{ErrorSeverity, GameError, NeverError};
pub use state::{
    ActorFields, ActorId, ActorKind, ActorState, BattleState, CardinalDirection, EffectPayload,
    EffectState, MapObject, Position, SoundCue, StateDelta, StateInvariantError, TurnQueue,
};
pub use targeting::{
    Adjacency, Occupant, OccupantPrecedence, TargetingError, TileChoice, resolve_adjacency,
};

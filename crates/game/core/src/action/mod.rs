//! Battle actions.
//!
//! Every state change is one of five actions. Move and Attack are character
//! actions: they belong to the actor at the head of the turn queue and end
//! its turn. AddActor, PlayEffect and StopEffect are system actions issued by
//! setup code or the presentation layer and are never turn-checked.

mod combat;
mod effect;
mod movement;
mod system;
mod transition;

pub use combat::{AttackAction, AttackError, AttackOutcome};
pub use effect::{PlayEffectAction, StopEffectAction};
pub use movement::{MoveAction, MoveError, MoveOutcome};
pub use system::{AddActorAction, AddActorError, AddActorOutcome};
pub use transition::ActionTransition;

use crate::state::{ActorId, ActorKind, EffectPayload, Position};

/// Action taken by the active actor on its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterAction {
    Move(MoveAction),
    Attack(AttackAction),
}

impl CharacterAction {
    pub fn actor(&self) -> &ActorId {
        match self {
            CharacterAction::Move(action) => &action.actor,
            CharacterAction::Attack(action) => &action.actor,
        }
    }
}

/// Setup and effect actions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemAction {
    AddActor(AddActorAction),
    PlayEffect(PlayEffectAction),
    StopEffect(StopEffectAction),
}

/// Top-level action enum: a character action or a system action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Character(CharacterAction),
    System(SystemAction),
}

impl Action {
    pub fn add_actor(
        id: impl Into<ActorId>,
        kind: ActorKind,
        health: i32,
        position: Position,
    ) -> Self {
        Self::System(SystemAction::AddActor(AddActorAction::new(
            id, kind, health, position,
        )))
    }

    pub fn move_to(actor: impl Into<ActorId>, destination: Position) -> Self {
        Self::Character(CharacterAction::Move(MoveAction::new(actor, destination)))
    }

    /// Ends `actor`'s turn without changing anything else.
    ///
    /// Expressed as a move onto the actor's own tile, so it needs the current
    /// position.
    pub fn pass(actor: impl Into<ActorId>, current: Position) -> Self {
        Self::move_to(actor, current)
    }

    pub fn attack(actor: impl Into<ActorId>, target: impl Into<ActorId>) -> Self {
        Self::Character(CharacterAction::Attack(AttackAction::new(actor, target)))
    }

    pub fn play_effect(position: Position, payload: EffectPayload) -> Self {
        Self::System(SystemAction::PlayEffect(PlayEffectAction::new(
            position, payload,
        )))
    }

    pub fn stop_effect() -> Self {
        Self::System(SystemAction::StopEffect(StopEffectAction))
    }

    /// The actor whose turn this action consumes, if it is a character action.
    pub fn actor(&self) -> Option<&ActorId> {
        match self {
            Action::Character(action) => Some(action.actor()),
            Action::System(_) => None,
        }
    }

    /// Returns the snake_case name of the action, for logs and event keys.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Character(CharacterAction::Move(_)) => "move",
            Action::Character(CharacterAction::Attack(_)) => "attack",
            Action::System(SystemAction::AddActor(_)) => "add_actor",
            Action::System(SystemAction::PlayEffect(_)) => "play_effect",
            Action::System(SystemAction::StopEffect(_)) => "stop_effect",
        }
    }
}

impl From<CharacterAction> for Action {
    fn from(action: CharacterAction) -> Self {
        Self::Character(action)
    }
}

impl From<SystemAction> for Action {
    fn from(action: SystemAction) -> Self {
        Self::System(action)
    }
}

/// Action-specific result returned alongside the state delta.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    AddActor(AddActorOutcome),
    Move(MoveOutcome),
    Attack(AttackOutcome),
    EffectStarted,
    EffectStopped,
}

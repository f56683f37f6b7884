//! Action execution pipeline.
//!
//! The [`BattleEngine`] is the authoritative reducer for [`BattleState`]. It
//! checks turn ownership, drives the transition phases, and reports what
//! changed. Every mutation, setup and effects included, flows through the
//! same [`BattleEngine::execute`] entry point.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{
    Action, ActionResult, ActionTransition, AttackAction, AttackError, CharacterAction,
    SystemAction,
};
use crate::state::{ActorId, BattleState, EffectPayload, Position, StateDelta};

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// What changed in the state.
    pub delta: StateDelta,

    /// Action-specific execution result.
    pub result: ActionResult,
}

/// An attack whose hit effect is playing but whose damage is not yet applied.
///
/// Produced by [`BattleEngine::begin_attack`]. The caller decides how long to
/// let the effect play before handing it to [`BattleEngine::resolve_attack`].
#[must_use = "a pending attack does nothing until it is resolved"]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingAttack {
    action: AttackAction,
    target_position: Position,
}

impl PendingAttack {
    pub fn actor(&self) -> &ActorId {
        &self.action.actor
    }

    pub fn target(&self) -> &ActorId {
        &self.action.target
    }

    /// Where the hit effect was started.
    pub fn target_position(&self) -> Position {
        self.target_position
    }
}

/// Battle engine that owns the single write path into a [`BattleState`].
///
/// Both character actions and system actions go through
/// `pre_validate → apply → post_validate`. A failing transition leaves the
/// state exactly as it was before the call.
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut BattleState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &BattleState {
        self.state
    }

    /// Executes an action through its transition pipeline.
    ///
    /// Character actions must come from the head of the turn queue.
    pub fn execute(&mut self, action: &Action) -> Result<ExecutionOutcome, ExecuteError> {
        self.validate_actor(action)?;

        let before = self.state.clone();

        let result = match transition::execute_transition(action, self.state) {
            Ok(result) => result,
            Err(error) => {
                *self.state = before;
                return Err(error);
            }
        };

        let delta = StateDelta::from_states(action.clone(), &before, self.state);
        self.state.turn.action_nonce += 1;

        Ok(ExecutionOutcome { delta, result })
    }

    /// First half of an attack: validate it and start the hit effect on the
    /// target. Damage is dealt by [`resolve_attack`](Self::resolve_attack).
    pub fn begin_attack(
        &mut self,
        actor: impl Into<ActorId>,
        target: impl Into<ActorId>,
        payload: EffectPayload,
    ) -> Result<(PendingAttack, ExecutionOutcome), ExecuteError> {
        let attack = AttackAction::new(actor, target);
        self.validate_actor(&Action::Character(CharacterAction::Attack(attack.clone())))?;

        let rejected = |error| {
            ExecuteError::Attack(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                error,
            ))
        };
        attack.pre_validate(self.state).map_err(rejected)?;
        let target_position = self
            .state
            .actor(&attack.target)
            .map(|target| target.position)
            .ok_or_else(|| rejected(AttackError::TargetNotFound(attack.target.clone())))?;

        let outcome = self.execute(&Action::play_effect(target_position, payload))?;

        Ok((
            PendingAttack {
                action: attack,
                target_position,
            },
            outcome,
        ))
    }

    /// Second half of an attack: apply damage and rotate the turn.
    ///
    /// The attack is validated again, so a pending attack that became stale
    /// (for example because the target was removed meanwhile) fails cleanly.
    pub fn resolve_attack(
        &mut self,
        pending: PendingAttack,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(&Action::Character(CharacterAction::Attack(pending.action)))
    }

    /// Validates that a character action comes from the current turn holder.
    fn validate_actor(&self, action: &Action) -> Result<(), ExecuteError> {
        match action {
            Action::System(SystemAction::AddActor(_))
            | Action::System(SystemAction::PlayEffect(_))
            | Action::System(SystemAction::StopEffect(_)) => Ok(()),
            Action::Character(character_action) => {
                let current_actor = self.state.turn.head();
                if current_actor != Some(character_action.actor()) {
                    return Err(ExecuteError::actor_not_current(
                        character_action.actor().clone(),
                        current_actor.cloned(),
                    ));
                }
                Ok(())
            }
        }
    }
}

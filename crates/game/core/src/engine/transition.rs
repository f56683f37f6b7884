//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition, CharacterAction, SystemAction};
use crate::state::BattleState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the battle state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut BattleState,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in [`ActionResult`].
pub(super) fn execute_transition(
    action: &Action,
    state: &mut BattleState,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Character(kind) => match kind {
            CharacterAction::Move(transition) => {
                let outcome = drive_transition(transition, state).map_err(ExecuteError::Move)?;
                Ok(ActionResult::Move(outcome))
            }
            CharacterAction::Attack(transition) => {
                let outcome = drive_transition(transition, state).map_err(ExecuteError::Attack)?;
                Ok(ActionResult::Attack(outcome))
            }
        },
        Action::System(kind) => match kind {
            SystemAction::AddActor(transition) => {
                let outcome =
                    drive_transition(transition, state).map_err(ExecuteError::AddActor)?;
                Ok(ActionResult::AddActor(outcome))
            }
            SystemAction::PlayEffect(transition) => {
                drive_transition(transition, state).map_err(ExecuteError::PlayEffect)?;
                Ok(ActionResult::EffectStarted)
            }
            SystemAction::StopEffect(transition) => {
                drive_transition(transition, state).map_err(ExecuteError::StopEffect)?;
                Ok(ActionResult::EffectStopped)
            }
        },
    }
}

//! Transient effect bookkeeping.

use crate::action::ActionTransition;
use crate::error::NeverError;
use crate::state::{BattleState, EffectPayload, EffectState, Position};

/// Starts an effect, replacing whichever one was playing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayEffectAction {
    pub position: Position,
    pub payload: EffectPayload,
}

impl PlayEffectAction {
    pub fn new(position: Position, payload: EffectPayload) -> Self {
        Self { position, payload }
    }
}

impl ActionTransition for PlayEffectAction {
    type Error = NeverError;
    type Result = ();

    fn apply(&self, state: &mut BattleState) -> Result<Self::Result, Self::Error> {
        state.effect = Some(EffectState::playing(self.position, self.payload.clone()));
        Ok(())
    }
}

/// Clears the effect slot once the renderer reports completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopEffectAction;

impl ActionTransition for StopEffectAction {
    type Error = NeverError;
    type Result = ();

    fn apply(&self, state: &mut BattleState) -> Result<Self::Result, Self::Error> {
        state.effect = None;
        Ok(())
    }
}

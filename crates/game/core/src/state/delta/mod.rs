mod bitmask;
mod changes;

use crate::action::Action;
use crate::state::BattleState;

pub use bitmask::ActorFields;
pub use changes::{ActorChanges, ActorsChanges, TurnChanges};

/// Description of what one executed action changed.
///
/// Presentation layers use it to decide what to redraw instead of diffing the
/// whole state themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    /// The action that caused this transition.
    pub action: Action,

    /// Nonce of the transition (taken before it was incremented).
    pub action_nonce: u64,

    pub turn: TurnChanges,

    pub actors: ActorsChanges,

    /// True when the transient effect slot differs.
    pub effect_changed: bool,
}

impl StateDelta {
    /// Creates a delta by comparing the states around one transition.
    pub fn from_states(action: Action, before: &BattleState, after: &BattleState) -> Self {
        Self {
            action,
            action_nonce: before.turn.action_nonce,
            turn: TurnChanges::from_queues(&before.turn, &after.turn),
            actors: ActorsChanges::from_maps(&before.actors, &after.actors),
            effect_changed: before.effect != after.effect,
        }
    }

    /// Returns true if nothing observable changed.
    pub fn is_empty(&self) -> bool {
        !self.turn.order_changed && self.actors.is_empty() && !self.effect_changed
    }
}

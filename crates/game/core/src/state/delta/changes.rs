use std::collections::BTreeMap;

use crate::state::types::{ActorId, ActorState, TurnQueue};

use super::bitmask::ActorFields;

/// Which fields of one surviving actor changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorChanges {
    pub id: ActorId,
    pub fields: ActorFields,
}

impl ActorChanges {
    /// Returns `None` when nothing observable changed.
    pub(super) fn from_states(before: &ActorState, after: &ActorState) -> Option<Self> {
        let mut fields = ActorFields::empty();

        if before.position != after.position {
            fields |= ActorFields::POSITION;
        }
        if before.facing != after.facing {
            fields |= ActorFields::FACING;
        }
        if before.health != after.health {
            fields |= ActorFields::HEALTH;
        }

        if fields.is_empty() {
            None
        } else {
            Some(Self {
                id: after.id.clone(),
                fields,
            })
        }
    }
}

/// Membership and field changes across the actor map.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorsChanges {
    pub added: Vec<ActorId>,
    pub removed: Vec<ActorId>,
    pub updated: Vec<ActorChanges>,
}

impl ActorsChanges {
    pub(super) fn from_maps(
        before: &BTreeMap<ActorId, ActorState>,
        after: &BTreeMap<ActorId, ActorState>,
    ) -> Self {
        let mut changes = Self::default();

        for (id, old) in before {
            match after.get(id) {
                Some(new) => {
                    if let Some(updated) = ActorChanges::from_states(old, new) {
                        changes.updated.push(updated);
                    }
                }
                None => changes.removed.push(id.clone()),
            }
        }
        changes.added = after
            .keys()
            .filter(|id| !before.contains_key(*id))
            .cloned()
            .collect();

        changes
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }

    /// Field mask for `id`, empty if it did not change.
    pub fn fields_of(&self, id: &ActorId) -> ActorFields {
        self.updated
            .iter()
            .find(|change| &change.id == id)
            .map(|change| change.fields)
            .unwrap_or_default()
    }
}

/// Changes to the turn order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnChanges {
    /// True when the queue contents or order differ.
    pub order_changed: bool,
    /// The head after the transition.
    pub head: Option<ActorId>,
}

impl TurnChanges {
    pub(super) fn from_queues(before: &TurnQueue, after: &TurnQueue) -> Self {
        Self {
            order_changed: !before.iter().eq(after.iter()),
            head: after.head().cloned(),
        }
    }
}

use std::collections::VecDeque;

use super::ActorId;

/// Round-robin turn order. The head of the queue is the active actor.
///
/// Entries are unique. Keeping the queue in lockstep with the actor map is the
/// job of the actions that touch both; see `BattleState::check_invariants`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnQueue {
    order: VecDeque<ActorId>,

    /// Sequential identifier that increments with every executed action.
    #[cfg_attr(feature = "serde", serde(default))]
    pub action_nonce: u64,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The actor whose turn it is, if any actor is left.
    pub fn head(&self) -> Option<&ActorId> {
        self.order.front()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &ActorId) -> bool {
        self.order.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActorId> {
        self.order.iter()
    }

    /// Appends `id` to the tail. Returns `false` if it was already queued.
    pub fn push(&mut self, id: ActorId) -> bool {
        if self.order.contains(&id) {
            return false;
        }
        self.order.push_back(id);
        true
    }

    /// Moves the head to the tail and returns the id that was rotated.
    pub fn rotate(&mut self) -> Option<ActorId> {
        let head = self.order.pop_front()?;
        self.order.push_back(head.clone());
        Some(head)
    }

    /// Drops `id` wherever it sits in the queue.
    pub fn remove(&mut self, id: &ActorId) -> bool {
        match self.order.iter().position(|queued| queued == id) {
            Some(index) => {
                self.order.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a TurnQueue {
    type Item = &'a ActorId;
    type IntoIter = std::collections::vec_deque::Iter<'a, ActorId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

use super::{ActorId, CardinalDirection, Position};

/// Visual archetype of a combatant.
///
/// The core never branches on this; it is carried through so the renderer can
/// pick a sprite sheet.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActorKind {
    Boy,
    CamouflageGreen,
}

/// Live combatant entry in the battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: ActorId,
    pub kind: ActorKind,
    /// Remaining hit points. The actor is removed once this reaches zero.
    pub health: i32,
    pub position: Position,
    pub facing: CardinalDirection,
}

impl ActorState {
    /// Facing assigned to every newly added actor.
    pub const INITIAL_FACING: CardinalDirection = CardinalDirection::Down;

    pub fn new(id: ActorId, kind: ActorKind, health: i32, position: Position) -> Self {
        Self {
            id,
            kind,
            health,
            position,
            facing: Self::INITIAL_FACING,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Turns to face `target`, leaving the facing untouched when the
    /// positions coincide.
    pub fn face_toward(&mut self, target: Position) {
        if let Some(direction) = CardinalDirection::toward(self.position, target) {
            self.facing = direction;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_actor_faces_down() {
        let actor = ActorState::new("a".into(), ActorKind::Boy, 5, Position::new(0, 0));
        assert_eq!(actor.facing, CardinalDirection::Down);
        assert!(actor.is_alive());
    }

    #[test]
    fn face_toward_same_tile_keeps_facing() {
        let mut actor = ActorState::new("a".into(), ActorKind::Boy, 5, Position::new(0, 0));
        actor.facing = CardinalDirection::Left;
        actor.face_toward(Position::new(0, 0));
        assert_eq!(actor.facing, CardinalDirection::Left);
    }

    #[test]
    fn kind_labels_are_snake_case() {
        assert_eq!(ActorKind::CamouflageGreen.to_string(), "camouflage_green");
        assert_eq!(
            "camouflage_green".parse::<ActorKind>(),
            Ok(ActorKind::CamouflageGreen)
        );
        assert_eq!("boy".parse::<ActorKind>(), Ok(ActorKind::Boy));
    }
}

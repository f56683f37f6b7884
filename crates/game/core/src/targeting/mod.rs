//! Adjacency and targeting.
//!
//! [`resolve_adjacency`] classifies the four tiles around an actor from a
//! read-only snapshot. The result tells a presentation layer which directions
//! are moves, which are attacks, and which are dead.

mod footprint;

pub use footprint::{Rect, actor_footprint, object_footprint};

use std::collections::BTreeMap;

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActorId, ActorState, CardinalDirection, MapObject, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetingError {
    #[error("actor {0} not found")]
    ActorNotFound(ActorId),

    #[error("no actor holds the current turn")]
    NoActiveActor,
}

impl GameError for TargetingError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "TARGETING_ACTOR_NOT_FOUND",
            Self::NoActiveActor => "TARGETING_NO_ACTIVE_ACTOR",
        }
    }
}

/// Which occupant is reported when both an actor and a map object overlap
/// the same candidate tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OccupantPrecedence {
    /// The actor wins, so the tile stays attackable.
    #[default]
    ActorFirst,
    /// The object wins.
    ObjectFirst,
}

/// What occupies one adjacent tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Empty,
    Actor(ActorId),
    Object { id: String, blocks_movement: bool },
}

/// What a directional input means for the active actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileChoice {
    Move(Position),
    Attack(ActorId),
}

/// Classification of the four tiles around an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjacency {
    pub up: Occupant,
    pub right: Occupant,
    pub down: Occupant,
    pub left: Occupant,
}

impl Adjacency {
    pub fn get(&self, direction: CardinalDirection) -> &Occupant {
        match direction {
            CardinalDirection::Up => &self.up,
            CardinalDirection::Right => &self.right,
            CardinalDirection::Down => &self.down,
            CardinalDirection::Left => &self.left,
        }
    }

    /// All four directions paired with their occupant, clockwise from up.
    pub fn iter(&self) -> impl Iterator<Item = (CardinalDirection, &Occupant)> {
        CardinalDirection::ALL
            .into_iter()
            .map(move |direction| (direction, self.get(direction)))
    }

    /// Turns a direction into an action choice for an actor at `origin`.
    ///
    /// An actor is always an attack target. A blocking object makes the
    /// direction dead (`None`). A non-blocking object or an empty tile is a
    /// move destination one tile away.
    pub fn choice(
        &self,
        direction: CardinalDirection,
        origin: Position,
        tile_size: i32,
    ) -> Option<TileChoice> {
        match self.get(direction) {
            Occupant::Actor(id) => Some(TileChoice::Attack(id.clone())),
            Occupant::Object {
                blocks_movement: true,
                ..
            } => None,
            Occupant::Object {
                blocks_movement: false,
                ..
            }
            | Occupant::Empty => Some(TileChoice::Move(origin.step(direction, tile_size))),
        }
    }
}

/// Classifies the four tiles around `active`.
///
/// Each candidate is one tile-sized rectangle offset from the active actor.
/// Other actors collide with their tile, map objects with the lower half of
/// their sprite. Among several overlapping actors the lowest id is reported;
/// among several objects a blocking one wins over a non-blocking one, and
/// list order breaks the remaining ties. An object reported over an actor
/// always blocks movement, so the direction is dead rather than a move onto
/// the actor's tile.
pub fn resolve_adjacency(
    active: &ActorId,
    actors: &BTreeMap<ActorId, ActorState>,
    map_objects: &[MapObject],
    tile_size: i32,
    precedence: OccupantPrecedence,
) -> Result<Adjacency, TargetingError> {
    let origin = actors
        .get(active)
        .ok_or_else(|| TargetingError::ActorNotFound(active.clone()))?
        .position;

    let classify = |direction: CardinalDirection| {
        let candidate = Rect::tile(origin.step(direction, tile_size), tile_size);

        // BTreeMap iteration is ordered, so the first hit has the lowest id.
        let actor = actors
            .values()
            .filter(|other| &other.id != active)
            .find(|other| candidate.intersects(&actor_footprint(other, tile_size)))
            .map(|other| Occupant::Actor(other.id.clone()));

        let mut object = None::<&MapObject>;
        for candidate_object in map_objects
            .iter()
            .filter(|o| candidate.intersects(&object_footprint(o)))
        {
            match object {
                Some(current) if current.collision || !candidate_object.collision => {}
                _ => object = Some(candidate_object),
            }
        }
        // A tile an actor stands on is never walkable, even under decoration.
        let occupied = actor.is_some();
        let object = object.map(|o| Occupant::Object {
            id: o.id.clone(),
            blocks_movement: o.collision || occupied,
        });

        let winner = match precedence {
            OccupantPrecedence::ActorFirst => actor.or(object),
            OccupantPrecedence::ObjectFirst => object.or(actor),
        };
        winner.unwrap_or(Occupant::Empty)
    };

    Ok(Adjacency {
        up: classify(CardinalDirection::Up),
        right: classify(CardinalDirection::Right),
        down: classify(CardinalDirection::Down),
        left: classify(CardinalDirection::Left),
    })
}

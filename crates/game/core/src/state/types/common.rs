use std::fmt;

/// Stable identifier for an actor participating in the battle.
///
/// Identifiers are chosen by whoever adds the actor (scenario files use
/// names such as `"player-1"`), so they are strings rather than allocated
/// integers.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActorId(String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ActorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ActorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Grid-aligned position in world units.
///
/// One tile spans `BattleConfig::tile_size` units on each axis. The y axis
/// grows downward, so "down" means a larger `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position one tile away in `direction`.
    pub fn step(self, direction: CardinalDirection, tile_size: i32) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx * tile_size, self.y + dy * tile_size)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal directions around a tile.
///
/// Doubles as an actor's facing: the direction of its most recent move or
/// attack.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CardinalDirection {
    Up,
    Right,
    Down,
    Left,
}

impl CardinalDirection {
    /// Clockwise from up, matching the order adjacency is reported in.
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::Up,
        CardinalDirection::Right,
        CardinalDirection::Down,
        CardinalDirection::Left,
    ];

    /// Returns the unit offset (dx, dy) for this direction. Y grows downward.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            CardinalDirection::Up => (0, -1),
            CardinalDirection::Right => (1, 0),
            CardinalDirection::Down => (0, 1),
            CardinalDirection::Left => (-1, 0),
        }
    }

    /// Facing that points from `from` toward `to`.
    ///
    /// The horizontal axis is checked first: any change in `x` yields right or
    /// left. Otherwise a change in `y` yields down or up. Returns `None` when
    /// the positions are equal, in which case the caller keeps the current
    /// facing.
    pub fn toward(from: Position, to: Position) -> Option<Self> {
        if to.x != from.x {
            Some(if to.x > from.x {
                CardinalDirection::Right
            } else {
                CardinalDirection::Left
            })
        } else if to.y != from.y {
            Some(if to.y > from.y {
                CardinalDirection::Down
            } else {
                CardinalDirection::Up
            })
        } else {
            None
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            CardinalDirection::Up => CardinalDirection::Down,
            CardinalDirection::Right => CardinalDirection::Left,
            CardinalDirection::Down => CardinalDirection::Up,
            CardinalDirection::Left => CardinalDirection::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toward_prefers_horizontal_axis() {
        let from = Position::new(16, 16);

        assert_eq!(
            CardinalDirection::toward(from, Position::new(32, 16)),
            Some(CardinalDirection::Right)
        );
        assert_eq!(
            CardinalDirection::toward(from, Position::new(0, 16)),
            Some(CardinalDirection::Left)
        );
        assert_eq!(
            CardinalDirection::toward(from, Position::new(16, 32)),
            Some(CardinalDirection::Down)
        );
        assert_eq!(
            CardinalDirection::toward(from, Position::new(16, 0)),
            Some(CardinalDirection::Up)
        );
        // Diagonal: x wins.
        assert_eq!(
            CardinalDirection::toward(from, Position::new(0, 32)),
            Some(CardinalDirection::Left)
        );
    }

    #[test]
    fn toward_same_position_is_none() {
        let p = Position::new(3, 4);
        assert_eq!(CardinalDirection::toward(p, p), None);
    }

    #[test]
    fn step_scales_by_tile_size() {
        let origin = Position::new(16, 16);
        assert_eq!(origin.step(CardinalDirection::Up, 16), Position::new(16, 0));
        assert_eq!(origin.step(CardinalDirection::Right, 16), Position::new(32, 16));
        assert_eq!(origin.step(CardinalDirection::Down, 16), Position::new(16, 32));
        assert_eq!(origin.step(CardinalDirection::Left, 16), Position::new(0, 16));
    }

    #[test]
    fn step_then_opposite_returns_home() {
        let origin = Position::new(48, 80);
        for direction in CardinalDirection::ALL {
            let back = origin.step(direction, 16).step(direction.opposite(), 16);
            assert_eq!(back, origin);
        }
    }

    #[test]
    fn direction_display_is_snake_case() {
        assert_eq!(CardinalDirection::Up.to_string(), "up");
        let label: &'static str = CardinalDirection::Left.into();
        assert_eq!(label, "left");
    }
}

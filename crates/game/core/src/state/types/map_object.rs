use super::Position;

/// Static scenery placed at battle setup. Never moved or removed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapObject {
    pub id: String,
    /// Horizontal centre and vertical midline of the sprite.
    pub position: Position,
    /// Edge length of the square sprite.
    pub size: i32,
    /// Whether the object blocks movement.
    pub collision: bool,
}

impl MapObject {
    pub fn new(id: impl Into<String>, position: Position, size: i32, collision: bool) -> Self {
        Self {
            id: id.into(),
            position,
            size,
            collision,
        }
    }
}

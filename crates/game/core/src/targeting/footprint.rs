//! Axis-aligned collision rectangles.

use crate::state::{ActorState, MapObject, Position};

/// Rectangle with its origin at the top-left corner. Y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One tile whose top-left corner is `origin`.
    pub const fn tile(origin: Position, tile_size: i32) -> Self {
        Self::new(origin.x, origin.y, tile_size, tile_size)
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True when the overlap has positive area. Shared edges do not count.
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Collision footprint of an actor: the tile it stands on.
pub fn actor_footprint(actor: &ActorState, tile_size: i32) -> Rect {
    Rect::tile(actor.position, tile_size)
}

/// Collision footprint of scenery: full width, lower half of the sprite.
///
/// The object's position is its horizontal centre and vertical midline.
pub fn object_footprint(object: &MapObject) -> Rect {
    Rect::new(
        object.position.x - object.size / 2,
        object.position.y,
        object.size,
        object.size / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 16, 16);
        assert!(!a.intersects(&Rect::new(16, 0, 16, 16)));
        assert!(!a.intersects(&Rect::new(0, 16, 16, 16)));
        assert!(!a.intersects(&Rect::new(16, 16, 16, 16)));
    }

    #[test]
    fn positive_overlap_intersects() {
        let a = Rect::new(0, 0, 16, 16);
        assert!(a.intersects(&Rect::new(15, 15, 16, 16)));
        assert!(a.intersects(&Rect::new(4, 4, 2, 2)));
    }

    #[test]
    fn object_footprint_is_lower_half() {
        let tree = MapObject::new("tree", Position::new(16, 32), 16, true);
        assert_eq!(object_footprint(&tree), Rect::new(8, 32, 16, 8));
    }
}

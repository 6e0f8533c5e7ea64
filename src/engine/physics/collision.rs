// Axis-separated collision resolution against static walls

use crate::core::Rect;
use glam::IVec2;

/// Immutable set of wall rectangles loaded from a map.
///
/// Walls never change during play; a new map replaces the whole set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallSet {
    walls: Vec<Rect>,
}

impl WallSet {
    /// Create a wall set from a list of rectangles
    pub fn new(walls: Vec<Rect>) -> Self {
        Self { walls }
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}

impl FromIterator<Rect> for WallSet {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Move `hitbox` by `delta`, resolving the X axis completely before Y.
///
/// Each axis is stepped on its own and then clamped against every wall it
/// overlaps: moving right puts the right edge on the wall's left edge, moving
/// left puts the left edge on the wall's right edge, and likewise for
/// bottom/top on the Y axis. The box slides along surfaces and can snag on a
/// corner approached diagonally.
pub fn move_and_collide(hitbox: Rect, delta: IVec2, walls: &WallSet) -> Rect {
    let mut moved = hitbox;

    moved.x += delta.x;
    for wall in walls.walls() {
        if moved.overlaps(wall) {
            if delta.x > 0 {
                moved.set_right(wall.left());
            } else if delta.x < 0 {
                moved.set_left(wall.right());
            }
        }
    }

    moved.y += delta.y;
    for wall in walls.walls() {
        if moved.overlaps(wall) {
            if delta.y > 0 {
                moved.set_bottom(wall.top());
            } else if delta.y < 0 {
                moved.set_top(wall.bottom());
            }
        }
    }

    moved
}

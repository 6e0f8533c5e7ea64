// Integer rectangle math used for hitboxes, walls and sprite placement

use glam::IVec2;

/// Axis-aligned rectangle in pixel space.
///
/// `x`/`y` is the top-left corner, y grows downward. Edge setters move the
/// rectangle without resizing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// Bottom-center point (the "feet" of a character)
    pub fn midbottom(&self) -> IVec2 {
        IVec2::new(self.center_x(), self.bottom())
    }

    /// Move the rectangle so its bottom-center lands on `point`
    pub fn set_midbottom(&mut self, point: IVec2) {
        self.x = point.x - self.w / 2;
        self.y = point.y - self.h;
    }

    /// Check whether two rectangles share a region of positive area.
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.bottom(), 60);
        assert_eq!(rect.center_x(), 25);
    }

    #[test]
    fn test_edge_setters_keep_size() {
        let mut rect = Rect::new(0, 0, 10, 20);
        rect.set_right(50);
        assert_eq!(rect, Rect::new(40, 0, 10, 20));

        rect.set_bottom(100);
        assert_eq!(rect, Rect::new(40, 80, 10, 20));
    }

    #[test]
    fn test_midbottom_uses_floor_half_width() {
        let mut rect = Rect::new(0, 0, 7, 4);
        assert_eq!(rect.midbottom(), IVec2::new(3, 4));

        rect.set_midbottom(IVec2::new(100, 50));
        assert_eq!(rect, Rect::new(97, 46, 7, 4));
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.overlaps(&Rect::new(5, 5, 10, 10)));
        assert!(a.overlaps(&Rect::new(2, 2, 2, 2)));
        assert!(!a.overlaps(&Rect::new(20, 0, 10, 10)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
    }
}

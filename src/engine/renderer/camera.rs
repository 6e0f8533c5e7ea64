// Camera and viewport for a y-down pixel world

use crate::core::Rect;
use glam::{IVec2, Vec2};

/// 2D camera that keeps a point at the center of the screen
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera center in world space
    pub position: Vec2,
    /// Camera zoom level (1.0 = normal, 2.0 = zoomed in 2x)
    pub zoom: f32,
    /// Viewport width in screen pixels
    viewport_width: f32,
    /// Viewport height in screen pixels
    viewport_height: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            viewport_width,
            viewport_height,
        }
    }

    /// Center the view on a world point
    pub fn center_on(&mut self, point: IVec2) {
        self.position = point.as_vec2();
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    fn half_extents(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height) / (2.0 * self.zoom)
    }

    /// Visible world region, rounded outward to whole pixels
    pub fn viewport(&self) -> Rect {
        let half = self.half_extents();
        let min = (self.position - half).floor();
        let max = (self.position + half).ceil();
        Rect::new(
            min.x as i32,
            min.y as i32,
            (max.x - min.x) as i32,
            (max.y - min.y) as i32,
        )
    }

    /// Check whether any part of `rect` is on screen
    pub fn is_visible(&self, rect: &Rect) -> bool {
        self.viewport().overlaps(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_viewport_centered_on_point() {
        let mut camera = Camera::new(640.0, 480.0);
        camera.center_on(IVec2::new(100, 200));
        assert_eq!(camera.viewport(), Rect::new(-220, -40, 640, 480));
    }

    #[test]
    fn test_zoom_shrinks_viewport() {
        let mut camera = Camera::new(640.0, 480.0);
        camera.zoom = 2.0;
        assert_eq!(camera.viewport(), Rect::new(-160, -120, 320, 240));
    }

    #[test]
    fn test_center_on_point() {
        let mut camera = Camera::new(640.0, 480.0);
        camera.center_on(IVec2::new(50, -30));
        assert_relative_eq!(camera.position.x, 50.0);
        assert_relative_eq!(camera.position.y, -30.0);
    }

    #[test]
    fn test_resize_keeps_center() {
        let mut camera = Camera::new(100.0, 100.0);
        camera.center_on(IVec2::new(0, 0));
        camera.resize(200.0, 50.0);
        assert_eq!(camera.viewport(), Rect::new(-100, -25, 200, 50));
    }

    #[test]
    fn test_visibility() {
        let mut camera = Camera::new(100.0, 100.0);
        camera.center_on(IVec2::new(0, 0));
        assert!(camera.is_visible(&Rect::new(40, 40, 20, 20)));
        assert!(!camera.is_visible(&Rect::new(200, 200, 10, 10)));
    }
}

// Render / camera provider interface
//
// Map layers and the actual drawing live with the backend; the game only
// tells it where to look and which frame to show for the character.

mod camera;
mod frame;
mod headless;

pub use camera::Camera;
pub use frame::FrameView;
pub use headless::HeadlessRenderer;

use crate::core::Rect;
use glam::IVec2;

/// Anything that can follow the character and draw its sprite
pub trait RenderBackend {
    /// Center the view on a world point
    fn center(&mut self, point: IVec2);

    /// Draw the character's frame into `sprite` (world space)
    fn draw(&mut self, frame: &FrameView<'_>, sprite: Rect);
}

// Render-time view of the current animation frame

use crate::engine::assets::Frame;
use image::{imageops, RgbaImage};

/// The frame selected for this tick plus its facing.
///
/// Mirroring is applied when the pixels are needed, never stored as a second
/// copy of the animation.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub image: &'a Frame,
    pub flipped: bool,
}

impl<'a> FrameView<'a> {
    pub fn new(image: &'a Frame, flipped: bool) -> Self {
        Self { image, flipped }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Produce the pixels as they appear on screen
    pub fn to_image(&self) -> RgbaImage {
        if self.flipped {
            imageops::flip_horizontal(self.image)
        } else {
            self.image.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient() -> Frame {
        RgbaImage::from_fn(4, 2, |x, _| Rgba([x as u8 * 10, 0, 0, 255]))
    }

    #[test]
    fn test_unflipped_matches_source() {
        let frame = gradient();
        let view = FrameView::new(&frame, false);
        assert_eq!(view.to_image(), frame);
    }

    #[test]
    fn test_flipped_mirrors_columns() {
        let frame = gradient();
        let view = FrameView::new(&frame, true);
        let image = view.to_image();

        assert_eq!(image.get_pixel(0, 0)[0], 30);
        assert_eq!(image.get_pixel(3, 1)[0], 0);
        // Source is untouched
        assert_eq!(frame.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_dimensions() {
        let frame = gradient();
        let view = FrameView::new(&frame, true);
        assert_eq!((view.width(), view.height()), (4, 2));
    }
}

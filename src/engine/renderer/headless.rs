// Window-less render backend: tracks the camera and logs draws

use super::{Camera, FrameView, RenderBackend};
use crate::core::Rect;
use glam::IVec2;
use image::RgbaImage;
use log::{debug, trace};

/// Render backend that keeps a camera in sync without touching the GPU
#[derive(Debug)]
pub struct HeadlessRenderer {
    camera: Camera,
    draw_count: u64,
    last_draw: Option<DrawRecord>,
    /// Keep the on-screen pixels of the last draw
    capture: bool,
    last_image: Option<RgbaImage>,
}

/// What the last `draw` call was asked to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRecord {
    pub sprite: Rect,
    pub frame_size: (u32, u32),
    pub flipped: bool,
    pub on_screen: bool,
}

impl HeadlessRenderer {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            camera: Camera::new(viewport_width, viewport_height),
            draw_count: 0,
            last_draw: None,
            capture: false,
            last_image: None,
        }
    }

    /// Compose every drawn frame as it would appear on screen
    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }

    pub fn last_draw(&self) -> Option<DrawRecord> {
        self.last_draw
    }

    /// Pixels of the last draw, mirrored as shown. `None` unless capturing.
    pub fn last_image(&self) -> Option<&RgbaImage> {
        self.last_image.as_ref()
    }
}

impl RenderBackend for HeadlessRenderer {
    fn center(&mut self, point: IVec2) {
        self.camera.center_on(point);
    }

    fn draw(&mut self, frame: &FrameView<'_>, sprite: Rect) {
        let record = DrawRecord {
            sprite,
            frame_size: (frame.width(), frame.height()),
            flipped: frame.flipped,
            on_screen: self.camera.is_visible(&sprite),
        };
        if !record.on_screen {
            debug!("Sprite at {:?} is outside the viewport", record.sprite);
        }

        if self.capture {
            let image = frame.to_image();
            trace!(
                "draw {}x{} frame (mirrored: {}) in viewport {:?}",
                image.width(),
                image.height(),
                record.flipped,
                self.camera.viewport()
            );
            self.last_image = Some(image);
        }

        self.draw_count += 1;
        self.last_draw = Some(record);
    }
}

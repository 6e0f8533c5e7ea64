// Sprite sheet slicing

use super::AssetError;
use image::{imageops, Rgba, RgbaImage};

/// One renderable animation frame
pub type Frame = RgbaImage;

/// Side length of the placeholder frame used when a sheet fails to load
pub const PLACEHOLDER_SIZE: u32 = 50;

const PLACEHOLDER_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Slice a horizontal strip into `frame_count` equal-width frames.
///
/// Each frame is `sheet_width / frame_count` pixels wide (integer division)
/// and spans the full sheet height. Pixels past `frame_count * slice_width`
/// are dropped rather than spread over the frames.
pub fn slice_sheet(sheet: &RgbaImage, frame_count: usize) -> Result<Vec<Frame>, AssetError> {
    if frame_count == 0 {
        return Err(AssetError::NoFrames);
    }

    let (sheet_width, sheet_height) = sheet.dimensions();
    let slice_width = sheet_width / frame_count as u32;
    if slice_width == 0 {
        return Err(AssetError::SheetTooNarrow {
            width: sheet_width,
            frame_count,
        });
    }

    let frames = (0..frame_count as u32)
        .map(|i| imageops::crop_imm(sheet, i * slice_width, 0, slice_width, sheet_height).to_image())
        .collect();

    Ok(frames)
}

/// Solid red square standing in for a sheet that could not be loaded
pub fn placeholder_frame() -> Frame {
    RgbaImage::from_pixel(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, PLACEHOLDER_COLOR)
}

/// Result of turning one action's sheet into frames.
///
/// A failed load is an ordinary outcome: the action gets a single
/// placeholder frame and keeps the error for reporting.
#[derive(Debug)]
pub enum SheetOutcome {
    Sliced(Vec<Frame>),
    Placeholder { frame: Frame, error: AssetError },
}

impl SheetOutcome {
    /// Slice a loaded sheet, or fall back to the placeholder on any failure
    pub fn from_load(sheet: Result<RgbaImage, AssetError>, frame_count: usize) -> Self {
        match sheet.and_then(|sheet| slice_sheet(&sheet, frame_count)) {
            Ok(frames) => Self::Sliced(frames),
            Err(error) => Self::Placeholder {
                frame: placeholder_frame(),
                error,
            },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    /// Number of frames this outcome yields
    pub fn frame_count(&self) -> usize {
        match self {
            Self::Sliced(frames) => frames.len(),
            Self::Placeholder { .. } => 1,
        }
    }

    pub fn into_frames(self) -> Vec<Frame> {
        match self {
            Self::Sliced(frames) => frames,
            Self::Placeholder { frame, .. } => vec![frame],
        }
    }
}

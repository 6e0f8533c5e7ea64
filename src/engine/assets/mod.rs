// Asset management system
//
// Locates sprite sheets on disk and slices them into animation frames.

mod loader;
mod sheet;

pub use loader::AssetLoader;
pub use sheet::{Frame, SheetOutcome};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Sheet {width}px wide cannot hold {frame_count} frames")]
    SheetTooNarrow { width: u32, frame_count: usize },

    #[error("Frame count must be at least 1")]
    NoFrames,
}

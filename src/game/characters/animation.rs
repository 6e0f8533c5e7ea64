// Character animation set: frames for every action

use super::definition::{ActionDefinition, ActionId, ActionTable};
use crate::engine::assets::{AssetError, AssetLoader, Frame, SheetOutcome};
use image::RgbaImage;
use log::{debug, info, warn};

/// Frames, rates and playback modes for every action of a character.
///
/// Built once at load time. Each action owns at least one frame: an action
/// whose sheet failed to load holds a single placeholder frame, so its real
/// frame count can be lower than its declared one.
#[derive(Debug, Clone)]
pub struct AnimationSet {
    table: ActionTable,
    frames: Vec<Vec<Frame>>,
    degraded: Vec<bool>,
}

impl AnimationSet {
    /// Load every action's sheet from disk
    pub fn load(table: ActionTable, loader: &AssetLoader) -> Self {
        info!(
            "Loading {} animations from {}",
            table.len(),
            loader.base_path().display()
        );
        Self::from_sheets(table, |action| loader.load_sheet(&action.sheet))
    }

    /// Build the set from sheets supplied by `load_sheet`.
    ///
    /// A failing sheet only degrades its own action.
    pub fn from_sheets<F>(table: ActionTable, mut load_sheet: F) -> Self
    where
        F: FnMut(&ActionDefinition) -> Result<RgbaImage, AssetError>,
    {
        let mut frames = Vec::with_capacity(table.len());
        let mut degraded = Vec::with_capacity(table.len());

        for (_, action) in table.iter() {
            let outcome = SheetOutcome::from_load(load_sheet(action), action.frame_count);

            if let SheetOutcome::Placeholder { error, .. } = &outcome {
                warn!(
                    "Failed to load animation '{}' ({}): {}",
                    action.name, action.sheet, error
                );
            } else {
                debug!(
                    "Loaded animation '{}': {} frames",
                    action.name,
                    outcome.frame_count()
                );
            }

            degraded.push(outcome.is_placeholder());
            frames.push(outcome.into_frames());
        }

        Self {
            table,
            frames,
            degraded,
        }
    }

    pub fn table(&self) -> &ActionTable {
        &self.table
    }

    pub fn definition(&self, action: ActionId) -> &ActionDefinition {
        self.table.get(action)
    }

    /// Real number of frames for `action` (1 for a degraded action)
    pub fn frame_len(&self, action: ActionId) -> usize {
        self.frames[action.index()].len()
    }

    /// Frame `index` of `action`.
    ///
    /// Callers keep `index < frame_len(action)`; an out-of-range index is
    /// clamped to the last frame.
    pub fn frame(&self, action: ActionId, index: usize) -> &Frame {
        let frames = &self.frames[action.index()];
        debug_assert!(index < frames.len(), "frame index out of range");
        &frames[index.min(frames.len() - 1)]
    }

    /// Number of actions running on placeholder frames
    pub fn degraded_count(&self) -> usize {
        self.degraded.iter().filter(|d| **d).count()
    }
}

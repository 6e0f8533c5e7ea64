// Map / collision provider interface
//
// Tilemap parsing lives outside this crate. A provider hands back the wall
// rectangles and the render layers; the controller only ever reads the walls.

use crate::core::Rect;
use crate::engine::physics::WallSet;
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Map loading errors
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Map not found: {0}")]
    NotFound(String),
}

/// Opaque handle to a drawable map layer, owned by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLayer {
    pub name: String,
}

/// Everything a map load produces
#[derive(Debug, Clone, Default)]
pub struct LoadedMap {
    pub walls: WallSet,
    pub layers: Vec<RenderLayer>,
}

/// Source of level geometry
pub trait MapProvider {
    fn load_map(&self, path: &Path) -> Result<LoadedMap, MapError>;
}

/// In-memory map provider keyed by path
#[derive(Debug, Default)]
pub struct StaticMap {
    maps: HashMap<PathBuf, LoadedMap>,
}

impl StaticMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a map under `path`
    pub fn with_map<P: AsRef<Path>>(mut self, path: P, map: LoadedMap) -> Self {
        self.maps.insert(path.as_ref().to_path_buf(), map);
        self
    }

    /// Built-in walled arena used when no tilemap is available
    pub fn demo_arena() -> Self {
        let walls = WallSet::new(vec![
            // Outer frame
            Rect::new(0, 0, 640, 16),
            Rect::new(0, 464, 640, 16),
            Rect::new(0, 16, 16, 448),
            Rect::new(624, 16, 16, 448),
            // Obstacles
            Rect::new(200, 300, 96, 32),
            Rect::new(400, 160, 32, 160),
        ]);
        let layers = vec![
            RenderLayer {
                name: "ground".to_string(),
            },
            RenderLayer {
                name: "decor".to_string(),
            },
        ];

        Self::new().with_map(DEMO_ARENA, LoadedMap { walls, layers })
    }
}

/// Path under which `StaticMap::demo_arena` registers its map
pub const DEMO_ARENA: &str = "maps/demo_arena.tmx";

impl MapProvider for StaticMap {
    fn load_map(&self, path: &Path) -> Result<LoadedMap, MapError> {
        let map = self
            .maps
            .get(path)
            .cloned()
            .ok_or_else(|| MapError::NotFound(path.to_string_lossy().to_string()))?;

        info!(
            "Loaded map {} ({} walls, {} layers)",
            path.display(),
            map.walls.len(),
            map.layers.len()
        );

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_arena_loads() {
        let provider = StaticMap::demo_arena();
        let map = provider.load_map(Path::new(DEMO_ARENA)).unwrap();
        assert!(!map.walls.is_empty());
        assert_eq!(map.layers.len(), 2);
    }

    #[test]
    fn test_unknown_map() {
        let provider = StaticMap::new();
        let err = provider.load_map(Path::new("maps/missing.tmx")).unwrap_err();
        assert_eq!(err.to_string(), "Map not found: maps/missing.tmx");
    }

    #[test]
    fn test_empty_map_is_valid() {
        let provider = StaticMap::new().with_map("open.tmx", LoadedMap::default());
        let map = provider.load_map(Path::new("open.tmx")).unwrap();
        assert!(map.walls.is_empty());
    }
}

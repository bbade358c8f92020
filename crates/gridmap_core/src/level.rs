//! A complete map: dimensions, tile size and a stack of layers

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::ids::MAX_TILE_ID;
use crate::layer::Layer;

/// Validation failures for a [`Level`].
///
/// These are only produced by explicit [`Level::validate`] calls, typically
/// right after deserializing a level from JSON. The tile accessors and the
/// autotile engine never construct them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("layer '{layer}' has {actual} tiles, expected {expected}")]
    LayerSizeMismatch {
        layer: String,
        expected: usize,
        actual: usize,
    },
    #[error("layer '{layer}' cell {index} holds out-of-range tile id {id}")]
    TileIdOutOfRange { layer: String, index: usize, id: u32 },
    #[error("tile size {0} is not a positive even number")]
    InvalidTileSize(u32),
}

/// A complete map with layers of packed tile identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: Uuid,
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Rendered tile size in pixels. Must be even: auto-connecting tiles
    /// are composited from half-tile quarters.
    pub tile_size: u32,
    pub layers: Vec<Layer>,
    /// Free-form user properties attached to the level.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, serde_json::Value>,
}

impl Level {
    /// Create an empty level with no layers.
    pub fn new(name: String, width: u32, height: u32, tile_size: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            width,
            height,
            tile_size,
            layers: Vec::new(),
            properties: HashMap::new(),
        }
    }

    /// Add an empty tile layer and return its index.
    pub fn add_layer(&mut self, name: String) -> usize {
        self.layers.push(Layer::new(name, self.width, self.height));
        self.layers.len() - 1
    }

    pub fn get_layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn get_layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Flat row-major index of `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Tile identifier at `(x, y)`, or `None` when out of bounds or the
    /// layer does not exist. An empty cell reads as `Some(0)`.
    pub fn tile_at(&self, layer: usize, x: i32, y: i32) -> Option<u32> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let idx = self.index(x as u32, y as u32);
        self.layers.get(layer).and_then(|l| l.tiles.get(idx)).copied()
    }

    /// Write a tile identifier. Returns false when the target does not exist.
    pub fn set_tile(&mut self, layer: usize, x: i32, y: i32, id: u32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x as u32, y as u32);
        match self.layers.get_mut(layer).and_then(|l| l.tiles.get_mut(idx)) {
            Some(cell) => {
                *cell = id;
                true
            }
            None => false,
        }
    }

    /// Check structural invariants: even tile size, layer lengths matching
    /// the grid, and every identifier below the codec maximum.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.tile_size == 0 || self.tile_size % 2 != 0 {
            return Err(LevelError::InvalidTileSize(self.tile_size));
        }
        let expected = (self.width * self.height) as usize;
        for layer in &self.layers {
            if layer.tiles.len() != expected {
                return Err(LevelError::LayerSizeMismatch {
                    layer: layer.name.clone(),
                    expected,
                    actual: layer.tiles.len(),
                });
            }
            for (index, &id) in layer.tiles.iter().enumerate() {
                if id >= MAX_TILE_ID {
                    return Err(LevelError::TileIdOutOfRange {
                        layer: layer.name.clone(),
                        index,
                        id,
                    });
                }
            }
        }
        Ok(())
    }
}

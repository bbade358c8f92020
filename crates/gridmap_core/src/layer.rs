//! Tile layers backed by a flat identifier array

use serde::{Deserialize, Serialize};

/// A single tile layer.
///
/// Tiles are stored row-major, `width * height` entries, with identifier 0
/// meaning the cell is empty. The layer itself knows nothing about the
/// identifier encoding; see [`crate::ids`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub visible: bool,
    /// Flat row-major tile identifiers, 0 = empty.
    pub tiles: Vec<u32>,
}

impl Layer {
    /// Create an empty layer sized for a `width` x `height` grid.
    pub fn new(name: String, width: u32, height: u32) -> Self {
        Self {
            name,
            visible: true,
            tiles: vec![0; (width * height) as usize],
        }
    }

    /// Whether every cell of this layer is empty.
    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|&id| id == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layer() {
        let layer = Layer::new("Ground".to_string(), 10, 8);

        assert_eq!(layer.name, "Ground");
        assert!(layer.visible);
        assert_eq!(layer.tiles.len(), 80);
        assert!(layer.is_empty());
    }

    #[test]
    fn test_is_empty_after_write() {
        let mut layer = Layer::new("Ground".to_string(), 4, 4);
        layer.tiles[5] = 42;
        assert!(!layer.is_empty());
    }
}

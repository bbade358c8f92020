//! Core data structures for gridmap
//!
//! This crate provides the fundamental types for representing tile-based maps:
//! - `ids` - the packed tile identifier codec (sheets, families, kind/shape)
//! - `Layer` - a single tile layer backed by a flat identifier array
//! - `Level` - a complete map with layers and validation
//!
//! The identifier codec is pure and allocation-free; everything that draws
//! or rewrites tiles (the autotile engine, the renderer) builds on it.

pub mod ids;

mod layer;
mod level;

pub use ids::{
    classify, decode_auto, encode_auto, is_auto_tile, plain_cell, AutoFamily, AutoTile,
    PlainSheet, TileCategory, MAX_TILE_ID, SHAPES_PER_KIND,
};
pub use layer::Layer;
pub use level::{Level, LevelError};

//! Autotile engine for gridmap
//!
//! This crate turns packed tile identifiers into sprite-sheet rectangles
//! and infers the shape an auto-connecting tile must take to join its
//! neighbors seamlessly.
//!
//! # Features
//! - Quarter-tile composition tables for the floor, wall and cascade families
//! - Source rect resolution for plain and auto-connecting identifiers
//! - Neighbor-driven shape inference with a table-derived reverse index
//! - Slice-level paint/erase operations with 3x3 shape reflow
//!
//! # Example
//!
//! ```rust,ignore
//! use gridmap_autotile::{paint_auto, resolve};
//! use gridmap_core::AutoFamily;
//!
//! // paint a 2x1 patch of ground kind 3 onto a 10x10 layer
//! let mut tiles = vec![0u32; 100];
//! paint_auto(&mut tiles, 10, 10, 4, 5, AutoFamily::Ground, 3);
//! paint_auto(&mut tiles, 10, 10, 5, 5, AutoFamily::Ground, 3);
//!
//! // the renderer asks for the rectangles of whatever got stored
//! for &id in &tiles {
//!     if let Some(info) = resolve(id, 32) {
//!         // blit info's rect(s)
//!     }
//! }
//! ```

pub mod edit;
pub mod infer;
pub mod inspect;
pub mod resolve;
pub mod tables;

// Re-export main types at crate root
pub use edit::{
    erase_tile, paint_auto, place_tile, refresh_neighborhood, refresh_shape, sample_neighborhood,
};
pub use infer::{
    infer_cascade_shape, infer_floor_shape, infer_shape, infer_wall_shape, Neighborhood,
};
pub use inspect::{inspect, TileInfo};
pub use resolve::{resolve, RenderInfo, SheetId, SourceRect};
pub use tables::{QuarterOffsets, ShapeTable, CASCADE_TABLE, FLOOR_TABLE, WALL_TABLE};

// Re-export gridmap_core
pub use gridmap_core;

//! Authoring operations over a flat tile slice
//!
//! These functions are what the editor's paint tools call. They operate on
//! a layer's raw `&mut [u32]` identifier array plus its dimensions, the
//! same contract the rest of the workspace uses for tile data, so the map
//! model stays free of autotile knowledge.
//!
//! Every mutation that can change a cell's kind refreshes the shape of the
//! cell and its eight neighbors; nothing further away can be affected, and
//! cells that do not hold an auto tile are never rewritten.

use gridmap_core::{decode_auto, encode_auto, AutoFamily};

use crate::infer::{infer_shape, Neighborhood};

fn cell_index(width: u32, height: u32, x: i32, y: i32) -> Option<usize> {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return None;
    }
    Some((y as u32 * width + x as u32) as usize)
}

/// Sample the same-kind status of the eight neighbors of `(x, y)`.
///
/// Out-of-bounds neighbors count as same-kind: the map edge behaves like an
/// endless continuation of whatever touches it, so border tiles don't grow
/// outlines against the void.
pub fn sample_neighborhood(
    tiles: &[u32],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    family: AutoFamily,
    kind: u32,
) -> Neighborhood {
    Neighborhood::from_fn(|dx, dy| {
        let Some(idx) = cell_index(width, height, x + dx, y + dy) else {
            return true;
        };
        match tiles.get(idx).copied().and_then(decode_auto) {
            Some(auto) => auto.family == family && auto.kind == kind,
            None => false,
        }
    })
}

/// Recompute the shape of the auto tile at `(x, y)` from its current
/// neighborhood, rewriting only the shape portion of the identifier.
/// No-op for out-of-bounds coordinates and non-auto cells.
pub fn refresh_shape(tiles: &mut [u32], width: u32, height: u32, x: i32, y: i32) {
    let Some(idx) = cell_index(width, height, x, y) else {
        return;
    };
    let Some(auto) = tiles.get(idx).copied().and_then(decode_auto) else {
        return;
    };
    let adj = sample_neighborhood(tiles, width, height, x, y, auto.family, auto.kind);
    tiles[idx] = encode_auto(auto.family, auto.kind, infer_shape(auto.family, auto.kind, adj));
}

/// Refresh the shapes of `(x, y)` and its eight neighbors.
pub fn refresh_neighborhood(tiles: &mut [u32], width: u32, height: u32, x: i32, y: i32) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            refresh_shape(tiles, width, height, x + dx, y + dy);
        }
    }
}

/// Paint an auto-connecting tile and reflow the surrounding shapes.
pub fn paint_auto(
    tiles: &mut [u32],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    family: AutoFamily,
    kind: u32,
) {
    let Some(idx) = cell_index(width, height, x, y) else {
        return;
    };
    if let Some(cell) = tiles.get_mut(idx) {
        *cell = encode_auto(family, kind, 0);
        refresh_neighborhood(tiles, width, height, x, y);
    }
}

/// Write a raw identifier (plain tile, pre-encoded auto tile, or 0) and
/// reflow the surrounding shapes.
pub fn place_tile(tiles: &mut [u32], width: u32, height: u32, x: i32, y: i32, id: u32) {
    let Some(idx) = cell_index(width, height, x, y) else {
        return;
    };
    if let Some(cell) = tiles.get_mut(idx) {
        *cell = id;
        refresh_neighborhood(tiles, width, height, x, y);
    }
}

/// Clear a cell and reflow the surrounding shapes.
pub fn erase_tile(tiles: &mut [u32], width: u32, height: u32, x: i32, y: i32) {
    place_tile(tiles, width, height, x, y, 0);
}

//! Shape inference: neighbor adjacency to shape index
//!
//! The authoring-side inverse of the composition tables. Given which of a
//! cell's eight neighbors belong to the same auto-connecting kind, rebuild
//! the quarter signature the forward table would produce for the seamless
//! join and look the signature up in a reverse index derived from that
//! table. The reverse index is built once, on first use, from the forward
//! entries themselves, so the two can never disagree.

use std::collections::HashMap;
use std::sync::OnceLock;

use gridmap_core::AutoFamily;
use serde::{Deserialize, Serialize};

use crate::tables::{QuarterOffsets, ShapeTable, FLOOR_TABLE, WALL_TABLE};

/// Same-kind status of a cell's eight neighbors.
///
/// `true` means the neighbor belongs to the same family and kind.
/// Out-of-bounds neighbors count as same-kind so the map edge joins
/// seamlessly; see [`crate::edit::sample_neighborhood`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub n: bool,
    pub ne: bool,
    pub e: bool,
    pub se: bool,
    pub s: bool,
    pub sw: bool,
    pub w: bool,
    pub nw: bool,
}

impl Neighborhood {
    /// All eight neighbors same-kind.
    pub const FULL: Self = Self {
        n: true,
        ne: true,
        e: true,
        se: true,
        s: true,
        sw: true,
        w: true,
        nw: true,
    };

    /// No neighbor same-kind.
    pub const EMPTY: Self = Self {
        n: false,
        ne: false,
        e: false,
        se: false,
        s: false,
        sw: false,
        w: false,
        nw: false,
    };

    /// Build from a predicate over grid offsets, `(dx, dy)` with y growing
    /// downward.
    pub fn from_fn(mut same: impl FnMut(i32, i32) -> bool) -> Self {
        Self {
            n: same(0, -1),
            ne: same(1, -1),
            e: same(1, 0),
            se: same(1, 1),
            s: same(0, 1),
            sw: same(-1, 1),
            w: same(-1, 0),
            nw: same(-1, -1),
        }
    }

    /// Whether every neighbor, edges and diagonals, is same-kind.
    pub fn fully_connected(self) -> bool {
        self.n && self.ne && self.e && self.se && self.s && self.sw && self.w && self.nw
    }
}

/// Quarter offset for a floor-family quarter.
///
/// `h`/`v` select the destination quarter (0 = left/top, 1 = right/bottom),
/// `eh`/`ev` are the same-kind status of the quarter's adjacent horizontal
/// and vertical edges, and `joined` is the quarter's corner-or-free-diagonal
/// predicate.
fn floor_quarter(h: u8, v: u8, eh: bool, ev: bool, joined: bool) -> [u8; 2] {
    match (eh, ev) {
        (true, true) if joined => [1 + h, 3 + v],
        (true, true) => [2 + h, v],
        (true, false) => [1 + h, if v == 0 { 2 } else { 5 }],
        (false, true) => [if h == 0 { 0 } else { 3 }, 3 + v],
        (false, false) if joined => [h, v],
        (false, false) => [if h == 0 { 0 } else { 3 }, if v == 0 { 2 } else { 5 }],
    }
}

fn wall_quarter(h: u8, v: u8, eh: bool, ev: bool) -> [u8; 2] {
    match (eh, ev) {
        (true, true) => [1 + h, 1 + v],
        (true, false) => [1 + h, 3 * v],
        (false, true) => [3 * h, 1 + v],
        (false, false) => [3 * h, 3 * v],
    }
}

/// The quarter signature the floor table would produce for `adj`.
///
/// A quarter renders its interior corner only on a fully connected tile;
/// a free diagonal (diagonal present, both adjacent edges absent) is the
/// other, mutually exclusive way a quarter counts as joined.
fn floor_signature(adj: Neighborhood) -> QuarterOffsets {
    let interior = adj.fully_connected();
    [
        floor_quarter(0, 0, adj.w, adj.n, interior || (!adj.w && !adj.n && adj.nw)),
        floor_quarter(1, 0, adj.e, adj.n, interior || (!adj.e && !adj.n && adj.ne)),
        floor_quarter(0, 1, adj.w, adj.s, interior || (!adj.w && !adj.s && adj.sw)),
        floor_quarter(1, 1, adj.e, adj.s, interior || (!adj.e && !adj.s && adj.se)),
    ]
}

fn wall_signature(adj: Neighborhood) -> QuarterOffsets {
    [
        wall_quarter(0, 0, adj.w, adj.n),
        wall_quarter(1, 0, adj.e, adj.n),
        wall_quarter(0, 1, adj.w, adj.s),
        wall_quarter(1, 1, adj.e, adj.s),
    ]
}

struct ReverseIndex {
    floor: HashMap<QuarterOffsets, u32>,
    wall: HashMap<QuarterOffsets, u32>,
}

impl ReverseIndex {
    fn build() -> Self {
        let invert = |entries: &[QuarterOffsets]| {
            entries
                .iter()
                .enumerate()
                .map(|(shape, &offsets)| (offsets, shape as u32))
                .collect()
        };
        Self {
            floor: invert(&FLOOR_TABLE),
            wall: invert(&WALL_TABLE),
        }
    }
}

fn reverse_index() -> &'static ReverseIndex {
    static INDEX: OnceLock<ReverseIndex> = OnceLock::new();
    INDEX.get_or_init(ReverseIndex::build)
}

/// Floor shape for an adjacency. Unmatched signatures fall back to shape 0
/// (fully disconnected) instead of failing.
pub fn infer_floor_shape(adj: Neighborhood) -> u32 {
    reverse_index()
        .floor
        .get(&floor_signature(adj))
        .copied()
        .unwrap_or(0)
}

/// Wall shape for an adjacency. Diagonals are ignored entirely.
pub fn infer_wall_shape(adj: Neighborhood) -> u32 {
    reverse_index()
        .wall
        .get(&wall_signature(adj))
        .copied()
        .unwrap_or(0)
}

/// Cascade shape for an adjacency: only horizontal continuity matters.
pub fn infer_cascade_shape(adj: Neighborhood) -> u32 {
    (!adj.w as u32) + (!adj.e as u32) * 2
}

/// Shape for a kind of a family under the given adjacency.
///
/// Always returns a valid shape for the kind's table; composed with
/// `encode_auto` this is the identifier to store.
pub fn infer_shape(family: AutoFamily, kind: u32, adj: Neighborhood) -> u32 {
    match ShapeTable::for_kind(family, kind) {
        ShapeTable::Floor => infer_floor_shape(adj),
        ShapeTable::Wall => infer_wall_shape(adj),
        ShapeTable::Cascade => infer_cascade_shape(adj),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adjacency from a bitmask, bit order n, ne, e, se, s, sw, w, nw.
    fn adjacency(bits: u8) -> Neighborhood {
        Neighborhood {
            n: bits & 1 != 0,
            ne: bits & 2 != 0,
            e: bits & 4 != 0,
            se: bits & 8 != 0,
            s: bits & 16 != 0,
            sw: bits & 32 != 0,
            w: bits & 64 != 0,
            nw: bits & 128 != 0,
        }
    }

    #[test]
    fn reverse_index_is_bijective() {
        for (shape, entry) in FLOOR_TABLE.iter().enumerate() {
            assert_eq!(reverse_index().floor.get(entry), Some(&(shape as u32)));
        }
        assert_eq!(reverse_index().floor.len(), 48);

        for (shape, entry) in WALL_TABLE.iter().enumerate() {
            assert_eq!(reverse_index().wall.get(entry), Some(&(shape as u32)));
        }
        assert_eq!(reverse_index().wall.len(), 16);
    }

    #[test]
    fn fully_connected_is_the_interior_shape() {
        assert_eq!(infer_floor_shape(Neighborhood::FULL), 47);
    }

    #[test]
    fn isolated_is_shape_zero() {
        assert_eq!(infer_floor_shape(Neighborhood::EMPTY), 0);
    }

    #[test]
    fn missing_diagonal_breaks_every_corner() {
        // corners carry detail only on a fully interior tile
        let adj = Neighborhood { se: false, ..Neighborhood::FULL };
        assert_eq!(infer_floor_shape(adj), 46);
        let adj = Neighborhood { nw: false, ne: false, ..Neighborhood::FULL };
        assert_eq!(infer_floor_shape(adj), 46);
    }

    #[test]
    fn free_diagonals_select_corner_pieces() {
        // isolated except a lone diagonal neighbor
        let adj = Neighborhood { nw: true, ..Neighborhood::EMPTY };
        assert_eq!(infer_floor_shape(adj), 1);
        let adj = Neighborhood { ne: true, ..Neighborhood::EMPTY };
        assert_eq!(infer_floor_shape(adj), 2);
        let adj = Neighborhood { sw: true, ..Neighborhood::EMPTY };
        assert_eq!(infer_floor_shape(adj), 4);
        let adj = Neighborhood { se: true, ..Neighborhood::EMPTY };
        assert_eq!(infer_floor_shape(adj), 8);
        let adj = Neighborhood { nw: true, ne: true, sw: true, se: true, ..Neighborhood::EMPTY };
        assert_eq!(infer_floor_shape(adj), 15);
    }

    #[test]
    fn diagonal_next_to_its_edge_is_not_free() {
        // with the west edge present, nw/sw cannot be free diagonals
        let adj = Neighborhood { w: true, nw: true, sw: true, ..Neighborhood::EMPTY };
        assert_eq!(infer_floor_shape(adj), 16);
    }

    #[test]
    fn single_edge_shapes() {
        assert_eq!(infer_floor_shape(Neighborhood { w: true, ..Neighborhood::EMPTY }), 16);
        assert_eq!(infer_floor_shape(Neighborhood { n: true, ..Neighborhood::EMPTY }), 20);
        assert_eq!(infer_floor_shape(Neighborhood { e: true, ..Neighborhood::EMPTY }), 24);
        assert_eq!(infer_floor_shape(Neighborhood { s: true, ..Neighborhood::EMPTY }), 28);
        // one edge plus a far free diagonal
        let adj = Neighborhood { n: true, se: true, ..Neighborhood::EMPTY };
        assert_eq!(infer_floor_shape(adj), 22);
    }

    #[test]
    fn three_edge_shapes() {
        let all_edges = Neighborhood { n: true, e: true, s: true, w: true, ..Neighborhood::EMPTY };
        assert_eq!(infer_floor_shape(Neighborhood { w: false, ..all_edges }), 42);
        assert_eq!(infer_floor_shape(Neighborhood { n: false, ..all_edges }), 43);
        assert_eq!(infer_floor_shape(Neighborhood { e: false, ..all_edges }), 44);
        assert_eq!(infer_floor_shape(Neighborhood { s: false, ..all_edges }), 45);
    }

    #[test]
    fn every_neighborhood_hits_the_floor_index() {
        // the shape-0 fallback must be unreachable from real adjacency:
        // every one of the 256 combinations builds a signature the forward
        // table contains, and the looked-up entry equals that signature.
        for bits in 0..=255u8 {
            let adj = adjacency(bits);
            let shape = infer_floor_shape(adj);
            assert_eq!(
                FLOOR_TABLE[shape as usize],
                floor_signature(adj),
                "adjacency {bits:#010b} mapped to shape {shape}"
            );
        }
    }

    #[test]
    fn every_neighborhood_hits_the_wall_index() {
        for bits in 0..=255u8 {
            let adj = adjacency(bits);
            let shape = infer_wall_shape(adj);
            assert_eq!(WALL_TABLE[shape as usize], wall_signature(adj));
        }
    }

    #[test]
    fn wall_shapes_ignore_diagonals() {
        for bits in 0..=255u8 {
            let adj = adjacency(bits);
            let edges_only = Neighborhood {
                ne: false,
                se: false,
                sw: false,
                nw: false,
                ..adj
            };
            assert_eq!(infer_wall_shape(adj), infer_wall_shape(edges_only));
        }
    }

    #[test]
    fn wall_shape_is_the_absent_edge_mask() {
        assert_eq!(infer_wall_shape(Neighborhood::FULL), 0);
        assert_eq!(infer_wall_shape(Neighborhood::EMPTY), 15);
        let adj = Neighborhood { n: true, e: true, s: true, ..Neighborhood::EMPTY };
        assert_eq!(infer_wall_shape(adj), 1);
        let adj = Neighborhood { n: true, s: true, w: true, ..Neighborhood::EMPTY };
        assert_eq!(infer_wall_shape(adj), 4);
    }

    #[test]
    fn cascade_arithmetic() {
        let with = |w, e| Neighborhood { w, e, ..Neighborhood::EMPTY };
        assert_eq!(infer_cascade_shape(with(true, true)), 0);
        assert_eq!(infer_cascade_shape(with(false, true)), 1);
        assert_eq!(infer_cascade_shape(with(true, false)), 2);
        assert_eq!(infer_cascade_shape(with(false, false)), 3);
        // vertical neighbors are irrelevant
        let adj = Neighborhood { n: true, s: true, se: true, ..with(true, true) };
        assert_eq!(infer_cascade_shape(adj), 0);
    }

    #[test]
    fn infer_shape_dispatches_per_kind() {
        // fluid surface kinds use the floor table, cascade kinds the strip
        assert_eq!(infer_shape(AutoFamily::Fluid, 0, Neighborhood::FULL), 47);
        assert_eq!(infer_shape(AutoFamily::Fluid, 5, Neighborhood::EMPTY), 3);
        assert_eq!(infer_shape(AutoFamily::Wall, 10, Neighborhood::EMPTY), 15);
        assert_eq!(infer_shape(AutoFamily::Structure, 8, Neighborhood::FULL), 0);
        assert_eq!(infer_shape(AutoFamily::Structure, 0, Neighborhood::FULL), 47);
    }
}

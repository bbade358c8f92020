//! Static quarter-tile composition tables
//!
//! An auto-connecting tile is never drawn whole: it is composited from four
//! half-tile quarters sampled out of a fixed-size source block on the
//! family's sprite sheet. Each family owns one table mapping a shape index
//! to the four quarter offsets `[top-left, top-right, bottom-left,
//! bottom-right]`, in half-tile units relative to the block's top-left
//! corner.
//!
//! ## Floor block layout (2x3 tiles, 4x6 half-tiles)
//!
//! ```text
//!    qx:  0    1    2    3
//! qy 0  [free corners][ notches  ]
//! qy 1  [  (2x2)     ][  (2x2)   ]
//! qy 2  +-- border rim ----------+
//! qy 3  |      interior          |
//! qy 4  |      (1..3, 3..5)      |
//! qy 5  +------------------------+
//! ```
//!
//! The bottom 2x2-tile area is a seamless patch: its rim quarters carry the
//! border art, its four center quarters the interior fill. The top-left
//! tile holds the four free-standing diagonal corners, the top-right tile
//! the four inner-corner notches.
//!
//! Wall blocks are a plain 2x2-tile patch (border rim plus interior, no
//! corner art). Cascade blocks are a single 2x1-tile strip that only varies
//! along the horizontal axis.
//!
//! These tables are the authoritative ground truth: the inference engine's
//! reverse index is derived from them at first use and can never drift.

use gridmap_core::AutoFamily;
use serde::{Deserialize, Serialize};

/// Four quarter offsets in half-tile units, ordered
/// `[top-left, top-right, bottom-left, bottom-right]`.
pub type QuarterOffsets = [[u8; 2]; 4];

/// Floor table: 48 shapes covering every reachable combination of straight
/// edges, inner corners and free diagonal corners.
///
/// Ordering, from most disconnected to fully interior:
/// - 0..16: no edges connected; index = free-diagonal bitmask (TL=1, TR=2,
///   BL=4, BR=8). Shape 0 is the fully isolated tile.
/// - 16..32: one edge connected (W, N, E, S at 16, 20, 24, 28), plus the
///   free-diagonal bits of the two quarters away from that edge.
/// - 32..40: two adjacent edges (W+N, N+E, E+S, S+W at 32, 34, 36, 38),
///   +1 when the opposite quarter has a free diagonal.
/// - 40..42: two opposite edges (W+E, then N+S).
/// - 42..46: three edges connected, indexed by the absent edge (W, N, E, S).
/// - 46: all four edges but at least one diagonal missing (all notches).
/// - 47: fully interior, all eight neighbors connected.
pub const FLOOR_TABLE: [QuarterOffsets; 48] = [
    // 0..16: isolated, free-diagonal bitmask
    [[0, 2], [3, 2], [0, 5], [3, 5]],
    [[0, 0], [3, 2], [0, 5], [3, 5]],
    [[0, 2], [1, 0], [0, 5], [3, 5]],
    [[0, 0], [1, 0], [0, 5], [3, 5]],
    [[0, 2], [3, 2], [0, 1], [3, 5]],
    [[0, 0], [3, 2], [0, 1], [3, 5]],
    [[0, 2], [1, 0], [0, 1], [3, 5]],
    [[0, 0], [1, 0], [0, 1], [3, 5]],
    [[0, 2], [3, 2], [0, 5], [1, 1]],
    [[0, 0], [3, 2], [0, 5], [1, 1]],
    [[0, 2], [1, 0], [0, 5], [1, 1]],
    [[0, 0], [1, 0], [0, 5], [1, 1]],
    [[0, 2], [3, 2], [0, 1], [1, 1]],
    [[0, 0], [3, 2], [0, 1], [1, 1]],
    [[0, 2], [1, 0], [0, 1], [1, 1]],
    [[0, 0], [1, 0], [0, 1], [1, 1]],
    // 16..20: west edge only
    [[1, 2], [3, 2], [1, 5], [3, 5]],
    [[1, 2], [1, 0], [1, 5], [3, 5]],
    [[1, 2], [3, 2], [1, 5], [1, 1]],
    [[1, 2], [1, 0], [1, 5], [1, 1]],
    // 20..24: north edge only
    [[0, 3], [3, 3], [0, 5], [3, 5]],
    [[0, 3], [3, 3], [0, 1], [3, 5]],
    [[0, 3], [3, 3], [0, 5], [1, 1]],
    [[0, 3], [3, 3], [0, 1], [1, 1]],
    // 24..28: east edge only
    [[0, 2], [2, 2], [0, 5], [2, 5]],
    [[0, 0], [2, 2], [0, 5], [2, 5]],
    [[0, 2], [2, 2], [0, 1], [2, 5]],
    [[0, 0], [2, 2], [0, 1], [2, 5]],
    // 28..32: south edge only
    [[0, 2], [3, 2], [0, 4], [3, 4]],
    [[0, 0], [3, 2], [0, 4], [3, 4]],
    [[0, 2], [1, 0], [0, 4], [3, 4]],
    [[0, 0], [1, 0], [0, 4], [3, 4]],
    // 32..40: two adjacent edges
    [[2, 0], [3, 3], [1, 5], [3, 5]],
    [[2, 0], [3, 3], [1, 5], [1, 1]],
    [[0, 3], [3, 0], [0, 5], [2, 5]],
    [[0, 3], [3, 0], [0, 1], [2, 5]],
    [[0, 2], [2, 2], [0, 4], [3, 1]],
    [[0, 0], [2, 2], [0, 4], [3, 1]],
    [[1, 2], [3, 2], [2, 1], [3, 4]],
    [[1, 2], [1, 0], [2, 1], [3, 4]],
    // 40..42: two opposite edges
    [[1, 2], [2, 2], [1, 5], [2, 5]],
    [[0, 3], [3, 3], [0, 4], [3, 4]],
    // 42..46: three edges, indexed by the absent one
    [[0, 3], [3, 0], [0, 4], [3, 1]],
    [[1, 2], [2, 2], [2, 1], [3, 1]],
    [[2, 0], [3, 3], [2, 1], [3, 4]],
    [[2, 0], [3, 0], [1, 5], [2, 5]],
    // 46: all edges, broken diagonal
    [[2, 0], [3, 0], [2, 1], [3, 1]],
    // 47: fully interior
    [[1, 3], [2, 3], [1, 4], [2, 4]],
];

/// Wall table: 16 shapes, edge-only sensitivity.
/// Shape index is the absent-edge bitmask: W=1, N=2, E=4, S=8.
pub const WALL_TABLE: [QuarterOffsets; 16] = [
    [[1, 1], [2, 1], [1, 2], [2, 2]],
    [[0, 1], [2, 1], [0, 2], [2, 2]],
    [[1, 0], [2, 0], [1, 2], [2, 2]],
    [[0, 0], [2, 0], [0, 2], [2, 2]],
    [[1, 1], [3, 1], [1, 2], [3, 2]],
    [[0, 1], [3, 1], [0, 2], [3, 2]],
    [[1, 0], [3, 0], [1, 2], [3, 2]],
    [[0, 0], [3, 0], [0, 2], [3, 2]],
    [[1, 1], [2, 1], [1, 3], [2, 3]],
    [[0, 1], [2, 1], [0, 3], [2, 3]],
    [[1, 0], [2, 0], [1, 3], [2, 3]],
    [[0, 0], [2, 0], [0, 3], [2, 3]],
    [[1, 1], [3, 1], [1, 3], [3, 3]],
    [[0, 1], [3, 1], [0, 3], [3, 3]],
    [[1, 0], [3, 0], [1, 3], [3, 3]],
    [[0, 0], [3, 0], [0, 3], [3, 3]],
];

/// Cascade table: 4 shapes, left/right sensitivity only.
/// Shape index: +1 when the left neighbor is absent, +2 when the right is.
pub const CASCADE_TABLE: [QuarterOffsets; 4] = [
    [[1, 0], [2, 0], [1, 1], [2, 1]],
    [[0, 0], [2, 0], [0, 1], [2, 1]],
    [[1, 0], [3, 0], [1, 1], [3, 1]],
    [[0, 0], [3, 0], [0, 1], [3, 1]],
];

/// Which composition table an auto-connecting kind uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeTable {
    Floor,
    Wall,
    Cascade,
}

impl ShapeTable {
    /// Table used by a given kind of a family.
    ///
    /// Fluid kinds 0..4 are the fixed liquid-surface blocks; from kind 4 on,
    /// odd kinds are the cascade halves of their even surface partners.
    /// Structure kinds alternate by row: even rows are roof (floor-style)
    /// blocks, odd rows are wall blocks.
    pub fn for_kind(family: AutoFamily, kind: u32) -> Self {
        match family {
            AutoFamily::Ground => ShapeTable::Floor,
            AutoFamily::Wall => ShapeTable::Wall,
            AutoFamily::Fluid => {
                if kind >= 4 && kind % 2 == 1 {
                    ShapeTable::Cascade
                } else {
                    ShapeTable::Floor
                }
            }
            AutoFamily::Structure => {
                if kind / 8 % 2 == 1 {
                    ShapeTable::Wall
                } else {
                    ShapeTable::Floor
                }
            }
        }
    }

    /// The forward entries of this table.
    pub fn entries(self) -> &'static [QuarterOffsets] {
        match self {
            ShapeTable::Floor => &FLOOR_TABLE,
            ShapeTable::Wall => &WALL_TABLE,
            ShapeTable::Cascade => &CASCADE_TABLE,
        }
    }

    /// Number of shapes in this table.
    pub fn shape_count(self) -> u32 {
        self.entries().len() as u32
    }

    /// Quarter offsets for `shape`. Out-of-range shapes clamp to the last
    /// entry so a corrupted identifier still renders something.
    pub fn entry(self, shape: u32) -> QuarterOffsets {
        let entries = self.entries();
        entries[(shape as usize).min(entries.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_sizes() {
        assert_eq!(FLOOR_TABLE.len(), 48);
        assert_eq!(WALL_TABLE.len(), 16);
        assert_eq!(CASCADE_TABLE.len(), 4);
    }

    #[test]
    fn entries_are_unique_signatures() {
        let floor: HashSet<QuarterOffsets> = FLOOR_TABLE.iter().copied().collect();
        assert_eq!(floor.len(), 48);
        let wall: HashSet<QuarterOffsets> = WALL_TABLE.iter().copied().collect();
        assert_eq!(wall.len(), 16);
        let cascade: HashSet<QuarterOffsets> = CASCADE_TABLE.iter().copied().collect();
        assert_eq!(cascade.len(), 4);
    }

    #[test]
    fn offsets_stay_inside_blocks() {
        for entry in FLOOR_TABLE {
            for [qx, qy] in entry {
                assert!(qx < 4 && qy < 6);
            }
        }
        for entry in WALL_TABLE {
            for [qx, qy] in entry {
                assert!(qx < 4 && qy < 4);
            }
        }
        for entry in CASCADE_TABLE {
            for [qx, qy] in entry {
                assert!(qx < 4 && qy < 2);
            }
        }
    }

    #[test]
    fn out_of_range_shape_clamps() {
        assert_eq!(ShapeTable::Floor.entry(47), ShapeTable::Floor.entry(999));
        assert_eq!(ShapeTable::Wall.entry(15), ShapeTable::Wall.entry(48));
        assert_eq!(ShapeTable::Cascade.entry(3), ShapeTable::Cascade.entry(4));
    }

    #[test]
    fn table_selection_per_kind() {
        assert_eq!(ShapeTable::for_kind(AutoFamily::Ground, 31), ShapeTable::Floor);
        assert_eq!(ShapeTable::for_kind(AutoFamily::Wall, 0), ShapeTable::Wall);

        // fluid: surface kinds 0..4, then surface/cascade pairs
        for kind in 0..4 {
            assert_eq!(ShapeTable::for_kind(AutoFamily::Fluid, kind), ShapeTable::Floor);
        }
        assert_eq!(ShapeTable::for_kind(AutoFamily::Fluid, 4), ShapeTable::Floor);
        assert_eq!(ShapeTable::for_kind(AutoFamily::Fluid, 5), ShapeTable::Cascade);
        assert_eq!(ShapeTable::for_kind(AutoFamily::Fluid, 15), ShapeTable::Cascade);

        // structure: roof rows even, wall rows odd
        assert_eq!(ShapeTable::for_kind(AutoFamily::Structure, 7), ShapeTable::Floor);
        assert_eq!(ShapeTable::for_kind(AutoFamily::Structure, 8), ShapeTable::Wall);
        assert_eq!(ShapeTable::for_kind(AutoFamily::Structure, 16), ShapeTable::Floor);
        assert_eq!(ShapeTable::for_kind(AutoFamily::Structure, 47), ShapeTable::Wall);
    }
}
